use crate::config::Settings;
use crate::domain::model::CommandSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Setup,
    Clean,
    Log,
    Analyze,
    Parse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub stage: Stage,
    pub command: CommandSpec,
}

/// Source generation commands, needed on first run or when forced.
pub fn setup_steps(settings: &Settings) -> Vec<Step> {
    if !settings.options.force && settings.generated_dir.is_dir() {
        return Vec::new();
    }

    settings
        .setup_commands
        .iter()
        .filter_map(|argv| CommandSpec::from_argv(argv))
        .map(|command| Step {
            stage: Stage::Setup,
            command: command.quiet(!settings.options.verbose),
        })
        .collect()
}

/// log (when needed), analyze, then the two parse exports. Every step runs in
/// the build directory; parse exits non-zero when it finds reports, so those
/// two are unchecked.
pub fn build_plan(settings: &Settings) -> Vec<Step> {
    let quiet = !settings.options.verbose;
    let config = settings.analyzer_config_path().display().to_string();
    let in_build = |command: CommandSpec| command.in_dir(&settings.build_dir).quiet(quiet);

    let mut steps = Vec::new();

    if settings.options.force || !settings.compile_commands_path().is_file() {
        steps.extend(
            settings
                .clean_commands
                .iter()
                .filter_map(|argv| CommandSpec::from_argv(argv))
                .map(|command| Step {
                    stage: Stage::Clean,
                    command: in_build(command),
                }),
        );

        let build = settings
            .build_command
            .replace("{jobs}", &settings.build_jobs().to_string());
        steps.push(Step {
            stage: Stage::Log,
            command: in_build(CommandSpec::new(
                "CodeChecker",
                [
                    "log".to_string(),
                    "--build".to_string(),
                    build,
                    "--output".to_string(),
                    "./compile_commands.json".to_string(),
                ],
            )),
        });
    }

    steps.push(Step {
        stage: Stage::Analyze,
        command: in_build(CommandSpec::new(
            "CodeChecker",
            [
                "analyze",
                "./compile_commands.json",
                "--output",
                "./reports",
                "--config",
                config.as_str(),
            ],
        )),
    });

    for (format, output) in [("html", "./reports_html"), ("json", "./reports.json")] {
        steps.push(Step {
            stage: Stage::Parse,
            command: in_build(
                CommandSpec::new(
                    "CodeChecker",
                    [
                        "parse",
                        "--export",
                        format,
                        "--output",
                        output,
                        "./reports",
                        "--config",
                        config.as_str(),
                    ],
                )
                .unchecked(),
            ),
        });
    }

    steps
}
