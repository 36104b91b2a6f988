mod common;

use anyhow::Result;
use common::ScriptedRunner;
use optcheck::adapters::prompt::FixedPrompt;
use optcheck::config::toml_config::TomlConfig;
use optcheck::{AnalysisOutcome, Analyzer, Mode, OptcheckError, RunOptions, Settings};
use std::path::Path;
use tempfile::TempDir;

const NO_REPORTS: &str = r#"{"version": 1, "reports": []}"#;
const ONE_REPORT: &str = r#"{"version": 1, "reports": [
    {"checker_name": "bugprone-unchecked-optional-access", "file": {"path": "src/boosted.cpp"}}
]}"#;

fn settings(root: &Path, options: RunOptions) -> Result<Settings> {
    let file = TomlConfig::from_toml_str(
        r#"
[paths]
build_dir = "build"
generated_dir = "generated"
config_dir = "tools"

[setup]
commands = [["./ws_generate.sh"]]
"#,
    )?;
    let settings = Settings::resolve(options, Some(&file), root);
    std::fs::create_dir_all(&settings.build_dir)?;
    std::fs::create_dir_all(&settings.config_dir)?;
    Ok(settings)
}

fn local(branch: &str) -> RunOptions {
    RunOptions {
        mode: Mode::Local {
            branch: branch.to_string(),
        },
        assume_yes: true,
        ..RunOptions::default()
    }
}

#[tokio::test]
async fn test_clean_run_first_time() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let settings = settings(temp_dir.path(), local("develop"))?;
    let skipfile = settings.skipfile_path();

    let runner = ScriptedRunner::new("src/boosted.cpp\nsrc/boosted.h\nREADME.md\n", NO_REPORTS);
    let analyzer = Analyzer::new(settings, runner, FixedPrompt(true));

    let outcome = analyzer.run().await?;
    assert_eq!(outcome, AnalysisOutcome::Clean);

    assert_eq!(std::fs::read_to_string(skipfile)?, "+*/src/boosted.cpp\n-*/*\n");

    let commands = analyzer.runner().commands();
    assert_eq!(commands[0], "./ws_generate.sh");
    assert_eq!(commands[1], "git diff --name-only develop");
    assert_eq!(commands[2], "make clean");
    assert!(commands[3].starts_with("CodeChecker log --build make -j"));
    assert!(commands[4].starts_with("CodeChecker analyze ./compile_commands.json"));
    assert!(commands[5].starts_with("CodeChecker parse --export html"));
    assert!(commands[6].starts_with("CodeChecker parse --export json"));
    assert_eq!(commands.len(), 7);

    assert!(analyzer.runner().detached.lock().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_bugs_found_opens_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let settings = settings(temp_dir.path(), local(""))?;
    std::fs::create_dir_all(&settings.generated_dir)?;
    std::fs::write(settings.compile_commands_path(), "[]")?;
    let page = settings.statistics_html_path();

    let runner = ScriptedRunner::new("src/boosted.cpp\n", ONE_REPORT);
    let analyzer = Analyzer::new(settings, runner, FixedPrompt(true));

    let outcome = analyzer.run().await?;
    assert_eq!(outcome, AnalysisOutcome::BugsFound { count: 1 });
    assert!(outcome.has_bugs());

    // generated sources and compile db exist: no setup, no log
    let commands = analyzer.runner().commands();
    assert_eq!(commands[0], "git diff --name-only");
    assert!(commands[1].starts_with("CodeChecker analyze"));
    assert_eq!(commands.len(), 4);

    let detached = analyzer.runner().detached.lock().unwrap();
    assert_eq!(detached.len(), 1);
    assert_eq!(detached[0].program, "firefox");
    assert_eq!(detached[0].args, vec![page.display().to_string()]);
    assert!(detached[0]
        .env
        .contains(&("MESA_GLTHREAD".to_string(), "false".to_string())));
    Ok(())
}

#[tokio::test]
async fn test_no_changes() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let settings = settings(temp_dir.path(), local(""))?;
    let skipfile = settings.skipfile_path();

    let analyzer = Analyzer::new(settings, ScriptedRunner::new("", NO_REPORTS), FixedPrompt(true));

    assert_eq!(analyzer.run().await?, AnalysisOutcome::NoChanges);
    assert!(!skipfile.exists());
    Ok(())
}

#[tokio::test]
async fn test_everything_ignored() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let settings = settings(temp_dir.path(), local(""))?;
    std::fs::write(&settings.ignore_file, "third_party/\n")?;

    let runner = ScriptedRunner::new("third_party/json.cpp\ndocs/index.md\n", NO_REPORTS);
    let analyzer = Analyzer::new(settings, runner, FixedPrompt(true));

    assert_eq!(analyzer.run().await?, AnalysisOutcome::NothingToAnalyze);
    Ok(())
}

#[tokio::test]
async fn test_declined_prompt_aborts() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let options = RunOptions {
        assume_yes: false,
        ..local("")
    };
    let settings = settings(temp_dir.path(), options)?;

    let runner = ScriptedRunner::new("src/boosted.cpp\n", NO_REPORTS);
    let analyzer = Analyzer::new(settings, runner, FixedPrompt(false));

    let err = analyzer.run().await.unwrap_err();
    assert!(matches!(err, OptcheckError::Aborted));
    assert!(!analyzer
        .runner()
        .commands()
        .iter()
        .any(|command| command.starts_with("CodeChecker")));
    Ok(())
}

#[tokio::test]
async fn test_failed_analyze_stops_pipeline() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let settings = settings(temp_dir.path(), local(""))?;
    std::fs::write(settings.compile_commands_path(), "[]")?;

    let runner = ScriptedRunner::new("src/boosted.cpp\n", NO_REPORTS).failing("analyze", 1);
    let analyzer = Analyzer::new(settings, runner, FixedPrompt(true));

    let err = analyzer.run().await.unwrap_err();
    match err {
        OptcheckError::CommandFailed { command, status } => {
            assert!(command.starts_with("CodeChecker analyze"));
            assert_eq!(status, Some(1));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!analyzer
        .runner()
        .commands()
        .iter()
        .any(|command| command.starts_with("CodeChecker parse")));
    Ok(())
}

#[tokio::test]
async fn test_git_diff_failure() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let settings = settings(temp_dir.path(), local("no-such-branch"))?;

    let mut runner = ScriptedRunner::new("", NO_REPORTS);
    runner.diff_status = 128;
    let analyzer = Analyzer::new(settings, runner, FixedPrompt(true));

    let err = analyzer.run().await.unwrap_err();
    assert!(matches!(err, OptcheckError::GitDiffError { .. }));
    Ok(())
}

#[tokio::test]
async fn test_ci_mode_writes_inputs_only() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let options = RunOptions {
        mode: Mode::Ci {
            files: "src/a.cpp include/a.h src/b.cpp".to_string(),
        },
        ..RunOptions::default()
    };
    let settings = settings(temp_dir.path(), options)?;
    let skipfile = settings.skipfile_path();
    let config = settings.analyzer_config_path();

    let analyzer = Analyzer::new(settings, ScriptedRunner::new("", NO_REPORTS), FixedPrompt(false));

    let outcome = analyzer.run().await?;
    assert_eq!(
        outcome,
        AnalysisOutcome::InputsWritten {
            files: vec!["src/a.cpp".to_string(), "src/b.cpp".to_string()]
        }
    );
    assert_eq!(
        std::fs::read_to_string(skipfile)?,
        "+*/src/a.cpp\n+*/src/b.cpp\n-*/*\n"
    );
    assert!(config.is_file());
    assert!(analyzer.runner().commands().is_empty());
    Ok(())
}
