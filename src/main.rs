use clap::Parser;
use optcheck::config::toml_config::TomlConfig;
use optcheck::utils::{logger, validation::Validate};
use optcheck::{AnalysisOutcome, Analyzer, CliConfig, Mode, Settings, StdinPrompt, SystemRunner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.github_action {
        logger::init_ci_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let file = match &cli.config {
        Some(path) => match TomlConfig::from_file(path).and_then(|file| {
            file.validate()?;
            Ok(file)
        }) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => None,
    };

    let cwd = std::env::current_dir()?;
    let settings = Settings::resolve(cli.to_options(), file.as_ref(), &cwd);

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match &settings.options.mode {
        Mode::Local { branch } if branch.is_empty() => {
            tracing::info!("Running analysis with unstaged changes")
        }
        Mode::Local { branch } => tracing::info!("Analyzing branch: {}", branch),
        Mode::Ci { .. } => tracing::info!("Running in CI mode"),
    }
    if settings.options.force {
        tracing::info!("Will run the full setup, this may take a while.");
    }

    let fail_on_bugs = settings.options.fail_on_bugs;
    let analyzer = Analyzer::new(settings, SystemRunner::new(), StdinPrompt);

    match analyzer.run().await {
        Ok(outcome) => {
            tracing::info!("✅ Analysis finished: {:?}", outcome);
            if let AnalysisOutcome::BugsFound { count } = &outcome {
                println!("Bugs found: {}", count);
            }
            let exit_code = outcome.exit_code(fail_on_bugs);
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Analysis failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
