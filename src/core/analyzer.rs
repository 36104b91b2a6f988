use crate::config::{Mode, Settings};
use crate::core::changes;
use crate::core::plan::{self, Stage, Step};
use crate::core::report;
use crate::core::skipfile;
use crate::domain::model::{AnalysisOutcome, CommandSpec};
use crate::domain::ports::{CommandRunner, Prompt};
use crate::utils::error::{OptcheckError, Result};

pub struct Analyzer<R: CommandRunner, P: Prompt> {
    settings: Settings,
    runner: R,
    prompt: P,
}

impl<R: CommandRunner, P: Prompt> Analyzer<R, P> {
    pub fn new(settings: Settings, runner: R, prompt: P) -> Self {
        Self {
            settings,
            runner,
            prompt,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub async fn run(&self) -> Result<AnalysisOutcome> {
        match &self.settings.options.mode {
            Mode::Ci { files } => self.write_ci_inputs(files),
            Mode::Local { branch } => self.analyze_changes(branch).await,
        }
    }

    /// CI 模式只產生 skipfile 與 analyzer 設定，不執行分析
    fn write_ci_inputs(&self, files: &str) -> Result<AnalysisOutcome> {
        let files = changes::split_file_list(files);
        skipfile::write_analysis_inputs(&self.settings, &files)?;
        tracing::info!("Analysis inputs written for {} file(s)", files.len());
        Ok(AnalysisOutcome::InputsWritten { files })
    }

    async fn analyze_changes(&self, branch: &str) -> Result<AnalysisOutcome> {
        let setup = plan::setup_steps(&self.settings);
        if !setup.is_empty() {
            tracing::info!("Generating files.");
            self.execute(&setup).await?;
        }

        tracing::info!("Finding differences");
        let changed = changes::changed_files(&self.runner, &self.settings, branch).await?;
        if changed.is_empty() {
            tracing::info!("No changes found, exiting...");
            return Ok(AnalysisOutcome::NoChanges);
        }

        let ignores = changes::load_ignores(&self.settings.ignore_file)?;
        let files = changes::filter_changed(&changed, &ignores);
        if files.is_empty() {
            tracing::info!("No changes found after filtering, exiting...");
            return Ok(AnalysisOutcome::NothingToAnalyze);
        }

        skipfile::write_analysis_inputs(&self.settings, &files)?;

        println!("Changed files already filtered:");
        for file in &files {
            println!("-    {}", file);
        }
        println!();

        if !self.settings.options.assume_yes
            && !self
                .prompt
                .confirm("press enter to continue or finish with ctrl+c:")
                .await?
        {
            return Err(OptcheckError::Aborted);
        }

        let steps = plan::build_plan(&self.settings);
        if steps.iter().any(|step| step.stage == Stage::Log) {
            tracing::info!("Generating compile commands... This may take a while!");
        }
        self.execute(&steps).await?;

        let count = report::evaluate_reports(&self.settings.reports_json_path())?;
        if count == 0 {
            tracing::info!("No bugs found.");
            return Ok(AnalysisOutcome::Clean);
        }

        tracing::warn!("Bugs found!!! ({} report(s))", count);
        self.open_report();
        Ok(AnalysisOutcome::BugsFound { count })
    }

    async fn execute(&self, steps: &[Step]) -> Result<()> {
        let mut parsing_announced = false;
        for step in steps {
            match step.stage {
                Stage::Analyze => tracing::info!("Analyzing..."),
                Stage::Parse if !parsing_announced => {
                    tracing::info!("Parsing...");
                    parsing_announced = true;
                }
                _ => {}
            }

            tracing::debug!("Running: {}", step.command.display());
            let output = self.runner.run(&step.command).await?;

            if step.command.check && !output.success() {
                tracing::error!(
                    "Error executing command: {} (status {:?})",
                    step.command.display(),
                    output.status
                );
                return Err(OptcheckError::CommandFailed {
                    command: step.command.display(),
                    status: output.status,
                });
            }
        }
        Ok(())
    }

    /// A viewer that fails to start is logged, not fatal.
    fn open_report(&self) {
        let Some(browser) = &self.settings.browser else {
            return;
        };

        let page = self.settings.statistics_html_path();
        tracing::info!("Opening {} to check results", browser);
        let spec = CommandSpec::new(browser, [page.display().to_string()])
            .env("MESA_GLTHREAD", "false")
            .quiet(true);

        if let Err(e) = self.runner.spawn_detached(&spec) {
            tracing::warn!("Could not open report viewer: {}", e);
        }
    }
}
