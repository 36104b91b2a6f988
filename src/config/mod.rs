#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::config::toml_config::TomlConfig;
use crate::utils::error::{OptcheckError, Result};
use crate::utils::validation::{self, Validate};
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
pub use cli::CliConfig;

pub const DEFAULT_CHECKER: &str = "bugprone-unchecked-optional-access";
pub const DEFAULT_ANALYZER_JOBS: usize = 8;
pub const DEFAULT_BUILD_DIR: &str = "build/shell/fusionIV-debug";
pub const DEFAULT_GENERATED_DIR: &str = "fusion-web-services/generated-code";
pub const DEFAULT_BUILD_COMMAND: &str = "make -j{jobs}";
pub const DEFAULT_IGNORE_FILE: &str = "ignores.txt";
pub const DEFAULT_BROWSER: &str = "firefox";

pub const SKIPFILE_NAME: &str = "skipfiles";
pub const ANALYZER_CONFIG_NAME: &str = "codechecker.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// CI: write analysis inputs for an explicit file list and stop.
    Ci { files: String },
    /// Local: diff against `branch` (empty for unstaged changes) and analyse.
    Local { branch: String },
}

/// Run-time switches, independent of how they were parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub mode: Mode,
    pub force: bool,
    pub verbose: bool,
    pub assume_yes: bool,
    pub no_browser: bool,
    pub fail_on_bugs: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Local {
                branch: String::new(),
            },
            force: false,
            verbose: false,
            assume_yes: false,
            no_browser: false,
            fail_on_bugs: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub options: RunOptions,
    pub workspace_root: PathBuf,
    pub build_dir: PathBuf,
    pub generated_dir: PathBuf,
    pub config_dir: PathBuf,
    pub ignore_file: PathBuf,
    pub checkers: Vec<String>,
    pub analyzer_jobs: usize,
    pub setup_commands: Vec<Vec<String>>,
    pub clean_commands: Vec<Vec<String>>,
    pub build_command: String,
    pub browser: Option<String>,
}

impl Settings {
    /// Merges built-in defaults, the optional TOML file and the run options.
    /// Relative paths are anchored at `cwd` (workspace root, config dir) or at
    /// the workspace root (everything else).
    pub fn resolve(options: RunOptions, file: Option<&TomlConfig>, cwd: &Path) -> Self {
        let default_file = TomlConfig::default();
        let file = file.unwrap_or(&default_file);

        let workspace_root = cwd.join(file.paths.workspace_root.as_deref().unwrap_or(Path::new(".")));
        let config_dir = cwd.join(file.paths.config_dir.as_deref().unwrap_or(Path::new(".")));

        let build_dir = workspace_root.join(
            file.paths
                .build_dir
                .as_deref()
                .unwrap_or(Path::new(DEFAULT_BUILD_DIR)),
        );
        let generated_dir = workspace_root.join(
            file.paths
                .generated_dir
                .as_deref()
                .unwrap_or(Path::new(DEFAULT_GENERATED_DIR)),
        );
        let ignore_file = config_dir.join(
            file.analyzer
                .ignore_file
                .as_deref()
                .unwrap_or(Path::new(DEFAULT_IGNORE_FILE)),
        );

        let open_browser = file.report.open_browser.unwrap_or(true) && !options.no_browser;
        let browser = if open_browser {
            Some(
                file.report
                    .browser
                    .clone()
                    .unwrap_or_else(|| DEFAULT_BROWSER.to_string()),
            )
        } else {
            None
        };

        Self {
            workspace_root,
            build_dir,
            generated_dir,
            config_dir,
            ignore_file,
            checkers: file
                .analyzer
                .checkers
                .clone()
                .unwrap_or_else(|| vec![DEFAULT_CHECKER.to_string()]),
            analyzer_jobs: file.analyzer.jobs.unwrap_or(DEFAULT_ANALYZER_JOBS),
            setup_commands: file.setup.commands.clone(),
            clean_commands: file
                .log
                .clean_commands
                .clone()
                .unwrap_or_else(|| vec![vec!["make".to_string(), "clean".to_string()]]),
            build_command: file
                .log
                .build_command
                .clone()
                .unwrap_or_else(|| DEFAULT_BUILD_COMMAND.to_string()),
            browser,
            options,
        }
    }

    pub fn skipfile_path(&self) -> PathBuf {
        self.config_dir.join(SKIPFILE_NAME)
    }

    pub fn analyzer_config_path(&self) -> PathBuf {
        self.config_dir.join(ANALYZER_CONFIG_NAME)
    }

    pub fn compile_commands_path(&self) -> PathBuf {
        self.build_dir.join("compile_commands.json")
    }

    pub fn reports_json_path(&self) -> PathBuf {
        self.build_dir.join("reports.json")
    }

    pub fn statistics_html_path(&self) -> PathBuf {
        self.build_dir.join("reports_html").join("statistics.html")
    }

    /// Parallelism for the logged build: all cores but two, at least one.
    pub fn build_jobs(&self) -> usize {
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        cores.saturating_sub(2).max(1)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        match &self.options.mode {
            Mode::Ci { files } if files.trim().is_empty() => {
                return Err(OptcheckError::MissingConfigError {
                    field: "files".to_string(),
                });
            }
            Mode::Ci { .. } => {}
            Mode::Local { branch } => validation::validate_branch_name("analyze", branch)?,
        }

        validation::validate_path("paths.workspace_root", &self.workspace_root)?;
        validation::validate_path("paths.build_dir", &self.build_dir)?;
        validation::validate_path("paths.config_dir", &self.config_dir)?;
        validation::validate_positive_number("analyzer.jobs", self.analyzer_jobs, 1)?;
        validation::validate_non_empty_string("log.build_command", &self.build_command)?;

        if self.checkers.is_empty() {
            return Err(OptcheckError::ConfigValidationError {
                field: "analyzer.checkers".to_string(),
                message: "At least one checker must be enabled".to_string(),
            });
        }

        Ok(())
    }
}
