use crate::config::{Mode, RunOptions};
use clap::Parser;

const LONG_ABOUT: &str = "\
Runs CodeChecker with the unchecked-optional-access checker over changed C++ files.

Calling optcheck with no flags analyses the unstaged changes.
--analyze=<branch> checks the diff between your working tree and that branch.
--force regenerates sources and compile commands; this may take a while.
--verbose shows the full output of every command.";

#[derive(Debug, Clone, Parser)]
#[command(name = "optcheck")]
#[command(about = "Unchecked optional access analysis for changed C++ files")]
#[command(long_about = LONG_ABOUT)]
pub struct CliConfig {
    /// CI mode: only write the skipfile and analyzer config for --files
    #[arg(long)]
    pub github_action: bool,

    /// Branch the PR will be opened against (empty: unstaged changes)
    #[arg(long, default_value = "")]
    pub analyze: String,

    /// Space separated files to check (CI mode)
    #[arg(long, default_value = "")]
    pub files: String,

    /// Run the full setup, good for the first time
    #[arg(long)]
    pub force: bool,

    /// Show the output of every command
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Do not ask for confirmation before analysing
    #[arg(short, long)]
    pub yes: bool,

    /// Never open the HTML report
    #[arg(long)]
    pub no_browser: bool,

    /// Exit with status 2 when bugs are found
    #[arg(long)]
    pub fail_on_bugs: bool,
}

impl CliConfig {
    pub fn to_options(&self) -> RunOptions {
        let mode = if self.github_action {
            Mode::Ci {
                files: self.files.clone(),
            }
        } else {
            Mode::Local {
                branch: self.analyze.clone(),
            }
        };

        RunOptions {
            mode,
            force: self.force,
            verbose: self.verbose,
            assume_yes: self.yes,
            no_browser: self.no_browser,
            fail_on_bugs: self.fail_on_bugs,
        }
    }
}
