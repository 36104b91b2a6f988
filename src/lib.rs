pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{process::SystemRunner, prompt::StdinPrompt};
pub use config::{Mode, RunOptions, Settings};
pub use crate::core::analyzer::Analyzer;
pub use domain::model::{AnalysisOutcome, Sample, Verdict};
pub use utils::error::{OptcheckError, Result};
