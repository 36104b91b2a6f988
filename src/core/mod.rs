pub mod analyzer;
pub mod changes;
pub mod demo;
pub mod plan;
pub mod report;
pub mod skipfile;

pub use crate::domain::model::{AnalysisOutcome, CommandOutput, CommandSpec, Sample, Verdict};
pub use crate::domain::ports::{CommandRunner, Prompt};
pub use crate::utils::error::Result;
