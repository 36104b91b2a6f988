use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// 只有一個可選整數欄位的簡單紀錄
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub value: Option<i32>,
}

impl Sample {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: i32) -> Self {
        Self { value: Some(value) }
    }

    /// Reads the field, falling back to `0` when it is absent.
    pub fn get(&self) -> i32 {
        self.value.unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Yes,
    No,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Yes => "yes",
            Verdict::No => "no",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single external command the driver runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    pub env: Vec<(String, String)>,
    /// Non-zero exit is an error when set.
    pub check: bool,
    /// Collect stdout/stderr instead of inheriting or silencing them.
    pub capture: bool,
    /// Silence output when not capturing.
    pub quiet: bool,
}

impl CommandSpec {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
            env: Vec::new(),
            check: true,
            capture: false,
            quiet: false,
        }
    }

    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program, args.iter().cloned()))
    }

    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    pub fn unchecked(mut self) -> Self {
        self.check = false;
        self
    }

    pub fn captured(mut self) -> Self {
        self.capture = true;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was terminated by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// `git diff` reported nothing.
    NoChanges,
    /// Changes exist but none is an analysable, non-ignored C++ source.
    NothingToAnalyze,
    /// CI mode: skipfile and analyzer config were written.
    InputsWritten { files: Vec<String> },
    Clean,
    BugsFound { count: usize },
}

impl AnalysisOutcome {
    pub fn has_bugs(&self) -> bool {
        matches!(self, AnalysisOutcome::BugsFound { .. })
    }

    /// Findings only fail the run when `fail_on_bugs` is set.
    pub fn exit_code(&self, fail_on_bugs: bool) -> i32 {
        if fail_on_bugs && self.has_bugs() {
            2
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_get_defaults_to_zero() {
        assert_eq!(Sample::new().get(), 0);
        assert_eq!(Sample::with_value(7).get(), 7);
    }

    #[test]
    fn test_command_display() {
        let spec = CommandSpec::new("git", ["diff", "--name-only"]);
        assert_eq!(spec.display(), "git diff --name-only");
        assert!(spec.check);
        assert!(!spec.unchecked().check);
    }

    #[test]
    fn test_outcome_exit_code() {
        let bugs = AnalysisOutcome::BugsFound { count: 3 };
        assert_eq!(bugs.exit_code(false), 0);
        assert_eq!(bugs.exit_code(true), 2);
        assert_eq!(AnalysisOutcome::Clean.exit_code(true), 0);
        assert_eq!(AnalysisOutcome::NoChanges.exit_code(true), 0);
    }

    #[test]
    fn test_from_argv() {
        let argv = vec!["sudo".to_string(), "make".to_string(), "clean".to_string()];
        let spec = CommandSpec::from_argv(&argv).unwrap();
        assert_eq!(spec.program, "sudo");
        assert_eq!(spec.args, vec!["make", "clean"]);
        assert!(CommandSpec::from_argv(&[]).is_none());
    }
}
