use thiserror::Error;

#[derive(Error, Debug)]
pub enum OptcheckError {
    #[error("Access to empty optional: {target}")]
    EmptyOptionalAccess { target: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Failed to start '{command}': {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command '{command}' failed with status {}", describe_status(.status))]
    CommandFailed { command: String, status: Option<i32> },

    #[error("Error collecting branch differences: {message}")]
    GitDiffError { message: String },

    #[error("Report file not found: {path}")]
    ReportNotFound { path: String },

    #[error("Problem reading report {path}: {message}")]
    ReportParseError { path: String, message: String },

    #[error("Analysis aborted by user")]
    Aborted,
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "unknown".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Defect,
    Configuration,
    Process,
    Report,
    Io,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl OptcheckError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            OptcheckError::EmptyOptionalAccess { .. } => ErrorCategory::Defect,
            OptcheckError::IoError(_) => ErrorCategory::Io,
            OptcheckError::SerializationError(_) => ErrorCategory::Report,
            OptcheckError::ConfigValidationError { .. }
            | OptcheckError::InvalidConfigValueError { .. }
            | OptcheckError::MissingConfigError { .. } => ErrorCategory::Configuration,
            OptcheckError::CommandSpawn { .. }
            | OptcheckError::CommandFailed { .. }
            | OptcheckError::GitDiffError { .. } => ErrorCategory::Process,
            OptcheckError::ReportNotFound { .. } | OptcheckError::ReportParseError { .. } => {
                ErrorCategory::Report
            }
            OptcheckError::Aborted => ErrorCategory::User,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            OptcheckError::Aborted => ErrorSeverity::Low,
            OptcheckError::CommandFailed { .. } | OptcheckError::GitDiffError { .. } => {
                ErrorSeverity::Medium
            }
            OptcheckError::IoError(_) | OptcheckError::CommandSpawn { .. } => {
                ErrorSeverity::Critical
            }
            _ => ErrorSeverity::High,
        }
    }

    /// Process exit status for a failed run.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Defect => "Check the optional for presence before reading through it",
            ErrorCategory::Configuration => "Review the command line flags and the TOML config file",
            ErrorCategory::Process => "Re-run with --verbose to see the output of the failing command",
            ErrorCategory::Report => "Re-run with --force to regenerate compile commands and reports",
            ErrorCategory::Io => "Check that the configured paths exist and are writable",
            ErrorCategory::User => "Run again when ready",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            OptcheckError::EmptyOptionalAccess { target } => {
                format!("Tried to read '{}' but it holds no value", target)
            }
            OptcheckError::MissingConfigError { field } if field == "files" => {
                "For git action mode files is required.".to_string()
            }
            OptcheckError::Aborted => "Analysis cancelled.".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, OptcheckError>;
