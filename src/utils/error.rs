use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvalError {
    #[error("Cannot open input file '{}': {source}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error at '{token}': {reason}")]
    ParseError { token: String, reason: String },

    #[error("Parameter '{label}' not found in '{}'", .path.display())]
    ParameterNotFound { label: String, path: PathBuf },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EvalError {
    pub fn parse(token: impl Into<String>, reason: impl Into<String>) -> Self {
        EvalError::ParseError {
            token: token.into(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            EvalError::InputUnavailable { .. } | EvalError::IoError(_) => ErrorCategory::Io,
            EvalError::ParseError { .. } | EvalError::ParameterNotFound { .. } => {
                ErrorCategory::Data
            }
            EvalError::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EvalError::IoError(_) => ErrorSeverity::Critical,
            EvalError::ParameterNotFound { .. } => ErrorSeverity::Medium,
            EvalError::InputUnavailable { .. }
            | EvalError::ParseError { .. }
            | EvalError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    /// 程序結束碼，依嚴重程度決定
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EvalError::InputUnavailable { path, .. } => {
                format!("Input file '{}' could not be opened", path.display())
            }
            EvalError::IoError(e) => format!("File system error: {}", e),
            EvalError::ParseError { token, reason } => {
                format!("Malformed input near '{}': {}", token, reason)
            }
            EvalError::ParameterNotFound { label, path } => format!(
                "No parameter named '{}' in '{}'",
                label,
                path.display()
            ),
            EvalError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting for {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EvalError::InputUnavailable { .. } => {
                "Create the input file with two 'label value' lines, e.g. 'x 1.0' and 'y 1.0'"
            }
            EvalError::IoError(_) => "Check permissions and free space of the output directory",
            EvalError::ParseError { .. } => {
                "Each entry must be a label followed by a floating-point value"
            }
            EvalError::ParameterNotFound { .. } => {
                "Check the parameter label against the labels present in the file"
            }
            EvalError::InvalidConfigValueError { .. } => "Run with --help to see valid options",
        }
    }
}

pub type Result<T> = std::result::Result<T, EvalError>;
