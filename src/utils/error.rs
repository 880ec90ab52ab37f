use thiserror::Error;

#[derive(Error, Debug)]
pub enum CurriculumError {
    #[error("Bucket count must be at least 1, got {bucket_count}")]
    InvalidBucketCount { bucket_count: usize },

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Rendering error: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Validation,
    Rendering,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CurriculumError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CurriculumError::InvalidBucketCount { .. } => ErrorCategory::Validation,
            CurriculumError::ConfigValidationError { .. }
            | CurriculumError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CurriculumError::CsvError(_)
            | CurriculumError::SerializationError(_)
            | CurriculumError::RenderError { .. } => ErrorCategory::Rendering,
            CurriculumError::ZipError(_) | CurriculumError::IoError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Rendering => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CurriculumError::InvalidBucketCount { .. } => {
                "Choose a duration of at least one week, or use the day-wise plan".to_string()
            }
            CurriculumError::ConfigValidationError { field, .. }
            | CurriculumError::InvalidConfigValueError { field, .. } => {
                format!("Check the '{}' setting and try again", field)
            }
            CurriculumError::IoError(_) | CurriculumError::ZipError(_) => {
                "Make sure the output directory exists and is writable".to_string()
            }
            CurriculumError::CsvError(_)
            | CurriculumError::SerializationError(_)
            | CurriculumError::RenderError { .. } => {
                "Try a different output format, or rerun with --verbose for details".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Validation => format!("Invalid curriculum request: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Rendering => format!("Could not render the curriculum: {}", self),
            ErrorCategory::Io => format!("Could not write the curriculum files: {}", self),
        }
    }

    /// Process exit code for a failed run.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CurriculumError>;
