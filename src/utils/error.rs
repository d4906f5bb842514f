use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("hall ticket API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid session data: field '{field}': {reason}")]
    Session { field: String, reason: String },

    #[error("configuration error: field '{field}' has invalid value '{value}': {reason}")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    #[error("dataset is missing required column '{column}'")]
    MissingColumn { column: String },

    #[error("no department code recognised in register number '{register_no}'")]
    UnknownDepartment { register_no: String },

    #[error("no hall ticket schedule data found for department {department}")]
    NoScheduleData { department: String },
}

pub type Result<T> = std::result::Result<T, PortalError>;
