use thiserror::Error;

#[derive(Error, Debug)]
pub enum RotaError {
    #[error("Remote store request failed: {0}")]
    RemoteError(#[from] reqwest::Error),

    #[error("Schedule export failed: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Weekday index must be in 0..=6 (0 = Sunday), got {value}")]
    InvalidWeekday { value: i64 },

    #[error("Invalid calendar date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("Roster index {index} out of bounds for roster of {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, RotaError>;
