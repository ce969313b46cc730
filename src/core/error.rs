use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GarageError {
    #[error("Licence plate '{0}' already in use")]
    DuplicateKey(String),

    #[error("Garage full! (capacity {capacity})")]
    CollectionFull { capacity: usize },

    #[error("Cannot find vehicle '{0}'")]
    NotFound(String),

    #[error("Invalid garage capacity: {0}")]
    InvalidCapacity(usize),

    #[error("Garage #{0} does not exist")]
    GarageNotFound(usize),

    #[error("{0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Input closed")]
    InputClosed,
}

impl GarageError {
    /// True for rejections the caller can recover from by picking
    /// different input (another plate, another garage).
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::DuplicateKey(_) | Self::CollectionFull { .. } | Self::Validation(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GarageError>;

impl From<std::io::Error> for GarageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for GarageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
