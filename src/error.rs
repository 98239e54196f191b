//! Error type shared by the generator, the roster and the console.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A stat that is not a non-negative integer, or an HP of zero.
    #[error("invalid value {value:?} for {field}")]
    InvalidStat { field: String, value: String },

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("no creature named {0:?}")]
    NotFound(String),

    #[error("{0} cannot battle itself")]
    SameContender(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ArenaError {
    pub fn invalid_stat(field: &str, value: &str) -> Self {
        ArenaError::InvalidStat {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ArenaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_stat_message() {
        let err = ArenaError::invalid_stat("Attack", "abc");
        assert_eq!(err.to_string(), "invalid value \"abc\" for Attack");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ArenaError = io.into();
        assert!(matches!(err, ArenaError::Io(_)));
    }
}
