use thiserror::Error;

/// Errors raised while loading a search store.
///
/// `Malformed` and `MissingField` together make up the "malformed index"
/// family: the load attempt is over and the caller should treat search as
/// unavailable. Finding no matches is never an error.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Malformed index: {0}")]
    Malformed(String),

    #[error("Malformed index: record {position} is missing required field `{field}`")]
    MissingField { position: usize, field: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, IndexError>;

impl IndexError {
    /// True when the payload itself was rejected, as opposed to failing to read it.
    pub fn is_malformed(&self) -> bool {
        matches!(self, IndexError::Malformed(_) | IndexError::MissingField { .. })
    }
}

impl From<serde_json::Error> for IndexError {
    fn from(err: serde_json::Error) -> Self {
        IndexError::Malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let err = IndexError::MissingField {
            position: 2,
            field: "title",
        };
        assert_eq!(
            err.to_string(),
            "Malformed index: record 2 is missing required field `title`"
        );
    }

    #[test]
    fn test_is_malformed() {
        assert!(IndexError::Malformed("not an array".into()).is_malformed());
        assert!(IndexError::MissingField {
            position: 0,
            field: "url"
        }
        .is_malformed());
        assert!(!IndexError::Config("bad".into()).is_malformed());
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(!IndexError::from(io).is_malformed());
    }

    #[test]
    fn test_json_error_is_malformed() {
        let err = serde_json::from_str::<serde_json::Value>("[{").unwrap_err();
        assert!(IndexError::from(err).is_malformed());
    }
}
