use thiserror::Error;

/// Shared lightweight error type for core primitive operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Invalid caller input or malformed primitive value.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Malformed 128-bit UUID string.
    #[error("invalid uuid: {0}")]
    InvalidUuid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::CoreError;

    #[test]
    fn error_messages_are_stable() {
        assert_eq!(
            CoreError::InvalidInput("bad handle").to_string(),
            "invalid input: bad handle"
        );
        assert_eq!(
            CoreError::InvalidUuid("odd digit count").to_string(),
            "invalid uuid: odd digit count"
        );
    }
}
