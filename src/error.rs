use thiserror::Error;

/// Failures surfaced by [`crate::parse`] and the decoder
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Raw input was empty or whitespace only
    #[error("invalid input: scan payload is empty or whitespace")]
    InvalidInput,
    /// Tokenizer made more iterations than allowed
    #[error("Maximum iteration limit reached ({limit} iterations)")]
    TokenizationLimitExceeded {
        /// Configured iteration bound
        limit: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ParseError::TokenizationLimitExceeded { limit: 1000 };
        assert!(err.to_string().contains("Maximum iteration limit reached"));
        assert!(ParseError::InvalidInput.to_string().contains("empty"));
    }
}
