use thiserror::Error;

use crate::tools::CodecError;

/// Errors reported by domain construction and transitions.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid action {action}: expected an identifier in [0, {action_count})")]
    InvalidAction { action: i64, action_count: usize },

    #[error("Invalid domain configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_action_display() {
        let e = DomainError::InvalidAction {
            action: 9,
            action_count: 9,
        };
        assert_eq!(
            e.to_string(),
            "Invalid action 9: expected an identifier in [0, 9)"
        );
    }

    #[test]
    fn invalid_config_display() {
        let e = DomainError::InvalidConfig("delta_t must be positive".into());
        assert_eq!(
            e.to_string(),
            "Invalid domain configuration: delta_t must be positive"
        );
    }

    #[test]
    fn codec_error_converts() {
        let e: DomainError = CodecError::Overflow.into();
        assert_eq!(e, DomainError::Codec(CodecError::Overflow));
        assert_eq!(e.to_string(), "Product of radices overflows usize");
    }
}
