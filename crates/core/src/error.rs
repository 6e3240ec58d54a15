//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only hard failures live here: a value that can never be constructed. Expected,
/// recoverable outcomes of store operations (duplicate names, missing products,
/// stock that would go negative) are returned as plain values by the store
/// instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A constructor argument was out of its allowed domain.
    #[error("invalid argument `{field}`: {message}")]
    InvalidArgument {
        field: &'static str,
        message: String,
    },
}

impl DomainError {
    pub fn invalid_argument(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            message: message.into(),
        }
    }

    /// The operator-facing message, without the field prefix.
    pub fn message(&self) -> &str {
        match self {
            DomainError::InvalidArgument { message, .. } => message,
        }
    }

    /// Name of the offending argument.
    pub fn field(&self) -> &'static str {
        match self {
            DomainError::InvalidArgument { field, .. } => *field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_exposes_field_and_message() {
        let err = DomainError::invalid_argument("price", "Price must be greater than zero.");
        assert_eq!(err.field(), "price");
        assert_eq!(err.message(), "Price must be greater than zero.");
        assert_eq!(
            err.to_string(),
            "invalid argument `price`: Price must be greater than zero."
        );
    }

    #[test]
    fn display_includes_field_name() {
        let err = DomainError::invalid_argument("name", "Product name cannot be empty.");
        assert_eq!(err.field(), "name");
        assert!(err.to_string().contains("`name`"));
    }
}
