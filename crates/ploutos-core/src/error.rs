//! # Error Types
//!
//! Domain-specific error types for ploutos-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ploutos-core errors (this file)                                       │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Document / input validation failures           │
//! │                                                                         │
//! │  ploutos-register errors (separate crate)                              │
//! │  └── RegisterError    - Session lifecycle failures                     │
//! │                                                                         │
//! │  NOTE: reconciliation outcomes are NOT errors. A sum mismatch is a     │
//! │  ValidationResult value, not an Err - the operator corrects the form   │
//! │  and the gate is re-evaluated.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, document, reason)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent domain logic failures. They should be caught and
/// translated to user-friendly messages by the host application.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A monetary amount crossing the float boundary was not a finite number.
    ///
    /// ## When This Occurs
    /// - Form input deserialized to NaN or infinity
    /// - Arithmetic performed on raw floats before conversion
    #[error("Invalid monetary amount: {reason}")]
    InvalidAmount { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Produced by the document validators and boundary checks.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., malformed PIX key, non-numeric CPF).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Document has the wrong number of digits.
    #[error("{document} must have exactly {expected} digits, got {actual}")]
    InvalidLength {
        document: String,
        expected: usize,
        actual: usize,
    },

    /// Document is a repeated-digit sequence (e.g., 111.111.111-11).
    ///
    /// Such sequences satisfy the mod-11 checksum but are reserved as
    /// invalid by the issuing registries.
    #[error("{document} cannot be a repeated-digit sequence")]
    RepeatedDigits { document: String },

    /// Document checksum verification failed.
    #[error("{document} has an invalid check digit")]
    InvalidCheckDigit { document: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidAmount {
            reason: "NaN is not a valid amount".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid monetary amount: NaN is not a valid amount"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "pixKey".to_string(),
        };
        assert_eq!(err.to_string(), "pixKey is required");

        let err = ValidationError::InvalidLength {
            document: "CPF".to_string(),
            expected: 11,
            actual: 10,
        };
        assert_eq!(err.to_string(), "CPF must have exactly 11 digits, got 10");

        let err = ValidationError::InvalidCheckDigit {
            document: "CNPJ".to_string(),
        };
        assert_eq!(err.to_string(), "CNPJ has an invalid check digit");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::RepeatedDigits {
            document: "CPF".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
