//! # Register Error Types
//!
//! Lifecycle errors for the session/till layer. Reconciliation outcomes are
//! NOT errors (they are `ValidationResult` values from ploutos-core); these
//! variants cover operations that cannot proceed at all.

use thiserror::Error;

/// Session and till lifecycle errors.
#[derive(Debug, Error)]
pub enum RegisterError {
    /// No open session exists for the till.
    #[error("No open session for till {till_id}")]
    SessionNotFound { till_id: String },

    /// The till already has an open session.
    #[error("Till {till_id} already has an open session")]
    SessionAlreadyOpen { till_id: String },

    /// The session was already closed.
    #[error("Session {session_id} is already closed")]
    SessionClosed { session_id: String },

    /// The close gate rejected the closing attempt.
    ///
    /// Carries the formatted diagnostics lines for every failing check so
    /// the caller can surface them without re-running the validators.
    #[error("Register cannot be closed: {}", failures.join("; "))]
    CloseRejected { failures: Vec<String> },

    /// Store or till not present in the directory.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },
}

/// Convenience type alias for Results with RegisterError.
pub type RegisterResult<T> = Result<T, RegisterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RegisterError::SessionAlreadyOpen {
            till_id: "till-1".to_string(),
        };
        assert_eq!(err.to_string(), "Till till-1 already has an open session");

        let err = RegisterError::CloseRejected {
            failures: vec![
                "✗ Valores não conferem (diferença: R$ 1.00)".to_string(),
                "✗ Campos obrigatórios não preenchidos: Entrada: Dinheiro".to_string(),
            ],
        };
        assert!(err.to_string().starts_with("Register cannot be closed: ✗"));
        assert!(err.to_string().contains("; "));
    }
}
