//! # Register State
//!
//! Thread-safe holder of the open cash sessions, one per till.
//!
//! ## Thread Safety
//! Sessions are kept in an `Arc<Mutex<HashMap>>` because:
//! 1. Multiple host commands may touch sessions concurrently
//! 2. Only one caller should mutate a session at a time
//! 3. Critical sections are short (validators are synchronous and cheap)
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Register State Operations                            │
//! │                                                                         │
//! │  Host Action                Operation              State Change         │
//! │  ───────────                ─────────              ────────────         │
//! │                                                                         │
//! │  Start shift ─────────────► open_session() ──────► sessions.insert     │
//! │                                                                         │
//! │  Enter an amount ─────────► with_session_mut() ──► snapshot mutated,   │
//! │                                                    report refreshed     │
//! │                                                                         │
//! │  Render diagnostics ──────► report() ────────────► (read only)         │
//! │                                                                         │
//! │  End shift ───────────────► close_session() ─────► gate consulted,     │
//! │                                                    session removed      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use ploutos_core::money::Money;
use ploutos_core::reconciliation::CloseReport;

use crate::error::{RegisterError, RegisterResult};
use crate::session::CashSession;

/// Thread-safe map of open sessions, keyed by till id.
///
/// ## Why Not RwLock?
/// Session operations are quick, and most of them mutate state. A RwLock
/// would add complexity with minimal benefit.
#[derive(Debug, Clone, Default)]
pub struct RegisterState {
    sessions: Arc<Mutex<HashMap<String, CashSession>>>,
}

impl RegisterState {
    /// Creates an empty register state.
    pub fn new() -> Self {
        RegisterState::default()
    }

    /// Opens a session on a till.
    ///
    /// ## Errors
    /// [`RegisterError::SessionAlreadyOpen`] when the till already has one.
    pub fn open_session(
        &self,
        store_id: &str,
        till_id: &str,
        operator: &str,
        fundo_caixa: Money,
    ) -> RegisterResult<CashSession> {
        let mut sessions = self.lock();
        if sessions.contains_key(till_id) {
            return Err(RegisterError::SessionAlreadyOpen {
                till_id: till_id.to_string(),
            });
        }

        let session = CashSession::open(store_id, till_id, operator, fundo_caixa);
        info!(
            session_id = %session.id,
            till_id = %till_id,
            operator = %operator,
            float = %fundo_caixa,
            "Session opened"
        );
        sessions.insert(till_id.to_string(), session.clone());
        Ok(session)
    }

    /// Executes a function with read access to a till's session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let snapshot = state.with_session("till-1", |s| s.snapshot.clone())?;
    /// ```
    pub fn with_session<F, R>(&self, till_id: &str, f: F) -> RegisterResult<R>
    where
        F: FnOnce(&CashSession) -> R,
    {
        let sessions = self.lock();
        let session = sessions
            .get(till_id)
            .ok_or_else(|| RegisterError::SessionNotFound {
                till_id: till_id.to_string(),
            })?;
        Ok(f(session))
    }

    /// Executes a function with write access to a till's session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let report = state.with_session_mut("till-1", |s| {
    ///     s.update_entries(|e| e.dinheiro = Some(Money::from_cents(80_000)))
    /// })??;
    /// ```
    pub fn with_session_mut<F, R>(&self, till_id: &str, f: F) -> RegisterResult<R>
    where
        F: FnOnce(&mut CashSession) -> R,
    {
        let mut sessions = self.lock();
        let session = sessions
            .get_mut(till_id)
            .ok_or_else(|| RegisterError::SessionNotFound {
                till_id: till_id.to_string(),
            })?;
        Ok(f(session))
    }

    /// Runs the can-close gate for a till's session.
    pub fn report(&self, till_id: &str) -> RegisterResult<CloseReport> {
        debug!(till_id = %till_id, "report requested");
        self.with_session(till_id, |session| session.report())
    }

    /// Closes a till's session and removes it from the open set.
    ///
    /// On a failing gate the session stays open (and registered) and the
    /// error carries the formatted failures.
    pub fn close_session(&self, till_id: &str) -> RegisterResult<CloseReport> {
        let mut sessions = self.lock();
        let session = sessions
            .get_mut(till_id)
            .ok_or_else(|| RegisterError::SessionNotFound {
                till_id: till_id.to_string(),
            })?;

        let report = session.close()?;
        info!(
            session_id = %session.id,
            till_id = %till_id,
            passed = report.passed_validations,
            "Session closed"
        );
        sessions.remove(till_id);
        Ok(report)
    }

    /// Ids of tills with an open session.
    pub fn open_tills(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, CashSession>> {
        self.sessions.lock().expect("Register mutex poisoned")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
