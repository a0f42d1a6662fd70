//! # Cash Session
//!
//! One operator's shift on one till: opened with a starting float, filled
//! in field by field, and closed only when the reconciliation gate passes.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐  open(fundo_caixa)  ┌──────────┐  close(), gate ok       │
//! │  │ (none)   │────────────────────►│   Open   │────────────────────┐    │
//! │  └──────────┘                     └────┬─────┘                    │    │
//! │                                        │  ▲                       ▼    │
//! │                          update_*()    │  │ report()        ┌─────────┐│
//! │                          (amounts      └──┘                 │ Closed  ││
//! │                           re-validated on every change)     └─────────┘│
//! │                                                                         │
//! │  close() with a failing report ──► Err(CloseRejected), stays Open      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ploutos_core::money::Money;
use ploutos_core::reconciliation::{validate_for_close, CloseReport};
use ploutos_core::report::format_result;
use ploutos_core::types::{
    CashRegisterSnapshot, EntryAmounts, ExitAmounts, LineItem, SaidaJustification,
};

use crate::error::{RegisterError, RegisterResult};

/// The status of a cash session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Session is open; amounts may be entered.
    Open,
    /// Session was closed after a passing report.
    Closed,
}

/// One operator's shift on one till.
///
/// The session owns its [`CashRegisterSnapshot`] exclusively. Every
/// mutation refreshes the snapshot's `updated_at` and returns a fresh
/// [`CloseReport`], so callers always hold the current gate verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashSession {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Operator who opened the session.
    pub operator: String,

    /// Open or closed.
    pub status: SessionStatus,

    /// The closing form state for this shift.
    pub snapshot: CashRegisterSnapshot,

    /// When the session was opened.
    pub opened_at: DateTime<Utc>,

    /// When the session was closed, if it was.
    pub closed_at: Option<DateTime<Utc>>,
}

impl CashSession {
    /// Opens a session on a till, seeding the snapshot with the starting
    /// cash float.
    pub fn open(
        store_id: impl Into<String>,
        till_id: impl Into<String>,
        operator: impl Into<String>,
        fundo_caixa: Money,
    ) -> Self {
        let mut snapshot = CashRegisterSnapshot::new(store_id, till_id);
        snapshot.entries.fundo_caixa = Some(fundo_caixa);

        CashSession {
            id: Uuid::new_v4().to_string(),
            operator: operator.into(),
            status: SessionStatus::Open,
            snapshot,
            opened_at: Utc::now(),
            closed_at: None,
        }
    }

    /// The till this session runs on.
    #[inline]
    pub fn till_id(&self) -> &str {
        &self.snapshot.till_id
    }

    /// Whether the session is still open.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.status == SessionStatus::Open
    }

    /// Runs the can-close gate against the current snapshot.
    pub fn report(&self) -> CloseReport {
        validate_for_close(&self.snapshot)
    }

    /// Edits the declared entry totals, returning the refreshed report.
    pub fn update_entries(
        &mut self,
        f: impl FnOnce(&mut EntryAmounts),
    ) -> RegisterResult<CloseReport> {
        self.mutate(|snapshot| f(&mut snapshot.entries))
    }

    /// Edits the declared exit totals, returning the refreshed report.
    pub fn update_exits(
        &mut self,
        f: impl FnOnce(&mut ExitAmounts),
    ) -> RegisterResult<CloseReport> {
        self.mutate(|snapshot| f(&mut snapshot.exits))
    }

    /// Replaces the saída justification components.
    pub fn set_saida_justification(
        &mut self,
        justification: SaidaJustification,
    ) -> RegisterResult<CloseReport> {
        self.mutate(|snapshot| snapshot.saida_justification = justification)
    }

    /// Replaces the per-customer PIX line items.
    pub fn set_pix_conta_clientes(
        &mut self,
        clientes: Vec<LineItem>,
    ) -> RegisterResult<CloseReport> {
        self.mutate(|snapshot| snapshot.pix_conta_clientes = clientes)
    }

    /// Closes the session if the gate passes.
    ///
    /// ## Errors
    /// - [`RegisterError::SessionClosed`] when called on a closed session
    /// - [`RegisterError::CloseRejected`] when any check fails; the error
    ///   carries one formatted line per failing check and the session
    ///   stays open
    pub fn close(&mut self) -> RegisterResult<CloseReport> {
        self.ensure_open()?;

        let report = self.report();
        if !report.is_valid {
            return Err(RegisterError::CloseRejected {
                failures: report.failed().map(format_result).collect(),
            });
        }

        self.status = SessionStatus::Closed;
        self.closed_at = Some(Utc::now());
        Ok(report)
    }

    fn ensure_open(&self) -> RegisterResult<()> {
        if self.is_open() {
            Ok(())
        } else {
            Err(RegisterError::SessionClosed {
                session_id: self.id.clone(),
            })
        }
    }

    fn mutate(
        &mut self,
        f: impl FnOnce(&mut CashRegisterSnapshot),
    ) -> RegisterResult<CloseReport> {
        self.ensure_open()?;
        f(&mut self.snapshot);
        self.snapshot.touch();
        Ok(self.report())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn open_session() -> CashSession {
        CashSession::open("store-1", "till-1", "maria", Money::from_cents(40_000))
    }

    #[test]
    fn test_open_seeds_the_float() {
        let session = open_session();
        assert!(session.is_open());
        assert_eq!(
            session.snapshot.entries.fundo_caixa,
            Some(Money::from_cents(40_000))
        );
        assert_eq!(session.till_id(), "till-1");
    }

    #[test]
    fn test_updates_return_fresh_report() {
        let mut session = open_session();

        // fundo_caixa is seeded, dinheiro still missing
        let report = session.report();
        assert!(!report.is_valid);

        let report = session
            .update_entries(|e| e.dinheiro = Some(Money::from_cents(80_000)))
            .unwrap();
        assert!(report.is_valid);
    }

    #[test]
    fn test_close_rejected_until_amounts_reconcile() {
        let mut session = open_session();
        session
            .update_entries(|e| e.dinheiro = Some(Money::from_cents(80_000)))
            .unwrap();
        session
            .update_exits(|x| x.saida = Some(Money::from_cents(100_000)))
            .unwrap();
        session
            .set_saida_justification(SaidaJustification {
                valor_compra: Money::from_cents(60_000),
                valor_saida_dinheiro: Money::from_cents(39_900),
            })
            .unwrap();

        // 100 centavos short: the gate blocks the close and the session
        // stays open
        match session.close() {
            Err(RegisterError::CloseRejected { failures }) => {
                assert_eq!(failures.len(), 1);
                assert!(failures[0].contains("R$ 1.00"));
            }
            other => panic!("expected CloseRejected, got {:?}", other),
        }
        assert!(session.is_open());

        // Operator corrects the withdrawal amount
        session
            .set_saida_justification(SaidaJustification {
                valor_compra: Money::from_cents(60_000),
                valor_saida_dinheiro: Money::from_cents(40_000),
            })
            .unwrap();

        let report = session.close().unwrap();
        assert!(report.is_valid);
        assert!(!session.is_open());
        assert!(session.closed_at.is_some());
    }

    #[test]
    fn test_session_serializes_camel_case() {
        let session = open_session();
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["status"], "open");
        assert_eq!(json["snapshot"]["entries"]["fundoCaixa"], 40_000);
        assert!(json["closedAt"].is_null());
    }

    #[test]
    fn test_closed_session_rejects_further_operations() {
        let mut session = open_session();
        session
            .update_entries(|e| e.dinheiro = Some(Money::from_cents(80_000)))
            .unwrap();
        session.close().unwrap();

        assert!(matches!(
            session.close(),
            Err(RegisterError::SessionClosed { .. })
        ));
        assert!(matches!(
            session.update_entries(|e| e.cartao = Some(Money::from_cents(100))),
            Err(RegisterError::SessionClosed { .. })
        ));
    }
}
