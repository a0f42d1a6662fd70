//! # Domain Types
//!
//! Core domain types for the cash-register closing workflow.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      CashRegisterSnapshot                               │
//! │                                                                         │
//! │  entries: EntryAmounts          exits: ExitAmounts                      │
//! │  ├── dinheiro    Option<Money>  ├── saida       Option<Money>           │
//! │  ├── cartao      Option<Money>  ├── devolucoes  Option<Money>           │
//! │  ├── pix         Option<Money>  └── vales       Option<Money>           │
//! │  ├── pix_conta   Option<Money>                                          │
//! │  ├── boleto      Option<Money>  saida_justification                     │
//! │  └── fundo_caixa Option<Money>  ├── valor_compra          Money         │
//! │                                 └── valor_saida_dinheiro  Money         │
//! │  pix_conta_clientes: Vec<LineItem>                                      │
//! │  └── one { name, amount } per customer PIX payment                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Unset vs Zero
//! Every declared category total is an `Option<Money>`. `None` means the
//! operator has not touched the field; `Some(Money::zero())` is an entered
//! zero and counts as filled. The required-fields validator only flags
//! `None`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Line Item
// =============================================================================

/// A named contributor to a category total, e.g. one customer's PIX payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Who or what the amount is attributed to.
    pub name: String,

    /// The contributed amount.
    pub amount: Money,
}

impl LineItem {
    /// Creates a new line item.
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        LineItem {
            name: name.into(),
            amount,
        }
    }

    /// Sums the amounts of a slice of line items.
    pub fn total(items: &[LineItem]) -> Money {
        items.iter().map(|item| item.amount).sum()
    }
}

// =============================================================================
// Declared Category Totals
// =============================================================================

/// Declared entry (incoming) totals, one per payment category.
///
/// Field names follow the register's Brazilian Portuguese categories;
/// the serialized form is camelCase for the frontend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EntryAmounts {
    /// Cash received.
    pub dinheiro: Option<Money>,

    /// Card payments.
    pub cartao: Option<Money>,

    /// PIX payments not attributed to individual customers.
    pub pix: Option<Money>,

    /// PIX payments attributed per customer (justified by line items).
    pub pix_conta: Option<Money>,

    /// Boleto payments.
    pub boleto: Option<Money>,

    /// Starting cash float assigned to the till at shift start.
    pub fundo_caixa: Option<Money>,
}

impl EntryAmounts {
    /// Total of all entered categories. Unset fields contribute nothing.
    pub fn total(&self) -> Money {
        [
            self.dinheiro,
            self.cartao,
            self.pix,
            self.pix_conta,
            self.boleto,
            self.fundo_caixa,
        ]
        .iter()
        .flatten()
        .sum()
    }
}

/// Declared exit (outgoing) totals, one per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ExitAmounts {
    /// Total cash-register exit amount for the shift (withdrawals,
    /// discounts, supplier purchases).
    pub saida: Option<Money>,

    /// Customer returns.
    pub devolucoes: Option<Money>,

    /// Meal/advance vouchers.
    pub vales: Option<Money>,
}

impl ExitAmounts {
    /// Total of all entered categories. Unset fields contribute nothing.
    pub fn total(&self) -> Money {
        [self.saida, self.devolucoes, self.vales]
            .iter()
            .flatten()
            .sum()
    }
}

/// The two components justifying the declared `saida` total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SaidaJustification {
    /// Amount spent on purchases.
    pub valor_compra: Money,

    /// Amount withdrawn as cash.
    pub valor_saida_dinheiro: Money,
}

impl SaidaJustification {
    /// Sum of both justification components.
    #[inline]
    pub fn total(&self) -> Money {
        self.valor_compra + self.valor_saida_dinheiro
    }
}

// =============================================================================
// Cash Register Snapshot
// =============================================================================

/// The full set of amounts and justifications for one closing operation.
///
/// ## Lifecycle
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Operator starts the closing form                                       │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  CashRegisterSnapshot::new(store, till)                                 │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  Amounts entered field by field ──► validate_for_close on every change  │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  CloseReport.is_valid ──► close allowed ──► persisted elsewhere         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Ownership is exclusive: a snapshot belongs to exactly one session and
/// its line items are never shared across snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CashRegisterSnapshot {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Store this closing belongs to.
    pub store_id: String,

    /// Till this closing belongs to.
    pub till_id: String,

    /// Declared entry totals.
    pub entries: EntryAmounts,

    /// Declared exit totals.
    pub exits: ExitAmounts,

    /// Justification components for the `saida` total.
    pub saida_justification: SaidaJustification,

    /// Per-customer PIX payments justifying the `pix_conta` total.
    pub pix_conta_clientes: Vec<LineItem>,

    /// When the operator began the closing form.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When an amount was last entered.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl CashRegisterSnapshot {
    /// Creates an empty snapshot for the given store and till.
    pub fn new(store_id: impl Into<String>, till_id: impl Into<String>) -> Self {
        let now = Utc::now();
        CashRegisterSnapshot {
            id: Uuid::new_v4().to_string(),
            store_id: store_id.into(),
            till_id: till_id.into(),
            entries: EntryAmounts::default(),
            exits: ExitAmounts::default(),
            saida_justification: SaidaJustification::default(),
            pix_conta_clientes: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Total of all declared entries.
    pub fn total_entries(&self) -> Money {
        self.entries.total()
    }

    /// Total of all declared exits.
    pub fn total_exits(&self) -> Money {
        self.exits.total()
    }

    /// Entries minus exits. Negative when more left the register than
    /// came in.
    pub fn net_balance(&self) -> Money {
        self.total_entries() - self.total_exits()
    }

    /// Marks the snapshot as mutated now. Callers setting fields directly
    /// should follow up with this.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_total() {
        let items = vec![
            LineItem::new("Ana", Money::from_cents(3333)),
            LineItem::new("Bruno", Money::from_cents(3333)),
            LineItem::new("Carla", Money::from_cents(3333)),
        ];
        assert_eq!(LineItem::total(&items), Money::from_cents(9999));
        assert_eq!(LineItem::total(&[]), Money::zero());
    }

    #[test]
    fn test_entry_total_skips_unset_fields() {
        let entries = EntryAmounts {
            dinheiro: Some(Money::from_cents(10_000)),
            fundo_caixa: Some(Money::from_cents(40_000)),
            ..EntryAmounts::default()
        };
        assert_eq!(entries.total(), Money::from_cents(50_000));
    }

    #[test]
    fn test_exit_total_counts_entered_zero() {
        let exits = ExitAmounts {
            saida: Some(Money::zero()),
            devolucoes: Some(Money::from_cents(2500)),
            vales: None,
        };
        assert_eq!(exits.total(), Money::from_cents(2500));
    }

    #[test]
    fn test_snapshot_net_balance() {
        let mut snapshot = CashRegisterSnapshot::new("store-1", "till-1");
        snapshot.entries.dinheiro = Some(Money::from_cents(80_000));
        snapshot.entries.fundo_caixa = Some(Money::from_cents(40_000));
        snapshot.exits.saida = Some(Money::from_cents(30_000));

        assert_eq!(snapshot.total_entries(), Money::from_cents(120_000));
        assert_eq!(snapshot.total_exits(), Money::from_cents(30_000));
        assert_eq!(snapshot.net_balance(), Money::from_cents(90_000));
    }

    #[test]
    fn test_new_snapshot_is_empty() {
        let snapshot = CashRegisterSnapshot::new("store-1", "till-1");
        assert_eq!(snapshot.store_id, "store-1");
        assert_eq!(snapshot.entries, EntryAmounts::default());
        assert!(snapshot.pix_conta_clientes.is_empty());
        assert_eq!(snapshot.created_at, snapshot.updated_at);
    }
}
