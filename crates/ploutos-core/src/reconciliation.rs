//! # Reconciliation Module
//!
//! Amount reconciliation for cash-register closing: given the declared
//! category totals and their itemized justifications, decide whether the
//! register can be closed.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Can-Close Gate                                      │
//! │                                                                         │
//! │  Operator edits a field                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_for_close(snapshot)    ← runs on EVERY change                 │
//! │       │                                                                 │
//! │       ├── validate_required_fields   "is everything mandatory filled?"  │
//! │       │                                                                 │
//! │       ├── validate_saida             "do the exit justifications add    │
//! │       │                               up to the declared saída?"        │
//! │       │                                                                 │
//! │       └── validate_pix_conta         "do the customer PIX payments add  │
//! │                                       up to the declared total?"        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CloseReport { is_valid, results, counters }                            │
//! │       │                                                                 │
//! │       ├── is_valid = true  → submit button enabled, snapshot may be    │
//! │       │                      persisted                                  │
//! │       └── is_valid = false → diagnostics panel lists EVERY failure     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Results Are Values
//! No validator returns `Err` or panics. Every outcome, including failure,
//! is a [`ValidationResult`] the UI renders directly. The aggregate gate
//! never short-circuits: the operator sees all problems in one pass instead
//! of fixing them one at a time.
//!
//! ## Usage
//! ```rust
//! use ploutos_core::money::Money;
//! use ploutos_core::reconciliation::validate_saida;
//!
//! let result = validate_saida(
//!     Money::from_cents(100_000),
//!     Money::from_cents(60_000),
//!     Money::from_cents(40_000),
//! );
//! assert!(result.is_valid);
//! assert_eq!(result.message, "Valores conferem");
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{CashRegisterSnapshot, EntryAmounts, ExitAmounts, LineItem};

// =============================================================================
// Validation Result
// =============================================================================

/// Which validator produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    /// Mandatory-field presence (§ required fields).
    RequiredFields,
    /// Saída total vs its two justification components.
    Saida,
    /// PIX-conta total vs the per-customer line items.
    PixConta,
}

/// Failure detail attached to an invalid result.
///
/// Modeled as a tagged union: each failure kind carries exactly the data
/// the diagnostics panel needs, and nothing else. A total declared without
/// any supporting items intentionally has no `difference` field - there is
/// nothing to subtract from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ValidationDetails {
    /// The computed sum does not equal the declared total.
    #[serde(rename_all = "camelCase")]
    Mismatch {
        /// The declared category total.
        expected: Money,
        /// The sum of the justification components.
        actual: Money,
        /// `(expected - actual).abs()`.
        difference: Money,
    },

    /// Mandatory fields were left unset.
    #[serde(rename_all = "camelCase")]
    MissingFields {
        /// Offending field names, prefixed `Entrada:` / `Saída:`.
        fields: Vec<String>,
    },

    /// A positive total was declared with zero supporting line items.
    #[serde(rename_all = "camelCase")]
    UnjustifiedTotal {
        /// The declared category total.
        declared: Money,
    },
}

/// The uniform output of every validator.
///
/// Always returned as a value, never thrown. An "unset category" is valid
/// with an informational message: the absence of a total is not a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Which validator produced this result.
    pub check: Check,

    /// Whether the check passed.
    pub is_valid: bool,

    /// Operator-facing message (pt-BR, matching the register UI).
    pub message: String,

    /// Failure detail, present only on invalid results.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub details: Option<ValidationDetails>,
}

impl ValidationResult {
    /// A category with no declared total requires no justification.
    fn not_set(check: Check) -> Self {
        ValidationResult {
            check,
            is_valid: true,
            message: "Valor não informado".to_string(),
            details: None,
        }
    }

    /// Declared total and computed sum agree.
    fn matched(check: Check) -> Self {
        ValidationResult {
            check,
            is_valid: true,
            message: "Valores conferem".to_string(),
            details: None,
        }
    }

    /// Declared total and computed sum disagree.
    fn mismatch(check: Check, expected: Money, actual: Money) -> Self {
        ValidationResult {
            check,
            is_valid: false,
            message: "Valores não conferem".to_string(),
            details: Some(ValidationDetails::Mismatch {
                expected,
                actual,
                difference: expected.difference(actual),
            }),
        }
    }
}

// =============================================================================
// Field-Level Validators
// =============================================================================

/// Reconciles the declared saída total against its justification components.
///
/// ## Behavior
/// - `saida <= 0`: valid. A category with no declared total requires no
///   justification.
/// - Otherwise `valor_compra + valor_saida_dinheiro` must equal `saida`
///   exactly; on mismatch the result carries the absolute difference.
///
/// Note the contrast with [`validate_pix_conta`]: saída has no
/// empty-justification special case. Zero components against a positive
/// total fall through to the ordinary mismatch path.
///
/// ## Example
/// ```rust
/// use ploutos_core::money::Money;
/// use ploutos_core::reconciliation::validate_saida;
///
/// // R$ 1000.00 declared, justified by R$ 600.00 + R$ 399.00
/// let result = validate_saida(
///     Money::from_cents(100_000),
///     Money::from_cents(60_000),
///     Money::from_cents(39_900),
/// );
/// assert!(!result.is_valid);
/// ```
pub fn validate_saida(
    saida: Money,
    valor_compra: Money,
    valor_saida_dinheiro: Money,
) -> ValidationResult {
    if !saida.is_positive() {
        return ValidationResult::not_set(Check::Saida);
    }

    let actual = valor_compra + valor_saida_dinheiro;
    if actual == saida {
        ValidationResult::matched(Check::Saida)
    } else {
        ValidationResult::mismatch(Check::Saida, saida, actual)
    }
}

/// Reconciles the declared PIX-conta total against the per-customer items.
///
/// ## Behavior (three-way branch)
/// 1. `pix_conta <= 0`: valid, mirrors [`validate_saida`]'s zero-total
///    policy.
/// 2. `pix_conta > 0` with zero line items: invalid. A positive declared
///    total with no supporting customers is always a failure, reported as
///    [`ValidationDetails::UnjustifiedTotal`] without a difference.
/// 3. Otherwise the item amounts must sum to the declared total exactly.
pub fn validate_pix_conta(pix_conta: Money, clientes: &[LineItem]) -> ValidationResult {
    if !pix_conta.is_positive() {
        return ValidationResult::not_set(Check::PixConta);
    }

    if clientes.is_empty() {
        return ValidationResult {
            check: Check::PixConta,
            is_valid: false,
            message: "Valor informado sem lançamentos de clientes".to_string(),
            details: Some(ValidationDetails::UnjustifiedTotal {
                declared: pix_conta,
            }),
        };
    }

    let actual = LineItem::total(clientes);
    if actual == pix_conta {
        ValidationResult::matched(Check::PixConta)
    } else {
        ValidationResult::mismatch(Check::PixConta, pix_conta, actual)
    }
}

/// Checks that every mandatory field has been filled in.
///
/// Mandatory entry fields: `dinheiro`, `fundo_caixa`. There are currently
/// no mandatory exit fields; the parameter stays so the signature survives
/// adding one.
///
/// An entered zero is a legitimate value and is NOT missing. Only fields
/// the operator never touched (`None`) are flagged, each prefixed with its
/// section (`Entrada:` / `Saída:`).
pub fn validate_required_fields(
    entries: &EntryAmounts,
    _exits: &ExitAmounts,
) -> ValidationResult {
    let mut missing: Vec<String> = Vec::new();

    if entries.dinheiro.is_none() {
        missing.push("Entrada: Dinheiro".to_string());
    }
    if entries.fundo_caixa.is_none() {
        missing.push("Entrada: Fundo de caixa".to_string());
    }

    if missing.is_empty() {
        ValidationResult {
            check: Check::RequiredFields,
            is_valid: true,
            message: "Campos obrigatórios preenchidos".to_string(),
            details: None,
        }
    } else {
        ValidationResult {
            check: Check::RequiredFields,
            is_valid: false,
            message: "Campos obrigatórios não preenchidos".to_string(),
            details: Some(ValidationDetails::MissingFields { fields: missing }),
        }
    }
}

// =============================================================================
// Aggregate Validator (Can-Close Gate)
// =============================================================================

/// The outcome of running every validator against one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CloseReport {
    /// True iff every sub-result is valid.
    pub is_valid: bool,

    /// How many sub-validators passed (UI progress indication).
    pub passed_validations: usize,

    /// How many sub-validators ran.
    pub total_validations: usize,

    /// Every sub-result, in the fixed execution order.
    pub results: Vec<ValidationResult>,
}

impl CloseReport {
    fn new(results: Vec<ValidationResult>) -> Self {
        let passed = results.iter().filter(|r| r.is_valid).count();
        CloseReport {
            is_valid: passed == results.len(),
            passed_validations: passed,
            total_validations: results.len(),
            results,
        }
    }

    /// The failing sub-results, for the diagnostics panel.
    pub fn failed(&self) -> impl Iterator<Item = &ValidationResult> {
        self.results.iter().filter(|r| !r.is_valid)
    }
}

/// Runs every validator against the snapshot and produces a single
/// pass/fail with itemized failure reasons.
///
/// This is the single gate consulted before allowing a close-and-persist
/// action. It is synchronous, performs no I/O, runs in linear time in the
/// number of line items, and is safe to call on every keystroke.
///
/// Execution order is fixed: required fields, then saída, then PIX conta.
/// It never short-circuits; all failures are reported simultaneously.
///
/// Unset totals are treated as zero here, which routes them into the
/// validators' "value not set" branch.
pub fn validate_for_close(snapshot: &CashRegisterSnapshot) -> CloseReport {
    let results = vec![
        validate_required_fields(&snapshot.entries, &snapshot.exits),
        validate_saida(
            snapshot.exits.saida.unwrap_or_default(),
            snapshot.saida_justification.valor_compra,
            snapshot.saida_justification.valor_saida_dinheiro,
        ),
        validate_pix_conta(
            snapshot.entries.pix_conta.unwrap_or_default(),
            &snapshot.pix_conta_clientes,
        ),
    ];

    CloseReport::new(results)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_snapshot() -> CashRegisterSnapshot {
        let mut snapshot = CashRegisterSnapshot::new("store-1", "till-1");
        snapshot.entries.dinheiro = Some(Money::from_cents(80_000));
        snapshot.entries.fundo_caixa = Some(Money::from_cents(40_000));
        snapshot
    }

    #[test]
    fn test_saida_zero_total_is_exempt() {
        // Justifications are irrelevant when nothing was declared
        let result = validate_saida(
            Money::zero(),
            Money::from_cents(50_000),
            Money::from_cents(50_000),
        );
        assert!(result.is_valid);
        assert_eq!(result.message, "Valor não informado");
        assert!(result.details.is_none());
    }

    #[test]
    fn test_saida_exact_match() {
        let result = validate_saida(
            Money::from_cents(100_000),
            Money::from_cents(60_000),
            Money::from_cents(40_000),
        );
        assert!(result.is_valid);
        assert_eq!(result.message, "Valores conferem");
    }

    #[test]
    fn test_saida_mismatch_reports_difference() {
        let result = validate_saida(
            Money::from_cents(100_000),
            Money::from_cents(60_000),
            Money::from_cents(39_900),
        );
        assert!(!result.is_valid);
        assert_eq!(result.message, "Valores não conferem");
        match result.details {
            Some(ValidationDetails::Mismatch {
                expected,
                actual,
                difference,
            }) => {
                assert_eq!(expected, Money::from_cents(100_000));
                assert_eq!(actual, Money::from_cents(99_900));
                assert_eq!(difference, Money::from_cents(100));
            }
            other => panic!("expected mismatch details, got {:?}", other),
        }
    }

    #[test]
    fn test_saida_zero_justification_is_ordinary_mismatch() {
        // No empty-justification special case for saída: zero components
        // against a positive total surface as a plain mismatch
        let result = validate_saida(Money::from_cents(5000), Money::zero(), Money::zero());
        assert!(!result.is_valid);
        assert!(matches!(
            result.details,
            Some(ValidationDetails::Mismatch { .. })
        ));
    }

    #[test]
    fn test_pix_conta_rounding_reconciles_drifted_sum() {
        // Three payments of 33.33 entered as floats must reconcile against
        // a declared 99.99 even though the raw f64 sum drifts
        let clientes = vec![
            LineItem::new("a", Money::from_reais(33.33)),
            LineItem::new("b", Money::from_reais(33.33)),
            LineItem::new("c", Money::from_reais(33.33)),
        ];
        let result = validate_pix_conta(Money::from_reais(99.99), &clientes);
        assert!(result.is_valid);
    }

    #[test]
    fn test_pix_conta_nonzero_total_with_no_items_is_invalid() {
        let result = validate_pix_conta(Money::from_cents(5000), &[]);
        assert!(!result.is_valid);
        assert_eq!(
            result.details,
            Some(ValidationDetails::UnjustifiedTotal {
                declared: Money::from_cents(5000)
            })
        );
    }

    #[test]
    fn test_pix_conta_zero_total_is_exempt() {
        let result = validate_pix_conta(Money::zero(), &[]);
        assert!(result.is_valid);
    }

    #[test]
    fn test_pix_conta_mismatch() {
        let clientes = vec![LineItem::new("a", Money::from_cents(4000))];
        let result = validate_pix_conta(Money::from_cents(5000), &clientes);
        assert!(!result.is_valid);
        match result.details {
            Some(ValidationDetails::Mismatch { difference, .. }) => {
                assert_eq!(difference, Money::from_cents(1000));
            }
            other => panic!("expected mismatch details, got {:?}", other),
        }
    }

    #[test]
    fn test_required_fields_zero_is_not_missing() {
        let entries = EntryAmounts {
            dinheiro: Some(Money::zero()),
            fundo_caixa: Some(Money::from_cents(40_000)),
            ..EntryAmounts::default()
        };
        let result = validate_required_fields(&entries, &ExitAmounts::default());
        assert!(result.is_valid);
    }

    #[test]
    fn test_required_fields_reports_all_missing() {
        let result =
            validate_required_fields(&EntryAmounts::default(), &ExitAmounts::default());
        assert!(!result.is_valid);
        assert_eq!(
            result.details,
            Some(ValidationDetails::MissingFields {
                fields: vec![
                    "Entrada: Dinheiro".to_string(),
                    "Entrada: Fundo de caixa".to_string(),
                ]
            })
        );
    }

    #[test]
    fn test_validators_are_idempotent() {
        let clientes = vec![LineItem::new("a", Money::from_cents(4000))];
        let first = validate_pix_conta(Money::from_cents(5000), &clientes);
        let second = validate_pix_conta(Money::from_cents(5000), &clientes);
        assert_eq!(first, second);
    }

    #[test]
    fn test_gate_passes_on_consistent_snapshot() {
        let mut snapshot = filled_snapshot();
        snapshot.exits.saida = Some(Money::from_cents(100_000));
        snapshot.saida_justification.valor_compra = Money::from_cents(60_000);
        snapshot.saida_justification.valor_saida_dinheiro = Money::from_cents(40_000);
        snapshot.entries.pix_conta = Some(Money::from_cents(9999));
        snapshot.pix_conta_clientes = vec![
            LineItem::new("Ana", Money::from_cents(3333)),
            LineItem::new("Bruno", Money::from_cents(3333)),
            LineItem::new("Carla", Money::from_cents(3333)),
        ];

        let report = validate_for_close(&snapshot);
        assert!(report.is_valid);
        assert_eq!(report.passed_validations, 3);
        assert_eq!(report.total_validations, 3);
        assert_eq!(report.failed().count(), 0);
    }

    #[test]
    fn test_gate_is_conjunctive_and_exhaustive() {
        // Required fields AND saída fail simultaneously: both must be
        // reported, not just the first
        let mut snapshot = CashRegisterSnapshot::new("store-1", "till-1");
        snapshot.exits.saida = Some(Money::from_cents(100_000));
        snapshot.saida_justification.valor_compra = Money::from_cents(60_000);
        snapshot.saida_justification.valor_saida_dinheiro = Money::from_cents(39_900);

        let report = validate_for_close(&snapshot);
        assert!(!report.is_valid);
        assert_eq!(report.failed().count(), 2);
        assert_eq!(report.passed_validations, 1);
        assert_eq!(report.total_validations, 3);
    }

    #[test]
    fn test_gate_treats_unset_totals_as_not_set() {
        // Nothing declared for saída or PIX conta: both validators take the
        // exempt branch and only required fields can fail
        let snapshot = filled_snapshot();
        let report = validate_for_close(&snapshot);
        assert!(report.is_valid);
    }

    #[test]
    fn test_result_serializes_in_frontend_shape() {
        let result = validate_saida(
            Money::from_cents(1000),
            Money::from_cents(600),
            Money::from_cents(399),
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["isValid"], false);
        assert_eq!(json["check"], "saida");
        assert_eq!(json["details"]["kind"], "mismatch");
        assert_eq!(json["details"]["difference"], 1);
    }
}
