//! # Report Formatting
//!
//! Turns validation results into the human-readable lines shown in the
//! closing form's diagnostics panel. Pure string transforms, no I/O.

use crate::reconciliation::{CloseReport, ValidationDetails, ValidationResult};

/// Formats one validation result as a diagnostics line.
///
/// A checkmark or cross glyph prefixes the message; a currency-formatted
/// difference is appended when present, and missing field names are
/// appended comma-joined.
///
/// ## Example
/// ```rust
/// use ploutos_core::money::Money;
/// use ploutos_core::reconciliation::validate_saida;
/// use ploutos_core::report::format_result;
///
/// let result = validate_saida(
///     Money::from_cents(1000),
///     Money::from_cents(600),
///     Money::from_cents(399),
/// );
/// assert_eq!(
///     format_result(&result),
///     "✗ Valores não conferem (diferença: R$ 0.01)"
/// );
/// ```
pub fn format_result(result: &ValidationResult) -> String {
    let glyph = if result.is_valid { "✓" } else { "✗" };
    let mut line = format!("{} {}", glyph, result.message);

    match &result.details {
        Some(ValidationDetails::Mismatch { difference, .. }) => {
            line.push_str(&format!(" (diferença: {})", difference));
        }
        Some(ValidationDetails::MissingFields { fields }) => {
            line.push_str(": ");
            line.push_str(&fields.join(", "));
        }
        Some(ValidationDetails::UnjustifiedTotal { .. }) | None => {}
    }

    line
}

/// Formats a full close report: a progress header followed by one line per
/// sub-result, in execution order.
pub fn format_report(report: &CloseReport) -> String {
    let mut lines = Vec::with_capacity(report.results.len() + 1);
    lines.push(format!(
        "{}/{} verificações aprovadas",
        report.passed_validations, report.total_validations
    ));
    for result in &report.results {
        lines.push(format_result(result));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::reconciliation::{
        validate_for_close, validate_pix_conta, validate_required_fields, validate_saida,
    };
    use crate::types::{CashRegisterSnapshot, EntryAmounts, ExitAmounts};

    #[test]
    fn test_format_valid_result() {
        let result = validate_saida(
            Money::from_cents(1000),
            Money::from_cents(600),
            Money::from_cents(400),
        );
        assert_eq!(format_result(&result), "✓ Valores conferem");
    }

    #[test]
    fn test_format_mismatch_includes_currency_difference() {
        let result = validate_saida(
            Money::from_cents(100_000),
            Money::from_cents(60_000),
            Money::from_cents(39_900),
        );
        assert_eq!(
            format_result(&result),
            "✗ Valores não conferem (diferença: R$ 1.00)"
        );
    }

    #[test]
    fn test_format_missing_fields_joins_names() {
        let result =
            validate_required_fields(&EntryAmounts::default(), &ExitAmounts::default());
        assert_eq!(
            format_result(&result),
            "✗ Campos obrigatórios não preenchidos: Entrada: Dinheiro, Entrada: Fundo de caixa"
        );
    }

    #[test]
    fn test_format_unjustified_total_has_no_difference() {
        let result = validate_pix_conta(Money::from_cents(5000), &[]);
        assert_eq!(
            format_result(&result),
            "✗ Valor informado sem lançamentos de clientes"
        );
    }

    #[test]
    fn test_format_report_header_and_lines() {
        let mut snapshot = CashRegisterSnapshot::new("store-1", "till-1");
        snapshot.entries.dinheiro = Some(Money::from_cents(80_000));
        snapshot.entries.fundo_caixa = Some(Money::from_cents(40_000));

        let formatted = format_report(&validate_for_close(&snapshot));
        let lines: Vec<&str> = formatted.lines().collect();
        assert_eq!(lines[0], "3/3 verificações aprovadas");
        assert_eq!(lines.len(), 4);
        assert!(lines[1..].iter().all(|l| l.starts_with('✓')));
    }
}
