//! # Document Validation
//!
//! Checksum and format validation for the Brazilian payment identifiers the
//! register deals with: CPF, CNPJ and PIX keys.
//!
//! ## Check Digit Scheme
//! Both CPF and CNPJ end in two mod-11 check digits. Each digit is a
//! weighted sum of the preceding digits: `rem = sum % 11`, digit is `0`
//! when `rem < 2`, otherwise `11 - rem`. Repeated-digit sequences such as
//! `111.111.111-11` satisfy the checksum but are reserved as invalid by the
//! issuing registries and are rejected up front.
//!
//! ## Usage
//! ```rust
//! use ploutos_core::documents::{validate_cpf, validate_pix_key, PixKeyKind};
//!
//! validate_cpf("529.982.247-25").unwrap();
//! assert_eq!(
//!     validate_pix_key("operador@loja.com.br").unwrap(),
//!     PixKeyKind::Email,
//! );
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

/// CNPJ first-check-digit weights.
const CNPJ_WEIGHTS_FIRST: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// CNPJ second-check-digit weights.
const CNPJ_WEIGHTS_SECOND: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Maximum PIX key length accepted by the payment rail.
const MAX_PIX_KEY_LEN: usize = 77;

// =============================================================================
// Digit Extraction
// =============================================================================

/// Extracts digits, tolerating the usual formatting punctuation
/// (`.`, `-`, `/`) and spaces. Any other character is an error.
fn digits_of(input: &str, document: &str) -> Result<Vec<u32>, ValidationError> {
    let mut digits = Vec::new();
    for c in input.trim().chars() {
        if c.is_ascii_digit() {
            digits.push((c as u8 - b'0') as u32);
        } else if !matches!(c, '.' | '-' | '/' | ' ') {
            return Err(ValidationError::InvalidFormat {
                field: document.to_string(),
                reason: format!("unexpected character '{}'", c),
            });
        }
    }
    Ok(digits)
}

/// Computes one mod-11 check digit over `digits` with the given weights.
fn check_digit(digits: &[u32], weights: impl Iterator<Item = u32>) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    let rem = sum % 11;
    if rem < 2 {
        0
    } else {
        11 - rem
    }
}

fn all_digits_equal(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

// =============================================================================
// CPF / CNPJ
// =============================================================================

/// Validates a CPF (natural-person tax identifier).
///
/// ## Rules
/// - Formatting punctuation is stripped; exactly 11 digits must remain
/// - Repeated-digit sequences are rejected
/// - Both mod-11 check digits must verify
///
/// ## Example
/// ```rust
/// use ploutos_core::documents::validate_cpf;
///
/// assert!(validate_cpf("529.982.247-25").is_ok());
/// assert!(validate_cpf("52998224725").is_ok());
/// assert!(validate_cpf("52998224724").is_err());
/// ```
pub fn validate_cpf(cpf: &str) -> Result<(), ValidationError> {
    let digits = digits_of(cpf, "CPF")?;

    if digits.is_empty() {
        return Err(ValidationError::Required {
            field: "cpf".to_string(),
        });
    }
    if digits.len() != 11 {
        return Err(ValidationError::InvalidLength {
            document: "CPF".to_string(),
            expected: 11,
            actual: digits.len(),
        });
    }
    if all_digits_equal(&digits) {
        return Err(ValidationError::RepeatedDigits {
            document: "CPF".to_string(),
        });
    }

    let first = check_digit(&digits[..9], (2..=10).rev());
    let second = check_digit(&digits[..10], (2..=11).rev());
    if digits[9] != first || digits[10] != second {
        return Err(ValidationError::InvalidCheckDigit {
            document: "CPF".to_string(),
        });
    }

    Ok(())
}

/// Validates a CNPJ (legal-entity tax identifier).
///
/// Same scheme as [`validate_cpf`] over 14 digits, with the CNPJ weight
/// tables.
///
/// ## Example
/// ```rust
/// use ploutos_core::documents::validate_cnpj;
///
/// assert!(validate_cnpj("11.222.333/0001-81").is_ok());
/// assert!(validate_cnpj("11222333000182").is_err());
/// ```
pub fn validate_cnpj(cnpj: &str) -> Result<(), ValidationError> {
    let digits = digits_of(cnpj, "CNPJ")?;

    if digits.is_empty() {
        return Err(ValidationError::Required {
            field: "cnpj".to_string(),
        });
    }
    if digits.len() != 14 {
        return Err(ValidationError::InvalidLength {
            document: "CNPJ".to_string(),
            expected: 14,
            actual: digits.len(),
        });
    }
    if all_digits_equal(&digits) {
        return Err(ValidationError::RepeatedDigits {
            document: "CNPJ".to_string(),
        });
    }

    let first = check_digit(&digits[..12], CNPJ_WEIGHTS_FIRST.iter().copied());
    let second = check_digit(&digits[..13], CNPJ_WEIGHTS_SECOND.iter().copied());
    if digits[12] != first || digits[13] != second {
        return Err(ValidationError::InvalidCheckDigit {
            document: "CNPJ".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// PIX Keys
// =============================================================================

/// The kinds of key the PIX rail accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PixKeyKind {
    /// Natural-person tax identifier.
    Cpf,
    /// Legal-entity tax identifier.
    Cnpj,
    /// E-mail address.
    Email,
    /// Phone number in `+55` international format.
    Phone,
    /// Randomly generated key (UUID format).
    Evp,
}

/// Classifies and validates a PIX key.
///
/// ## Classification
/// ```text
/// contains '@'            → Email  (structural check)
/// starts with '+'         → Phone  (+55 plus 10-11 digits)
/// parses as UUID          → Evp
/// 11 digits               → Cpf    (full checksum)
/// 14 digits               → Cnpj   (full checksum)
/// anything else           → InvalidFormat
/// ```
///
/// ## Example
/// ```rust
/// use ploutos_core::documents::{validate_pix_key, PixKeyKind};
///
/// assert_eq!(validate_pix_key("+5511987654321").unwrap(), PixKeyKind::Phone);
/// assert_eq!(validate_pix_key("529.982.247-25").unwrap(), PixKeyKind::Cpf);
/// assert!(validate_pix_key("not a key").is_err());
/// ```
pub fn validate_pix_key(key: &str) -> Result<PixKeyKind, ValidationError> {
    let key = key.trim();

    if key.is_empty() {
        return Err(ValidationError::Required {
            field: "pixKey".to_string(),
        });
    }
    if key.len() > MAX_PIX_KEY_LEN {
        return Err(ValidationError::TooLong {
            field: "pixKey".to_string(),
            max: MAX_PIX_KEY_LEN,
        });
    }

    if key.contains('@') {
        return validate_email_key(key).map(|_| PixKeyKind::Email);
    }

    if let Some(rest) = key.strip_prefix('+') {
        return validate_phone_key(rest).map(|_| PixKeyKind::Phone);
    }

    if uuid::Uuid::parse_str(key).is_ok() {
        return Ok(PixKeyKind::Evp);
    }

    match digits_of(key, "pixKey") {
        Ok(digits) if digits.len() == 11 => validate_cpf(key).map(|_| PixKeyKind::Cpf),
        Ok(digits) if digits.len() == 14 => validate_cnpj(key).map(|_| PixKeyKind::Cnpj),
        _ => Err(ValidationError::InvalidFormat {
            field: "pixKey".to_string(),
            reason: "not a CPF, CNPJ, e-mail, phone or random key".to_string(),
        }),
    }
}

/// Structural e-mail check: one `@`, non-empty local part, dotted domain.
fn validate_email_key(key: &str) -> Result<(), ValidationError> {
    let mut parts = key.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();

    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.is_empty();

    if local.is_empty() || !domain_ok || key.contains(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field: "pixKey".to_string(),
            reason: "malformed e-mail address".to_string(),
        });
    }

    Ok(())
}

/// Phone keys are `+55` followed by a 10-11 digit national number.
fn validate_phone_key(rest: &str) -> Result<(), ValidationError> {
    let national = rest.strip_prefix("55").ok_or_else(|| ValidationError::InvalidFormat {
        field: "pixKey".to_string(),
        reason: "phone keys must use the +55 country code".to_string(),
    })?;

    let all_digits = national.chars().all(|c| c.is_ascii_digit());
    if !all_digits || !(10..=11).contains(&national.len()) {
        return Err(ValidationError::InvalidFormat {
            field: "pixKey".to_string(),
            reason: "phone keys need a 10-11 digit national number".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
