//! # ploutos-core: Pure Business Logic for PloutosLedger
//!
//! This crate is the **heart** of PloutosLedger. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     PloutosLedger Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (React)                             │   │
//! │  │    Closing Form ──► Diagnostics Panel ──► Close Button         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ generated TS bindings                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    ploutos-register                             │   │
//! │  │    sessions, tills, the close workflow                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ ploutos-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌───────────────┐ ┌───────────────┐  │   │
//! │  │  │  types  │ │  money  │ │reconciliation │ │   documents   │  │   │
//! │  │  │Snapshot │ │  Money  │ │  validators   │ │  CPF / CNPJ   │  │   │
//! │  │  │LineItem │ │ centavos│ │  close gate   │ │   PIX keys    │  │   │
//! │  │  └─────────┘ └─────────┘ └───────────────┘ └───────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          External persistence/auth API (out of scope)           │   │
//! │  │     the validated snapshot is handed off only when valid        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CashRegisterSnapshot, LineItem, amounts)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`reconciliation`] - The closing validators and the can-close gate
//! - [`report`] - Human-readable formatting of validation results
//! - [`documents`] - CPF/CNPJ/PIX key checksum validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in centavos (i64); floats
//!    are rounded exactly once, at the form boundary
//! 4. **Results Are Values**: reconciliation outcomes are returned, never
//!    thrown - only genuine failures (malformed documents, NaN amounts)
//!    are `Err`
//!
//! ## Example Usage
//!
//! ```rust
//! use ploutos_core::money::Money;
//! use ploutos_core::reconciliation::validate_for_close;
//! use ploutos_core::types::{CashRegisterSnapshot, LineItem};
//!
//! let mut snapshot = CashRegisterSnapshot::new("store-1", "till-1");
//! snapshot.entries.dinheiro = Some(Money::from_reais(800.00));
//! snapshot.entries.fundo_caixa = Some(Money::from_reais(400.00));
//! snapshot.entries.pix_conta = Some(Money::from_reais(99.99));
//! snapshot.pix_conta_clientes = vec![
//!     LineItem::new("Ana", Money::from_reais(33.33)),
//!     LineItem::new("Bruno", Money::from_reais(33.33)),
//!     LineItem::new("Carla", Money::from_reais(33.33)),
//! ];
//!
//! let report = validate_for_close(&snapshot);
//! assert!(report.is_valid);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod documents;
pub mod error;
pub mod money;
pub mod reconciliation;
pub mod report;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use ploutos_core::Money` instead of
// `use ploutos_core::money::Money`

pub use documents::{validate_cnpj, validate_cpf, validate_pix_key, PixKeyKind};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{round_to_cents, Money};
pub use reconciliation::{
    validate_for_close, validate_pix_conta, validate_required_fields, validate_saida, Check,
    CloseReport, ValidationDetails, ValidationResult,
};
pub use report::{format_report, format_result};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default store ID for single-store deployments.
///
/// The schema carries store_id everywhere for multi-store installations;
/// single-store setups use this constant instead of dynamic store
/// resolution.
pub const DEFAULT_STORE_ID: &str = "00000000-0000-0000-0000-000000000001";
