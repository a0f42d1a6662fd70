//! # ploutos-register: Session/Till Layer for PloutosLedger
//!
//! This crate owns the stateful side of the register: which stores and
//! tills exist, which sessions are open, and the close workflow gated by
//! the ploutos-core validators.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     PloutosLedger Data Flow                             │
//! │                                                                         │
//! │  Host command (open shift / enter amount / close shift)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 ploutos-register (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐   ┌───────────────┐   ┌───────────────┐   │   │
//! │  │   │ RegisterState │   │  CashSession  │   │StoreDirectory │   │   │
//! │  │   │  (state.rs)   │──►│ (session.rs)  │   │  (store.rs)   │   │   │
//! │  │   │ till→session  │   │ open → closed │   │ stores, tills │   │   │
//! │  │   └───────────────┘   └───────┬───────┘   └───────────────┘   │   │
//! │  │                               │                                │   │
//! │  └───────────────────────────────┼────────────────────────────────┘   │
//! │                                  ▼                                     │
//! │                    ploutos-core::validate_for_close                    │
//! │                    (the single can-close gate)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`session`] - Cash session lifecycle (open, mutate, close)
//! - [`state`] - Thread-safe till→session map
//! - [`store`] - Store/till directory
//! - [`error`] - Lifecycle error types
//!
//! ## Usage
//!
//! ```rust
//! use ploutos_core::money::Money;
//! use ploutos_register::RegisterState;
//!
//! let state = RegisterState::new();
//! state
//!     .open_session("store-1", "till-1", "maria", Money::from_reais(400.00))
//!     .unwrap();
//!
//! let report = state
//!     .with_session_mut("till-1", |session| {
//!         session.update_entries(|e| e.dinheiro = Some(Money::from_reais(800.00)))
//!     })
//!     .unwrap()
//!     .unwrap();
//! assert!(report.is_valid);
//!
//! state.close_session("till-1").unwrap();
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod session;
pub mod state;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{RegisterError, RegisterResult};
pub use session::{CashSession, SessionStatus};
pub use state::RegisterState;
pub use store::{Store, StoreDirectory, Till};
