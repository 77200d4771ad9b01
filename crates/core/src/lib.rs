//! # Visadesk Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The residence step state machine (mainland and freezone pipelines)
//! - The ledger engine computing outstanding balances
//! - Validated mutation commands for fees, fines, and custom charges
//! - The snapshot-source port and `CaseService` facade for the UI layer
//!
//! ## Architecture Principles
//! - Only depends on `visadesk-domain`
//! - No database, HTTP, or platform code
//! - All external data arrives as snapshots via traits
//! - Pure, reentrant, testable business logic

pub mod case;
pub mod commands;
pub mod ledger;
pub mod workflow;

// Re-export specific items to avoid ambiguity
pub use case::ports::{CaseSnapshot, CaseSnapshotSource};
pub use case::{CaseService, CaseView};
pub use commands::{
    AddCustomCharge, AddFine, DeleteFine, InsuranceUpdate, TawjeehUpdate, UpdateFine,
};
pub use ledger::{LedgerEngine, LedgerTotals};
pub use workflow::{advance, can_advance, legal_events};
