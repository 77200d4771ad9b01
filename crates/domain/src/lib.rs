//! # Visadesk Domain
//!
//! Business domain types and models for the residence processing engine.
//!
//! This crate contains:
//! - Domain data types (Residence, Fine, CustomCharge, Payment, etc.)
//! - Domain error types and Result definitions
//! - Fee configuration structures
//! - Domain constants and lenient parsing helpers
//!
//! ## Architecture
//! - No dependencies on other Visadesk crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
