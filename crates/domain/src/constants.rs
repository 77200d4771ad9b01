//! Domain-level constants
//!
//! Centralized location for the fallback amounts the backend applies when a
//! residence carries a separately-charged fee without an explicit amount.
//! Call sites must not repeat these as literals; the ledger engine receives
//! them through [`crate::config::FeeDefaults`].

use rust_decimal::Decimal;

/// Default Tawjeeh charge (AED) when the fee is not bundled into the sale
/// price and no explicit amount is stored on the residence.
pub const DEFAULT_TAWJEEH_AMOUNT: Decimal = Decimal::from_parts(150, 0, 0, false, 0);

/// Default ILOE insurance charge (AED) under the same fallback rule.
pub const DEFAULT_ILOE_INSURANCE_AMOUNT: Decimal = Decimal::from_parts(126, 0, 0, false, 0);

/// Number of positions in the mainland pipeline (steps 0 through 10).
pub const MAINLAND_STEP_COUNT: u8 = 11;
