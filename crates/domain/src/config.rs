//! Engine configuration structures

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ILOE_INSURANCE_AMOUNT, DEFAULT_TAWJEEH_AMOUNT};

/// Fallback fee amounts injected into the ledger engine.
///
/// Historically these lived as magic numbers at every call site that
/// recomputed a balance; they are hoisted here so a deployment can override
/// them in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeDefaults {
    /// Tawjeeh charge applied when `tawjeeh_included` is off and the
    /// residence stores no explicit amount.
    pub tawjeeh_amount: Decimal,

    /// ILOE insurance charge under the same rule.
    pub iloe_insurance_amount: Decimal,
}

impl Default for FeeDefaults {
    fn default() -> Self {
        Self {
            tawjeeh_amount: DEFAULT_TAWJEEH_AMOUNT,
            iloe_insurance_amount: DEFAULT_ILOE_INSURANCE_AMOUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn defaults_match_backend_fallbacks() {
        let defaults = FeeDefaults::default();
        assert_eq!(defaults.tawjeeh_amount, dec!(150));
        assert_eq!(defaults.iloe_insurance_amount, dec!(126));
    }
}
