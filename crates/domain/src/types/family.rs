//! Dependent (family) residence cases

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::lenient;

/// A dependent case linked to a primary residence.
///
/// Family cases carry a reduced field set: one price, one paid amount, no
/// fee toggles and no fine or charge collections. The ledger treats them as
/// a lightweight variant of [`crate::types::residence::Residence`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyResidence {
    /// Unique identifier of the dependent case.
    #[serde(rename = "familyResidenceID")]
    pub family_residence_id: i64,

    /// Primary residence this case hangs off.
    pub main_residence_id: i64,

    /// Agreed sale price.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub sale_price: Decimal,

    /// Total collected so far.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub paid_amount: Decimal,
}
