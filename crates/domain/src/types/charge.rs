//! Custom (free-form) billable charges

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::lenient;

/// An arbitrary additional billable item on a residence.
///
/// Profit is always derived from the two stored amounts; it is intentionally
/// not a field, so it can never drift out of sync when either amount is
/// edited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomCharge {
    /// Unique charge identifier.
    pub id: i64,

    /// Case this charge belongs to.
    #[serde(rename = "residenceID")]
    pub residence_id: i64,

    /// Short description shown on the invoice.
    pub charge_title: String,

    /// What the item costs the agency.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub net_cost: Decimal,

    /// What the customer is billed; feeds the outstanding balance.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub sale_price: Decimal,

    /// Account the charge was booked against.
    #[serde(rename = "accountID")]
    pub account_id: i64,

    /// Free-form remarks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,

    /// Staff member who added the charge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_name: Option<String>,

    /// When the charge was recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl CustomCharge {
    /// Margin on this charge. Negative when sold below cost.
    #[must_use]
    pub fn profit(&self) -> Decimal {
        self.sale_price - self.net_cost
    }
}
