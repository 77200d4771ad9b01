//! Custom charge commands

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use visadesk_domain::{LookupTables, Result, VisadeskError};

/// Add a free-form billable item to a residence.
///
/// Profit is never part of the command: it is derived from the two amounts
/// wherever it is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCustomCharge {
    /// Case the charge is added to.
    #[serde(rename = "residenceID")]
    pub residence_id: i64,
    /// Short description shown on the invoice.
    pub charge_title: String,
    /// What the item costs the agency.
    pub net_cost: Decimal,
    /// What the customer is billed.
    pub sale_price: Decimal,
    /// Account the charge is booked to.
    #[serde(rename = "accountID")]
    pub account_id: i64,
    /// Free-form remarks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    /// Staff member adding the charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_name: Option<String>,
}

impl AddCustomCharge {
    /// Validated charge creation.
    ///
    /// # Errors
    ///
    /// `Validation` when the title is blank, either amount is negative, or
    /// the account is unknown.
    pub fn new(
        residence_id: i64,
        charge_title: impl Into<String>,
        net_cost: Decimal,
        sale_price: Decimal,
        account_id: i64,
        lookups: &LookupTables,
    ) -> Result<Self> {
        let charge_title = charge_title.into();
        if charge_title.trim().is_empty() {
            return Err(VisadeskError::Validation("charge title must not be empty".to_owned()));
        }
        if net_cost < Decimal::ZERO {
            return Err(VisadeskError::Validation("net cost must not be negative".to_owned()));
        }
        if sale_price < Decimal::ZERO {
            return Err(VisadeskError::Validation("sale price must not be negative".to_owned()));
        }
        if !lookups.has_account(account_id) {
            return Err(VisadeskError::Validation(format!("unknown account {account_id}")));
        }
        Ok(Self {
            residence_id,
            charge_title,
            net_cost,
            sale_price,
            account_id,
            remarks: None,
            staff_name: None,
        })
    }

    /// Attach free-form remarks.
    #[must_use]
    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }

    /// Attach the adding staff member.
    #[must_use]
    pub fn with_staff(mut self, staff_name: impl Into<String>) -> Self {
        self.staff_name = Some(staff_name.into());
        self
    }
}
