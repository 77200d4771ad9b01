//! Fee toggle commands
//!
//! A toggle set to "included" means the fee is bundled into the sale price
//! and adds no separate line item; switched off, the fee is billed
//! separately at the given amount. The insurance screen historically edits
//! the ILOE fine alongside the toggle, so that command carries both - two
//! independent fields updated together, never one computed from the other.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use visadesk_domain::{Result, VisadeskError};

fn require_fee_amount(fee: &str, included: bool, amount: Option<Decimal>) -> Result<()> {
    if included {
        return Ok(());
    }
    match amount {
        None => Err(VisadeskError::Validation(format!(
            "{fee} amount is required when the fee is not bundled"
        ))),
        Some(amount) if amount < Decimal::ZERO => {
            Err(VisadeskError::Validation(format!("{fee} amount must not be negative")))
        }
        Some(_) => Ok(()),
    }
}

/// Toggle the Tawjeeh fee between bundled and separately charged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TawjeehUpdate {
    /// Case being updated.
    #[serde(rename = "residenceID")]
    pub residence_id: i64,
    /// Whether the fee is bundled into the sale price.
    #[serde(rename = "tawjeehIncluded")]
    pub included: bool,
    /// Separate charge amount; required when not bundled.
    #[serde(rename = "tawjeeh_amount", skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
}

impl TawjeehUpdate {
    /// Validated toggle update.
    ///
    /// # Errors
    ///
    /// `Validation` when the fee is not bundled and the amount is missing or
    /// negative.
    pub fn new(residence_id: i64, included: bool, amount: Option<Decimal>) -> Result<Self> {
        require_fee_amount("tawjeeh", included, amount)?;
        Ok(Self { residence_id, included, amount })
    }
}

/// Toggle the ILOE insurance fee, optionally updating the ILOE fine with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceUpdate {
    /// Case being updated.
    #[serde(rename = "residenceID")]
    pub residence_id: i64,
    /// Whether the fee is bundled into the sale price.
    #[serde(rename = "insuranceIncluded")]
    pub included: bool,
    /// Separate charge amount; required when not bundled.
    #[serde(rename = "insuranceAmount", skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    /// New ILOE fine value, when the screen edited it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iloe_fine: Option<Decimal>,
    /// Remarks accompanying a fine edit.
    #[serde(rename = "fineRemarks", skip_serializing_if = "Option::is_none")]
    pub fine_remarks: Option<String>,
}

impl InsuranceUpdate {
    /// Validated toggle update.
    ///
    /// # Errors
    ///
    /// `Validation` when the fee is not bundled and the amount is missing or
    /// negative, or when the fine value is negative.
    pub fn new(
        residence_id: i64,
        included: bool,
        amount: Option<Decimal>,
        iloe_fine: Option<Decimal>,
        fine_remarks: Option<String>,
    ) -> Result<Self> {
        require_fee_amount("insurance", included, amount)?;
        if iloe_fine.is_some_and(|fine| fine < Decimal::ZERO) {
            return Err(VisadeskError::Validation(
                "ILOE fine must not be negative".to_owned(),
            ));
        }
        Ok(Self { residence_id, included, amount, iloe_fine, fine_remarks })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn bundled_toggle_needs_no_amount() {
        let update = TawjeehUpdate::new(4120, true, None).unwrap();
        assert_eq!(update.amount, None);
    }

    #[test]
    fn unbundled_toggle_requires_an_amount() {
        let result = TawjeehUpdate::new(4120, false, None);
        assert!(matches!(result, Err(VisadeskError::Validation(_))));

        let update = TawjeehUpdate::new(4120, false, Some(dec!(150))).unwrap();
        assert_eq!(update.amount, Some(dec!(150)));
    }

    #[test]
    fn negative_amount_is_rejected() {
        let result = TawjeehUpdate::new(4120, false, Some(dec!(-1)));
        assert!(matches!(result, Err(VisadeskError::Validation(_))));
    }

    #[test]
    fn zero_amount_is_allowed() {
        // A fee can be explicitly waived without bundling it
        assert!(TawjeehUpdate::new(4120, false, Some(Decimal::ZERO)).is_ok());
    }

    #[test]
    fn insurance_update_carries_fine_and_remarks_independently() {
        let update = InsuranceUpdate::new(
            4120,
            false,
            Some(dec!(126)),
            Some(dec!(40)),
            Some("late renewal".to_owned()),
        )
        .unwrap();
        assert_eq!(update.iloe_fine, Some(dec!(40)));
        assert_eq!(update.fine_remarks.as_deref(), Some("late renewal"));
    }

    #[test]
    fn negative_iloe_fine_is_rejected() {
        let result = InsuranceUpdate::new(4120, true, None, Some(dec!(-5)), None);
        assert!(matches!(result, Err(VisadeskError::Validation(_))));
    }
}
