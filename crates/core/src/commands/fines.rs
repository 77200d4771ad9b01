//! Fine mutation commands

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use visadesk_domain::{LookupTables, Result, VisadeskError};

fn check_fine_fields(
    amount: Decimal,
    account_id: i64,
    currency_id: Option<i64>,
    lookups: &LookupTables,
) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(VisadeskError::Validation("fine amount must be greater than zero".to_owned()));
    }
    if !lookups.has_account(account_id) {
        return Err(VisadeskError::Validation(format!("unknown account {account_id}")));
    }
    if let Some(currency_id) = currency_id {
        if !lookups.has_currency(currency_id) {
            return Err(VisadeskError::Validation(format!("unknown currency {currency_id}")));
        }
    }
    Ok(())
}

/// Raise a new fine against a residence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddFine {
    /// Case the fine is raised against.
    #[serde(rename = "residenceID")]
    pub residence_id: i64,
    /// Fine amount; must be positive.
    #[serde(rename = "fineAmount")]
    pub fine_amount: Decimal,
    /// Account the fine is booked to.
    #[serde(rename = "accountID")]
    pub account_id: i64,
    /// Optional currency override.
    #[serde(rename = "currencyID", skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<i64>,
    /// Date the fine was raised.
    #[serde(rename = "residenceFineDate", skip_serializing_if = "Option::is_none")]
    pub fine_date: Option<NaiveDate>,
    /// Staff member recording the fine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_name: Option<String>,
}

impl AddFine {
    /// Validated fine creation.
    ///
    /// # Errors
    ///
    /// `Validation` when the amount is not positive, the account is unknown,
    /// or a supplied currency is unknown.
    pub fn new(
        residence_id: i64,
        fine_amount: Decimal,
        account_id: i64,
        currency_id: Option<i64>,
        lookups: &LookupTables,
    ) -> Result<Self> {
        check_fine_fields(fine_amount, account_id, currency_id, lookups)?;
        Ok(Self {
            residence_id,
            fine_amount,
            account_id,
            currency_id,
            fine_date: None,
            staff_name: None,
        })
    }

    /// Attach the date the fine was raised.
    #[must_use]
    pub const fn with_date(mut self, fine_date: NaiveDate) -> Self {
        self.fine_date = Some(fine_date);
        self
    }

    /// Attach the recording staff member.
    #[must_use]
    pub fn with_staff(mut self, staff_name: impl Into<String>) -> Self {
        self.staff_name = Some(staff_name.into());
        self
    }
}

/// Edit an existing fine. Only amount, account, and currency are mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateFine {
    /// Fine being edited.
    #[serde(rename = "residenceFineID")]
    pub residence_fine_id: i64,
    /// New amount; must be positive.
    #[serde(rename = "fineAmount")]
    pub fine_amount: Decimal,
    /// New booking account.
    #[serde(rename = "accountID")]
    pub account_id: i64,
    /// New currency override.
    #[serde(rename = "currencyID", skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<i64>,
}

impl UpdateFine {
    /// Validated fine edit.
    ///
    /// # Errors
    ///
    /// Same rules as [`AddFine::new`].
    pub fn new(
        residence_fine_id: i64,
        fine_amount: Decimal,
        account_id: i64,
        currency_id: Option<i64>,
        lookups: &LookupTables,
    ) -> Result<Self> {
        check_fine_fields(fine_amount, account_id, currency_id, lookups)?;
        Ok(Self { residence_fine_id, fine_amount, account_id, currency_id })
    }
}

/// Remove a fine from a residence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteFine {
    /// Fine being removed.
    #[serde(rename = "residenceFineID")]
    pub residence_fine_id: i64,
}

impl DeleteFine {
    /// Deletion command for the given fine.
    #[must_use]
    pub const fn new(residence_fine_id: i64) -> Self {
        Self { residence_fine_id }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use visadesk_domain::{Account, Currency};

    use super::*;

    fn lookups() -> LookupTables {
        LookupTables {
            accounts: vec![Account { account_id: 3, account_name: "Cash".to_owned() }],
            currencies: vec![Currency { currency_id: 1, currency_name: "AED".to_owned() }],
        }
    }

    #[test]
    fn add_fine_happy_path() {
        let command = AddFine::new(4120, dec!(200), 3, Some(1), &lookups())
            .unwrap()
            .with_staff("Aisha");
        assert_eq!(command.fine_amount, dec!(200));
        assert_eq!(command.staff_name.as_deref(), Some("Aisha"));
    }

    #[test]
    fn add_fine_rejects_non_positive_amounts() {
        for amount in [Decimal::ZERO, dec!(-10)] {
            let result = AddFine::new(4120, amount, 3, None, &lookups());
            assert!(matches!(result, Err(VisadeskError::Validation(_))));
        }
    }

    #[test]
    fn add_fine_rejects_unknown_account() {
        let result = AddFine::new(4120, dec!(200), 99, None, &lookups());
        assert!(matches!(result, Err(VisadeskError::Validation(_))));
    }

    #[test]
    fn add_fine_currency_is_optional_but_checked() {
        assert!(AddFine::new(4120, dec!(200), 3, None, &lookups()).is_ok());
        let result = AddFine::new(4120, dec!(200), 3, Some(9), &lookups());
        assert!(matches!(result, Err(VisadeskError::Validation(_))));
    }

    #[test]
    fn update_fine_applies_the_same_rules() {
        assert!(UpdateFine::new(9, dec!(250), 3, Some(1), &lookups()).is_ok());
        let result = UpdateFine::new(9, Decimal::ZERO, 3, None, &lookups());
        assert!(matches!(result, Err(VisadeskError::Validation(_))));
    }
}
