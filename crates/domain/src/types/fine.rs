//! E-visa-type fine records

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::lenient;

/// A penalty charge raised against a residence, independent of the ILOE
/// fine field on the case itself. A residence may carry any number of these;
/// their sum feeds the outstanding balance when the backend has not supplied
/// a precomputed aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fine {
    /// Unique fine identifier.
    #[serde(rename = "residenceFineID")]
    pub residence_fine_id: i64,

    /// Case this fine belongs to.
    #[serde(rename = "residenceID")]
    pub residence_id: i64,

    /// Fine amount; edit-only after creation together with account/currency.
    #[serde(rename = "fineAmount", default, deserialize_with = "lenient::decimal")]
    pub fine_amount: Decimal,

    /// Account the fine was booked against.
    #[serde(rename = "accountID")]
    pub account_id: i64,

    /// Optional currency override.
    #[serde(rename = "currencyID", default, skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<i64>,

    /// Date the fine was raised.
    #[serde(rename = "residenceFineDate", default, skip_serializing_if = "Option::is_none")]
    pub fine_date: Option<NaiveDate>,

    /// Staff member who recorded the fine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_name: Option<String>,

    /// Supporting document, if one was attached.
    #[serde(rename = "docName", default, skip_serializing_if = "Option::is_none")]
    pub doc_name: Option<String>,
}
