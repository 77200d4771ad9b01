//! Payment ledger entries
//!
//! A residence carries two disjoint payment streams: regular payments
//! (against the sale price and fees) and fine payments. The streams are
//! summed separately and must never be conflated; a case can be settled on
//! fees while still owing fines, and vice versa.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::lenient;

/// Backend `payment_type` discriminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentKind {
    /// Payment against the residence sale price
    Residence,
    /// Payment for a separately-charged Tawjeeh fee
    Tawjeeh,
    /// Payment for a separately-charged ILOE insurance fee
    Insurance,
    /// Payment against the ILOE insurance fine
    InsuranceFine,
    /// Payment against an e-visa-type fine
    Fine,
    /// Any type this engine does not recognize; treated as regular stream
    Other(String),
}

impl PaymentKind {
    /// Canonical backend spelling of this payment type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Residence => "residence",
            Self::Tawjeeh => "tawjeeh",
            Self::Insurance => "insurance",
            Self::InsuranceFine => "insurance_fine",
            Self::Fine => "fine",
            Self::Other(raw) => raw,
        }
    }

    /// Which of the two ledgers this entry reduces.
    #[must_use]
    pub const fn stream(&self) -> PaymentStream {
        match self {
            Self::Fine | Self::InsuranceFine => PaymentStream::Fine,
            Self::Residence | Self::Tawjeeh | Self::Insurance | Self::Other(_) => {
                PaymentStream::Regular
            }
        }
    }
}

impl From<String> for PaymentKind {
    fn from(raw: String) -> Self {
        match raw.trim() {
            "residence" => Self::Residence,
            "tawjeeh" => Self::Tawjeeh,
            "insurance" => Self::Insurance,
            "insurance_fine" => Self::InsuranceFine,
            "fine" => Self::Fine,
            _ => Self::Other(raw),
        }
    }
}

impl From<PaymentKind> for String {
    fn from(kind: PaymentKind) -> Self {
        kind.as_str().to_owned()
    }
}

/// The two independent ledgers of a residence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStream {
    /// Against sale price and fee charges
    Regular,
    /// Against fines only
    Fine,
}

/// One ledger entry reducing a residence's outstanding balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Amount paid.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub amount: Decimal,

    /// Currency the payment was taken in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_name: Option<String>,

    /// Backend payment type; determines the stream.
    pub payment_type: PaymentKind,

    /// Account the payment was booked to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,

    /// Staff member who took the payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_name: Option<String>,

    /// Free-form remarks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,

    /// Date the payment was taken.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
}

impl Payment {
    /// Which ledger this entry belongs to.
    #[must_use]
    pub const fn stream(&self) -> PaymentStream {
        self.payment_type.stream()
    }
}
