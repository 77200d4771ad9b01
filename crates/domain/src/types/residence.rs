//! Residence case snapshot
//!
//! Field names mirror the backend payload (a mix of camelCase and
//! snake_case that predates this engine); serde renames keep the wire shape
//! stable while the Rust side stays uniform.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::impl_token_conversions;
use crate::types::stage::ProcessingStage;
use crate::utils::lenient;

/// Which pipeline a case is processed through (backend `insideOutside`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseChannel {
    /// Mainland processing ("inside")
    #[serde(rename = "inside")]
    Mainland,
    /// Freezone processing ("outside")
    #[serde(rename = "outside")]
    Freezone,
}

impl_token_conversions!(CaseChannel {
    Mainland => "inside",
    Freezone => "outside",
});

/// Lifecycle status of a case, orthogonal to its pipeline position.
///
/// Cancellation is an overlay, not a pipeline step: when a case enters the
/// cancelled family its position freezes and forward-progress actions are
/// withheld, but the stored step token is untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CaseStatus {
    /// Case is being processed normally
    Active,
    /// Case was cancelled
    Cancelled,
    /// Case was replaced by another residence
    Replaced,
    /// Case was cancelled and a replacement opened
    CancelledAndReplaced,
    /// Any status string this engine does not recognize; kept verbatim and
    /// treated as non-blocking (tolerant-input rule)
    Other(String),
}

impl CaseStatus {
    /// Whether this status freezes the pipeline (no forward transitions).
    #[must_use]
    pub const fn halts_pipeline(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Replaced | Self::CancelledAndReplaced)
    }

    /// Canonical backend spelling of this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "Active",
            Self::Cancelled => "Cancelled",
            Self::Replaced => "Replaced",
            Self::CancelledAndReplaced => "Cancelled & Replaced",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for CaseStatus {
    fn from(raw: String) -> Self {
        match raw.trim() {
            "Active" => Self::Active,
            "Cancelled" => Self::Cancelled,
            "Replaced" => Self::Replaced,
            "Cancelled & Replaced" => Self::CancelledAndReplaced,
            _ => Self::Other(raw),
        }
    }
}

impl From<CaseStatus> for String {
    fn from(status: CaseStatus) -> Self {
        status.as_str().to_owned()
    }
}

impl Default for CaseStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// One visa/residence case as fetched from the backend.
///
/// The engine reads these snapshots and computes over them; it never
/// persists. All monetary fields use the lenient deserializers: a malformed
/// value degrades to zero (or absent) rather than failing the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Residence {
    /// Unique, immutable case identifier.
    #[serde(rename = "residenceID")]
    pub residence_id: i64,

    /// Mainland or freezone processing.
    #[serde(rename = "insideOutside")]
    pub channel: CaseChannel,

    /// Lifecycle status overlay.
    #[serde(default)]
    pub current_status: CaseStatus,

    /// Raw pipeline position token: a 0-10 index for mainland cases, a
    /// `"1"`/`"1a"`/…/`"6"` token for freezone cases. The backend emits
    /// mainland indices as bare integers. Use [`Self::stage`] for the typed
    /// view.
    #[serde(rename = "completedStep", default, deserialize_with = "lenient::token")]
    pub completed_step: String,

    /// Agreed sale price in the sale currency.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub sale_price: Decimal,

    /// Currency the sale price was agreed in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_currency_name: Option<String>,

    /// Whether the Tawjeeh fee is bundled into the sale price.
    #[serde(
        rename = "tawjeehIncluded",
        default = "lenient::bundled",
        deserialize_with = "lenient::flag_on"
    )]
    pub tawjeeh_included: bool,

    /// Explicit Tawjeeh amount when charged separately.
    #[serde(default, deserialize_with = "lenient::decimal_opt")]
    pub tawjeeh_amount: Option<Decimal>,

    /// Whether ILOE insurance is bundled into the sale price.
    #[serde(
        rename = "insuranceIncluded",
        default = "lenient::bundled",
        deserialize_with = "lenient::flag_on"
    )]
    pub insurance_included: bool,

    /// Explicit insurance amount when charged separately.
    #[serde(rename = "insuranceAmount", default, deserialize_with = "lenient::decimal_opt")]
    pub insurance_amount: Option<Decimal>,

    /// ILOE-specific fine, edited together with the insurance toggle.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub iloe_fine: Decimal,

    /// Backend aggregate of e-visa-type fines, when the join supplied it.
    #[serde(rename = "total_Fine", default, deserialize_with = "lenient::decimal_opt")]
    pub total_fine: Option<Decimal>,

    /// Older alias of [`Self::total_fine`] still emitted by some list
    /// endpoints.
    #[serde(default, deserialize_with = "lenient::decimal_opt")]
    pub fine: Option<Decimal>,

    /// Backend aggregate of fine-stream payments.
    #[serde(rename = "totalFinePaid", default, deserialize_with = "lenient::decimal_opt")]
    pub total_fine_paid: Option<Decimal>,

    /// Backend aggregate of Tawjeeh charges already invoiced, when present.
    #[serde(default, deserialize_with = "lenient::decimal_opt")]
    pub tawjeeh_charges: Option<Decimal>,

    /// Backend aggregate of ILOE charges already invoiced, when present.
    #[serde(default, deserialize_with = "lenient::decimal_opt")]
    pub iloe_charges: Option<Decimal>,

    /// Backend aggregate of custom charge sale prices.
    #[serde(default, deserialize_with = "lenient::decimal_opt")]
    pub custom_charges_total: Option<Decimal>,

    /// Charges applied on cancellation, if any.
    #[serde(default, deserialize_with = "lenient::decimal_opt")]
    pub cancellation_charges: Option<Decimal>,

    /// Backend aggregate of regular-stream payments.
    #[serde(default, deserialize_with = "lenient::decimal_opt")]
    pub total_paid: Option<Decimal>,
}

impl Residence {
    /// Minimal snapshot at the start of the given pipeline; used when
    /// composing fixtures and previews. All amounts start at zero.
    #[must_use]
    pub fn new(residence_id: i64, channel: CaseChannel) -> Self {
        let mut residence = Self {
            residence_id,
            channel,
            current_status: CaseStatus::Active,
            completed_step: String::new(),
            sale_price: Decimal::ZERO,
            sale_currency_name: None,
            tawjeeh_included: true,
            tawjeeh_amount: None,
            insurance_included: true,
            insurance_amount: None,
            iloe_fine: Decimal::ZERO,
            total_fine: None,
            fine: None,
            total_fine_paid: None,
            tawjeeh_charges: None,
            iloe_charges: None,
            custom_charges_total: None,
            cancellation_charges: None,
            total_paid: None,
        };
        residence.set_stage(ProcessingStage::parse(channel, ""));
        residence
    }

    /// Typed pipeline position parsed from the raw step token.
    #[must_use]
    pub fn stage(&self) -> ProcessingStage {
        ProcessingStage::parse(self.channel, &self.completed_step)
    }

    /// Write back a pipeline position as the backend token, keeping the
    /// channel consistent with the stage's pipeline.
    pub fn set_stage(&mut self, stage: ProcessingStage) {
        self.channel = stage.channel();
        self.completed_step = stage.token();
    }
}
