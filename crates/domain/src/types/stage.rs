//! Processing pipeline positions and step events
//!
//! A residence case moves through one of two pipelines. Mainland cases use
//! integer positions 0 through 10; freezone cases use string tokens with a
//! branch at eVisa submission (`"1a"`). Both shapes are carried by one tagged
//! [`ProcessingStage`] type so transition handling is exhaustive instead of
//! ad hoc string comparison.

use serde::{Deserialize, Serialize};

use crate::impl_token_conversions;
use crate::types::residence::CaseChannel;

/// Position in the mainland pipeline (backend `completedStep`, 0 through 10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MainlandStep {
    /// Step 0 - awaiting the initial payment
    PendingPayment,
    /// Step 1 - offer letter
    OfferLetter,
    /// Step 2 - insurance
    Insurance,
    /// Step 3 - labor card
    LaborCard,
    /// Step 4 - e-visa
    EVisa,
    /// Step 5 - change status
    ChangeStatus,
    /// Step 6 - medical
    Medical,
    /// Step 7 - Emirates ID
    EmiratesId,
    /// Step 8 - visa stamping
    VisaStamping,
    /// Step 9 - final review
    FinalReview,
    /// Step 10 - completed
    Completed,
}

impl MainlandStep {
    /// Backend step index (0 through 10).
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::PendingPayment => 0,
            Self::OfferLetter => 1,
            Self::Insurance => 2,
            Self::LaborCard => 3,
            Self::EVisa => 4,
            Self::ChangeStatus => 5,
            Self::Medical => 6,
            Self::EmiratesId => 7,
            Self::VisaStamping => 8,
            Self::FinalReview => 9,
            Self::Completed => 10,
        }
    }

    /// Step for a backend index, if in range.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::PendingPayment),
            1 => Some(Self::OfferLetter),
            2 => Some(Self::Insurance),
            3 => Some(Self::LaborCard),
            4 => Some(Self::EVisa),
            5 => Some(Self::ChangeStatus),
            6 => Some(Self::Medical),
            7 => Some(Self::EmiratesId),
            8 => Some(Self::VisaStamping),
            9 => Some(Self::FinalReview),
            10 => Some(Self::Completed),
            _ => None,
        }
    }

    /// Human-readable step label as shown on the task screens.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PendingPayment => "Pending Payment",
            Self::OfferLetter => "Offer Letter",
            Self::Insurance => "Insurance",
            Self::LaborCard => "Labor Card",
            Self::EVisa => "E-Visa",
            Self::ChangeStatus => "Change Status",
            Self::Medical => "Medical",
            Self::EmiratesId => "Emirates ID",
            Self::VisaStamping => "Visa Stamping",
            Self::FinalReview => "Final Review",
            Self::Completed => "Completed",
        }
    }
}

/// Position in the freezone pipeline (backend step tokens).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FreezoneStage {
    /// Token "1" - eVisa draft, may be edited and resubmitted
    EVisaDraft,
    /// Token "1a" - eVisa submitted, awaiting approve/reject
    EVisaSubmitted,
    /// Token "2" - change status
    ChangeStatus,
    /// Token "3" - medical
    Medical,
    /// Token "4" - Emirates ID
    EmiratesId,
    /// Token "5" - visa stamping
    VisaStamping,
    /// Token "6" - completed
    Completed,
}

impl_token_conversions!(FreezoneStage {
    EVisaDraft => "1",
    EVisaSubmitted => "1a",
    ChangeStatus => "2",
    Medical => "3",
    EmiratesId => "4",
    VisaStamping => "5",
    Completed => "6",
});

impl FreezoneStage {
    /// Human-readable stage label as shown on the freezone task screens.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EVisaDraft => "eVisa",
            Self::EVisaSubmitted => "eVisa Submitted",
            Self::ChangeStatus => "Change Status",
            Self::Medical => "Medical",
            Self::EmiratesId => "Emirates ID",
            Self::VisaStamping => "Visa Stamping",
            Self::Completed => "Completed",
        }
    }
}

/// Pipeline position of a residence case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "pipeline", content = "step", rename_all = "lowercase")]
pub enum ProcessingStage {
    /// Mainland (inside) pipeline position
    Mainland(MainlandStep),
    /// Freezone (outside) pipeline position
    Freezone(FreezoneStage),
}

impl ProcessingStage {
    /// Parse a raw backend step token for the given channel.
    ///
    /// Tolerant by design: an unparsable token degrades to the pipeline
    /// start, and a mainland index past the end counts as completed. Display
    /// code renders whatever the backend stored; it never errors here.
    #[must_use]
    pub fn parse(channel: CaseChannel, raw: &str) -> Self {
        match channel {
            CaseChannel::Mainland => {
                let step = raw.trim().parse::<u8>().map_or(MainlandStep::PendingPayment, |n| {
                    MainlandStep::from_index(n).unwrap_or(MainlandStep::Completed)
                });
                Self::Mainland(step)
            }
            CaseChannel::Freezone => {
                let stage = raw.trim().parse().unwrap_or(FreezoneStage::EVisaDraft);
                Self::Freezone(stage)
            }
        }
    }

    /// Backend token for this position (`"6"` style for mainland indices,
    /// freezone tokens as-is).
    #[must_use]
    pub fn token(self) -> String {
        match self {
            Self::Mainland(step) => step.index().to_string(),
            Self::Freezone(stage) => stage.to_string(),
        }
    }

    /// Channel this position belongs to.
    #[must_use]
    pub const fn channel(self) -> CaseChannel {
        match self {
            Self::Mainland(_) => CaseChannel::Mainland,
            Self::Freezone(_) => CaseChannel::Freezone,
        }
    }

    /// Human-readable label for this position.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mainland(step) => step.label(),
            Self::Freezone(stage) => stage.label(),
        }
    }

    /// Whether this is the last position of its pipeline.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Mainland(MainlandStep::Completed) | Self::Freezone(FreezoneStage::Completed)
        )
    }
}

/// Step-change event sent by the external task screens.
///
/// Mainland steps each have a single completion event; the freezone pipeline
/// adds the eVisa submit/approve/reject branch. Completion events from Change
/// Status onward are shared by both pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StepEvent {
    /// Initial payment received (mainland 0 -> 1)
    ConfirmPayment,
    /// Offer letter issued (mainland 1 -> 2)
    CompleteOfferLetter,
    /// Insurance arranged (mainland 2 -> 3)
    CompleteInsurance,
    /// Labor card issued (mainland 3 -> 4)
    CompleteLaborCard,
    /// E-visa issued (mainland 4 -> 5)
    CompleteEVisa,
    /// Status change done (mainland 5 -> 6, freezone "2" -> "3")
    CompleteChangeStatus,
    /// Medical completed (mainland 6 -> 7, freezone "3" -> "4")
    CompleteMedical,
    /// Emirates ID issued (mainland 7 -> 8, freezone "4" -> "5")
    CompleteEmiratesId,
    /// Visa stamped (mainland 8 -> 9, freezone "5" -> "6")
    CompleteVisaStamping,
    /// Final review passed (mainland 9 -> 10)
    CompleteFinalReview,
    /// eVisa draft submitted (freezone "1" -> "1a")
    SubmitEVisa,
    /// Submitted eVisa accepted (freezone "1a" -> "2")
    ApproveEVisa,
    /// Submitted eVisa rejected back to draft (freezone "1a" -> "1")
    RejectEVisa,
}

impl_token_conversions!(StepEvent {
    ConfirmPayment => "confirmPayment",
    CompleteOfferLetter => "completeOfferLetter",
    CompleteInsurance => "completeInsurance",
    CompleteLaborCard => "completeLaborCard",
    CompleteEVisa => "completeEVisa",
    CompleteChangeStatus => "completeChangeStatus",
    CompleteMedical => "completeMedical",
    CompleteEmiratesId => "completeEmiratesId",
    CompleteVisaStamping => "completeVisaStamping",
    CompleteFinalReview => "completeFinalReview",
    SubmitEVisa => "submitEVisa",
    ApproveEVisa => "approveEVisa",
    RejectEVisa => "rejectEVisa",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mainland_indices_round_trip() {
        for index in 0..=10 {
            let step = MainlandStep::from_index(index).unwrap();
            assert_eq!(step.index(), index);
        }
        assert!(MainlandStep::from_index(11).is_none());
    }

    #[test]
    fn freezone_tokens_round_trip() {
        for token in ["1", "1a", "2", "3", "4", "5", "6"] {
            let stage: FreezoneStage = token.parse().unwrap();
            assert_eq!(stage.to_string(), token);
        }
    }

    #[test]
    fn parse_mainland_step_from_raw_token() {
        let stage = ProcessingStage::parse(CaseChannel::Mainland, "6");
        assert_eq!(stage, ProcessingStage::Mainland(MainlandStep::Medical));
        assert_eq!(stage.label(), "Medical");
    }

    #[test]
    fn parse_degrades_garbage_to_pipeline_start() {
        assert_eq!(
            ProcessingStage::parse(CaseChannel::Mainland, "???"),
            ProcessingStage::Mainland(MainlandStep::PendingPayment)
        );
        assert_eq!(
            ProcessingStage::parse(CaseChannel::Freezone, ""),
            ProcessingStage::Freezone(FreezoneStage::EVisaDraft)
        );
    }

    #[test]
    fn parse_clamps_out_of_range_mainland_index() {
        assert_eq!(
            ProcessingStage::parse(CaseChannel::Mainland, "14"),
            ProcessingStage::Mainland(MainlandStep::Completed)
        );
    }

    #[test]
    fn terminal_positions() {
        assert!(ProcessingStage::Mainland(MainlandStep::Completed).is_terminal());
        assert!(ProcessingStage::Freezone(FreezoneStage::Completed).is_terminal());
        assert!(!ProcessingStage::Freezone(FreezoneStage::VisaStamping).is_terminal());
    }

    #[test]
    fn stage_tokens_match_backend_shape() {
        assert_eq!(ProcessingStage::Mainland(MainlandStep::EVisa).token(), "4");
        assert_eq!(ProcessingStage::Freezone(FreezoneStage::EVisaSubmitted).token(), "1a");
    }

    #[test]
    fn event_tokens_parse() {
        assert_eq!("approveEVisa".parse::<StepEvent>().unwrap(), StepEvent::ApproveEVisa);
        assert!("approveevisa".parse::<StepEvent>().is_err());
    }
}
