//! Transition rules for the two processing pipelines
//!
//! The transition table is the single source of truth for which step-change
//! events the task screens may send from each position. Illegal events are
//! rejected synchronously with no partial mutation; there is no retry inside
//! the engine.

use tracing::debug;
use visadesk_domain::types::stage::{FreezoneStage, MainlandStep};
use visadesk_domain::{ProcessingStage, Residence, Result, StepEvent, VisadeskError};

/// Whether the case may move forward at all.
///
/// Cancellation is an overlay, not a pipeline step: a cancelled or replaced
/// case keeps its stored position but accepts no forward events.
#[must_use]
pub fn can_advance(residence: &Residence) -> bool {
    !residence.current_status.halts_pipeline()
}

/// Target position for an event, if the event is legal at the given stage.
const fn next_stage(stage: ProcessingStage, event: StepEvent) -> Option<ProcessingStage> {
    use StepEvent as E;

    match stage {
        ProcessingStage::Mainland(step) => {
            use MainlandStep as M;
            let next = match (step, event) {
                (M::PendingPayment, E::ConfirmPayment) => M::OfferLetter,
                (M::OfferLetter, E::CompleteOfferLetter) => M::Insurance,
                (M::Insurance, E::CompleteInsurance) => M::LaborCard,
                (M::LaborCard, E::CompleteLaborCard) => M::EVisa,
                (M::EVisa, E::CompleteEVisa) => M::ChangeStatus,
                (M::ChangeStatus, E::CompleteChangeStatus) => M::Medical,
                (M::Medical, E::CompleteMedical) => M::EmiratesId,
                (M::EmiratesId, E::CompleteEmiratesId) => M::VisaStamping,
                (M::VisaStamping, E::CompleteVisaStamping) => M::FinalReview,
                (M::FinalReview, E::CompleteFinalReview) => M::Completed,
                _ => return None,
            };
            Some(ProcessingStage::Mainland(next))
        }
        ProcessingStage::Freezone(position) => {
            use FreezoneStage as F;
            let next = match (position, event) {
                (F::EVisaDraft, E::SubmitEVisa) => F::EVisaSubmitted,
                (F::EVisaSubmitted, E::ApproveEVisa) => F::ChangeStatus,
                (F::EVisaSubmitted, E::RejectEVisa) => F::EVisaDraft,
                (F::ChangeStatus, E::CompleteChangeStatus) => F::Medical,
                (F::Medical, E::CompleteMedical) => F::EmiratesId,
                (F::EmiratesId, E::CompleteEmiratesId) => F::VisaStamping,
                (F::VisaStamping, E::CompleteVisaStamping) => F::Completed,
                _ => return None,
            };
            Some(ProcessingStage::Freezone(next))
        }
    }
}

/// Apply a step-change event to a case snapshot.
///
/// Returns a new snapshot with the position advanced (the raw step token is
/// rewritten so list views stay consistent). The input is never mutated.
///
/// # Errors
///
/// [`VisadeskError::InvalidTransition`] when the case's status freezes the
/// pipeline, when the case is already at its terminal position, or when the
/// event is not legal at the current position.
pub fn advance(residence: &Residence, event: StepEvent) -> Result<Residence> {
    if !can_advance(residence) {
        return Err(VisadeskError::InvalidTransition(format!(
            "case {} is {} and accepts no step changes",
            residence.residence_id,
            residence.current_status.as_str()
        )));
    }

    let stage = residence.stage();
    let Some(next) = next_stage(stage, event) else {
        return Err(VisadeskError::InvalidTransition(format!(
            "event {event} is not legal at step {} ({})",
            stage.token(),
            stage.label()
        )));
    };

    debug!(
        residence_id = residence.residence_id,
        from = %stage.token(),
        to = %next.token(),
        event = %event,
        "step advanced"
    );

    let mut updated = residence.clone();
    updated.set_stage(next);
    Ok(updated)
}

/// Events the task screens may offer for this case, in pipeline order.
///
/// Empty when the case is frozen by its status or already at its terminal
/// position; the UI disables all forward-progress actions in both cases.
#[must_use]
pub fn legal_events(residence: &Residence) -> Vec<StepEvent> {
    use StepEvent as E;

    if !can_advance(residence) {
        return Vec::new();
    }

    match residence.stage() {
        ProcessingStage::Mainland(step) => {
            use MainlandStep as M;
            match step {
                M::PendingPayment => vec![E::ConfirmPayment],
                M::OfferLetter => vec![E::CompleteOfferLetter],
                M::Insurance => vec![E::CompleteInsurance],
                M::LaborCard => vec![E::CompleteLaborCard],
                M::EVisa => vec![E::CompleteEVisa],
                M::ChangeStatus => vec![E::CompleteChangeStatus],
                M::Medical => vec![E::CompleteMedical],
                M::EmiratesId => vec![E::CompleteEmiratesId],
                M::VisaStamping => vec![E::CompleteVisaStamping],
                M::FinalReview => vec![E::CompleteFinalReview],
                M::Completed => Vec::new(),
            }
        }
        ProcessingStage::Freezone(position) => {
            use FreezoneStage as F;
            match position {
                F::EVisaDraft => vec![E::SubmitEVisa],
                F::EVisaSubmitted => vec![E::ApproveEVisa, E::RejectEVisa],
                F::ChangeStatus => vec![E::CompleteChangeStatus],
                F::Medical => vec![E::CompleteMedical],
                F::EmiratesId => vec![E::CompleteEmiratesId],
                F::VisaStamping => vec![E::CompleteVisaStamping],
                F::Completed => Vec::new(),
            }
        }
    }
}
