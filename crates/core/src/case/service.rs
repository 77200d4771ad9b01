//! Case service - the engine's facade for the UI layer

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use visadesk_domain::{FamilyResidence, ProcessingStage, Residence, Result, StepEvent};

use super::ports::{CaseSnapshot, CaseSnapshotSource};
use crate::ledger::{LedgerEngine, LedgerTotals};
use crate::workflow;

/// Everything a detail or list screen needs to render one case:
/// the totals, the pipeline position, and which action buttons to enable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseView {
    /// The (possibly just advanced) residence record.
    pub residence: Residence,
    /// Typed pipeline position.
    pub stage: ProcessingStage,
    /// Human-readable position label.
    pub stage_label: String,
    /// Invoice and payment totals.
    pub totals: LedgerTotals,
    /// Regular-stream collection progress, 0 to 100.
    pub progress_percent: Decimal,
    /// Events the task screens may offer next.
    pub legal_events: Vec<StepEvent>,
    /// Whether forward transitions are possible at all.
    pub can_advance: bool,
    /// Whether the case finished its pipeline.
    pub is_terminal: bool,
}

/// Facade combining the state machine and the ledger engine over fresh
/// snapshots.
///
/// Every operation refetches the case before computing; the service holds no
/// case state between calls and is safe to share across concurrent UI
/// refreshes.
pub struct CaseService {
    snapshots: Arc<dyn CaseSnapshotSource>,
    engine: LedgerEngine,
}

impl CaseService {
    /// Service over the given snapshot source with default fee fallbacks.
    #[must_use]
    pub fn new(snapshots: Arc<dyn CaseSnapshotSource>) -> Self {
        Self { snapshots, engine: LedgerEngine::default() }
    }

    /// Override the ledger engine (custom fee defaults).
    #[must_use]
    pub const fn with_engine(mut self, engine: LedgerEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Render the current state of a case.
    ///
    /// # Errors
    ///
    /// Propagates snapshot-source errors (`NotFound`, `Internal`).
    pub async fn view(&self, residence_id: i64) -> Result<CaseView> {
        let snapshot = self.snapshots.fetch_case(residence_id).await?;
        Ok(self.render(snapshot))
    }

    /// Apply a step-change event against a freshly fetched snapshot and
    /// render the result.
    ///
    /// The advanced residence is returned inside the view for the caller to
    /// persist; the engine itself writes nothing.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` when the event is not legal for the case's
    /// current position or status, plus any snapshot-source error.
    pub async fn advance(&self, residence_id: i64, event: StepEvent) -> Result<CaseView> {
        let snapshot = self.snapshots.fetch_case(residence_id).await?;

        let advanced = match workflow::advance(&snapshot.residence, event) {
            Ok(residence) => residence,
            Err(err) => {
                warn!(residence_id, event = %event, error = %err, "step change rejected");
                return Err(err);
            }
        };

        Ok(self.render(CaseSnapshot { residence: advanced, ..snapshot }))
    }

    /// Simplified totals for a dependent case.
    #[must_use]
    pub fn family_view(&self, family: &FamilyResidence) -> LedgerTotals {
        self.engine.compute_family(family)
    }

    fn render(&self, snapshot: CaseSnapshot) -> CaseView {
        let CaseSnapshot { residence, fines, custom_charges, payments } = snapshot;

        let totals = self.engine.compute(&residence, &fines, &custom_charges, &payments);
        let stage = residence.stage();

        debug!(
            residence_id = residence.residence_id,
            step = %stage.token(),
            remaining = %totals.total_remaining,
            "case rendered"
        );

        CaseView {
            stage,
            stage_label: stage.label().to_owned(),
            progress_percent: totals.payment_progress_percent(),
            legal_events: workflow::legal_events(&residence),
            can_advance: workflow::can_advance(&residence),
            is_terminal: stage.is_terminal(),
            totals,
            residence,
        }
    }
}
