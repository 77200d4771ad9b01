//! Port interfaces for case data access

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use visadesk_domain::{CustomCharge, Fine, Payment, Residence, Result};

/// Everything the engine needs to know about one case, fetched together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseSnapshot {
    /// The residence record.
    pub residence: Residence,
    /// Fine records, possibly empty when only aggregates were joined.
    #[serde(default)]
    pub fines: Vec<Fine>,
    /// Custom charge records.
    #[serde(default)]
    pub custom_charges: Vec<CustomCharge>,
    /// Payment records across both streams.
    #[serde(default)]
    pub payments: Vec<Payment>,
}

/// Trait for fetching a fresh case snapshot from the backend.
///
/// Implementations must return the current backend state on every call.
/// Consumers deliberately refetch rather than reuse an earlier snapshot:
/// two mutations racing on the same residence must never leave a total
/// computed from a stale, partially-updated copy.
#[async_trait]
pub trait CaseSnapshotSource: Send + Sync {
    /// Fetch the snapshot for a residence.
    ///
    /// # Errors
    ///
    /// `NotFound` when the residence does not exist; transport failures map
    /// to `Internal`.
    async fn fetch_case(&self, residence_id: i64) -> Result<CaseSnapshot>;
}
