//! Mock snapshot source for testing
//!
//! In-memory implementation of the snapshot port, enabling deterministic
//! service tests without a backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use visadesk_core::{CaseSnapshot, CaseSnapshotSource};
use visadesk_domain::{Result as DomainResult, VisadeskError};

/// In-memory mock for `CaseSnapshotSource`.
///
/// Stores a fixed set of snapshots keyed by residence id and counts fetches
/// so tests can assert that the service refetches on every call.
#[derive(Default)]
pub struct MockCaseSnapshotSource {
    cases: Mutex<HashMap<i64, CaseSnapshot>>,
    fetches: AtomicUsize,
}

impl MockCaseSnapshotSource {
    /// Create a new mock seeded with the provided snapshots.
    pub fn new(snapshots: Vec<CaseSnapshot>) -> Self {
        let cases = snapshots
            .into_iter()
            .map(|snapshot| (snapshot.residence.residence_id, snapshot))
            .collect();
        Self { cases: Mutex::new(cases), fetches: AtomicUsize::new(0) }
    }

    /// Convenience helper for seeding a single snapshot.
    pub fn with_case(self, snapshot: CaseSnapshot) -> Self {
        self.cases.lock().unwrap().insert(snapshot.residence.residence_id, snapshot);
        self
    }

    /// Replace the stored snapshot, simulating a backend-side mutation.
    pub fn replace_case(&self, snapshot: CaseSnapshot) {
        self.cases.lock().unwrap().insert(snapshot.residence.residence_id, snapshot);
    }

    /// Number of `fetch_case` calls seen so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Wrap in the `Arc` shape the service expects.
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[async_trait]
impl CaseSnapshotSource for MockCaseSnapshotSource {
    async fn fetch_case(&self, residence_id: i64) -> DomainResult<CaseSnapshot> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.cases
            .lock()
            .unwrap()
            .get(&residence_id)
            .cloned()
            .ok_or_else(|| VisadeskError::NotFound(format!("residence {residence_id}")))
    }
}
