//! Pending operations accumulated in queued mode

use crate::api::operations::{OperationRequest, Operations};
use log::debug;

/// Ordered, append-only list of pending operations.
///
/// Entries cannot be edited once queued; they leave only when a batch
/// containing them succeeds or when the whole queue is cleared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationQueue {
    entries: Vec<OperationRequest>,
}

impl OperationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, request: OperationRequest) {
        debug!("Queued {} (queue length {})", request, self.entries.len() + 1);
        self.entries.push(request);
    }

    /// Everything queued, in execution order, as one batch
    pub fn snapshot(&self) -> Operations {
        Operations::from(self.entries.clone())
    }

    /// Remove the first `count` entries after they were executed; entries
    /// queued while that batch was in flight stay
    pub fn drain_front(&mut self, count: usize) -> Vec<OperationRequest> {
        let count = count.min(self.entries.len());
        self.entries.drain(..count).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[OperationRequest] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
