use crate::classification::result::ClassificationResult;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Bounded FIFO of recent results. Appends are serialized; nothing is persisted.
pub struct HistoryBuffer {
    capacity: usize,
    entries: Mutex<VecDeque<ClassificationResult>>,
}

impl HistoryBuffer {
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity + 1)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn append(&self, result: ClassificationResult) {
        let mut entries = self.entries();
        entries.push_back(result);
        while entries.len() > self.capacity {
            entries.pop_front();
        }
    }

    /// Oldest first.
    pub fn snapshot(&self) -> Vec<ClassificationResult> {
        self.entries().iter().cloned().collect()
    }

    pub fn latest(&self) -> Option<ClassificationResult> {
        self.entries().back().cloned()
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A panic elsewhere while holding the lock cannot leave the deque half-updated,
    // so a poisoned lock is still usable.
    fn entries(&self) -> MutexGuard<'_, VecDeque<ClassificationResult>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
