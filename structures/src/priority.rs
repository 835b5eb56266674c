//! Priority queue where higher numbers leave first

use serde::{Deserialize, Serialize};

use crate::error::{StructureError, StructureResult};

const PRIORITY_EMPTY: &str = "Priority queue is empty";

/// An element together with the priority it was enqueued with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityEntry<T> {
    pub element: T,
    pub priority: i64,
}

/// Entries are kept sorted by descending priority. Equal priorities keep
/// their insertion order.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    entries: Vec<PriorityEntry<T>>,
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Insert ahead of the first entry with a strictly lower priority
    pub fn enqueue(&mut self, element: T, priority: i64) -> usize {
        let index = self
            .entries
            .iter()
            .position(|entry| priority > entry.priority)
            .unwrap_or(self.entries.len());
        self.entries.insert(index, PriorityEntry { element, priority });
        self.entries.len()
    }

    pub fn dequeue(&mut self) -> StructureResult<T> {
        if self.entries.is_empty() {
            return Err(StructureError::empty(PRIORITY_EMPTY));
        }
        Ok(self.entries.remove(0).element)
    }

    pub fn front(&self) -> Option<&T> {
        self.entries.first().map(|entry| &entry.element)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T: Clone> PriorityQueue<T> {
    /// Entries in dequeue order
    pub fn entries(&self) -> Vec<PriorityEntry<T>> {
        self.entries.clone()
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
