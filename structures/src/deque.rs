//! Double-ended queue

use std::collections::VecDeque;

use crate::error::{StructureError, StructureResult};

const DEQUE_EMPTY: &str = "Deque is empty";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deque<T> {
    items: VecDeque<T>,
}

impl<T> Deque<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn add_front(&mut self, item: T) -> usize {
        self.items.push_front(item);
        self.items.len()
    }

    pub fn add_rear(&mut self, item: T) -> usize {
        self.items.push_back(item);
        self.items.len()
    }

    pub fn remove_front(&mut self) -> StructureResult<T> {
        self.items
            .pop_front()
            .ok_or_else(|| StructureError::empty(DEQUE_EMPTY))
    }

    pub fn remove_rear(&mut self) -> StructureResult<T> {
        self.items
            .pop_back()
            .ok_or_else(|| StructureError::empty(DEQUE_EMPTY))
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn peek_rear(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone> Deque<T> {
    pub fn items(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}
