//! FIFO queues: an unbounded-by-default queue and a fixed-size ring buffer

use std::collections::VecDeque;
use std::fmt;

use crate::error::{StructureError, StructureResult};

const QUEUE_OVERFLOW: &str = "Queue overflow - maximum size reached";
const QUEUE_UNDERFLOW: &str = "Queue underflow - queue is empty";
const CIRCULAR_FULL: &str = "Circular queue is full";
const CIRCULAR_EMPTY: &str = "Circular queue is empty";

/// First-in, first-out container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
    max_size: Option<usize>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
            max_size: None,
        }
    }

    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(max_size),
            max_size: Some(max_size),
        }
    }

    /// Append at the rear, returning the new size
    pub fn enqueue(&mut self, item: T) -> StructureResult<usize> {
        if matches!(self.max_size, Some(max) if self.items.len() >= max) {
            return Err(StructureError::full(QUEUE_OVERFLOW));
        }
        self.items.push_back(item);
        Ok(self.items.len())
    }

    pub fn dequeue(&mut self) -> StructureResult<T> {
        self.items
            .pop_front()
            .ok_or_else(|| StructureError::empty(QUEUE_UNDERFLOW))
    }

    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn rear(&self) -> Option<&T> {
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

    pub fn set_max_size(&mut self, max_size: Option<usize>) {
        self.max_size = max_size;
    }

    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    /// Element at `position` counted from the front (0 = front)
    pub fn element_at(&self, position: usize) -> Option<&T> {
        self.items.get(position)
    }

    /// Iterate front to rear
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Clone> Queue<T> {
    /// Copy of every element, front to rear
    pub fn items(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T: PartialEq> Queue<T> {
    /// Index from the front of the first element equal to `item`
    pub fn search(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|candidate| candidate == item)
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

/// Fixed-capacity queue backed by a ring of slots
#[derive(Debug, Clone)]
pub struct CircularQueue<T> {
    slots: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> CircularQueue<T> {
    pub fn new(capacity: usize) -> StructureResult<Self> {
        if capacity == 0 {
            return Err(StructureError::InvalidCapacity { capacity });
        }
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Ok(Self {
            slots,
            head: 0,
            len: 0,
        })
    }

    pub fn enqueue(&mut self, item: T) -> StructureResult<usize> {
        if self.is_full() {
            return Err(StructureError::full(CIRCULAR_FULL));
        }
        let tail = (self.head + self.len) % self.capacity();
        self.slots[tail] = Some(item);
        self.len += 1;
        Ok(self.len)
    }

    pub fn dequeue(&mut self) -> StructureResult<T> {
        if self.is_empty() {
            return Err(StructureError::empty(CIRCULAR_EMPTY));
        }
        let item = self.slots[self.head]
            .take()
            .ok_or_else(|| StructureError::empty(CIRCULAR_EMPTY))?;
        self.len -= 1;
        self.head = if self.len == 0 {
            0
        } else {
            (self.head + 1) % self.capacity()
        };
        Ok(item)
    }

    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    pub fn rear(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        let tail = (self.head + self.len - 1) % self.capacity();
        self.slots[tail].as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    pub fn size(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.head = 0;
        self.len = 0;
    }

    /// Iterate front to rear following wrap-around
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |offset| {
            self.slots[(self.head + offset) % self.capacity()].as_ref()
        })
    }
}

impl<T: Clone> CircularQueue<T> {
    pub fn items(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}
