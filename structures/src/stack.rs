//! LIFO stack with optional capacity, plus a minimum-tracking variant

use std::fmt;

use crate::error::{StructureError, StructureResult};

const STACK_OVERFLOW: &str = "Stack overflow - maximum size reached";
const STACK_UNDERFLOW: &str = "Stack underflow - stack is empty";

/// Last-in, first-out container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
    max_size: Option<usize>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            max_size: None,
        }
    }

    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            items: Vec::with_capacity(max_size),
            max_size: Some(max_size),
        }
    }

    /// Push onto the top, returning the new size
    pub fn push(&mut self, item: T) -> StructureResult<usize> {
        if self.is_at_capacity() {
            return Err(StructureError::full(STACK_OVERFLOW));
        }
        self.items.push(item);
        Ok(self.items.len())
    }

    pub fn pop(&mut self) -> StructureResult<T> {
        self.items.pop().ok_or_else(|| StructureError::empty(STACK_UNDERFLOW))
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
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

    /// Change the capacity limit. Items already stored are kept even when
    /// they exceed the new limit; only later pushes are refused.
    pub fn set_max_size(&mut self, max_size: Option<usize>) {
        self.max_size = max_size;
    }

    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    /// Element at `position` counted from the top (0 = top)
    pub fn element_at(&self, position: usize) -> Option<&T> {
        let len = self.items.len();
        if position >= len {
            return None;
        }
        self.items.get(len - 1 - position)
    }

    /// Iterate bottom to top
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    fn is_at_capacity(&self) -> bool {
        matches!(self.max_size, Some(max) if self.items.len() >= max)
    }
}

impl<T: Clone> Stack<T> {
    /// Copy of every element, bottom to top
    pub fn items(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T: PartialEq> Stack<T> {
    /// Distance from the top of the topmost element equal to `item`
    pub fn search(&self, item: &T) -> Option<usize> {
        self.items.iter().rev().position(|candidate| candidate == item)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

/// Stack that also answers "what is the smallest element" in O(1)
#[derive(Debug, Clone)]
pub struct MinStack<T> {
    stack: Stack<T>,
    minimums: Vec<T>,
}

impl<T: Ord + Clone> MinStack<T> {
    pub fn new() -> Self {
        Self {
            stack: Stack::new(),
            minimums: Vec::new(),
        }
    }

    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            stack: Stack::with_max_size(max_size),
            minimums: Vec::new(),
        }
    }

    pub fn push(&mut self, item: T) -> StructureResult<usize> {
        let record = self.minimums.last().map_or(true, |min| item <= *min);
        let candidate = if record { Some(item.clone()) } else { None };
        let size = self.stack.push(item)?;
        if let Some(min) = candidate {
            self.minimums.push(min);
        }
        Ok(size)
    }

    pub fn pop(&mut self) -> StructureResult<T> {
        let item = self.stack.pop()?;
        if self.minimums.last() == Some(&item) {
            self.minimums.pop();
        }
        Ok(item)
    }

    pub fn min(&self) -> Option<&T> {
        self.minimums.last()
    }

    pub fn peek(&self) -> Option<&T> {
        self.stack.peek()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn size(&self) -> usize {
        self.stack.size()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
        self.minimums.clear();
    }

    pub fn items(&self) -> Vec<T> {
        self.stack.items()
    }
}

impl<T: Ord + Clone> Default for MinStack<T> {
    fn default() -> Self {
        Self::new()
    }
}
