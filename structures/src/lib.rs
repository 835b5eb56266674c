//! Stack and queue containers used by the payroll demo
//!
//! Every container reports its new size on insertion and returns a
//! [`StructureError`] instead of panicking when it is empty or full.

pub mod algorithms;
pub mod deque;
pub mod error;
pub mod priority;
pub mod queue;
pub mod stack;

pub use algorithms::{decimal_to_binary, is_balanced, reverse_with_stack};
pub use deque::Deque;
pub use error::{StructureError, StructureResult};
pub use priority::{PriorityEntry, PriorityQueue};
pub use queue::{CircularQueue, Queue};
pub use stack::{MinStack, Stack};
