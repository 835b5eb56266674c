//! Shared state behind every request handler
//!
//! One stack and one queue for the whole process. Handlers take the lock once
//! per request so a mutation and the size it reports stay consistent.

use structures::{Queue, Stack};
use tokio::sync::RwLock;

use crate::config::ApiServerConfig;

#[derive(Debug)]
pub struct ApiServerState {
    pub stack: RwLock<Stack<String>>,
    pub queue: RwLock<Queue<String>>,
}

impl ApiServerState {
    pub fn new(config: &ApiServerConfig) -> Self {
        let stack = match config.stack_capacity {
            Some(max) => Stack::with_max_size(max),
            None => Stack::new(),
        };
        let queue = match config.queue_capacity {
            Some(max) => Queue::with_max_size(max),
            None => Queue::new(),
        };

        Self {
            stack: RwLock::new(stack),
            queue: RwLock::new(queue),
        }
    }
}

impl Default for ApiServerState {
    fn default() -> Self {
        Self::new(&ApiServerConfig::default())
    }
}
