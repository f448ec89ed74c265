//! Order identifier sources.

use std::sync::atomic::{AtomicU64, Ordering};

/// Produces process-wide unique order ids. No ordering guarantee is implied.
pub trait OrderIdSource: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random UUID v4 ids. The default for running systems.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl OrderIdSource for UuidIds {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// `order_1`, `order_2`, ... from a shared counter. Handy in tests and demos.
#[derive(Debug)]
pub struct SequentialIds {
    counter: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderIdSource for SequentialIds {
    fn next_id(&self) -> String {
        let id = self.counter.fetch_add(1, Ordering::SeqCst);
        format!("order_{}", id)
    }
}
