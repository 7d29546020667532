//! Request id generation.

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};

/// Produces the opaque id stamped on every response and error.
pub trait RequestIdGenerator: Debug + Send + Sync {
    fn next_id(&self) -> String;
}

/// Random UUID v4 ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestIds;

impl RequestIdGenerator for UuidRequestIds {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic ids: `req-000001`, `req-000002`, ...
#[derive(Debug, Default)]
pub struct SequentialRequestIds {
    counter: AtomicU64,
}

impl SequentialRequestIds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RequestIdGenerator for SequentialRequestIds {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("req-{n:06}")
    }
}
