//! Record id strategies.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::base62::encode_padded;
use crate::{IdGenerator, RecordId};

/// Counter-backed generator producing `<prefix>-<base62>` ids. Deterministic,
/// which keeps tests and the demo CLI reproducible.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: &'static str,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: &'static str) -> Self {
        Self::starting_at(prefix, 1)
    }

    pub fn starting_at(prefix: &'static str, first: u64) -> Self {
        Self {
            prefix,
            next: AtomicU64::new(first),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> RecordId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        let raw = format!("{}-{}", self.prefix, encode_padded(n, 4));
        // prefix is a static identifier and base62 digits are alphanumeric
        RecordId::new(raw).unwrap_or_default()
    }
}
