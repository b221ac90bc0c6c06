//! Row identifier sources
//!
//! The table stamps every inserted row with an id taken from an `IdSource`.
//! `RandomIdSource` is the production source; `SequentialIdSource` gives
//! predictable ids for tests and demos.

use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

/// A source of unique identifiers
pub trait IdSource: Send + Sync {
    /// Returns a fresh identifier, distinct from every previous one
    fn next_id(&self) -> String;
}

/// Random version-4 UUIDs
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdSource;

impl RandomIdSource {
    pub fn new() -> Self {
        Self
    }
}

impl IdSource for RandomIdSource {
    fn next_id(&self) -> String {
        let mut bytes = [0u8; 16];
        rand::thread_rng().fill(&mut bytes);
        format_uuid_v4(bytes)
    }
}

/// Format 16 random bytes as a hyphenated version-4 UUID.
///
/// Sets the version nibble to 4 and the variant bits to `10`.
fn format_uuid_v4(mut bytes: [u8; 16]) -> String {
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

/// Deterministic ids of the form `prefix-1`, `prefix-2`, ...
#[derive(Debug)]
pub struct SequentialIdSource {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdSource {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIdSource {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}
