//! Receipt identifier generation.
//!
//! Ids are opaque to clients: the only contract is global uniqueness with
//! no coordination, which UUID v4 gives us. The capability is a trait so
//! tests can substitute a deterministic generator.

use uuid::Uuid;

/// Capability for minting fresh receipt identifiers.
pub trait IdGenerator: Send + Sync {
    /// Returns a new identifier, never previously issued by this process.
    fn generate(&self) -> String;
}

/// Production generator: random UUID v4, rendered in canonical hyphenated
/// form.
#[derive(Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic generator for tests: "id-0", "id-1", ...
#[cfg(test)]
pub struct SequentialIdGenerator(pub std::sync::atomic::AtomicU64);

#[cfg(test)]
impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> String {
        let n = self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        format!("id-{n}")
    }
}
