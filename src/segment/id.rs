use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Opaque identifier of a segment, unique within a [`TrackNetwork`](crate::network::TrackNetwork).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(String);

impl SegmentId {
    /// Wraps an explicit identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SegmentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SegmentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Source of fresh segment identifiers.
pub trait IdGenerator {
    /// Produces the next identifier.
    fn next_id(&mut self) -> SegmentId;
}

/// Generates short random identifiers of eight hex digits.
#[derive(Debug, Clone)]
pub struct RandomIds {
    rng: StdRng,
}

impl RandomIds {
    /// Creates a generator seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a generator with a fixed seed, producing a reproducible sequence.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> SegmentId {
        SegmentId(format!("{:08x}", self.rng.gen::<u32>()))
    }
}

/// Generates `prefix-0`, `prefix-1`, ... in order.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    /// Creates a generator starting at `prefix-0`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("segment")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> SegmentId {
        let id = SegmentId(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}
