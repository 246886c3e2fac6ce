use std::sync::atomic::{AtomicU64, Ordering};

/// Stable identity for the part that owns a relationship.
///
/// Identifier assignment keys on the *identity* of the source part, never its
/// contents: two relationships from the same `SourceId` with equal type (and,
/// for external mode, equal target) share an id, while relationships from
/// different sources never do. Callers mint one `SourceId` per owning part
/// and reuse it for every relationship that part creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceId(u64);

static NEXT_SOURCE: AtomicU64 = AtomicU64::new(1);

impl SourceId {
    /// Allocate a fresh identity. Never compares equal to any other
    /// `SourceId::new()` result in the process.
    pub fn new() -> Self {
        SourceId(NEXT_SOURCE.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for SourceId {
    fn default() -> Self {
        Self::new()
    }
}
