use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{RelationshipType, SourceId};

/// Prefix for assigned relationship identifiers (`rId1`, `rId2`, ...).
pub const REL_ID_PREFIX: &str = "rId";

/// The identity of a relationship for identifier-reuse purposes.
///
/// The target participates only for external relationships: internal
/// same-type same-source links are considered duplicates of one manifest
/// entry regardless of how the target path is spelled, while external links
/// to different URIs must stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelKey {
    source: SourceId,
    rel_type: RelationshipType,
    external_target: Option<String>,
}

impl RelKey {
    pub fn new(
        source: SourceId,
        rel_type: RelationshipType,
        external_target: Option<&str>,
    ) -> Self {
        RelKey {
            source,
            rel_type,
            external_target: external_target.map(str::to_owned),
        }
    }
}

/// Per-thread store assigning sequential `rId{n}` identifiers to distinct
/// [`RelKey`]s, exactly once per key.
///
/// Each thread that touches [`IdRegistry::with_current`] lazily gets its own
/// fresh registry, so concurrent package builds number their relationships
/// independently without sharing a counter. Registries never evict; they live
/// as long as their owning thread.
#[derive(Debug)]
pub struct IdRegistry {
    scope: u64,
    ids: HashMap<RelKey, String>,
    next: usize,
}

static NEXT_SCOPE: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static CURRENT: RefCell<IdRegistry> = RefCell::new(IdRegistry::new());
}

impl IdRegistry {
    pub fn new() -> Self {
        IdRegistry {
            scope: NEXT_SCOPE.fetch_add(1, Ordering::Relaxed),
            ids: HashMap::new(),
            next: 0,
        }
    }

    /// Return the identifier for `key`, assigning the next sequential one on
    /// first sight. Assignment order is first-resolution order.
    pub fn resolve(&mut self, key: &RelKey) -> String {
        if let Some(id) = self.ids.get(key) {
            return id.clone();
        }
        self.next += 1;
        let id = format!("{REL_ID_PREFIX}{}", self.next);
        self.ids.insert(key.clone(), id.clone());
        id
    }

    /// Run `f` against the calling thread's registry.
    ///
    /// The registry is created empty on the thread's first call; two threads
    /// never observe the same instance.
    pub fn with_current<R>(f: impl FnOnce(&mut IdRegistry) -> R) -> R {
        CURRENT.with(|cell| f(&mut cell.borrow_mut()))
    }

    /// Process-unique identity of this registry instance. Lets callers (and
    /// tests) check that two execution contexts hold distinct registries.
    pub fn scope_id(&self) -> u64 {
        self.scope
    }

    /// Number of distinct keys assigned so far.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Forget every assignment and restart numbering at `rId1`.
    pub fn clear(&mut self) {
        self.ids.clear();
        self.next = 0;
    }
}

impl Default for IdRegistry {
    fn default() -> Self {
        Self::new()
    }
}
