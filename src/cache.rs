use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Mutex, PoisonError};

use crate::graph::{NodeId, Path};

/// Memo of primary shortest paths keyed by ordered `(start, end)` node
/// pairs.
///
/// Entries are added but never removed or replaced: the underlying graph is
/// immutable, so a cached path can never become stale. The inner mutex is
/// the only synchronization concurrent queries need; writes for the same
/// key are idempotent, so redundant computation by racing queries is
/// harmless.
#[derive(Debug)]
pub struct QueryCache<W>
where
    W: Float + Zero + Debug + Copy,
{
    entries: Mutex<HashMap<(NodeId, NodeId), Path<W>>>,
}

impl<W> QueryCache<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates an empty cache
    pub fn new() -> Self {
        QueryCache {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached primary shortest path from `start` to `end`,
    /// if one has been recorded
    pub fn get(&self, start: NodeId, end: NodeId) -> Option<Path<W>> {
        self.lock().get(&(start, end)).cloned()
    }

    /// Records the primary shortest path from `start` to `end`. A key that
    /// is already present keeps its existing entry.
    pub fn put(&self, start: NodeId, end: NodeId, path: Path<W>) {
        self.lock().entry((start, end)).or_insert(path);
    }

    /// Returns the number of cached entries
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<(NodeId, NodeId), Path<W>>> {
        // Entries are insert-only, so a panic elsewhere cannot leave the
        // map in an inconsistent state.
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W> Default for QueryCache<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}
