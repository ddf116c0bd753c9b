//! Batch-scoped unique name assignment.

use std::collections::HashSet;

/// Registry of filename stems already handed out within one batch.
///
/// One registry per archive build. It only ever grows; names are never
/// released before the batch ends, and a registry must not be reused for a
/// later batch or suffixes would leak from one archive into the next.
#[derive(Debug, Default)]
pub struct NameRegistry {
    assigned: HashSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `base` if unseen, otherwise `base_1`, `base_2`, … — the
    /// smallest free suffix — and records the returned name.
    ///
    /// Deterministic: given the same sequence of calls, the same names come
    /// back. Terminates because the registry is finite.
    pub fn reserve(&mut self, base: &str) -> String {
        let mut candidate = base.to_string();
        let mut i = 1u64;
        while self.assigned.contains(&candidate) {
            candidate = format!("{base}_{i}");
            i += 1;
        }
        self.assigned.insert(candidate.clone());
        candidate
    }

    /// Whether `name` has already been handed out in this batch.
    pub fn contains(&self, name: &str) -> bool {
        self.assigned.contains(name)
    }

    /// Number of names handed out so far.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}
