//! Container seam
//!
//! The benchmark only ever talks to a container through [`KeySet`]. The
//! [`StringSet`] here is the reference container the binary measures.

use std::collections::HashSet;
use std::mem;

/// Capability surface consumed by the workload drivers
pub trait KeySet {
    /// Insert `key`, returning false if it was already present.
    fn add(&mut self, key: String) -> bool;

    /// Remove `key`, returning false if it was absent.
    fn erase(&mut self, key: &str) -> bool;

    fn find(&self, key: &str) -> Option<&str>;

    fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Number of entries, possibly counting entries pending removal.
    fn upper_bound_size(&self) -> usize;

    /// Bytes held by stored keys.
    fn object_memory_used(&self) -> usize;

    /// Bytes held by the container's own index structures.
    fn set_memory_used(&self) -> usize;
}

/// Owned string set with byte accounting
#[derive(Debug, Default)]
pub struct StringSet {
    entries: HashSet<Box<str>>,
    obj_bytes: usize,
}

impl StringSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeySet for StringSet {
    fn add(&mut self, key: String) -> bool {
        let bytes = key.len();
        let inserted = self.entries.insert(key.into_boxed_str());
        if inserted {
            self.obj_bytes += bytes;
        }
        inserted
    }

    fn erase(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key);
        if removed {
            self.obj_bytes -= key.len();
        }
        removed
    }

    fn find(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|k| &**k)
    }

    fn contains(&self, key: &str) -> bool {
        self.entries.contains(key)
    }

    fn upper_bound_size(&self) -> usize {
        self.entries.len()
    }

    fn object_memory_used(&self) -> usize {
        self.obj_bytes
    }

    fn set_memory_used(&self) -> usize {
        // one slot plus one control byte per bucket
        self.entries.capacity() * (mem::size_of::<Box<str>>() + 1)
    }
}
