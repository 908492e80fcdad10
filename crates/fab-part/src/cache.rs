use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::trace;

use crate::{enumerate::partitions, Partition};

/// Shares one partition list per distinct exponent.
#[derive(Debug, Default, Clone)]
pub struct PartitionCache {
    entries: BTreeMap<u32, Arc<[Partition]>>,
    hits: u64,
    misses: u64,
}

impl PartitionCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the partitions of `exponent`, enumerating them on first use.
    pub fn get(&mut self, exponent: u32) -> Arc<[Partition]> {
        if let Some(entry) = self.entries.get(&exponent) {
            self.hits += 1;
            trace!(exponent, "partition cache hit");
            return Arc::clone(entry);
        }
        self.misses += 1;
        let entry: Arc<[Partition]> = partitions(exponent).into();
        trace!(exponent, count = entry.len(), "partition cache miss");
        self.entries.insert(exponent, Arc::clone(&entry));
        entry
    }

    /// Number of lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that triggered an enumeration.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Number of distinct exponents held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been enumerated yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
