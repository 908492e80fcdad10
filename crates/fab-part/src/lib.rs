#![deny(missing_docs)]
#![doc = "Integer partitions in canonical non-increasing form, enumerated largest part first."]

/// Memoised partition lists keyed by exponent.
pub mod cache;
/// Lazy and recursive enumeration of partitions.
pub mod enumerate;

use std::fmt;

use fab_core::{ErrorInfo, FabError};
use serde::{Deserialize, Serialize};

pub use cache::PartitionCache;
pub use enumerate::{partition_count, partitions, Partitions};

/// A non-increasing sequence of positive parts.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct Partition(Vec<u32>);

impl Partition {
    /// Validates a part list, returning an error unless every part is
    /// positive and the list is sorted in non-increasing order.
    pub fn new(parts: Vec<u32>) -> Result<Self, FabError> {
        if parts.contains(&0) {
            return Err(FabError::Serde(
                ErrorInfo::new("partition-invalid", "partition parts must be positive")
                    .with_context("parts", format!("{parts:?}")),
            ));
        }
        if parts.windows(2).any(|pair| pair[0] < pair[1]) {
            return Err(FabError::Serde(
                ErrorInfo::new("partition-invalid", "partition parts must be non-increasing")
                    .with_context("parts", format!("{parts:?}")),
            ));
        }
        Ok(Self(parts))
    }

    pub(crate) fn from_canonical(parts: Vec<u32>) -> Self {
        debug_assert!(parts.windows(2).all(|pair| pair[0] >= pair[1]));
        debug_assert!(!parts.contains(&0));
        Self(parts)
    }

    /// Parts in non-increasing order.
    pub fn parts(&self) -> &[u32] {
        &self.0
    }

    /// Parts in non-decreasing order.
    pub fn ascending(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().rev().copied()
    }

    /// The integer being partitioned.
    pub fn sum(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Number of parts.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True only for the single partition of zero.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<u32>> for Partition {
    type Error = FabError;

    fn try_from(parts: Vec<u32>) -> Result<Self, Self::Error> {
        Partition::new(parts)
    }
}

impl From<Partition> for Vec<u32> {
    fn from(partition: Partition) -> Self {
        partition.0
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (idx, part) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{part}")?;
        }
        write!(f, ")")
    }
}
