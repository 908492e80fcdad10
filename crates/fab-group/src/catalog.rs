use std::iter::FusedIterator;
use std::sync::Arc;

use fab_core::{FabError, GroupOrder};
use fab_factor::{factorize, PrimePower};
use fab_part::{Partition, PartitionCache};
use tracing::debug;

use crate::{GroupDescriptor, PrimaryComponent, PrimaryDecomposition};

/// All abelian groups of a fixed order, enumerated on demand.
#[derive(Debug, Clone)]
pub struct GroupCatalog {
    order: GroupOrder,
    factors: Vec<PrimePower>,
    choices: Vec<Arc<[Partition]>>,
}

impl GroupCatalog {
    /// Factors the order and prepares one partition list per prime.
    pub fn new(order: GroupOrder) -> Result<Self, FabError> {
        let mut cache = PartitionCache::new();
        Self::with_cache(order, &mut cache)
    }

    /// Like [`GroupCatalog::new`] but reuses partition lists across catalogs.
    pub fn with_cache(order: GroupOrder, cache: &mut PartitionCache) -> Result<Self, FabError> {
        let factors = factorize(order.as_raw())?;
        let choices = factors
            .iter()
            .map(|factor| cache.get(factor.exponent))
            .collect();
        let catalog = Self {
            order,
            factors,
            choices,
        };
        debug!(
            order = order.as_raw(),
            primes = catalog.factors.len(),
            groups = ?catalog.count(),
            cached_exponents = cache.len(),
            "prepared group catalog"
        );
        Ok(catalog)
    }

    /// The order shared by every group in the catalog.
    pub fn order(&self) -> GroupOrder {
        self.order
    }

    /// Prime-power factorization of the order.
    pub fn factorization(&self) -> &[PrimePower] {
        &self.factors
    }

    /// Partitions available for each prime, aligned with [`Self::factorization`].
    pub fn choices(&self) -> &[Arc<[Partition]>] {
        &self.choices
    }

    /// Number of isomorphism classes, or `None` if it overflows a `u64`.
    pub fn count(&self) -> Option<u64> {
        self.choices
            .iter()
            .try_fold(1u64, |acc, list| acc.checked_mul(list.len() as u64))
    }

    /// Lazily yields one descriptor per isomorphism class.
    pub fn iter(&self) -> Groups<'_> {
        Groups {
            catalog: self,
            cursor: Some(vec![0; self.choices.len()]),
            remaining: self.count(),
        }
    }

    /// Materialises every descriptor.
    pub fn collect_groups(&self) -> Vec<GroupDescriptor> {
        self.iter().collect()
    }

    fn descriptor_at(&self, cursor: &[usize]) -> GroupDescriptor {
        let components = self
            .factors
            .iter()
            .zip(&self.choices)
            .zip(cursor)
            .map(|((factor, list), &idx)| PrimaryComponent {
                prime: factor.prime,
                partition: list[idx].clone(),
            })
            .collect();
        GroupDescriptor::from_primary(PrimaryDecomposition::new(components))
    }
}

impl<'a> IntoIterator for &'a GroupCatalog {
    type Item = GroupDescriptor;
    type IntoIter = Groups<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`GroupCatalog`].
///
/// Walks the per-prime partition indices like an odometer: the largest prime
/// advances fastest, and each prime's partitions appear in canonical order.
#[derive(Debug, Clone)]
pub struct Groups<'a> {
    catalog: &'a GroupCatalog,
    cursor: Option<Vec<usize>>,
    remaining: Option<u64>,
}

impl Iterator for Groups<'_> {
    type Item = GroupDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.as_mut()?;
        let descriptor = self.catalog.descriptor_at(cursor);

        let mut exhausted = true;
        for (slot, list) in cursor.iter_mut().zip(self.catalog.choices.iter()).rev() {
            *slot += 1;
            if *slot < list.len() {
                exhausted = false;
                break;
            }
            *slot = 0;
        }
        if exhausted {
            self.cursor = None;
            debug!(order = self.catalog.order.as_raw(), "group enumeration finished");
        }
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }
        Some(descriptor)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.cursor.is_none() {
            return (0, Some(0));
        }
        match self.remaining.and_then(|left| usize::try_from(left).ok()) {
            Some(left) => (left, Some(left)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Groups<'_> {}
