#![deny(missing_docs)]
#![doc = "Enumerates every abelian group of a given order and converts each primary \
decomposition into its invariant-factor form."]

/// Lazy enumeration of all groups of one order.
pub mod catalog;
/// Invariant-factor derivation from primary decompositions.
pub mod normalize;
/// Textual renderings of decompositions.
pub mod render;
/// Serializable catalog summaries.
pub mod report;
/// JSON helpers for catalog reports.
#[path = "serde.rs"]
pub mod serde_io;

use fab_core::{FabError, GroupOrder};
use fab_part::Partition;
use serde::{Deserialize, Serialize};

pub use catalog::{GroupCatalog, Groups};
pub use normalize::invariant_factors;
pub use render::{Decomposition, Form, Notation};
pub use report::{build_report, CatalogReport, GroupEntry};

/// The partition chosen for one prime's exponent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryComponent {
    /// Prime dividing the group order.
    pub prime: u64,
    /// Split of the prime's exponent among cyclic factors.
    pub partition: Partition,
}

impl PrimaryComponent {
    /// Orders of the cyclic p-groups in this component, smallest first.
    pub fn cyclic_orders(&self) -> impl Iterator<Item = u64> + '_ {
        self.partition
            .ascending()
            .map(move |exponent| self.prime.pow(exponent))
    }
}

/// Direct product of cyclic groups of prime-power order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrimaryDecomposition {
    components: Vec<PrimaryComponent>,
}

impl PrimaryDecomposition {
    /// Builds a decomposition from components sorted by ascending prime.
    pub fn new(components: Vec<PrimaryComponent>) -> Self {
        debug_assert!(components.windows(2).all(|w| w[0].prime < w[1].prime));
        Self { components }
    }

    /// Per-prime components in ascending prime order. Empty for the trivial group.
    pub fn components(&self) -> &[PrimaryComponent] {
        &self.components
    }

    /// All cyclic factor orders, grouped by ascending prime and ascending
    /// within each prime.
    pub fn cyclic_orders(&self) -> Vec<u64> {
        self.components
            .iter()
            .flat_map(|component| component.cyclic_orders())
            .collect()
    }

    /// Order of the group, i.e. the product of every prime raised to the sum
    /// of its partition.
    pub fn order(&self) -> u64 {
        self.components
            .iter()
            .map(|component| component.prime.pow(component.partition.sum()))
            .product()
    }
}

/// Divisor chain `n1 | n2 | ... | nk` describing a group up to isomorphism.
///
/// The trivial group is represented by the single factor `[1]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvariantFactors(Vec<u64>);

impl InvariantFactors {
    pub(crate) fn from_chain(factors: Vec<u64>) -> Self {
        Self(factors)
    }

    /// Factors in ascending (dividing) order.
    pub fn factors(&self) -> &[u64] {
        &self.0
    }

    /// Product of the factors.
    pub fn product(&self) -> u64 {
        self.0.iter().product()
    }

    /// True when every factor divides its successor.
    pub fn is_divisor_chain(&self) -> bool {
        !self.0.contains(&0) && self.0.windows(2).all(|w| w[1] % w[0] == 0)
    }

    /// True for the trivial group.
    pub fn is_trivial(&self) -> bool {
        self.0 == [1]
    }
}

/// One isomorphism class, carried in both normal forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDescriptor {
    /// Product of cyclic groups of prime-power order.
    pub primary: PrimaryDecomposition,
    /// The equivalent divisor chain.
    pub invariant: InvariantFactors,
}

impl GroupDescriptor {
    /// Pairs a primary decomposition with its derived invariant factors.
    pub fn from_primary(primary: PrimaryDecomposition) -> Self {
        let invariant = invariant_factors(&primary);
        Self { primary, invariant }
    }
}

/// Validates `n` and returns every abelian group of that order.
pub fn classify(n: u64) -> Result<Vec<GroupDescriptor>, FabError> {
    let order = GroupOrder::new(n)?;
    Ok(GroupCatalog::new(order)?.collect_groups())
}
