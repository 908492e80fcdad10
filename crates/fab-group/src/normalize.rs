use crate::{InvariantFactors, PrimaryDecomposition};

/// Merges the per-prime cyclic factors into a divisor chain.
///
/// Every prime's parts are aligned largest-to-largest; a prime with fewer
/// parts than the widest component contributes nothing to the smallest
/// positions. The product at each position is cyclic because distinct primes
/// are coprime.
pub fn invariant_factors(primary: &PrimaryDecomposition) -> InvariantFactors {
    let width = primary
        .components()
        .iter()
        .map(|component| component.partition.len())
        .max()
        .unwrap_or(0);
    if width == 0 {
        return InvariantFactors::from_chain(vec![1]);
    }

    let mut factors = vec![1u64; width];
    for component in primary.components() {
        let offset = width - component.partition.len();
        for (slot, order) in factors[offset..]
            .iter_mut()
            .zip(component.cyclic_orders())
        {
            *slot *= order;
        }
    }

    let chain = InvariantFactors::from_chain(factors);
    debug_assert!(chain.is_divisor_chain());
    debug_assert_eq!(chain.product(), primary.order());
    chain
}
