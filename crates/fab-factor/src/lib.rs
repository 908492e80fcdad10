#![deny(missing_docs)]
#![doc = "Trial-division factorization of a group order into ascending prime powers."]

use std::fmt;

use fab_core::FabError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A prime raised to a positive exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PrimePower {
    /// The prime base.
    pub prime: u64,
    /// Multiplicity of the prime, always at least one.
    pub exponent: u32,
}

impl PrimePower {
    /// Returns `prime^exponent`.
    pub fn value(&self) -> u64 {
        self.prime.pow(self.exponent)
    }
}

impl fmt::Display for PrimePower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exponent == 1 {
            write!(f, "{}", self.prime)
        } else {
            write!(f, "{}^{}", self.prime, self.exponent)
        }
    }
}

/// Factors `n` into prime powers ordered by ascending prime.
///
/// `n = 1` yields an empty factorization. `n = 0` has no factorization and is
/// rejected as invalid input.
pub fn factorize(n: u64) -> Result<Vec<PrimePower>, FabError> {
    if n == 0 {
        return Err(FabError::invalid_order(
            "order-zero",
            "cannot factor a group order of zero",
            "0",
        ));
    }

    let mut rest = n;
    let mut factors = Vec::new();

    let twos = rest.trailing_zeros();
    if twos > 0 {
        factors.push(PrimePower {
            prime: 2,
            exponent: twos,
        });
        rest >>= twos;
    }

    let mut candidate: u64 = 3;
    while (candidate as u128) * (candidate as u128) <= rest as u128 {
        let mut exponent = 0;
        while rest % candidate == 0 {
            rest /= candidate;
            exponent += 1;
        }
        if exponent > 0 {
            factors.push(PrimePower {
                prime: candidate,
                exponent,
            });
        }
        candidate += 2;
    }

    // whatever survives past the square root is a single prime
    if rest > 1 {
        factors.push(PrimePower {
            prime: rest,
            exponent: 1,
        });
    }

    debug!(order = n, primes = factors.len(), "factorized group order");
    Ok(factors)
}

/// Multiplies a factorization back out.
pub fn reconstruct(factors: &[PrimePower]) -> u64 {
    factors.iter().map(PrimePower::value).product()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(n: u64) -> Vec<(u64, u32)> {
        factorize(n)
            .unwrap()
            .into_iter()
            .map(|pp| (pp.prime, pp.exponent))
            .collect()
    }

    #[test]
    fn small_orders() {
        assert_eq!(pairs(1), vec![]);
        assert_eq!(pairs(2), vec![(2, 1)]);
        assert_eq!(pairs(12), vec![(2, 2), (3, 1)]);
        assert_eq!(pairs(36), vec![(2, 2), (3, 2)]);
        assert_eq!(pairs(360), vec![(2, 3), (3, 2), (5, 1)]);
    }

    #[test]
    fn large_prime_remainder() {
        assert_eq!(pairs(2 * 1_000_000_007), vec![(2, 1), (1_000_000_007, 1)]);
        assert_eq!(
            pairs(u64::MAX),
            vec![
                (3, 1),
                (5, 1),
                (17, 1),
                (257, 1),
                (641, 1),
                (65537, 1),
                (6700417, 1)
            ]
        );
    }

    #[test]
    fn display_omits_unit_exponent() {
        let factors = factorize(72).unwrap();
        let rendered: Vec<_> = factors.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["2^3", "3^2"]);
        let seven = PrimePower {
            prime: 7,
            exponent: 1,
        };
        assert_eq!(seven.to_string(), "7");
    }
}
