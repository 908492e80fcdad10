//! Validated group orders.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, FabError};

/// Order N of a finite group, guaranteed to be at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct GroupOrder(u64);

impl GroupOrder {
    /// The order of the trivial group.
    pub const TRIVIAL: GroupOrder = GroupOrder(1);

    /// Validates a raw integer as a group order.
    pub fn new(raw: u64) -> Result<Self, FabError> {
        if raw == 0 {
            return Err(zero_order());
        }
        Ok(Self(raw))
    }

    /// Returns the raw integer representation of the order.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

fn zero_order() -> FabError {
    FabError::Input(
        ErrorInfo::new("order-zero", "group order must be a positive integer")
            .with_context("order", "0")
            .with_hint("the smallest group is the trivial group of order 1"),
    )
}

impl FromStr for GroupOrder {
    type Err = FabError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(FabError::invalid_order(
                "order-empty",
                "group order must not be empty",
                "",
            ));
        }
        if let Some(rest) = trimmed.strip_prefix('-') {
            if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
                return Err(FabError::invalid_order(
                    "order-negative",
                    "group order must be a positive integer",
                    trimmed,
                ));
            }
        }
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FabError::invalid_order(
                "order-parse",
                "group order must be an integer",
                trimmed,
            ));
        }
        let raw = digits.parse::<u64>().map_err(|err| {
            FabError::Input(
                ErrorInfo::new("order-parse", err.to_string())
                    .with_context("order", trimmed)
                    .with_hint(format!("orders above {} are not supported", u64::MAX)),
            )
        })?;
        GroupOrder::new(raw)
    }
}

impl TryFrom<u64> for GroupOrder {
    type Error = FabError;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        GroupOrder::new(raw)
    }
}

impl From<GroupOrder> for u64 {
    fn from(order: GroupOrder) -> Self {
        order.0
    }
}

impl fmt::Display for GroupOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
