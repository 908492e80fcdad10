use fab_core::{FabError, GroupOrder, SchemaVersion, REPORT_SCHEMA};
use fab_factor::PrimePower;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::serde_io::to_canonical_json_bytes;
use crate::{GroupCatalog, GroupDescriptor};

/// One isomorphism class reduced to its two integer sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupEntry {
    /// Cyclic prime-power orders grouped by prime.
    pub primary: Vec<u64>,
    /// Invariant factors in dividing order.
    pub invariant: Vec<u64>,
}

impl From<&GroupDescriptor> for GroupEntry {
    fn from(group: &GroupDescriptor) -> Self {
        Self {
            primary: group.primary.cyclic_orders(),
            invariant: group.invariant.factors().to_vec(),
        }
    }
}

/// Serializable summary of every group of one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogReport {
    /// Schema version of this payload.
    pub schema_version: SchemaVersion,
    /// The classified order.
    pub order: GroupOrder,
    /// Prime-power factorization of the order.
    pub factorization: Vec<PrimePower>,
    /// Number of isomorphism classes.
    pub count: u64,
    /// Every class in enumeration order.
    pub groups: Vec<GroupEntry>,
    /// SHA-256 of the canonical JSON encoding of `groups`.
    pub catalog_hash: String,
}

/// Enumerates the catalog and summarises it.
pub fn build_report(catalog: &GroupCatalog) -> Result<CatalogReport, FabError> {
    let groups: Vec<GroupEntry> = catalog.iter().map(|group| GroupEntry::from(&group)).collect();
    let catalog_hash = groups_hash(&groups)?;
    Ok(CatalogReport {
        schema_version: REPORT_SCHEMA,
        order: catalog.order(),
        factorization: catalog.factorization().to_vec(),
        count: groups.len() as u64,
        groups,
        catalog_hash,
    })
}

/// Hex SHA-256 digest of the canonical JSON encoding of `groups`.
pub fn groups_hash(groups: &[GroupEntry]) -> Result<String, FabError> {
    let bytes = to_canonical_json_bytes(&groups)?;
    Ok(hex::encode(Sha256::digest(bytes)))
}
