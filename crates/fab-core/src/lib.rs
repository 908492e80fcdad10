#![deny(missing_docs)]
#![doc = "Core error and input types shared by the FAB finite abelian group classifier."]

pub mod errors;
pub mod order;
pub mod schema;

pub use errors::{ErrorInfo, FabError};
pub use order::GroupOrder;
pub use schema::{SchemaVersion, REPORT_SCHEMA};
