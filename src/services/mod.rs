//! Service layer for the planner.
//!
//! - Catalog access (`CatalogClient`, `FenixClient`)
//! - Session state over the catalog (`Planner`)

mod catalog;
mod planner;

pub use catalog::{CatalogClient, FenixClient};
pub use planner::{Alert, CourseBatch, Planner, Severity};
