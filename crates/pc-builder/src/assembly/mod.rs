//! Motherboard assembly: part catalog, slot zones, placement rules and the
//! build store that ties them together.
//!
//! The store is the only writer of a placement map. Everything derived from a
//! map (summary figures, readiness, status) is recomputed on read.

pub mod catalog;
pub mod domain;
pub(crate) mod readiness;
pub mod repository;
pub mod router;
pub mod service;
pub mod specs;
pub mod store;
pub(crate) mod validation;
pub mod views;
pub mod zone;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, LibrarySection, PartCatalog};
pub use domain::{BoardLayout, Motherboard, Part, PartId, PartKind, PcieLane, StorageInterface};
pub use readiness::{is_system_ready, BuildStatus};
pub use repository::{BuildId, BuildRecord, BuildRepository, BuildView, RepositoryError};
pub use router::build_router;
pub use service::{BuildServiceError, BuildSessionService};
pub use specs::{BuildSummary, SystemType};
pub use store::{BuildError, BuildSettings, BuildStore, ValidationNotice};
pub use validation::{check_placement, PlacementRejection};
pub use views::{BuildStateView, CatalogView, PlacedPartView, SystemSpecsView};
pub use zone::{PlacementMap, Zone, ZoneFamily, ZoneParseError};
