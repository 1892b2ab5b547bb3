use super::catalog::{LibrarySection, PartCatalog};
use super::domain::{Motherboard, Part, PartId};
use super::readiness::BuildStatus;
use super::specs::{BuildSummary, SystemType};
use super::store::BuildStore;
use super::zone::Zone;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PlacedPartView {
    pub zone: Zone,
    pub zone_label: String,
    pub part: Part,
}

/// Spec sheet in the shape the summary panel prints it.
#[derive(Debug, Clone, Serialize)]
pub struct SystemSpecsView {
    pub cpu: String,
    pub ram: String,
    pub ram_slots: usize,
    pub gpu: String,
    pub storage: String,
    pub storage_types: String,
    pub total_cost: u32,
    pub estimated_power_watts: u32,
    pub supplied_power_watts: u32,
    pub sufficient_power: bool,
    pub system_type: SystemType,
    pub system_type_label: &'static str,
}

impl From<&BuildSummary> for SystemSpecsView {
    fn from(summary: &BuildSummary) -> Self {
        Self {
            cpu: summary.cpu_display().to_string(),
            ram: summary.ram_display(),
            ram_slots: summary.ram_slots_used,
            gpu: summary.gpu_display().to_string(),
            storage: summary.storage_display(),
            storage_types: summary.storage_breakdown(),
            total_cost: summary.total_cost,
            estimated_power_watts: summary.estimated_power_watts,
            supplied_power_watts: summary.supplied_power_watts,
            sufficient_power: summary.sufficient_power,
            system_type: summary.system_type,
            system_type_label: summary.system_type_label,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildStateView {
    pub placed: Vec<PlacedPartView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_part: Option<PartId>,
    pub ready: bool,
    pub status: BuildStatus,
    pub status_label: &'static str,
    pub specs: SystemSpecsView,
}

impl BuildStateView {
    /// Snapshot of a store; validation errors older than the display window are dropped.
    pub fn capture(store: &BuildStore, now: DateTime<Utc>) -> Self {
        let placed = store
            .placed_parts()
            .iter()
            .map(|(zone, part)| PlacedPartView {
                zone,
                zone_label: zone.label(),
                part: part.clone(),
            })
            .collect();
        let status = store.status();

        Self {
            placed,
            validation_error: store.active_validation_error(now).map(str::to_string),
            selected_part: store.selected_part().cloned(),
            ready: store.is_system_ready(),
            status,
            status_label: status.label(),
            specs: SystemSpecsView::from(&store.summary()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub motherboard: Motherboard,
    pub sections: Vec<LibrarySection>,
}

impl From<&PartCatalog> for CatalogView {
    fn from(catalog: &PartCatalog) -> Self {
        Self {
            motherboard: catalog.motherboard().clone(),
            sections: catalog.library(),
        }
    }
}
