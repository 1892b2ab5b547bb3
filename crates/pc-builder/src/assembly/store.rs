use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::catalog::PartCatalog;
use super::domain::{Part, PartId, PartKind, StorageInterface};
use super::readiness::{is_system_ready, BuildStatus};
use super::specs::BuildSummary;
use super::validation::{check_placement, PlacementRejection};
use super::zone::{PlacementMap, Zone};

pub const DEFAULT_ERROR_DISPLAY_MS: u64 = 2_000;
pub const DEFAULT_RANDOM_BUILD_MIN_PSU_WATTS: u32 = 600;

/// Tunables for a build session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSettings {
    /// How long a rejection message stays visible.
    pub error_display_ms: u64,
    /// Smallest PSU the random build will pick.
    pub random_build_min_psu_watts: u32,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            error_display_ms: DEFAULT_ERROR_DISPLAY_MS,
            random_build_min_psu_watts: DEFAULT_RANDOM_BUILD_MIN_PSU_WATTS,
        }
    }
}

/// Last rejection surfaced to the learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationNotice {
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

impl ValidationNotice {
    pub fn is_visible_at(&self, now: DateTime<Utc>, display_ms: u64) -> bool {
        let elapsed = now.signed_duration_since(self.raised_at).num_milliseconds();
        elapsed < i64::try_from(display_ms).unwrap_or(i64::MAX)
    }
}

/// Recoverable failures of build operations. None of them change the placement map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("unknown part '{0}'")]
    UnknownPart(PartId),
    #[error(transparent)]
    Rejected(#[from] PlacementRejection),
    #[error("Remove the CPU cooler first before removing the CPU.")]
    CoolerAttached,
}

/// Owns the placement map and mediates every change to it.
#[derive(Debug, Clone)]
pub struct BuildStore {
    catalog: Arc<PartCatalog>,
    settings: BuildSettings,
    placed: PlacementMap,
    validation_error: Option<ValidationNotice>,
    selected: Option<PartId>,
}

impl BuildStore {
    pub fn new(catalog: Arc<PartCatalog>) -> Self {
        Self::with_settings(catalog, BuildSettings::default())
    }

    pub fn with_settings(catalog: Arc<PartCatalog>, settings: BuildSettings) -> Self {
        Self {
            catalog,
            settings,
            placed: PlacementMap::new(),
            validation_error: None,
            selected: None,
        }
    }

    pub fn catalog(&self) -> &PartCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> BuildSettings {
        self.settings
    }

    pub fn placed_parts(&self) -> &PlacementMap {
        &self.placed
    }

    pub fn validation_error(&self) -> Option<&str> {
        self.validation_error
            .as_ref()
            .map(|notice| notice.message.as_str())
    }

    pub fn validation_notice(&self) -> Option<&ValidationNotice> {
        self.validation_error.as_ref()
    }

    /// The last rejection, hidden once its display window has passed.
    pub fn active_validation_error(&self, now: DateTime<Utc>) -> Option<&str> {
        self.validation_error
            .as_ref()
            .filter(|notice| notice.is_visible_at(now, self.settings.error_display_ms))
            .map(|notice| notice.message.as_str())
    }

    pub fn selected_part(&self) -> Option<&PartId> {
        self.selected.as_ref()
    }

    pub fn is_system_ready(&self) -> bool {
        is_system_ready(&self.placed, self.catalog.motherboard())
    }

    pub fn status(&self) -> BuildStatus {
        BuildStatus::evaluate(&self.placed, self.catalog.motherboard())
    }

    pub fn summary(&self) -> BuildSummary {
        BuildSummary::from_placements(&self.placed)
    }

    /// Install a catalog part into `zone` if the rules allow it.
    ///
    /// Failures are also kept as the current validation error.
    pub fn place(&mut self, part_id: &PartId, zone: Zone) -> Result<(), BuildError> {
        let Some(part) = self.catalog.find(part_id).cloned() else {
            return Err(self.reject(BuildError::UnknownPart(part_id.clone())));
        };

        if let Err(rejection) =
            check_placement(&part, zone, &self.placed, self.catalog.motherboard())
        {
            warn!(part = %part.id, %zone, reason = %rejection, "installation failed");
            return Err(self.reject(rejection.into()));
        }

        info!(part = %part.id, %zone, name = %part.name, "component installed");
        self.placed.insert(zone, part);
        self.validation_error = None;
        Ok(())
    }

    /// Take the occupant out of `zone`. The cooler has to come off before the CPU.
    pub fn remove(&mut self, zone: Zone) -> Result<Option<Part>, BuildError> {
        if zone == Zone::CPU && self.placed.is_occupied(Zone::COOLER) {
            warn!(%zone, "cpu removal blocked by mounted cooler");
            return Err(self.reject(BuildError::CoolerAttached));
        }

        let removed = self.placed.remove(zone);
        if let Some(part) = &removed {
            info!(part = %part.id, %zone, "component removed");
        }
        Ok(removed)
    }

    pub fn reset(&mut self) {
        self.placed.clear();
        self.validation_error = None;
        self.selected = None;
        info!("build reset");
    }

    /// Replace the board contents with a known-good starter build.
    ///
    /// Picks the first compatible entry of each kind; a kind with no match, or a
    /// slot the board does not carry, is left empty.
    pub fn random_build(&mut self) {
        let catalog = Arc::clone(&self.catalog);
        let board = catalog.motherboard();
        let mut assembled = PlacementMap::new();

        if let Some(cpu) = catalog
            .of_kind(PartKind::Cpu)
            .find(|cpu| board.accepts_socket(cpu.socket.as_deref()))
        {
            assembled.insert(Zone::CPU, cpu.clone());
            if let Some(cooler) = catalog.of_kind(PartKind::Cooler).next() {
                assembled.insert(Zone::COOLER, cooler.clone());
            }
        }

        // Dual channel prefers slots 1 and 3; smaller boards fall back to slot 2.
        let memory_slots = [Zone::RAM_1, Zone::RAM_3, Zone::RAM_2]
            .into_iter()
            .filter(|zone| board.has_zone(*zone));
        for (zone, stick) in memory_slots.zip(catalog.of_kind(PartKind::Ram).take(2)) {
            assembled.insert(zone, stick.clone());
        }

        if board.has_zone(Zone::PCIE_X16) {
            if let Some(gpu) = catalog.of_kind(PartKind::Gpu).next() {
                assembled.insert(Zone::PCIE_X16, gpu.clone());
            }
        }

        let m2_slot = [Zone::M2_1, Zone::M2_2]
            .into_iter()
            .find(|zone| board.has_zone(*zone));
        if let Some((zone, ssd)) = m2_slot.zip(
            catalog
                .of_kind(PartKind::Ssd)
                .find(|ssd| ssd.interface == Some(StorageInterface::M2)),
        ) {
            assembled.insert(zone, ssd.clone());
        }

        let min_watts = self.settings.random_build_min_psu_watts;
        if let Some(psu) = catalog
            .of_kind(PartKind::Psu)
            .find(|psu| psu.wattage_or_zero() >= min_watts)
        {
            assembled.insert(Zone::PSU, psu.clone());
        }

        self.placed = assembled;
        info!(parts = self.placed.len(), "random build generated");
    }

    /// Remember a part for tap-to-place. Clears any pending error.
    pub fn select_part(&mut self, part_id: &PartId) -> Result<(), BuildError> {
        if self.catalog.find(part_id).is_none() {
            return Err(self.reject(BuildError::UnknownPart(part_id.clone())));
        }

        self.selected = Some(part_id.clone());
        self.validation_error = None;
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Place the selected part, if any. The selection is consumed either way.
    pub fn place_selected(&mut self, zone: Zone) -> Result<Option<PartId>, BuildError> {
        let Some(part_id) = self.selected.take() else {
            return Ok(None);
        };

        self.place(&part_id, zone)?;
        Ok(Some(part_id))
    }

    fn reject(&mut self, error: BuildError) -> BuildError {
        self.validation_error = Some(ValidationNotice {
            message: error.to_string(),
            raised_at: Utc::now(),
        });
        error
    }
}
