use super::super::domain::StorageInterface;
use super::super::zone::{PlacementMap, Zone, ZoneFamily};
use super::capacity::{ram_gb_from_name, storage_gb};
use super::classification::SystemType;
use super::power::summary_power_estimate;
use serde::Serialize;

const NONE_LABEL: &str = "None";

/// Figures derived from a placement map. Always recomputed, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildSummary {
    pub cpu: Option<String>,
    pub ram_total_gb: u32,
    pub ram_slots_used: usize,
    pub gpu: Option<String>,
    pub storage_total_gb: u32,
    pub m2_drives: usize,
    pub sata_drives: usize,
    pub total_cost: u32,
    pub estimated_power_watts: u32,
    pub supplied_power_watts: u32,
    pub sufficient_power: bool,
    pub system_type: SystemType,
    pub system_type_label: &'static str,
}

impl BuildSummary {
    pub fn from_placements(placed: &PlacementMap) -> Self {
        let cpu = placed.get(Zone::CPU).map(|part| part.name.clone());
        let gpu = placed.get(Zone::PCIE_X16).map(|part| part.name.clone());

        let (ram_total_gb, ram_slots_used) = placed
            .in_family(ZoneFamily::Ram)
            .fold((0u32, 0usize), |(total, slots), (_, part)| {
                (total.saturating_add(ram_gb_from_name(&part.name)), slots + 1)
            });

        let drives = placed
            .iter()
            .filter(|(zone, _)| matches!(zone.family(), ZoneFamily::M2 | ZoneFamily::Sata));
        let mut storage_total_gb = 0u32;
        let mut m2_drives = 0;
        let mut sata_drives = 0;
        for (zone, drive) in drives {
            storage_total_gb =
                storage_total_gb.saturating_add(drive.capacity.as_deref().map_or(0, storage_gb));
            if zone.family() == ZoneFamily::M2 {
                m2_drives += 1;
            } else {
                sata_drives += 1;
            }
        }

        let total_cost = placed
            .iter()
            .fold(0u32, |sum, (_, part)| sum.saturating_add(part.price_or_zero()));

        let estimated_power_watts = summary_power_estimate(placed);
        let supplied_power_watts = placed
            .get(Zone::PSU)
            .map_or(0, |psu| psu.wattage_or_zero());

        let system_type =
            SystemType::classify(placed.len(), cpu.is_some(), ram_total_gb, gpu.is_some());

        Self {
            cpu,
            ram_total_gb,
            ram_slots_used,
            gpu,
            storage_total_gb,
            m2_drives,
            sata_drives,
            total_cost,
            estimated_power_watts,
            supplied_power_watts,
            sufficient_power: supplied_power_watts >= estimated_power_watts,
            system_type,
            system_type_label: system_type.label(),
        }
    }

    pub fn cpu_display(&self) -> &str {
        self.cpu.as_deref().unwrap_or(NONE_LABEL)
    }

    pub fn gpu_display(&self) -> &str {
        self.gpu.as_deref().unwrap_or(NONE_LABEL)
    }

    pub fn ram_display(&self) -> String {
        if self.ram_total_gb > 0 {
            format!("{} GB", self.ram_total_gb)
        } else {
            NONE_LABEL.to_string()
        }
    }

    pub fn storage_display(&self) -> String {
        if self.storage_total_gb > 0 {
            format!("{} GB", self.storage_total_gb)
        } else {
            NONE_LABEL.to_string()
        }
    }

    /// Drive mix such as "2x M.2, 1x SATA".
    pub fn storage_breakdown(&self) -> String {
        let mut kinds = Vec::new();
        if self.m2_drives > 0 {
            kinds.push(format!("{}x {}", self.m2_drives, StorageInterface::M2.label()));
        }
        if self.sata_drives > 0 {
            kinds.push(format!("{}x {}", self.sata_drives, StorageInterface::Sata.label()));
        }

        if kinds.is_empty() {
            NONE_LABEL.to_string()
        } else {
            kinds.join(", ")
        }
    }
}
