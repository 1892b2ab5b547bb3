use super::domain::Motherboard;
use super::specs::boot_power_estimate;
use super::zone::{PlacementMap, Zone, ZoneFamily};
use serde::{Deserialize, Serialize};

/// Would the assembled system power on?
///
/// Needs a CPU matching the board socket, at least one memory module, and a
/// PSU rated for the keyword-based load estimate.
pub fn is_system_ready(placed: &PlacementMap, board: &Motherboard) -> bool {
    let Some(cpu) = placed.get(Zone::CPU) else {
        return false;
    };
    if !board.accepts_socket(cpu.socket.as_deref()) {
        return false;
    }
    if !placed.any_in_family(ZoneFamily::Ram) {
        return false;
    }
    let Some(psu) = placed.get(Zone::PSU) else {
        return false;
    };

    let load = boot_power_estimate(Some(cpu), placed.get(Zone::PCIE_X16));
    psu.wattage_or_zero() >= load
}

/// Headline status shown beside the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildStatus {
    ReadyToBoot,
    MissingPowerSupply,
    IncompleteBuild,
}

impl BuildStatus {
    pub fn evaluate(placed: &PlacementMap, board: &Motherboard) -> Self {
        if is_system_ready(placed, board) {
            Self::ReadyToBoot
        } else if !placed.is_occupied(Zone::PSU) {
            Self::MissingPowerSupply
        } else {
            Self::IncompleteBuild
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ReadyToBoot => "Ready to Boot",
            Self::MissingPowerSupply => "Missing Power Supply",
            Self::IncompleteBuild => "Incomplete Build",
        }
    }
}
