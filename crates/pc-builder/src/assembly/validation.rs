use super::domain::{Motherboard, Part, PartKind, StorageInterface};
use super::zone::{PlacementMap, Zone, ZoneFamily};

/// Reasons a part cannot go into a zone. The `Display` text is shown to the learner.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementRejection {
    #[error("CPU must go in the CPU socket")]
    CpuWrongZone,
    #[error("Socket mismatch: CPU is {cpu}, Board is {board}")]
    SocketMismatch { cpu: String, board: String },
    #[error("CPU Cooler must go in the CPU cooler mount")]
    CoolerWrongZone,
    #[error("Install CPU first before mounting cooler")]
    CoolerWithoutCpu,
    #[error("RAM must go in a RAM slot")]
    RamWrongZone,
    #[error("Slot already occupied")]
    RamSlotOccupied,
    #[error("GPU must go in the PCIe x16 slot")]
    GpuWrongZone,
    #[error("PCIe x16 slot already occupied")]
    PcieX16Occupied,
    #[error("{card} card must go in a PCIe x1 slot")]
    ExpansionCardWrongZone { card: &'static str },
    #[error("PCIe x1 slot already occupied")]
    PcieX1Occupied,
    #[error("M.2 SSD must go in an M.2 slot")]
    M2WrongZone,
    #[error("M.2 slot already occupied")]
    M2Occupied,
    #[error("SATA SSD must go in the SATA area")]
    SataSsdWrongZone,
    #[error("SSD has no recognised storage interface")]
    UnknownInterface,
    #[error("HDD must go in the SATA area")]
    HddWrongZone,
    #[error("Power Supply must go in the Power Supply zone")]
    PsuWrongZone,
    #[error("Power Supply already installed")]
    PsuInstalled,
    #[error("The motherboard is the base board and cannot be placed in a slot")]
    MotherboardNotPlaceable,
    #[error("{zone} is not present on this board")]
    ZoneNotOnBoard { zone: String },
    #[error("{zone} already occupied")]
    ZoneOccupied { zone: String },
}

/// Decide whether `part` may be installed into `zone` given what is already placed.
///
/// Rules are checked per part kind and the first failing one wins. A part that
/// passes its kind rule still cannot displace an existing occupant. Zones the
/// board's layout does not carry are refused before any kind rule runs.
pub fn check_placement(
    part: &Part,
    zone: Zone,
    placed: &PlacementMap,
    board: &Motherboard,
) -> Result<(), PlacementRejection> {
    if !board.has_zone(zone) {
        return Err(PlacementRejection::ZoneNotOnBoard { zone: zone.id() });
    }

    let occupied = placed.is_occupied(zone);
    let family = zone.family();

    match part.kind {
        PartKind::Cpu => {
            if zone != Zone::CPU {
                return Err(PlacementRejection::CpuWrongZone);
            }
            if !board.accepts_socket(part.socket.as_deref()) {
                return Err(PlacementRejection::SocketMismatch {
                    cpu: part
                        .socket
                        .clone()
                        .unwrap_or_else(|| "unknown".to_string()),
                    board: board.socket.clone(),
                });
            }
        }
        PartKind::Cooler => {
            if zone != Zone::COOLER {
                return Err(PlacementRejection::CoolerWrongZone);
            }
            if !placed.is_occupied(Zone::CPU) {
                return Err(PlacementRejection::CoolerWithoutCpu);
            }
        }
        PartKind::Ram => {
            if family != ZoneFamily::Ram {
                return Err(PlacementRejection::RamWrongZone);
            }
            if occupied {
                return Err(PlacementRejection::RamSlotOccupied);
            }
        }
        PartKind::Gpu => {
            if zone != Zone::PCIE_X16 {
                return Err(PlacementRejection::GpuWrongZone);
            }
            if occupied {
                return Err(PlacementRejection::PcieX16Occupied);
            }
        }
        PartKind::WifiCard | PartKind::SoundCard => {
            if family != ZoneFamily::PcieX1 {
                let card = if part.kind == PartKind::WifiCard {
                    "WiFi"
                } else {
                    "Sound"
                };
                return Err(PlacementRejection::ExpansionCardWrongZone { card });
            }
            if occupied {
                return Err(PlacementRejection::PcieX1Occupied);
            }
        }
        PartKind::Ssd => match part.interface {
            Some(StorageInterface::M2) => {
                if family != ZoneFamily::M2 {
                    return Err(PlacementRejection::M2WrongZone);
                }
                if occupied {
                    return Err(PlacementRejection::M2Occupied);
                }
            }
            Some(StorageInterface::Sata) => {
                if zone != Zone::SATA {
                    return Err(PlacementRejection::SataSsdWrongZone);
                }
            }
            None => return Err(PlacementRejection::UnknownInterface),
        },
        PartKind::Hdd => {
            if zone != Zone::SATA {
                return Err(PlacementRejection::HddWrongZone);
            }
        }
        PartKind::Psu => {
            if zone != Zone::PSU {
                return Err(PlacementRejection::PsuWrongZone);
            }
            if occupied {
                return Err(PlacementRejection::PsuInstalled);
            }
        }
        PartKind::Motherboard => return Err(PlacementRejection::MotherboardNotPlaceable),
    }

    if occupied {
        return Err(PlacementRejection::ZoneOccupied { zone: zone.label() });
    }

    Ok(())
}
