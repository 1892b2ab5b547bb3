use super::domain::Part;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Family tag shared by every zone of the same slot type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZoneFamily {
    Cpu,
    Cooler,
    Ram,
    PcieX16,
    PcieX1,
    M2,
    Sata,
    Psu,
}

impl ZoneFamily {
    /// Number of zones in the family.
    pub const fn slots(self) -> u8 {
        match self {
            Self::Ram | Self::PcieX1 => 3,
            Self::M2 => 2,
            _ => 1,
        }
    }

    const fn prefix(self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Cooler => "cooler",
            Self::Ram => "ram",
            Self::PcieX16 => "pcie-x16",
            Self::PcieX1 => "pcie-x1",
            Self::M2 => "m2",
            Self::Sata => "sata",
            Self::Psu => "psu",
        }
    }
}

/// A motherboard slot: a family plus a 1-based index within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Zone {
    family: ZoneFamily,
    index: u8,
}

impl Zone {
    pub const CPU: Zone = Zone::single(ZoneFamily::Cpu);
    pub const COOLER: Zone = Zone::single(ZoneFamily::Cooler);
    pub const RAM_1: Zone = Zone::indexed(ZoneFamily::Ram, 1);
    pub const RAM_2: Zone = Zone::indexed(ZoneFamily::Ram, 2);
    pub const RAM_3: Zone = Zone::indexed(ZoneFamily::Ram, 3);
    pub const PCIE_X16: Zone = Zone::single(ZoneFamily::PcieX16);
    pub const PCIE_X1_1: Zone = Zone::indexed(ZoneFamily::PcieX1, 1);
    pub const PCIE_X1_2: Zone = Zone::indexed(ZoneFamily::PcieX1, 2);
    pub const PCIE_X1_3: Zone = Zone::indexed(ZoneFamily::PcieX1, 3);
    pub const M2_1: Zone = Zone::indexed(ZoneFamily::M2, 1);
    pub const M2_2: Zone = Zone::indexed(ZoneFamily::M2, 2);
    pub const SATA: Zone = Zone::single(ZoneFamily::Sata);
    pub const PSU: Zone = Zone::single(ZoneFamily::Psu);

    /// Every zone on the board, in display order.
    pub const ALL: [Zone; 13] = [
        Self::CPU,
        Self::COOLER,
        Self::RAM_1,
        Self::RAM_2,
        Self::RAM_3,
        Self::PCIE_X16,
        Self::PCIE_X1_1,
        Self::PCIE_X1_2,
        Self::PCIE_X1_3,
        Self::M2_1,
        Self::M2_2,
        Self::SATA,
        Self::PSU,
    ];

    const fn single(family: ZoneFamily) -> Self {
        Self { family, index: 1 }
    }

    const fn indexed(family: ZoneFamily, index: u8) -> Self {
        Self { family, index }
    }

    /// Look up a zone by family and 1-based index.
    pub fn new(family: ZoneFamily, index: u8) -> Option<Self> {
        (1..=family.slots())
            .contains(&index)
            .then_some(Self { family, index })
    }

    pub const fn family(self) -> ZoneFamily {
        self.family
    }

    pub const fn index(self) -> u8 {
        self.index
    }

    pub fn id(self) -> String {
        if self.family.slots() == 1 {
            self.family.prefix().to_string()
        } else {
            format!("{}-{}", self.family.prefix(), self.index)
        }
    }

    pub fn label(self) -> String {
        match self.family {
            ZoneFamily::Cpu => "CPU Socket".to_string(),
            ZoneFamily::Cooler => "CPU Cooler".to_string(),
            ZoneFamily::Ram => format!("D{}", self.index),
            ZoneFamily::PcieX16 => "PCIe x16 (GPU)".to_string(),
            ZoneFamily::PcieX1 => "PCIe x1".to_string(),
            ZoneFamily::M2 => format!("M.2 NVMe #{}", self.index),
            ZoneFamily::Sata => "SATA Ports".to_string(),
            ZoneFamily::Psu => "Power Supply".to_string(),
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown zone '{0}'")]
pub struct ZoneParseError(pub String);

impl FromStr for Zone {
    type Err = ZoneParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let raw = value.trim().to_ascii_lowercase();
        let unknown = || ZoneParseError(value.to_string());

        if let Some(zone) = Self::ALL
            .iter()
            .copied()
            .find(|zone| zone.family.slots() == 1 && zone.family.prefix() == raw)
        {
            return Ok(zone);
        }

        for family in [ZoneFamily::Ram, ZoneFamily::PcieX1, ZoneFamily::M2] {
            let Some(suffix) = raw
                .strip_prefix(family.prefix())
                .and_then(|rest| rest.strip_prefix('-'))
            else {
                continue;
            };
            let index = suffix.parse::<u8>().map_err(|_| unknown())?;
            return Self::new(family, index).ok_or_else(unknown);
        }

        Err(unknown())
    }
}

impl TryFrom<String> for Zone {
    type Error = ZoneParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Zone> for String {
    fn from(zone: Zone) -> Self {
        zone.id()
    }
}

/// Zone to part assignment. At most one part per zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlacementMap {
    slots: BTreeMap<Zone, Part>,
}

impl PlacementMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, zone: Zone) -> Option<&Part> {
        self.slots.get(&zone)
    }

    pub fn is_occupied(&self, zone: Zone) -> bool {
        self.slots.contains_key(&zone)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Occupied zones in board order.
    pub fn iter(&self) -> impl Iterator<Item = (Zone, &Part)> {
        self.slots.iter().map(|(zone, part)| (*zone, part))
    }

    pub fn in_family(&self, family: ZoneFamily) -> impl Iterator<Item = (Zone, &Part)> {
        self.iter().filter(move |(zone, _)| zone.family() == family)
    }

    pub fn any_in_family(&self, family: ZoneFamily) -> bool {
        self.in_family(family).next().is_some()
    }

    pub(crate) fn insert(&mut self, zone: Zone, part: Part) -> Option<Part> {
        self.slots.insert(zone, part)
    }

    pub(crate) fn remove(&mut self, zone: Zone) -> Option<Part> {
        self.slots.remove(&zone)
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }
}

impl FromIterator<(Zone, Part)> for PlacementMap {
    fn from_iter<T: IntoIterator<Item = (Zone, Part)>>(iter: T) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}
