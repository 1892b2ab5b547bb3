use super::zone::{Zone, ZoneFamily};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier wrapper for catalog parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartId(pub String);

impl PartId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PartId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Category of a catalog part; decides which zones may accept it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartKind {
    Motherboard,
    Cpu,
    Cooler,
    Ram,
    Gpu,
    Ssd,
    Hdd,
    #[serde(alias = "wifi")]
    WifiCard,
    #[serde(alias = "sound")]
    SoundCard,
    Psu,
}

impl PartKind {
    /// Installable kinds in parts-library order.
    pub const fn installable() -> [Self; 9] {
        [
            Self::Cpu,
            Self::Cooler,
            Self::Ram,
            Self::Gpu,
            Self::Ssd,
            Self::Hdd,
            Self::WifiCard,
            Self::SoundCard,
            Self::Psu,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Motherboard => "motherboard",
            Self::Cpu => "cpu",
            Self::Cooler => "cooler",
            Self::Ram => "ram",
            Self::Gpu => "gpu",
            Self::Ssd => "ssd",
            Self::Hdd => "hdd",
            Self::WifiCard => "wifi-card",
            Self::SoundCard => "sound-card",
            Self::Psu => "psu",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Motherboard => "Motherboard",
            Self::Cpu => "CPU",
            Self::Cooler => "CPU Cooler",
            Self::Ram => "RAM",
            Self::Gpu => "Graphics Card",
            Self::Ssd => "SSD",
            Self::Hdd => "Hard Drive",
            Self::WifiCard => "WiFi Card",
            Self::SoundCard => "Sound Card",
            Self::Psu => "Power Supply",
        }
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "motherboard" => Ok(Self::Motherboard),
            "cpu" => Ok(Self::Cpu),
            "cooler" => Ok(Self::Cooler),
            "ram" => Ok(Self::Ram),
            "gpu" => Ok(Self::Gpu),
            "ssd" => Ok(Self::Ssd),
            "hdd" => Ok(Self::Hdd),
            "wifi-card" | "wifi" => Ok(Self::WifiCard),
            "sound-card" | "sound" => Ok(Self::SoundCard),
            "psu" => Ok(Self::Psu),
            other => Err(format!("unknown part type '{other}'")),
        }
    }
}

/// Storage attachment standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageInterface {
    #[serde(rename = "M.2")]
    M2,
    #[serde(rename = "SATA")]
    Sata,
}

impl StorageInterface {
    pub const fn label(self) -> &'static str {
        match self {
            Self::M2 => "M.2",
            Self::Sata => "SATA",
        }
    }
}

impl fmt::Display for StorageInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StorageInterface {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "M.2" | "M2" | "NVME" => Ok(Self::M2),
            "SATA" => Ok(Self::Sata),
            other => Err(format!("unknown storage interface '{other}'")),
        }
    }
}

/// Electrical width of a PCIe slot or card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PcieLane {
    X16,
    X8,
    X4,
    X1,
}

impl PcieLane {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X16 => "x16",
            Self::X8 => "x8",
            Self::X4 => "x4",
            Self::X1 => "x1",
        }
    }
}

impl fmt::Display for PcieLane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PcieLane {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "x16" => Ok(Self::X16),
            "x8" => Ok(Self::X8),
            "x4" => Ok(Self::X4),
            "x1" => Ok(Self::X1),
            other => Err(format!("unknown PCIe width '{other}'")),
        }
    }
}

/// Slot topology carried by the motherboard record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub ram_slots: u8,
    pub pcie_slots: Vec<PcieLane>,
    pub m2_slots: u8,
    pub sata_ports: u8,
}

impl BoardLayout {
    /// Whether the board physically carries `zone`. The socket, cooler mount and
    /// PSU bay are always present; slotted families are counted from the layout.
    pub fn has_zone(&self, zone: Zone) -> bool {
        let index = usize::from(zone.index());
        match zone.family() {
            ZoneFamily::Cpu | ZoneFamily::Cooler | ZoneFamily::Psu => true,
            ZoneFamily::Ram => index <= usize::from(self.ram_slots),
            ZoneFamily::PcieX16 => index <= self.lanes(PcieLane::X16),
            ZoneFamily::PcieX1 => index <= self.lanes(PcieLane::X1),
            ZoneFamily::M2 => index <= usize::from(self.m2_slots),
            ZoneFamily::Sata => self.sata_ports > 0,
        }
    }

    fn lanes(&self, width: PcieLane) -> usize {
        self.pcie_slots.iter().filter(|lane| **lane == width).count()
    }
}

/// Immutable catalog entry. Attributes beyond id/kind/name only apply to some kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub id: PartId,
    pub kind: PartKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface: Option<StorageInterface>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pcie_type: Option<PcieLane>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wattage: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<BoardLayout>,
}

impl Part {
    pub fn new(id: &str, kind: PartKind, name: &str) -> Self {
        Self {
            id: PartId::from(id),
            kind,
            name: name.to_string(),
            socket: None,
            interface: None,
            pcie_type: None,
            capacity: None,
            speed: None,
            wattage: None,
            price: None,
            layout: None,
        }
    }

    pub fn with_socket(mut self, socket: &str) -> Self {
        self.socket = Some(socket.to_string());
        self
    }

    pub fn with_interface(mut self, interface: StorageInterface) -> Self {
        self.interface = Some(interface);
        self
    }

    pub fn with_pcie(mut self, lane: PcieLane) -> Self {
        self.pcie_type = Some(lane);
        self
    }

    pub fn with_capacity(mut self, capacity: &str) -> Self {
        self.capacity = Some(capacity.to_string());
        self
    }

    pub fn with_speed(mut self, speed: &str) -> Self {
        self.speed = Some(speed.to_string());
        self
    }

    pub fn with_wattage(mut self, wattage: u32) -> Self {
        self.wattage = Some(wattage);
        self
    }

    pub fn with_price(mut self, price: u32) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_layout(mut self, layout: BoardLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn price_or_zero(&self) -> u32 {
        self.price.unwrap_or(0)
    }

    pub fn wattage_or_zero(&self) -> u32 {
        self.wattage.unwrap_or(0)
    }
}

/// The fixed board every placement is validated against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Motherboard {
    pub part: Part,
    pub socket: String,
    pub layout: BoardLayout,
}

impl Motherboard {
    /// Promote a motherboard record; `None` when the record lacks a socket or layout.
    pub fn from_part(part: &Part) -> Option<Self> {
        if part.kind != PartKind::Motherboard {
            return None;
        }

        let socket = part.socket.clone()?;
        let layout = part.layout.clone()?;
        Some(Self {
            part: part.clone(),
            socket,
            layout,
        })
    }

    pub fn id(&self) -> &PartId {
        &self.part.id
    }

    pub fn name(&self) -> &str {
        &self.part.name
    }

    pub fn has_zone(&self, zone: Zone) -> bool {
        self.layout.has_zone(zone)
    }

    pub fn accepts_socket(&self, socket: Option<&str>) -> bool {
        socket == Some(self.socket.as_str())
    }
}
