use serde::{Deserialize, Serialize};

/// Coarse label for what the assembled machine is good for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemType {
    EmptyCase,
    Building,
    BeastWorkstation,
    GamingRig,
    EntryGaming,
    HeavyMultitasking,
    OfficeHome,
    PotatoPc,
    /// Non-functional default. Every populated map resolves to a more specific label.
    Paperweight,
}

impl SystemType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::EmptyCase => "Empty Case",
            Self::Building => "Building...",
            Self::BeastWorkstation => "Beast Workstation",
            Self::GamingRig => "Gaming Rig",
            Self::EntryGaming => "Entry Gaming",
            Self::HeavyMultitasking => "Heavy Multitasking",
            Self::OfficeHome => "Office/Home",
            Self::PotatoPc => "Potato PC",
            Self::Paperweight => "Paperweight",
        }
    }

    /// Classify from the headline facts of a build.
    pub fn classify(part_count: usize, has_cpu: bool, ram_gb: u32, has_gpu: bool) -> Self {
        if has_cpu && ram_gb > 0 {
            return match (has_gpu, ram_gb) {
                (true, ram) if ram >= 32 => Self::BeastWorkstation,
                (true, ram) if ram >= 16 => Self::GamingRig,
                (true, _) => Self::EntryGaming,
                (false, ram) if ram >= 32 => Self::HeavyMultitasking,
                (false, ram) if ram >= 8 => Self::OfficeHome,
                (false, _) => Self::PotatoPc,
            };
        }

        if part_count > 0 {
            Self::Building
        } else {
            Self::EmptyCase
        }
    }
}
