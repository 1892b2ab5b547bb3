//! Power draw estimates.
//!
//! The summary panel uses a flat per-slot figure; the boot check uses a
//! keyword table keyed on CPU and GPU names. The two are kept separate.

use super::super::domain::Part;
use super::super::zone::PlacementMap;

const SUMMARY_BASE_WATTS: u32 = 50;
const SUMMARY_WATTS_PER_PART: u32 = 45;

const BOOT_BASE_WATTS: u32 = 100;
const CPU_DEFAULT_WATTS: u32 = 65;
const CPU_DRAW: &[(&[&str], u32)] = &[(&["Ryzen 9", "i7"], 105), (&["Ryzen 7"], 90)];
const GPU_DRAW: &[(&str, u32)] = &[("4090", 450), ("3070", 220), ("3060", 170), ("6600", 160)];

/// `50 + 45 x occupied zones`, shown next to the PSU rating.
pub fn summary_power_estimate(placed: &PlacementMap) -> u32 {
    let parts = u32::try_from(placed.len()).unwrap_or(u32::MAX);
    SUMMARY_BASE_WATTS.saturating_add(SUMMARY_WATTS_PER_PART.saturating_mul(parts))
}

/// Typical load used by the boot check.
pub fn boot_power_estimate(cpu: Option<&Part>, gpu: Option<&Part>) -> u32 {
    let cpu_name = cpu.map(|part| part.name.as_str()).unwrap_or_default();
    let gpu_name = gpu.map(|part| part.name.as_str()).unwrap_or_default();

    let cpu_watts = CPU_DRAW
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| cpu_name.contains(keyword)))
        .map(|(_, watts)| *watts)
        .unwrap_or(CPU_DEFAULT_WATTS);

    let gpu_watts = GPU_DRAW
        .iter()
        .find(|(keyword, _)| gpu_name.contains(keyword))
        .map(|(_, watts)| *watts)
        .unwrap_or(0);

    BOOT_BASE_WATTS + cpu_watts + gpu_watts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::domain::PartKind;

    fn named(kind: PartKind, name: &str) -> Part {
        Part::new("sample", kind, name)
    }

    #[test]
    fn boot_estimate_follows_keyword_table() {
        let ryzen9 = named(PartKind::Cpu, "AMD Ryzen 9 5900X");
        let ryzen5 = named(PartKind::Cpu, "AMD Ryzen 5 5600X");
        let rtx3070 = named(PartKind::Gpu, "NVIDIA RTX 3070");
        let gtx1660 = named(PartKind::Gpu, "NVIDIA GeForce GTX 1660");

        assert_eq!(boot_power_estimate(Some(&ryzen9), Some(&rtx3070)), 425);
        assert_eq!(boot_power_estimate(Some(&ryzen5), None), 165);
        assert_eq!(boot_power_estimate(Some(&ryzen5), Some(&gtx1660)), 165);
        assert_eq!(
            boot_power_estimate(Some(&named(PartKind::Cpu, "Intel Core i7")), None),
            205
        );
    }

    #[test]
    fn summary_estimate_scales_with_part_count() {
        assert_eq!(summary_power_estimate(&PlacementMap::new()), 50);
    }
}
