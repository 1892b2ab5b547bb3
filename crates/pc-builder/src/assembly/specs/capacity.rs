use regex::Regex;
use std::sync::OnceLock;

const GB_PER_TB: f64 = 1000.0;

fn ram_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d+)GB").expect("static pattern compiles"))
}

fn capacity_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(TB|GB)?").expect("static pattern compiles")
    })
}

/// Memory size from a module's display name, e.g. "Corsair Vengeance 16GB" -> 16.
pub(crate) fn ram_gb_from_name(name: &str) -> u32 {
    ram_pattern()
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
        .unwrap_or(0)
}

/// Drive size in GB from a capacity descriptor such as "500GB" or "2TB".
/// A bare number is read as GB; fractional sizes round to the nearest GB.
pub(crate) fn storage_gb(capacity: &str) -> u32 {
    let Some(caps) = capacity_pattern().captures(capacity) else {
        return 0;
    };
    let amount: f64 = caps
        .get(1)
        .and_then(|digits| digits.as_str().parse().ok())
        .unwrap_or(0.0);

    let gigabytes = match caps.get(2).map(|unit| unit.as_str().to_ascii_uppercase()) {
        Some(unit) if unit == "TB" => amount * GB_PER_TB,
        _ => amount,
    };
    gigabytes.round().min(f64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_gigabytes_glued_to_the_unit() {
        assert_eq!(ram_gb_from_name("G.Skill Trident Z 32GB"), 32);
        assert_eq!(ram_gb_from_name("Corsair Vengeance RGB 16GB"), 16);
        assert_eq!(ram_gb_from_name("Mystery Stick 16 GB"), 0);
        assert_eq!(ram_gb_from_name("No size"), 0);
    }

    #[test]
    fn converts_terabytes() {
        assert_eq!(storage_gb("500GB"), 500);
        assert_eq!(storage_gb("1TB"), 1000);
        assert_eq!(storage_gb("2 tb"), 2000);
        assert_eq!(storage_gb("256"), 256);
        assert_eq!(storage_gb("huge"), 0);
    }

    #[test]
    fn keeps_fractional_sizes() {
        assert_eq!(storage_gb("1.5TB"), 1500);
        assert_eq!(storage_gb("0.25 TB"), 250);
        assert_eq!(storage_gb("120.6GB"), 121);
    }
}
