mod capacity;
mod classification;
mod power;
mod summary;

pub use classification::SystemType;
pub use power::{boot_power_estimate, summary_power_estimate};
pub use summary::BuildSummary;
