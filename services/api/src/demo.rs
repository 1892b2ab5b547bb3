use chrono::Utc;
use clap::Args;
use pc_builder::assembly::{
    BuildSettings, BuildStateView, BuildStore, PartCatalog, PartId, Zone,
};
use pc_builder::config::AppConfig;
use pc_builder::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// CSV catalog to load instead of the configured one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Write the catalog as CSV to this path instead of listing it
    #[arg(long)]
    pub(crate) export: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// CSV catalog to load instead of the configured one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the final build state as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RandomArgs {
    /// CSV catalog to load instead of the configured one
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Smallest power supply the starter build may pick
    #[arg(long)]
    pub(crate) min_psu_watts: Option<u32>,
    /// Print the build state as JSON instead of a spec sheet
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let (catalog, _) = load_builder(args.catalog)?;

    if let Some(path) = args.export {
        let file = std::fs::File::create(&path)?;
        catalog.write_csv(file)?;
        println!(
            "Exported {} parts to {}",
            catalog.parts().len(),
            path.display()
        );
        return Ok(());
    }

    let board = catalog.motherboard();
    println!("Motherboard: {} ({})", board.name(), board.socket);
    println!(
        "Layout: {} RAM slots | {} PCIe slots | {} M.2 | {} SATA",
        board.layout.ram_slots,
        board.layout.pcie_slots.len(),
        board.layout.m2_slots,
        board.layout.sata_ports
    );

    for section in catalog.library() {
        println!("\n{} ({})", section.label, section.count);
        for part in &section.parts {
            let price = part
                .price
                .map(|price| format!("${price}"))
                .unwrap_or_else(|| "-".to_string());
            println!("  - {:<10} {:<34} {}", part.id.as_str(), part.name, price);
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let (catalog, settings) = load_builder(args.catalog)?;
    let mut store = BuildStore::with_settings(Arc::new(catalog), settings);

    println!("PC build walkthrough");
    println!("Board: {}", store.catalog().motherboard().name());

    let script: [(Step, &str); 9] = [
        (Step::Place("cooler-1", Zone::COOLER), "mount the cooler on an empty socket"),
        (Step::Place("cpu-1", Zone::CPU), "seat the CPU"),
        (Step::Place("cpu-1", Zone::RAM_1), "push the CPU into a memory slot"),
        (Step::Place("cooler-1", Zone::COOLER), "mount the cooler"),
        (Step::Remove(Zone::CPU), "pull the CPU with the cooler still on"),
        (Step::Place("ram-3", Zone::RAM_1), "add 16GB of memory"),
        (Step::Place("gpu-2", Zone::PCIE_X1_1), "slot the GPU into a x1 lane"),
        (Step::Place("gpu-2", Zone::PCIE_X16), "slot the GPU into the x16 lane"),
        (Step::Place("psu-2", Zone::PSU), "install the power supply"),
    ];

    for (index, (step, intent)) in script.into_iter().enumerate() {
        let outcome = match step {
            Step::Place(part, zone) => store.place(&PartId::new(part), zone).map(|_| ()),
            Step::Remove(zone) => store.remove(zone).map(|_| ()),
        };
        match outcome {
            Ok(()) => println!("{:>2}. {intent}: ok", index + 1),
            Err(err) => println!("{:>2}. {intent}: refused ({err})", index + 1),
        }
    }

    let view = BuildStateView::capture(&store, Utc::now());
    if args.json {
        print_json(&view);
    } else {
        render_spec_sheet(&view);
    }

    Ok(())
}

pub(crate) fn run_random(args: RandomArgs) -> Result<(), AppError> {
    let (catalog, mut settings) = load_builder(args.catalog)?;
    if let Some(watts) = args.min_psu_watts {
        settings.random_build_min_psu_watts = watts;
    }

    let mut store = BuildStore::with_settings(Arc::new(catalog), settings);
    store.random_build();

    let view = BuildStateView::capture(&store, Utc::now());
    if args.json {
        print_json(&view);
    } else {
        render_spec_sheet(&view);
    }
    Ok(())
}

enum Step {
    Place(&'static str, Zone),
    Remove(Zone),
}

fn load_builder(catalog: Option<PathBuf>) -> Result<(PartCatalog, BuildSettings), AppError> {
    let mut builder = AppConfig::load()?.builder;
    if catalog.is_some() {
        builder.catalog_path = catalog;
    }
    let parts = builder.load_catalog()?;
    Ok((parts, builder.settings))
}

fn print_json(view: &BuildStateView) {
    match serde_json::to_string_pretty(view) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("Build state unavailable: {err}"),
    }
}

fn render_spec_sheet(view: &BuildStateView) {
    println!("\nInstalled parts");
    if view.placed.is_empty() {
        println!("  (none)");
    }
    for placed in &view.placed {
        println!("  - {:<16} {}", placed.zone_label, placed.part.name);
    }

    let specs = &view.specs;
    println!("\nSystem specs");
    println!("  CPU:      {}", specs.cpu);
    println!("  RAM:      {} ({} slots)", specs.ram, specs.ram_slots);
    println!("  GPU:      {}", specs.gpu);
    println!("  Storage:  {} [{}]", specs.storage, specs.storage_types);
    println!(
        "  Power:    {} W estimated / {} W supplied{}",
        specs.estimated_power_watts,
        specs.supplied_power_watts,
        if specs.sufficient_power { "" } else { " (insufficient)" }
    );
    println!("  Cost:     ${}", specs.total_cost);
    println!("  Type:     {}", specs.system_type_label);
    println!("\nStatus: {}", view.status_label);
    if let Some(error) = &view.validation_error {
        println!("Last error: {error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_sheet_renders_for_empty_and_random_builds() {
        let mut store = BuildStore::new(Arc::new(PartCatalog::standard()));
        render_spec_sheet(&BuildStateView::capture(&store, Utc::now()));

        store.random_build();
        let view = BuildStateView::capture(&store, Utc::now());
        assert!(view.ready);
        render_spec_sheet(&view);
    }
}
