use crate::legend::build_legend;
use crate::utils::style::colour_rgba8;
use crate::view::{LoadStatus, MapView};
use comfy_table::{Attribute, Cell, CellAlignment, Table};

pub fn overlay_table(view: &MapView) -> Table {
    let mut table = Table::new();
    table
        .set_header(vec![
            Cell::new("")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("Overlay")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("Status")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("Shapes")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
        ])
        .load_preset(comfy_table::presets::ASCII_BORDERS_ONLY_CONDENSED);

    for summary in view.summaries() {
        let icon = match summary.status {
            LoadStatus::Loaded => "✅",
            LoadStatus::Failed => "⚠️",
            LoadStatus::Pending => "⏳",
        };
        let status = match summary.status {
            LoadStatus::Loaded => "loaded",
            LoadStatus::Failed => "failed",
            LoadStatus::Pending => "pending",
        };
        table.add_row(vec![
            Cell::new(icon).set_alignment(CellAlignment::Center),
            Cell::new(summary.name),
            Cell::new(status).set_alignment(CellAlignment::Center),
            Cell::new(summary.shapes).set_alignment(CellAlignment::Center),
        ]);
    }
    table
}

pub fn legend_table() -> Table {
    let mut table = Table::new();
    table
        .set_header(vec![
            Cell::new("Depth (km)").add_attribute(Attribute::Bold),
            Cell::new("Colour").add_attribute(Attribute::Bold),
            Cell::new("").add_attribute(Attribute::Bold),
        ])
        .load_preset(comfy_table::presets::ASCII_BORDERS_ONLY_CONDENSED);

    for entry in build_legend().entries {
        let swatch = match colour_rgba8(entry.colour) {
            Some([r, g, b, _]) => format!("\x1b[38;2;{};{};{}m███\x1b[0m", r, g, b),
            None => String::new(),
        };
        table.add_row(vec![
            Cell::new(entry.label),
            Cell::new(entry.colour),
            Cell::new(swatch),
        ]);
    }
    table
}

pub fn print_overlay_summary(view: &MapView) {
    println!("\nOverlay summary:\n{}", overlay_table(view));
    println!("\nDepth legend:\n{}", legend_table());

    let failures: Vec<String> = view
        .slots()
        .iter()
        .filter_map(|slot| {
            slot.failure()
                .map(|reason| format!("  ⚠️{}: {}", slot.name(), reason))
        })
        .collect();

    if !failures.is_empty() {
        println!("\nWarnings:");
        for warning in failures {
            println!("{}", warning);
        }
        // The page itself stays silent about missing feeds
        println!("\nTips:");
        println!("  Failed overlays stay listed in the layer control but are empty.");
    }

    println!();
}
