//! Text rendering for drawings, frequency tables and tool listings

use crate::analysis::frequency::FrequencyTables;
use crate::model::{RawRecord, SyntheticDrawing};
use crate::tool::descriptor::ToolDescriptor;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// Tabulate draw date and winning numbers, one row per record
pub fn render_recent_drawings(records: &[RawRecord]) -> String {
    let mut table = new_table(vec!["#", "Draw Date", "Winning Numbers"]);
    for (i, record) in records.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            record.date().to_string(),
            record.winning_numbers.clone(),
        ]);
    }
    table.to_string()
}

/// Tabulate generated drawings with main and special numbers in separate columns
pub fn render_drawings(drawings: &[SyntheticDrawing]) -> String {
    if drawings.is_empty() {
        return "No drawings generated.".to_string();
    }

    let mut table = new_table(vec!["#", "Main Numbers", "Special"]);
    for (i, drawing) in drawings.iter().enumerate() {
        let main = drawing
            .main()
            .iter()
            .map(|n| format!("{n:2}"))
            .collect::<Vec<_>>()
            .join(" - ");
        table.add_row(vec![
            (i + 1).to_string(),
            main,
            format!("{:2}", drawing.special()),
        ]);
    }
    table.to_string()
}

/// Tabulate the `top` most common main and special values side by side
pub fn render_frequencies(tables: &FrequencyTables, top: usize) -> String {
    let main = tables.main.most_common(top);
    let special = tables.special.most_common(top);
    let share = |count: u32, total: u64| {
        if total == 0 {
            0.0
        } else {
            f64::from(count) * 100.0 / total as f64
        }
    };

    let mut table = new_table(vec!["Rank", "Main", "Count", "Share", "Special", "Count", "Share"]);
    for rank in 0..main.len().max(special.len()) {
        let mut row = vec![(rank + 1).to_string()];
        for (entries, total) in [(&main, tables.main.total()), (&special, tables.special.total())] {
            match entries.get(rank) {
                Some(&(value, count)) => {
                    row.push(value.to_string());
                    row.push(count.to_string());
                    row.push(format!("{:.1}%", share(count, total)));
                }
                None => row.extend([String::new(), String::new(), String::new()]),
            }
        }
        table.add_row(row);
    }

    format!(
        "{} drawings analyzed ({} distinct main, {} distinct special)\n{table}",
        tables.drawings,
        tables.main.distinct(),
        tables.special.distinct()
    )
}

/// Tabulate tool names with the first line of their description
pub fn render_tool_list(descriptors: &[ToolDescriptor]) -> String {
    let mut table = new_table(vec!["Tool Name", "Description"]);
    for descriptor in descriptors {
        table.add_row(vec![
            descriptor.name.to_string(),
            descriptor.summary().to_string(),
        ]);
    }
    table.to_string()
}
