use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use twv_cli::ProcessReport;

use crate::cli::OutputFormatArg;

pub fn print_report(report: &ProcessReport, format: OutputFormatArg) -> Result<()> {
    println!("{}", render_report(report, format)?);
    Ok(())
}

pub fn render_report(report: &ProcessReport, format: OutputFormatArg) -> Result<String> {
    match format {
        OutputFormatArg::Json => {
            serde_json::to_string_pretty(report).context("serialize report")
        }
        OutputFormatArg::Lines => Ok(report.output.join("\n")),
        OutputFormatArg::Table => {
            let first = report
                .first_item
                .as_ref()
                .map_or_else(|| "-".to_string(), ToString::to_string);
            Ok(format!(
                "Config: {}\nItems: {}\nFirst item: {}\n{}",
                report.config_name,
                report.item_count,
                first,
                output_table(report)
            ))
        }
    }
}

fn output_table(report: &ProcessReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Output")]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for (index, value) in report.output.iter().enumerate() {
        table.add_row(vec![dim_cell(index + 1), Cell::new(value)]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
