//! Terminal summary for a validation run.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::RunResult;

pub fn print_summary(result: &RunResult, print_report: bool) {
    if print_report {
        println!("{}", result.report);
        println!();
    }
    println!("Report saved to: {}", result.report_path.display());
    if let Some(path) = &result.json_report_path {
        println!("JSON report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Section"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    for section in &result.run.sections {
        table.add_row(vec![
            Cell::new(&section.name),
            count_cell(section.result.error_count(), Color::Red),
            count_cell(section.result.warning_count(), Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(result.run.total_errors(), Color::Red).add_attribute(Attribute::Bold),
        count_cell(result.run.total_warnings(), Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if result.passed() {
        println!("Overall status: PASS");
    } else {
        println!("Overall status: FAIL");
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        Cell::new(count).fg(Color::Green)
    } else {
        Cell::new(count).fg(color)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
