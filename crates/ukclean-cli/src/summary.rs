use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use ukclean_model::{DetectedType, DetectedValidationResult, ProcessedRow};

use crate::types::ProcessOutcome;

pub fn print_summary(outcome: &ProcessOutcome, max_issues: usize) {
    let result = &outcome.result;
    println!("File: {}", result.file_name);
    println!(
        "Rows: {} ({} data)",
        result.total_rows,
        result.total_rows.saturating_sub(1)
    );
    if let Some(target) = &outcome.export {
        println!("Export ({}): {}", target.format, target.path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Type"),
        header_cell("Checked"),
        header_cell("Valid"),
        header_cell("Fixed"),
        header_cell("Invalid"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let mut totals = TypeCounts::default();
    for detected_type in [
        DetectedType::PhoneNumber,
        DetectedType::NiNumber,
        DetectedType::Postcode,
        DetectedType::SortCode,
        DetectedType::Unknown,
    ] {
        let counts = TypeCounts::collect(
            result
                .results()
                .map(|(_, cell)| cell)
                .filter(|cell| cell.detected_type == detected_type),
        );
        if counts.checked == 0 {
            continue;
        }
        totals.add(&counts);
        table.add_row(vec![
            type_cell(detected_type),
            Cell::new(counts.checked),
            count_cell(counts.valid, Color::Green),
            count_cell(counts.fixed, Color::Cyan),
            count_cell(counts.invalid, Color::Red),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(totals.checked).add_attribute(Attribute::Bold),
        count_cell(result.summary.total_valid, Color::Green).add_attribute(Attribute::Bold),
        count_cell(result.summary.total_fixed, Color::Cyan).add_attribute(Attribute::Bold),
        count_cell(result.summary.total_invalid, Color::Red).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_issue_table(&result.processed_rows, max_issues);
    if !result.summary.errors.is_empty() {
        eprintln!("Row errors:");
        for error in &result.summary.errors {
            eprintln!("- {error}");
        }
    }
}

pub fn print_check(result: &DetectedValidationResult) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.add_row(vec![header_cell("Type"), type_cell(result.detected_type)]);
    table.add_row(vec![header_cell("Valid"), validity_cell(result)]);
    table.add_row(vec![header_cell("Cleaned"), Cell::new(&result.result.value)]);
    table.add_row(vec![
        header_cell("Fixed"),
        result.fixed().map_or_else(|| dim_cell("-"), Cell::new),
    ]);
    if let Some(note) = result.error() {
        let label = if result.is_valid() { "Note" } else { "Error" };
        table.add_row(vec![header_cell(label), Cell::new(note)]);
    }
    println!("{table}");
}

/// Lists every invalid or repaired cell, capped at `max_issues` (0 lists all).
fn print_issue_table(rows: &[ProcessedRow], max_issues: usize) {
    let issues: Vec<(usize, &DetectedValidationResult)> = rows
        .iter()
        .flat_map(|row| {
            row.validation_results
                .iter()
                .filter(|cell| !cell.is_header() && cell.error().is_some())
                .map(move |cell| (row.row_number, cell))
        })
        .collect();
    if issues.is_empty() {
        return;
    }
    let limit = if max_issues == 0 {
        issues.len()
    } else {
        max_issues.min(issues.len())
    };

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Status"),
        header_cell("Fixed"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for (row_number, cell) in issues.iter().take(limit) {
        table.add_row(vec![
            Cell::new(row_number),
            Cell::new(cell.column.as_deref().unwrap_or("-")),
            type_cell(cell.detected_type),
            validity_cell(cell),
            cell.fixed().map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(cell.error().unwrap_or_default()),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
    if limit < issues.len() {
        println!("... {} more (use --max-issues 0 to list all)", issues.len() - limit);
    }
}

#[derive(Debug, Default)]
struct TypeCounts {
    checked: usize,
    valid: usize,
    fixed: usize,
    invalid: usize,
}

impl TypeCounts {
    fn collect<'a>(cells: impl Iterator<Item = &'a DetectedValidationResult>) -> Self {
        let mut counts = Self::default();
        for cell in cells {
            counts.checked += 1;
            if cell.is_valid() {
                counts.valid += 1;
                if cell.result.was_rewritten() {
                    counts.fixed += 1;
                }
            } else {
                counts.invalid += 1;
            }
        }
        counts
    }

    fn add(&mut self, other: &Self) {
        self.checked += other.checked;
        self.valid += other.valid;
        self.fixed += other.fixed;
        self.invalid += other.invalid;
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Fixed(20)),
            ColumnConstraint::UpperBoundary(Width::Fixed(14)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Fixed(18)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn type_cell(detected_type: DetectedType) -> Cell {
    match detected_type {
        DetectedType::Unknown => Cell::new(detected_type).fg(Color::DarkGrey),
        _ => Cell::new(detected_type)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
    }
}

fn validity_cell(cell: &DetectedValidationResult) -> Cell {
    if !cell.is_valid() {
        Cell::new("INVALID")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    } else if cell.result.is_repaired() {
        Cell::new("REPAIRED").fg(Color::Yellow)
    } else {
        Cell::new("VALID").fg(Color::Green)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
