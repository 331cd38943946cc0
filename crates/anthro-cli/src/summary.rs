use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use anthro_core::{Assessment, Outcome};
use anthro_model::Indicator;
use anthro_reference::RegistrySummary;

use crate::commands::ZscoreReport;

pub fn print_assessment(assessment: &Assessment) {
    println!(
        "Gender: {}  Age: {} months",
        gender_label(assessment.gender),
        assessment.age_months
    );
    println!("{}", assessment_table(assessment));
    let flagged: Vec<_> = assessment.flagged().map(|entry| entry.indicator).collect();
    if !flagged.is_empty() {
        println!();
        println!("Needs attention: {}", flagged.join(", "));
    }
}

pub fn assessment_table(assessment: &Assessment) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Indicator"),
        header_cell("Value"),
        header_cell("Z-score"),
        header_cell("Category"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in &assessment.entries {
        let (z_cell, category_cell) = match &entry.outcome {
            Outcome::Categorized {
                z_score,
                category,
                label,
            } => {
                let z_cell = match z_score {
                    Some(z) => Cell::new(format!("{z:.1}")),
                    None => dim_cell("-"),
                };
                let category_cell = if category.needs_attention() {
                    Cell::new(*label)
                        .fg(Color::Yellow)
                        .add_attribute(Attribute::Bold)
                } else {
                    Cell::new(*label)
                };
                (z_cell, category_cell)
            }
            Outcome::Failed { message, .. } => {
                (dim_cell("-"), Cell::new(message).fg(Color::Red))
            }
        };
        table.add_row(vec![
            Cell::new(entry.indicator),
            Cell::new(value_with_unit(entry.indicator, entry.value)),
            z_cell,
            category_cell,
        ]);
    }
    table
}

pub fn print_zscore(report: &ZscoreReport) {
    println!(
        "{} ({}) {}: z = {:.1}",
        report.indicator,
        report.indicator.abbreviation(),
        value_with_unit(report.indicator.as_str(), report.value),
        report.score.z_score
    );
    println!("Category: {}", report.score.category.label());
}

pub fn print_tables(summary: &RegistrySummary) {
    if let Some(dir) = &summary.reference_dir {
        println!("Reference: {}", dir.display());
    }
    println!("{}", tables_table(summary));
    if !summary.is_complete() {
        println!();
        println!("Missing:");
        for (kind, gender) in &summary.missing {
            println!("  {}_{}", kind.stem(), gender.table_suffix());
        }
    }
}

pub fn tables_table(summary: &RegistrySummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Gender"),
        header_cell("Rows"),
        header_cell("Keys"),
        header_cell("Source"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in &summary.tables {
        let keys = match (entry.first_key, entry.last_key) {
            (Some(first), Some(last)) => Cell::new(format!("{first} - {last}")),
            _ => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(entry.table.stem()),
            Cell::new(entry.gender.as_str()),
            Cell::new(entry.rows),
            keys,
            dim_cell(&entry.source),
        ]);
    }
    table
}

/// Measurement with its unit; MUAC is in cm.
pub fn value_with_unit(indicator: &str, value: f64) -> String {
    let unit = indicator
        .parse::<Indicator>()
        .map_or("cm", |indicator| indicator.unit());
    format!("{value} {unit}")
}

fn gender_label(code: i64) -> String {
    match anthro_model::Gender::from_code(code) {
        Ok(gender) => gender.as_str().to_string(),
        Err(_) => format!("{code} (invalid)"),
    }
}

fn apply_table_style(table: &mut Table) {
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
        .set_width(120);
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
