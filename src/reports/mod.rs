use crate::cmd::compute::ScoreReport;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use lexichain::{Benchmarks, BoardModifiers, Rating};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepRow {
    pub word_count: u32,
    pub ratio: f64,
    pub richness: f64,
    pub benchmarks: Benchmarks,
}

fn rating_cell(rating: Rating) -> Cell {
    let color = match rating {
        Rating::Easy => Color::Green,
        Rating::Medium => Color::Yellow,
        Rating::Hard => Color::Red,
    };
    Cell::new(rating.to_string()).fg(color)
}

fn tier_header() -> Vec<Cell> {
    vec![
        Cell::new("Bronze").fg(Color::DarkYellow),
        Cell::new("Silver").fg(Color::Grey),
        Cell::new("Gold").fg(Color::Yellow),
        Cell::new("Plat").fg(Color::Cyan),
    ]
}

fn tier_cells(b: &Benchmarks) -> Vec<Cell> {
    b.thresholds()
        .iter()
        .map(|t| Cell::new(t.to_string()))
        .collect()
}

fn align_right(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn print_benchmarks(results: &[(String, Benchmarks)]) {
    let mut table = new_table();

    let mut header = vec![
        Cell::new("Board").add_attribute(Attribute::Bold),
        Cell::new("Words"),
    ];
    header.extend(tier_header());
    header.push(Cell::new("Rating").add_attribute(Attribute::Bold));
    table.add_row(header);

    for (name, b) in results {
        let mut row = vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(b.word_count.to_string()),
        ];
        row.extend(tier_cells(b));
        row.push(rating_cell(b.rating));
        table.add_row(row);
    }

    align_right(&mut table, 1..=5);
    println!("\n{}", table);
}

pub fn print_modifiers(m: &BoardModifiers) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Rarity"),
        Cell::new("Length"),
        Cell::new("Conn"),
        Cell::new("Difficulty").add_attribute(Attribute::Bold),
        Cell::new("Potential"),
        Cell::new("Complexity").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new(format!("{:.3}", m.rarity)),
        Cell::new(format!("{:.3}", m.length)),
        Cell::new(format!("{:.3}", m.connectivity)),
        Cell::new(format!("{:.3}", m.difficulty_scale)),
        Cell::new(format!("{:.3}", m.potential_scale)),
        Cell::new(format!("{:.3}", m.complexity)),
    ]);
    align_right(&mut table, 0..=5);
    println!("\n{}", table);
}

pub fn print_score(s: &ScoreReport) {
    let reached = s
        .tier
        .map(|t| t.to_string())
        .unwrap_or_else(|| "none".to_string());
    match (s.next_tier, s.points_to_next) {
        (Some(next), Some(missing)) => println!(
            "\nScore {}: tier {} ({} more for {})",
            s.score, reached, missing, next
        ),
        _ => println!("\nScore {}: tier {} (top tier)", s.score, reached),
    }
}

pub fn print_sweep(rows: &[SweepRow]) {
    let mut table = new_table();

    let mut header = vec![
        Cell::new("Words").add_attribute(Attribute::Bold),
        Cell::new("Ratio"),
        Cell::new("Rich"),
    ];
    header.extend(tier_header());
    header.push(Cell::new("Rating").add_attribute(Attribute::Bold));
    table.add_row(header);

    for r in rows {
        let mut row = vec![
            Cell::new(r.word_count.to_string()).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", r.ratio)),
            Cell::new(format!("{:.2}", r.richness)),
        ];
        row.extend(tier_cells(&r.benchmarks));
        row.push(rating_cell(r.benchmarks.rating));
        table.add_row(row);
    }

    align_right(&mut table, 0..=6);
    println!("\n{}", table);
}
