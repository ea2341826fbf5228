use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use foldcmp::compare::{Comparison, Winner};
use foldcmp::groups::SizeGroup;
use std::collections::BTreeMap;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn winner_cell(c: &Comparison, winner: Winner) -> Cell {
    let color = match winner {
        Winner::A => Color::Green,
        Winner::B => Color::Red,
        Winner::Tie => Color::Yellow,
    };
    Cell::new(c.winner_label(winner)).fg(color)
}

fn count_cell(c: &Comparison, count: usize) -> Cell {
    Cell::new(format!("{} ({:.1}%)", count, c.summary.percentage(count)))
}

pub fn print_records(c: &Comparison, filter: Option<&str>) {
    let mut table = new_table();
    let a = c.settings.method_a;
    let b = c.settings.method_b;

    table.add_row(vec![
        Cell::new("pdb_id").add_attribute(Attribute::Bold),
        Cell::new(a.to_string()).fg(Color::Cyan),
        Cell::new(b.to_string()).fg(Color::Cyan),
        Cell::new("Δ"),
        Cell::new("Better").add_attribute(Attribute::Bold),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let filter = filter.map(str::to_lowercase);
    for r in &c.records {
        if let Some(ref f) = filter {
            if !r.id.to_lowercase().contains(f) {
                continue;
            }
        }
        table.add_row(vec![
            Cell::new(&r.id).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.3}", r.value_a)),
            Cell::new(format!("{:.3}", r.value_b)),
            Cell::new(format!("{:+.3}", r.value_a - r.value_b)),
            winner_cell(c, r.winner),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_summary(c: &Comparison) {
    let mut table = new_table();
    let title = match c.group {
        Some(g) => format!("{} (group {})", c.settings.metric.header_noun(), g),
        None => c.settings.metric.header_noun().to_string(),
    };

    table.add_row(vec![
        Cell::new(title).add_attribute(Attribute::Bold),
        Cell::new("Total"),
        Cell::new(format!("{} better", c.settings.method_a)).fg(Color::Green),
        Cell::new(format!("{} better", c.settings.method_b)).fg(Color::Red),
        Cell::new("Tie"),
        Cell::new("Skipped"),
    ]);
    table.add_row(vec![
        Cell::new(""),
        Cell::new(c.summary.total),
        count_cell(c, c.summary.a_better),
        count_cell(c, c.summary.b_better),
        count_cell(c, c.summary.ties),
        Cell::new(c.mismatches.len()),
    ]);

    for i in 1..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("\n{}", table);
}

pub fn print_group_summary(all: &Comparison, groups: &BTreeMap<SizeGroup, Comparison>) {
    let mut table = new_table();

    table.add_row(vec![
        Cell::new("Group").add_attribute(Attribute::Bold),
        Cell::new("Total"),
        Cell::new(format!("{} better", all.settings.method_a)).fg(Color::Green),
        Cell::new(format!("{} better", all.settings.method_b)).fg(Color::Red),
        Cell::new("Tie"),
    ]);

    let rows = groups
        .iter()
        .map(|(g, c)| (g.to_string(), c))
        .chain(std::iter::once(("all".to_string(), all)));

    for (name, c) in rows {
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(c.summary.total),
            count_cell(c, c.summary.a_better),
            count_cell(c, c.summary.b_better),
            count_cell(c, c.summary.ties),
        ]);
    }

    for i in 1..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("\n{}", table);
}
