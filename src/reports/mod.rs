use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use lasergrid::evaluator::{Evaluation, Verdict};
use lasergrid::geometry::{Point, Zone};
use lasergrid::meta::HiddenAnswer;
use lasergrid::PuzzleEngine;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

fn verdict_color(v: Verdict) -> Color {
    match v {
        Verdict::Match => Color::Green,
        Verdict::Mismatch => Color::Red,
    }
}

pub fn print_board(name: &str, engine: &PuzzleEngine) {
    let grid = engine.grid();
    let clue_cells: BTreeMap<Point, u64> = engine
        .clues()
        .iter()
        .map(|(side, index, value)| (grid.border_cell(side, index), value))
        .collect();

    println!("\nPuzzle: {}", name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let n = grid.total_size() as i32;
    for row in 0..n {
        let cells: Vec<Cell> = (0..n)
            .map(|col| {
                let p = Point::new(row, col);
                let cell = match grid.zone(p) {
                    Zone::Border => {
                        let clue = clue_cells.get(&p).map(|&v| {
                            if v == lasergrid::clues::HIDDEN {
                                "?".to_string()
                            } else {
                                v.to_string()
                            }
                        });
                        match (clue, engine.outputs().get(&p)) {
                            (Some(c), Some(o)) => Cell::new(format!("{} ({})", c, o.product))
                                .fg(verdict_color(o.verdict)),
                            (None, Some(o)) => {
                                Cell::new(format!("({})", o.product)).fg(verdict_color(o.verdict))
                            }
                            (Some(c), None) => Cell::new(c).add_attribute(Attribute::Bold),
                            (None, None) => Cell::new(""),
                        }
                    }
                    Zone::Dot => Cell::new("•"),
                    Zone::Mirror => {
                        let mirror = grid.offset_of(p).and_then(|o| engine.mirrors().get(o));
                        Cell::new(mirror.map_or(" ".to_string(), |m| m.to_string()))
                    }
                    Zone::CornerDot | Zone::Outside => Cell::new(""),
                };
                cell.set_alignment(CellAlignment::Center)
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

pub fn print_clue_report(eval: &Evaluation) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Clue").add_attribute(Attribute::Bold),
        Cell::new("Expected"),
        Cell::new("Product").fg(Color::Cyan),
        Cell::new("Segments"),
        Cell::new("Exit"),
        Cell::new("Verdict"),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for r in &eval.results {
        let steps: Vec<String> = r.trace.segments.iter().map(|s| s.steps.to_string()).collect();
        let exit = r
            .exit_cell
            .map_or("-".to_string(), |c| format!("({},{})", c.row, c.col));
        table.add_row(vec![
            Cell::new(format!("{}[{}]", r.side, r.index)).add_attribute(Attribute::Bold),
            Cell::new(r.expected),
            Cell::new(r.trace.product).fg(Color::Cyan),
            Cell::new(steps.join("x")),
            Cell::new(exit),
            Cell::new(r.verdict).fg(verdict_color(r.verdict)),
        ]);
    }
    println!("\n{}", table);

    for (cell, writers) in eval.collisions() {
        let names: Vec<String> = writers
            .iter()
            .map(|w| format!("{}[{}]={}", w.side, w.index, w.product))
            .collect();
        println!(
            "⚠️  Exit ({},{}) is shared by {}",
            cell.row,
            cell.col,
            names.join(", ")
        );
    }

    let status = if eval.solved { "SOLVED" } else { "UNSOLVED" };
    println!(
        "\n{} ({}/{} clues matching)",
        status,
        eval.matched(),
        eval.results.len()
    );
}

pub fn print_hidden_answer(answer: &HiddenAnswer) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Side").add_attribute(Attribute::Bold),
        Cell::new("Recovered"),
        Cell::new("Sum").fg(Color::Cyan),
    ]);

    for side in lasergrid::geometry::Side::iter() {
        let values: Vec<String> = answer
            .side(side)
            .iter()
            .map(|r| format!("[{}]={}", r.index, r.value))
            .collect();
        table.add_row(vec![
            Cell::new(side).add_attribute(Attribute::Bold),
            Cell::new(values.join(" ")),
            Cell::new(answer.sum(side)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("\n{}", table);
    println!("\n🔑 Answer: {}", answer.answer);
}
