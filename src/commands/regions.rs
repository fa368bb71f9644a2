//! glad regions コマンド
//!
//! 地方のポジティブ度を表で表示する。

use crate::article::format_score;
use crate::landscape::{self, Landscape, LANDSCAPES};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};

#[derive(Debug, Parser)]
pub struct Args {
    /// Show only the N most positive landscapes
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,
}

fn tier_cell(entry: &Landscape) -> Cell {
    let (r, g, b) = entry.score_tier().rgb();
    Cell::new(format_score(entry.positivity)).fg(Color::Rgb { r, g, b })
}

pub fn run(args: Args) -> Result<(), String> {
    let rows = match args.top {
        Some(limit) => landscape::ranked(limit),
        None => LANDSCAPES.to_vec(),
    };

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Landskap", "Positivitet", "Artiklar"]);
    for entry in &rows {
        table.add_row(vec![
            Cell::new(entry.name),
            tier_cell(entry),
            Cell::new(entry.articles),
        ]);
    }

    println!("{table}");
    Ok(())
}
