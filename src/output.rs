//! CLI 出力ユーティリティ
//!
//! カードの整形（owo-colors）と取得中スピナー（indicatif）。

use crate::card::{CardView, ImageSlot};
use crate::pagination::PageState;
use crate::source::SourceTier;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::time::Duration;

/// 記事取得中のスピナー
pub fn fetch_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.yellow} {msg}") {
        pb.set_style(style);
    }
    pb.set_message("Hämtar nyheter...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// スコア段階の色でバッジを塗る
pub fn badge(card: &CardView) -> String {
    let (r, g, b) = card.tier.rgb();
    format!(" {} ", card.badge)
        .on_truecolor(r, g, b)
        .black()
        .to_string()
}

/// カードを複数行の文字列に整形
pub fn format_card(card: &CardView) -> String {
    let mut lines = Vec::new();
    lines.push(format!("{}  {}", card.source.dimmed(), badge(card)));
    lines.push(card.title.bold().to_string());
    lines.push(card.summary.clone());

    let mut meta = card.published.clone();
    if let Some(region) = &card.region {
        meta.push_str(&format!("  · {}", region));
    }
    lines.push(meta.dimmed().to_string());
    if let ImageSlot::Loaded(url) = &card.image {
        lines.push(format!("bild: {}", url).dimmed().to_string());
    }
    lines.push(card.url.underline().to_string());

    lines.join("\n")
}

/// フィード末尾の状態行
pub struct FeedFooter {
    pub prefix: String,
    pub message: String,
}

impl FeedFooter {
    pub fn format(shown: usize, total: usize, state: PageState, tier: SourceTier) -> Self {
        match state {
            PageState::Exhausted if total == 0 => Self {
                prefix: "✗".red().to_string(),
                message: "Inga artiklar matchar dina filter. Prova att ändra dina filterval."
                    .to_string(),
            },
            PageState::Exhausted => Self {
                prefix: "✓".green().to_string(),
                message: format!(
                    "Inga fler artiklar att visa ({} av {}, källa: {})",
                    shown.green(),
                    total,
                    tier
                ),
            },
            _ => Self {
                prefix: "•".yellow().to_string(),
                message: format!(
                    "Visar {} av {} artiklar (källa: {}), använd --pages för fler",
                    shown.yellow(),
                    total,
                    tier
                ),
            },
        }
    }
}

impl std::fmt::Display for FeedFooter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.prefix, self.message)
    }
}
