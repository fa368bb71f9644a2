//! glad browse コマンド
//!
//! 記事を解決してから対話型ブラウザを起動する。

use super::{load_config, resolve_articles};
use crate::cli::GlobalArgs;
use crate::feed::FeedState;
use crate::tui;
use clap::Parser;

#[derive(Debug, Default, Parser)]
pub struct Args {
    /// Articles per page (overrides the configured page size)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,
}

pub async fn run(args: Args, global: &GlobalArgs) -> Result<(), String> {
    let config = load_config(global)?;
    let page_size = args
        .page_size
        .map_or(config.page_size, |n| n as usize);

    let resolved = resolve_articles(&config).await;
    tracing::info!(
        source = %resolved.tier,
        count = resolved.articles.len(),
        "starting feed browser"
    );

    let feed = FeedState::new(resolved, page_size, config.min_score);
    tui::run(feed, config.load_delay).map_err(|e| format!("Terminal error: {}", e))
}
