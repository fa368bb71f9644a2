//! glad feed コマンド
//!
//! フィードを解決・絞り込みし、カードまたは JSON で出力する。

use super::{load_config, resolve_articles};
use crate::article::Article;
use crate::card::CardView;
use crate::cli::GlobalArgs;
use crate::feed::FeedState;
use crate::filter::RegionFilter;
use crate::output::{fetch_spinner, format_card, FeedFooter};
use clap::Parser;
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(after_help = "FILTERS:\n  \
    All given filters must match. --topic and --source may be repeated;\n  \
    an article matches when it has any of the listed topics or sources.\n  \
    --region all (the default) matches every region.")]
pub struct Args {
    /// Only articles from this region ("all" for every region)
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,

    /// Only articles with this topic (repeatable)
    #[arg(long = "topic", value_name = "TOPIC")]
    pub topics: Vec<String>,

    /// Only articles from this source (repeatable)
    #[arg(long = "source", value_name = "SOURCE")]
    pub sources: Vec<String>,

    /// Minimum positivity score between 0.0 and 1.0 (defaults to the configured value)
    #[arg(long, value_name = "SCORE")]
    pub min_score: Option<f64>,

    /// Number of pages to show
    #[arg(
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..),
        conflicts_with = "all"
    )]
    pub pages: u32,

    /// Show every matching article
    #[arg(long)]
    pub all: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// JSON 出力
#[derive(Debug, Serialize)]
struct FeedOutput<'a> {
    source: &'static str,
    total: usize,
    matched: usize,
    page: usize,
    page_size: usize,
    has_more: bool,
    articles: Vec<&'a Article>,
}

pub async fn run(args: Args, global: &GlobalArgs) -> Result<(), String> {
    if let Some(score) = args.min_score {
        if !(0.0..=1.0).contains(&score) {
            return Err(format!("--min-score must be between 0.0 and 1.0 (got {})", score));
        }
    }

    let config = load_config(global)?;

    let spinner = (!args.json).then(fetch_spinner);
    let resolved = resolve_articles(&config).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let mut state = FeedState::new(resolved, config.page_size, config.min_score);
    state.update_selection(|s| {
        if let Some(region) = &args.region {
            s.set_region(RegionFilter::parse(region));
        }
        s.topics.extend(args.topics.iter().cloned());
        s.sources.extend(args.sources.iter().cloned());
        if let Some(score) = args.min_score {
            s.set_min_score(score);
        }
    });

    if args.all {
        while state.load_more_now() {}
    } else {
        for _ in 1..args.pages {
            if !state.load_more_now() {
                break;
            }
        }
    }

    if args.json {
        print_json(&state)
    } else {
        print_cards(&state);
        Ok(())
    }
}

fn print_json(state: &FeedState) -> Result<(), String> {
    let output = FeedOutput {
        source: state.tier().as_str(),
        total: state.articles().len(),
        matched: state.filtered().len(),
        page: state.pagination().page(),
        page_size: state.pagination().page_size(),
        has_more: state.pagination().has_more(),
        articles: state.displayed(),
    };
    serde_json::to_string_pretty(&output)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize articles: {}", e))
}

fn print_cards(state: &FeedState) {
    let displayed = state.displayed();
    for article in &displayed {
        // 非対話出力では全カードが表示済み
        println!("{}\n", format_card(&CardView::from_article(article, true)));
    }
    let footer = FeedFooter::format(
        displayed.len(),
        state.filtered().len(),
        state.page_state(),
        state.tier(),
    );
    println!("{footer}");
}
