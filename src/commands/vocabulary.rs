//! glad topics / glad sources コマンド
//!
//! 読み込んだフィードに現れるトピックまたは配信元を一覧表示する。

use super::{load_config, resolve_articles};
use crate::article::Article;
use crate::cli::GlobalArgs;
use crate::filter::{all_sources, all_topics};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Table};
use serde::Serialize;

#[derive(Debug, Parser)]
pub struct Args {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// 一覧の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Topics,
    Sources,
}

impl Kind {
    fn header(&self) -> &'static str {
        match self {
            Kind::Topics => "Ämne",
            Kind::Sources => "Källa",
        }
    }

    /// 名前が付いている記事の数
    fn count(&self, articles: &[Article], name: &str) -> usize {
        articles
            .iter()
            .filter(|a| match self {
                Kind::Topics => a.topic_names().any(|t| t == name),
                Kind::Sources => a.source.name == name,
            })
            .count()
    }
}

#[derive(Debug, Serialize, PartialEq)]
struct Entry {
    name: String,
    articles: usize,
}

/// 初出順の一覧と記事数
fn entries(kind: Kind, articles: &[Article]) -> Vec<Entry> {
    let names = match kind {
        Kind::Topics => all_topics(articles),
        Kind::Sources => all_sources(articles),
    };
    names
        .into_iter()
        .map(|name| Entry {
            articles: kind.count(articles, &name),
            name,
        })
        .collect()
}

pub async fn run(kind: Kind, args: Args, global: &GlobalArgs) -> Result<(), String> {
    let config = load_config(global)?;
    let resolved = resolve_articles(&config).await;
    let entries = entries(kind, &resolved.articles);

    if args.json {
        return serde_json::to_string_pretty(&entries)
            .map(|json| println!("{json}"))
            .map_err(|e| format!("Failed to serialize entries: {}", e));
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![kind.header(), "Artiklar"]);
    for entry in &entries {
        table.add_row(vec![entry.name.clone(), entry.articles.to_string()]);
    }
    println!("{table}");
    Ok(())
}
