use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{browse, feed, regions, vocabulary};

#[derive(Debug, Parser)]
#[command(name = "glad")]
#[command(about = "GladStart - positive news from Sweden in your terminal", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// 省略時は browse
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// 全コマンド共通のオプション
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Skip the remote API and use the local file or built-in articles
    #[arg(long, global = true)]
    pub offline: bool,

    /// Remote news API endpoint
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Local article document used when the API is unavailable
    #[arg(long, global = true, value_name = "PATH")]
    pub local_file: Option<PathBuf>,

    /// Configuration file (defaults to ~/.glad/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 対話型フィードブラウザ
    #[command(about = "Browse the news feed interactively")]
    Browse(browse::Args),

    /// フィードを絞り込んで出力
    #[command(about = "Print the filtered news feed")]
    Feed(feed::Args),

    /// トピック一覧
    #[command(about = "List topics found in the loaded feed")]
    Topics(vocabulary::Args),

    /// 配信元一覧
    #[command(about = "List news sources found in the loaded feed")]
    Sources(vocabulary::Args),

    /// 地方のポジティブ度一覧
    #[command(about = "Show Swedish landscapes ranked by positivity")]
    Regions(regions::Args),
}

impl Command {
    /// 端末を占有するコマンドか
    pub fn is_interactive(&self) -> bool {
        matches!(self, Command::Browse(_))
    }
}
