use crate::cli::{Cli, Command, GlobalArgs};
use crate::config::{glad_home, FeedConfig};
use crate::logging::{init_logging, LogTarget};
use crate::resolver::{FeedResolver, Resolved};

pub mod browse;
pub mod feed;
pub mod regions;
pub mod vocabulary;

/// TUI 実行中のログファイル名
const LOG_FILE_NAME: &str = "glad.log";

pub async fn dispatch(cli: Cli) -> Result<(), String> {
    let interactive = cli.command.as_ref().map_or(true, Command::is_interactive);
    init_logging(log_target(interactive));

    let global = cli.global;
    match cli.command {
        None => browse::run(browse::Args::default(), &global).await,
        Some(Command::Browse(args)) => browse::run(args, &global).await,
        Some(Command::Feed(args)) => feed::run(args, &global).await,
        Some(Command::Topics(args)) => {
            vocabulary::run(vocabulary::Kind::Topics, args, &global).await
        }
        Some(Command::Sources(args)) => {
            vocabulary::run(vocabulary::Kind::Sources, args, &global).await
        }
        Some(Command::Regions(args)) => regions::run(args),
    }
}

fn log_target(interactive: bool) -> LogTarget {
    match glad_home() {
        Some(home) if interactive => LogTarget::File(home.join(LOG_FILE_NAME)),
        _ => LogTarget::Stderr,
    }
}

/// 設定ファイル・環境変数・CLI フラグの順で上書きした設定
pub(crate) fn load_config(global: &GlobalArgs) -> Result<FeedConfig, String> {
    let mut config = FeedConfig::load(global.config.as_deref())
        .map_err(|e| e.to_string())?;

    if let Some(api_url) = &global.api_url {
        config.api_url = api_url.clone();
    }
    if let Some(local_file) = &global.local_file {
        config.local_file = local_file.clone();
    }
    if global.offline {
        config.offline = true;
    }

    config.validate().map_err(|e| e.to_string())?;
    tracing::debug!(
        api_url = %config.api_url,
        local_file = %config.local_file.display(),
        offline = config.offline,
        "configuration loaded"
    );
    Ok(config)
}

/// フォールバックチェーンで記事を解決する
pub(crate) async fn resolve_articles(config: &FeedConfig) -> Resolved {
    let resolver = FeedResolver::from_config(config);
    tracing::debug!(tiers = ?resolver.tiers(), "resolving articles");
    resolver.resolve().await
}
