//! ログ初期化
//!
//! CLI コマンドは stderr、TUI は端末を占有するためログファイルへ出力する。
//! レベルは GLAD_LOG（EnvFilter 書式）で指定、未指定なら info。

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::{Mutex, Once};
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// ログ出力先
#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env("GLAD_LOG").unwrap_or_else(|_| EnvFilter::new("info"))
}

/// ロガーを一度だけ初期化する
///
/// ログファイルを開けない場合は stderr にフォールバックせず、ログを出さない。
pub fn init_logging(target: LogTarget) {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    INIT.call_once(|| match target {
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            if let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter())
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .init();
            }
        }
    });
}
