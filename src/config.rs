//! 設定（HTTP 設定とフィード設定）
//!
//! 優先順位: CLI フラグ > 環境変数 > 設定ファイル（TOML） > デフォルト値

use crate::env::EnvVar;
use crate::error::{GladError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// デフォルトの API エンドポイント
pub const DEFAULT_API_URL: &str = "https://gladstart.com/api/newsarticles";
/// 1ページあたりの記事数
pub const DEFAULT_PAGE_SIZE: usize = 5;
/// ポジティブ度の最小値（フィルタ初期値）
pub const DEFAULT_MIN_SCORE: f64 = 0.7;
/// 追加読み込みの演出用遅延（ミリ秒）
pub const DEFAULT_LOAD_DELAY_MS: u64 = 500;

const LOCAL_FILE_NAME: &str = "mock-articles.json";
const CONFIG_FILE_NAME: &str = "config.toml";

/// glad のホームディレクトリ（~/.glad）
pub fn glad_home() -> Option<PathBuf> {
    EnvVar::get("HOME").map(|home| PathBuf::from(home).join(".glad"))
}

// ============================================================================
// HttpConfig
// ============================================================================

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            user_agent: "glad-cli".to_string(),
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

// ============================================================================
// FeedConfig
// ============================================================================

/// config.toml の内容（未指定キーは None）
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    api_url: Option<String>,
    local_file: Option<PathBuf>,
    page_size: Option<usize>,
    min_score: Option<f64>,
    load_delay_ms: Option<u64>,
    timeout_secs: Option<u64>,
    offline: Option<bool>,
}

/// フィード設定
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub api_url: String,
    pub local_file: PathBuf,
    pub page_size: usize,
    pub min_score: f64,
    pub load_delay: Duration,
    pub offline: bool,
    pub http: HttpConfig,
}

impl Default for FeedConfig {
    fn default() -> Self {
        let local_file = glad_home()
            .map(|home| home.join(LOCAL_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(LOCAL_FILE_NAME));

        Self {
            api_url: DEFAULT_API_URL.to_string(),
            local_file,
            page_size: DEFAULT_PAGE_SIZE,
            min_score: DEFAULT_MIN_SCORE,
            load_delay: Duration::from_millis(DEFAULT_LOAD_DELAY_MS),
            offline: false,
            http: HttpConfig::default(),
        }
    }
}

impl FeedConfig {
    /// 設定を読み込む
    ///
    /// パスの優先順位: 引数 > GLAD_CONFIG > ~/.glad/config.toml。
    /// 読み込み後に環境変数の上書きを適用する。
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| EnvVar::get("GLAD_CONFIG").map(PathBuf::from))
            .or_else(|| glad_home().map(|home| home.join(CONFIG_FILE_NAME)));

        let config = match path {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };

        let config = config.with_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// ファイルから読み込む（存在しなければデフォルト値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// TOML 文字列から構築
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(api_url) = file.api_url {
            config.api_url = api_url;
        }
        if let Some(local_file) = file.local_file {
            config.local_file = local_file;
        }
        if let Some(page_size) = file.page_size {
            config.page_size = page_size;
        }
        if let Some(min_score) = file.min_score {
            config.min_score = min_score;
        }
        if let Some(ms) = file.load_delay_ms {
            config.load_delay = Duration::from_millis(ms);
        }
        if let Some(secs) = file.timeout_secs {
            config.http.timeout = Some(Duration::from_secs(secs));
        }
        if let Some(offline) = file.offline {
            config.offline = offline;
        }

        config.validate()?;
        Ok(config)
    }

    /// 環境変数（GLAD_API_URL / GLAD_LOCAL_FILE / GLAD_OFFLINE）で上書き
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(api_url) = EnvVar::get("GLAD_API_URL") {
            self.api_url = api_url;
        }
        if let Some(local_file) = EnvVar::get("GLAD_LOCAL_FILE") {
            self.local_file = PathBuf::from(local_file);
        }
        if let Some(offline) = EnvVar::flag("GLAD_OFFLINE") {
            self.offline = offline;
        }
        self
    }

    /// 値の検証
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(GladError::InvalidConfig(
                "page_size must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(GladError::InvalidConfig(format!(
                "min_score must be within 0.0..=1.0 (got {})",
                self.min_score
            )));
        }
        if self.api_url.trim().is_empty() {
            return Err(GladError::InvalidConfig("api_url is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
