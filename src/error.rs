use thiserror::Error;

/// glad 統一エラー型
#[derive(Debug, Error)]
pub enum GladError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Feed API error: {message} (status: {status})")]
    FeedApi { status: u16, message: String },

    #[error("Feed source '{0}' returned no articles")]
    EmptyFeed(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GladError>;

impl GladError {
    /// 次のフォールバック段へ進むべき取得失敗かどうか
    ///
    /// 設定エラー以外はすべてデータソースの失敗として扱う。
    pub fn is_source_failure(&self) -> bool {
        !matches!(self, GladError::InvalidConfig(_) | GladError::Toml(_))
    }
}
