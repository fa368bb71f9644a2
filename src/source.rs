//! 記事データソース
//!
//! フォールバック順に並べた各データソース（API / ローカル JSON / 組み込み記事）が
//! `ArticleSource` trait を実装する。使う側は `fetch()` を呼ぶだけ。

mod embedded_source;
mod remote_source;
mod static_source;

pub use embedded_source::EmbeddedSource;
pub use remote_source::RemoteSource;
pub use static_source::StaticFileSource;

use crate::article::Article;
use crate::error::Result;
use std::future::Future;
use std::pin::Pin;

/// フォールバック段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceTier {
    Remote,
    Static,
    Embedded,
}

impl SourceTier {
    /// 表示名
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceTier::Remote => "API",
            SourceTier::Static => "mock JSON",
            SourceTier::Embedded => "hardcoded fallback data",
        }
    }

    /// 取得成功時のログメッセージ
    pub fn success_message(&self) -> &'static str {
        match self {
            SourceTier::Remote => "Successfully fetched articles from API",
            SourceTier::Static => "Successfully fetched articles from mock JSON",
            SourceTier::Embedded => "Using hardcoded fallback data",
        }
    }
}

impl std::fmt::Display for SourceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 記事データソースの抽象化
pub trait ArticleSource: Send + Sync {
    /// このソースのフォールバック段
    fn tier(&self) -> SourceTier;

    /// 記事一覧を取得する
    ///
    /// 空の一覧は Ok で返す。空を失敗として扱うかは呼び出し側が決める。
    fn fetch(&self) -> Pin<Box<dyn Future<Output = Result<Vec<Article>>> + Send + '_>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_display() {
        assert_eq!(SourceTier::Remote.to_string(), "API");
        assert_eq!(SourceTier::Static.to_string(), "mock JSON");
    }

    #[test]
    fn test_success_messages() {
        assert!(SourceTier::Static
            .success_message()
            .ends_with("fetched articles from mock JSON"));
        assert_eq!(
            SourceTier::Embedded.success_message(),
            "Using hardcoded fallback data"
        );
    }
}
