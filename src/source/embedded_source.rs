//! 組み込み記事（最終フォールバック）

use crate::article::{embedded_articles, Article};
use crate::error::Result;
use std::future::Future;
use std::pin::Pin;

use super::{ArticleSource, SourceTier};

/// 常に組み込み記事を返すソース
#[derive(Debug, Default)]
pub struct EmbeddedSource;

impl ArticleSource for EmbeddedSource {
    fn tier(&self) -> SourceTier {
        SourceTier::Embedded
    }

    fn fetch(&self) -> Pin<Box<dyn Future<Output = Result<Vec<Article>>> + Send + '_>> {
        Box::pin(async { Ok(embedded_articles()) })
    }
}
