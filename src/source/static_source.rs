//! ローカル静的 JSON ドキュメントからの取得

use crate::article::{Article, ArticlesDocument};
use crate::error::Result;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use super::{ArticleSource, SourceTier};

/// `{ "articles": [...] }` 形式のローカルファイル
pub struct StaticFileSource {
    path: PathBuf,
}

impl StaticFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ArticleSource for StaticFileSource {
    fn tier(&self) -> SourceTier {
        SourceTier::Static
    }

    fn fetch(&self) -> Pin<Box<dyn Future<Output = Result<Vec<Article>>> + Send + '_>> {
        Box::pin(async move {
            tracing::debug!(path = %self.path.display(), "reading static articles");
            let content = tokio::fs::read(&self.path).await?;
            let document: ArticlesDocument = serde_json::from_slice(&content)?;
            Ok(document.articles)
        })
    }
}
