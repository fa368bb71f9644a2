//! リモート API からの取得

use crate::article::Article;
use crate::config::HttpConfig;
use crate::error::Result;
use crate::http::fetch_articles_document;
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;

use super::{ArticleSource, SourceTier};

/// ニュース API エンドポイント
pub struct RemoteSource {
    client: Client,
    url: String,
}

impl RemoteSource {
    pub fn new(config: &HttpConfig, url: impl Into<String>) -> Self {
        Self {
            client: config.build_client(),
            url: url.into(),
        }
    }
}

impl ArticleSource for RemoteSource {
    fn tier(&self) -> SourceTier {
        SourceTier::Remote
    }

    fn fetch(&self) -> Pin<Box<dyn Future<Output = Result<Vec<Article>>> + Send + '_>> {
        Box::pin(async move {
            tracing::debug!(url = %self.url, "requesting articles");
            let document = fetch_articles_document(&self.client, &self.url).await?;
            Ok(document.articles)
        })
    }
}
