//! データソースの解決
//!
//! 登録順にデータソースを試し、記事を1件以上返した最初のソースを採用する。
//! 失敗はログに記録して握りつぶし、最終的には必ず組み込み記事を返す。

use crate::article::{embedded_articles, Article};
use crate::config::FeedConfig;
use crate::error::GladError;
use crate::source::{ArticleSource, EmbeddedSource, RemoteSource, SourceTier, StaticFileSource};

/// 解決結果
#[derive(Debug, Clone)]
pub struct Resolved {
    pub articles: Vec<Article>,
    pub tier: SourceTier,
}

/// フォールバックチェーン
pub struct FeedResolver {
    sources: Vec<Box<dyn ArticleSource>>,
}

impl FeedResolver {
    pub fn new(sources: Vec<Box<dyn ArticleSource>>) -> Self {
        Self { sources }
    }

    /// 設定からチェーンを構築（API → ローカル JSON → 組み込み記事）
    ///
    /// オフライン時は API を含めない。
    pub fn from_config(config: &FeedConfig) -> Self {
        let mut sources: Vec<Box<dyn ArticleSource>> = Vec::with_capacity(3);
        if !config.offline {
            sources.push(Box::new(RemoteSource::new(&config.http, &config.api_url)));
        }
        sources.push(Box::new(StaticFileSource::new(&config.local_file)));
        sources.push(Box::new(EmbeddedSource));
        Self::new(sources)
    }

    /// 登録されたソースの段を順に返す
    pub fn tiers(&self) -> Vec<SourceTier> {
        self.sources.iter().map(|s| s.tier()).collect()
    }

    /// ソースを順に試して記事を解決する
    ///
    /// 空の一覧は未成功として扱い、次のソースへ進む。
    pub async fn resolve(&self) -> Resolved {
        for source in &self.sources {
            let tier = source.tier();
            let outcome = match source.fetch().await {
                Ok(articles) if articles.is_empty() => Err(GladError::EmptyFeed(tier.to_string())),
                other => other,
            };
            match outcome {
                Ok(articles) => {
                    tracing::info!(count = articles.len(), "{}", tier.success_message());
                    return Resolved { articles, tier };
                }
                Err(err) if err.is_source_failure() => {
                    tracing::warn!(source = %tier, error = %err, "{} fetch failed", tier);
                }
                Err(err) => {
                    tracing::error!(source = %tier, error = %err, "{} fetch failed", tier);
                }
            }
        }

        tracing::info!("{}", SourceTier::Embedded.success_message());
        Resolved {
            articles: embedded_articles(),
            tier: SourceTier::Embedded,
        }
    }
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
