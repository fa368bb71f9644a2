//! 共通HTTPヘルパー

use crate::article::ArticlesDocument;
use crate::error::{GladError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

/// `{ "articles": [...] }` 形式のドキュメントを GET で取得
///
/// 2xx 以外のステータスは `GladError::FeedApi` として返す。
pub async fn fetch_articles_document(client: &Client, url: &str) -> Result<ArticlesDocument> {
    let response = client
        .get(url)
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await?;
    let status = response.status().as_u16();

    if !response.status().is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(GladError::FeedApi { status, message });
    }

    let body = response.bytes().await?;
    let document: ArticlesDocument = serde_json::from_slice(&body)?;
    Ok(document)
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
