use super::*;
use crate::article::embedded_articles;
use crate::config::HttpConfig;
use crate::test_support::{refused_url, serve_once};

fn client() -> Client {
    HttpConfig::default().build_client()
}

#[tokio::test]
async fn test_fetch_document_success() {
    let body = serde_json::to_string(&ArticlesDocument {
        articles: embedded_articles(),
    })
    .unwrap();
    let url = serve_once("200 OK", &body).await;

    let doc = fetch_articles_document(&client(), &url).await.unwrap();
    assert_eq!(doc.articles.len(), 6);
    assert_eq!(doc.articles[0].source.name, "SVT Nyheter");
}

#[tokio::test]
async fn test_fetch_document_server_error() {
    let url = serve_once("500 Internal Server Error", "boom").await;

    let err = fetch_articles_document(&client(), &url).await.unwrap_err();
    match err {
        GladError::FeedApi { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_fetch_document_invalid_json() {
    let url = serve_once("200 OK", "<html>not json</html>").await;

    let err = fetch_articles_document(&client(), &url).await.unwrap_err();
    assert!(matches!(err, GladError::Json(_)));
}

#[tokio::test]
async fn test_fetch_document_connection_refused() {
    let url = refused_url().await;

    let err = fetch_articles_document(&client(), &url).await.unwrap_err();
    assert!(matches!(err, GladError::Network(_)));
}
