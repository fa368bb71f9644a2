//! テスト用ヘルパー
//!
//! - `serve_once`: 1回だけ応答するローカル HTTP サーバー
//! - `LogCapture`: tracing 出力をメモリに取り込む
//! - `make_article`: 記事のビルダー

use crate::article::{Article, Source, Topic};
use chrono::DateTime;
use std::io;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// 1回だけ固定レスポンスを返すサーバーを起動し、URL を返す
pub async fn serve_once(status_line: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );

    tokio::spawn(async move {
        if let Ok((mut stream, _)) = listener.accept().await {
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            // リクエストヘッダーの終端まで読み捨てる
            while let Ok(n) = stream.read(&mut chunk).await {
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    format!("http://{}/api/newsarticles", addr)
}

/// 接続を拒否されるはずの URL（バインド直後に解放したポート）
pub async fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api/newsarticles", addr)
}

/// tracing 出力の取り込み先
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// このスレッドに限定した subscriber を設定する
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// テスト用の記事を作成
pub fn make_article(id: u64, region: &str, source: &str, topics: &[&str], score: f64) -> Article {
    Article {
        id,
        title: format!("Article {}", id),
        summary: format!("Summary {}", id),
        source: Source {
            id: 1,
            name: source.to_string(),
        },
        published_date: DateTime::parse_from_rfc3339("2025-03-12T10:30:00Z").unwrap(),
        positivity_score: score,
        topics: topics
            .iter()
            .enumerate()
            .map(|(i, name)| Topic {
                id: i as u64 + 1,
                name: name.to_string(),
            })
            .collect(),
        region: region.to_string(),
        image_url: String::new(),
        url: format!("https://example.se/{}", id),
    }
}
