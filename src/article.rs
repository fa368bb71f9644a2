//! 記事ドメインモデル
//!
//! フィードの記事、ソース、トピックと、表示用のスコア段階・日付書式を定義する。

mod embedded;

pub use embedded::embedded_articles;

use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};

/// 記事ID
pub type ArticleId = u64;

/// 配信元
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: u64,
    pub name: String,
}

/// トピック
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: u64,
    pub name: String,
}

/// フィードの記事（取得後は不変）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub summary: String,
    pub source: Source,
    pub published_date: DateTime<FixedOffset>,
    pub positivity_score: f64,
    #[serde(default)]
    pub topics: Vec<Topic>,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub image_url: String,
    pub url: String,
}

impl Article {
    /// トピック名を順序どおりに返す
    pub fn topic_names(&self) -> impl Iterator<Item = &str> {
        self.topics.iter().map(|t| t.name.as_str())
    }

    pub fn has_region(&self) -> bool {
        !self.region.is_empty()
    }

    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }

    pub fn score_tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.positivity_score)
    }

    /// バッジ表記（例: `+92%`）
    pub fn score_badge(&self) -> String {
        format_score(self.positivity_score)
    }

    /// 公開日時の表示用文字列
    pub fn published_label(&self) -> String {
        format_published(&self.published_date)
    }
}

/// API とローカル JSON の共通ドキュメント形式 `{ "articles": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticlesDocument {
    pub articles: Vec<Article>,
}

// ============================================================================
// ScoreTier（ポジティブ度の表示段階）
// ============================================================================

/// ポジティブ度バッジの5段階
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScoreTier {
    Faint,
    Mild,
    Good,
    Great,
    Glowing,
}

impl ScoreTier {
    /// スコアを段階に振り分ける（0.9 / 0.8 / 0.7 / 0.6 の閾値）
    pub fn from_score(score: f64) -> Self {
        if score >= 0.9 {
            ScoreTier::Glowing
        } else if score >= 0.8 {
            ScoreTier::Great
        } else if score >= 0.7 {
            ScoreTier::Good
        } else if score >= 0.6 {
            ScoreTier::Mild
        } else {
            ScoreTier::Faint
        }
    }

    /// 端末上の色（濃いオレンジから薄いオレンジへ）
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ScoreTier::Glowing => (0xe6, 0x7e, 0x22),
            ScoreTier::Great => (0xf3, 0x9c, 0x12),
            ScoreTier::Good => (0xf5, 0xb0, 0x41),
            ScoreTier::Mild => (0xf8, 0xc4, 0x71),
            ScoreTier::Faint => (0xfa, 0xd7, 0xa0),
        }
    }
}

/// スコアをパーセント表記にする
pub fn format_score(score: f64) -> String {
    format!("+{}%", (score * 100.0).round() as i64)
}

const SWEDISH_MONTHS: [&str; 12] = [
    "jan.", "feb.", "mars", "apr.", "maj", "juni", "juli", "aug.", "sep.", "okt.", "nov.",
    "dec.",
];

/// 公開日時を `11 mars 16:24` 形式で書式化（タイムスタンプ自身のオフセットで表示）
pub fn format_published(date: &DateTime<FixedOffset>) -> String {
    format!(
        "{} {} {:02}:{:02}",
        date.day(),
        SWEDISH_MONTHS[date.month0() as usize],
        date.hour(),
        date.minute()
    )
}

#[cfg(test)]
#[path = "article_test.rs"]
mod tests;
