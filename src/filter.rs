//! フィルタロジック
//!
//! 記事一覧を地域・配信元・トピック・ポジティブ度で絞り込む。
//! 元の並び順を保ったまま部分列を返す純粋関数。

use crate::article::Article;
use crate::config::DEFAULT_MIN_SCORE;
use std::collections::BTreeSet;

/// スライダーの下限
pub const SCORE_SLIDER_MIN: f64 = 0.5;
/// スライダーの上限
pub const SCORE_SLIDER_MAX: f64 = 1.0;
/// スライダーの刻み幅
pub const SCORE_SLIDER_STEP: f64 = 0.05;

/// 地域フィルタ
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RegionFilter {
    /// すべての地域
    #[default]
    Any,
    Named(String),
}

impl RegionFilter {
    /// CLI 等の入力から構築（`all` / `any` / 空文字はすべて）
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("all")
            || trimmed.eq_ignore_ascii_case("any")
        {
            RegionFilter::Any
        } else {
            RegionFilter::Named(trimmed.to_string())
        }
    }

    pub fn matches(&self, region: &str) -> bool {
        match self {
            RegionFilter::Any => true,
            RegionFilter::Named(name) => name == region,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            RegionFilter::Any => "Alla regioner",
            RegionFilter::Named(name) => name,
        }
    }
}

/// フィルタ選択状態
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub region: RegionFilter,
    pub topics: BTreeSet<String>,
    pub sources: BTreeSet<String>,
    pub min_score: f64,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self::with_min_score(DEFAULT_MIN_SCORE)
    }
}

impl FilterSelection {
    /// 最小スコアだけ指定した初期状態
    pub fn with_min_score(min_score: f64) -> Self {
        Self {
            region: RegionFilter::Any,
            topics: BTreeSet::new(),
            sources: BTreeSet::new(),
            min_score,
        }
    }

    /// 地域条件
    pub fn region_matches(&self, article: &Article) -> bool {
        self.region.matches(&article.region)
    }

    /// 配信元条件（未選択なら常に真）
    pub fn source_matches(&self, article: &Article) -> bool {
        self.sources.is_empty() || self.sources.contains(&article.source.name)
    }

    /// トピック条件（未選択なら常に真、選択時はいずれか1つ一致）
    pub fn topic_matches(&self, article: &Article) -> bool {
        self.topics.is_empty()
            || article
                .topic_names()
                .any(|name| self.topics.contains(name))
    }

    /// スコア条件
    pub fn score_matches(&self, article: &Article) -> bool {
        article.positivity_score >= self.min_score
    }

    /// 4条件すべてを満たすか
    pub fn matches(&self, article: &Article) -> bool {
        self.region_matches(article)
            && self.source_matches(article)
            && self.topic_matches(article)
            && self.score_matches(article)
    }

    /// トピックの選択を切り替える
    pub fn toggle_topic(&mut self, topic: &str) {
        if !self.topics.remove(topic) {
            self.topics.insert(topic.to_string());
        }
    }

    /// 配信元の選択を切り替える
    pub fn toggle_source(&mut self, source: &str) {
        if !self.sources.remove(source) {
            self.sources.insert(source.to_string());
        }
    }

    pub fn set_region(&mut self, region: RegionFilter) {
        self.region = region;
    }

    pub fn set_min_score(&mut self, min_score: f64) {
        self.min_score = min_score.clamp(0.0, 1.0);
    }

    /// スライダーを1段階上げる（上限 1.0）
    pub fn raise_min_score(&mut self) {
        self.min_score = snap_to_step(self.min_score + SCORE_SLIDER_STEP, self.slider_floor());
    }

    /// スライダーを1段階下げる（下限 0.5）
    pub fn lower_min_score(&mut self) {
        self.min_score = snap_to_step(self.min_score - SCORE_SLIDER_STEP, self.slider_floor());
    }

    /// 設定値がすでに下限 0.5 を下回っていれば 0.0 まで動かせる
    fn slider_floor(&self) -> f64 {
        if self.min_score < SCORE_SLIDER_MIN {
            0.0
        } else {
            SCORE_SLIDER_MIN
        }
    }

    /// 地域・トピック・配信元の選択を外し、最小スコアを指定値に戻す
    pub fn reset_to(&mut self, min_score: f64) {
        *self = Self::with_min_score(min_score);
    }
}

/// スライダーの刻みに丸めて範囲内に収める
fn snap_to_step(value: f64, floor: f64) -> f64 {
    let snapped = (value / SCORE_SLIDER_STEP).round() * SCORE_SLIDER_STEP;
    // 浮動小数誤差を小数第2位で落とす
    let snapped = (snapped * 100.0).round() / 100.0;
    snapped.clamp(floor, SCORE_SLIDER_MAX)
}

/// フィルタ選択で記事を絞り込む（元の順序を保持）
pub fn filter_articles<'a>(
    articles: &'a [Article],
    selection: &FilterSelection,
) -> Vec<&'a Article> {
    articles.iter().filter(|a| selection.matches(a)).collect()
}

/// 記事に現れるトピック名（初出順、重複なし）
pub fn all_topics(articles: &[Article]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    articles
        .iter()
        .flat_map(|a| a.topic_names())
        .filter(|name| seen.insert(name.to_string()))
        .map(str::to_string)
        .collect()
}

/// 記事に現れる配信元名（初出順、重複なし）
pub fn all_sources(articles: &[Article]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    articles
        .iter()
        .map(|a| a.source.name.as_str())
        .filter(|name| seen.insert(name.to_string()))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;

#[cfg(test)]
#[path = "filter_proptests.rs"]
mod proptests;
