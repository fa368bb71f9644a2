//! フィードのセッション状態
//!
//! 解決済みの記事・フィルタ選択・ページングをひとまとめに保持する。
//! フィルタを変更すると必ず1ページ目に戻る。

use crate::article::Article;
use crate::filter::{all_sources, all_topics, filter_articles, FilterSelection};
use crate::pagination::{LoadTicket, PageState, Pagination};
use crate::resolver::Resolved;
use crate::source::SourceTier;

/// フィードのセッション状態
#[derive(Debug, Clone)]
pub struct FeedState {
    articles: Vec<Article>,
    tier: SourceTier,
    selection: FilterSelection,
    pagination: Pagination,
    default_min_score: f64,
}

impl FeedState {
    /// 解決結果から作成し、1ページ目を表示する
    pub fn new(resolved: Resolved, page_size: usize, default_min_score: f64) -> Self {
        let mut state = Self {
            articles: resolved.articles,
            tier: resolved.tier,
            selection: FilterSelection::with_min_score(default_min_score),
            pagination: Pagination::new(page_size),
            default_min_score,
        };
        state.refresh();
        state
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn tier(&self) -> SourceTier {
        self.tier
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn page_state(&self) -> PageState {
        self.pagination.state()
    }

    /// 絞り込み結果
    pub fn filtered(&self) -> Vec<&Article> {
        filter_articles(&self.articles, &self.selection)
    }

    /// 表示中の記事（絞り込み結果の先頭部分）
    pub fn displayed(&self) -> Vec<&Article> {
        let filtered = self.filtered();
        self.pagination.displayed(&filtered).to_vec()
    }

    /// フィルタを変更してページングをリセット
    pub fn update_selection<F: FnOnce(&mut FilterSelection)>(&mut self, f: F) {
        f(&mut self.selection);
        self.refresh();
    }

    /// フィルタを初期状態に戻す
    pub fn reset_filters(&mut self) {
        let min_score = self.default_min_score;
        self.update_selection(|s| s.reset_to(min_score));
    }

    /// 初期状態から変更されたフィルタがあるか
    pub fn has_active_filters(&self) -> bool {
        self.selection != FilterSelection::with_min_score(self.default_min_score)
    }

    pub fn begin_load_more(&mut self) -> Option<LoadTicket> {
        self.pagination.begin_load_more()
    }

    pub fn complete_load_more(&mut self, ticket: LoadTicket) -> bool {
        self.pagination.complete_load_more(ticket)
    }

    pub fn load_more_now(&mut self) -> bool {
        self.pagination.load_more_now()
    }

    /// トピック候補（初出順）
    pub fn topics(&self) -> Vec<String> {
        all_topics(&self.articles)
    }

    /// 配信元候補（初出順）
    pub fn sources(&self) -> Vec<String> {
        all_sources(&self.articles)
    }

    fn refresh(&mut self) {
        let filtered_len = self.filtered().len();
        self.pagination.reset(filtered_len);
        tracing::debug!(
            filtered = filtered_len,
            total = self.articles.len(),
            "filter selection applied"
        );
    }
}

#[cfg(test)]
#[path = "feed_test.rs"]
mod tests;
