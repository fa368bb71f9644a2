//! フィードブラウザの Elm Architecture ベースのアプリケーション構造
//!
//! - `Model`: フィード状態・タブ・フォーカス・遅延ロードの保留状態
//! - `Msg`: アプリケーションへのメッセージ
//! - `update`: メッセージに応じた状態更新
//!
//! 追加読み込みの遅延はイベントループの `Tick` で締め切りを確認して完了させる。

use crate::article::Article;
use crate::card::{CardView, LazyImages};
use crate::feed::FeedState;
use crate::filter::RegionFilter;
use crate::landscape::{self, LANDSCAPES};
use crate::pagination::LoadTicket;
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};

/// フィルタパネルに並べるトピック数
pub const FILTER_TOPIC_LIMIT: usize = 8;
/// カード1枚の行数（区切り行を含む）
pub const CARD_HEIGHT: u16 = 6;
/// カード一覧以外の行数（タブ・ヘルプ・状態行・枠線）
const CHROME_ROWS: u16 = 5;

// ============================================================================
// Tab（タブ種別）
// ============================================================================

/// タブ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Feed,
    Trending,
    Regional,
    User,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Feed, Tab::Trending, Tab::Regional, Tab::User]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Feed => "Nyhetsfeed",
            Tab::Trending => "Trendande",
            Tab::Regional => "Regionalt",
            Tab::User => "Användare",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Feed => 0,
            Tab::Trending => 1,
            Tab::Regional => 2,
            Tab::User => 3,
        }
    }

    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Tab::Feed,
            1 => Tab::Trending,
            2 => Tab::Regional,
            _ => Tab::User,
        }
    }

    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(&self) -> Self {
        Self::from_index(self.index() + 3)
    }
}

// ============================================================================
// Focus / FilterField
// ============================================================================

/// キー入力の受け先
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Cards,
    Sidebar,
    Filters,
}

/// フィルタパネルの項目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterField {
    #[default]
    Region,
    Topics,
    Sources,
    Score,
}

impl FilterField {
    pub fn next(&self) -> Self {
        match self {
            FilterField::Region => FilterField::Topics,
            FilterField::Topics => FilterField::Sources,
            FilterField::Sources => FilterField::Score,
            FilterField::Score => FilterField::Region,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FilterField::Region => FilterField::Score,
            FilterField::Topics => FilterField::Region,
            FilterField::Sources => FilterField::Topics,
            FilterField::Score => FilterField::Sources,
        }
    }
}

/// 地域セレクタの選択肢（すべて + 地方）
pub fn region_options() -> Vec<RegionFilter> {
    std::iter::once(RegionFilter::Any)
        .chain(
            LANDSCAPES
                .iter()
                .map(|l| RegionFilter::Named(l.name.to_string())),
        )
        .collect()
}

// ============================================================================
// Msg（アプリケーションへのメッセージ）
// ============================================================================

/// アプリケーションへのメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Quit,
    NextTab,
    PrevTab,
    /// 次のカードへ（最後のカードが見えたら追加読み込み）
    SelectNext,
    SelectPrev,
    /// 明示的な追加読み込み
    LoadMore,
    /// 選択中の記事をブラウザで開く
    Open,
    ResetFilters,
    OpenFilters,
    CloseFilters,
    FocusSidebar,
    FocusCards,
    SidebarNext,
    SidebarPrev,
    /// サイドバーの地方を地域フィルタに設定
    SidebarApply,
    FieldNext,
    FieldPrev,
    OptionNext,
    OptionPrev,
    ToggleOption,
    /// 端末の高さ変更
    Resize(u16),
    /// イベントループの定期通知
    Tick,
}

/// update() の戻り値
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UpdateEffect {
    /// 外部ブラウザで開く URL
    pub open_url: Option<String>,
}

// ============================================================================
// Model（アプリケーション全体の状態）
// ============================================================================

/// 保留中の追加読み込み
#[derive(Debug, Clone, Copy)]
struct PendingLoad {
    ticket: LoadTicket,
    deadline: Instant,
}

/// アプリケーション全体の状態
pub struct Model {
    pub feed: FeedState,
    pub images: LazyImages,
    pub tab: Tab,
    pub focus: Focus,
    /// 表示中カードの選択位置
    pub selected: usize,
    /// 可視範囲の先頭カード
    pub offset: usize,
    /// 可視範囲に収まるカード数
    pub visible_cards: usize,
    pub sidebar_selected: usize,
    /// サイドバーで選んだ地方の ID
    pub active_landscape: Option<u32>,
    pub filter_field: FilterField,
    pub topic_cursor: usize,
    pub source_cursor: usize,
    pub should_quit: bool,
    pending: Option<PendingLoad>,
    load_delay: Duration,
}

impl Model {
    pub fn new(feed: FeedState, load_delay: Duration) -> Self {
        let mut model = Self {
            feed,
            images: LazyImages::new(),
            tab: Tab::Feed,
            focus: Focus::Cards,
            selected: 0,
            offset: 0,
            visible_cards: 1,
            sidebar_selected: 0,
            active_landscape: None,
            filter_field: FilterField::Region,
            topic_cursor: 0,
            source_cursor: 0,
            should_quit: false,
            pending: None,
            load_delay,
        };
        model.reveal_visible();
        model
    }

    /// 表示中の記事
    pub fn displayed(&self) -> Vec<&Article> {
        self.feed.displayed()
    }

    /// 可視範囲のカード（先頭インデックスと表示モデル）
    pub fn viewport_cards(&self) -> (usize, Vec<CardView>) {
        let displayed = self.displayed();
        let end = (self.offset + self.visible_cards).min(displayed.len());
        let start = self.offset.min(end);
        let cards = displayed[start..end]
            .iter()
            .map(|article| self.images.card(article))
            .collect();
        (start, cards)
    }

    /// フィルタパネルに出すトピック（先頭8件）
    pub fn filter_topics(&self) -> Vec<String> {
        let mut topics = self.feed.topics();
        topics.truncate(FILTER_TOPIC_LIMIT);
        topics
    }

    /// 追加読み込みの遅延中か
    pub fn is_loading(&self) -> bool {
        self.feed.pagination().is_loading()
    }

    /// キー入力をメッセージに変換
    pub fn key_to_msg(&self, key: KeyCode) -> Option<Msg> {
        match self.focus {
            Focus::Filters => match key {
                KeyCode::Esc | KeyCode::Char('f') => Some(Msg::CloseFilters),
                KeyCode::Char('q') => Some(Msg::Quit),
                KeyCode::Tab => Some(Msg::NextTab),
                KeyCode::BackTab => Some(Msg::PrevTab),
                KeyCode::Up | KeyCode::Char('k') => Some(Msg::FieldPrev),
                KeyCode::Down | KeyCode::Char('j') => Some(Msg::FieldNext),
                KeyCode::Left | KeyCode::Char('h') => Some(Msg::OptionPrev),
                KeyCode::Right | KeyCode::Char('l') => Some(Msg::OptionNext),
                KeyCode::Char(' ') | KeyCode::Enter => Some(Msg::ToggleOption),
                KeyCode::Char('r') => Some(Msg::ResetFilters),
                _ => None,
            },
            Focus::Sidebar => match key {
                KeyCode::Esc | KeyCode::Char('s') => Some(Msg::FocusCards),
                KeyCode::Char('q') => Some(Msg::Quit),
                KeyCode::Tab | KeyCode::Right => Some(Msg::NextTab),
                KeyCode::BackTab | KeyCode::Left => Some(Msg::PrevTab),
                KeyCode::Up | KeyCode::Char('k') => Some(Msg::SidebarPrev),
                KeyCode::Down | KeyCode::Char('j') => Some(Msg::SidebarNext),
                KeyCode::Enter | KeyCode::Char(' ') => Some(Msg::SidebarApply),
                KeyCode::Char('r') => Some(Msg::ResetFilters),
                _ => None,
            },
            Focus::Cards => match key {
                KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
                KeyCode::Tab | KeyCode::Right => Some(Msg::NextTab),
                KeyCode::BackTab | KeyCode::Left => Some(Msg::PrevTab),
                // フィード以外のタブは静的表示のみ
                _ if self.tab != Tab::Feed => None,
                KeyCode::Down | KeyCode::Char('j') => Some(Msg::SelectNext),
                KeyCode::Up | KeyCode::Char('k') => Some(Msg::SelectPrev),
                KeyCode::PageDown | KeyCode::Char('m') => Some(Msg::LoadMore),
                KeyCode::Enter | KeyCode::Char('o') => Some(Msg::Open),
                KeyCode::Char('f') => Some(Msg::OpenFilters),
                KeyCode::Char('s') => Some(Msg::FocusSidebar),
                KeyCode::Char('r') => Some(Msg::ResetFilters),
                _ => None,
            },
        }
    }

    fn trigger_load_more(&mut self, now: Instant) {
        if let Some(ticket) = self.feed.begin_load_more() {
            tracing::debug!(page = self.feed.pagination().page(), "load more requested");
            self.pending = Some(PendingLoad {
                ticket,
                deadline: now + self.load_delay,
            });
        }
    }

    fn finish_pending(&mut self, now: Instant) {
        let Some(pending) = self.pending else {
            return;
        };
        if now < pending.deadline {
            return;
        }
        self.pending = None;
        if self.feed.complete_load_more(pending.ticket) {
            tracing::debug!(
                shown = self.feed.pagination().displayed_len(),
                "next page appended"
            );
            self.reveal_visible();
            self.load_if_end_visible(now);
        } else {
            tracing::debug!("stale load more ignored");
        }
    }

    /// 最後のカード（番兵）が可視範囲に入っていれば追加読み込みを始める
    fn load_if_end_visible(&mut self, now: Instant) {
        let len = self.feed.pagination().displayed_len();
        if len > 0 && self.offset + self.visible_cards >= len {
            self.trigger_load_more(now);
        }
    }

    /// フィルタ変更後は先頭カードへ戻る
    fn after_filter_change(&mut self, now: Instant) {
        self.selected = 0;
        self.offset = 0;
        self.reveal_visible();
        self.load_if_end_visible(now);
    }

    fn ensure_visible(&mut self) {
        let visible = self.visible_cards.max(1);
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + visible {
            self.offset = self.selected + 1 - visible;
        }
    }

    fn reveal_visible(&mut self) {
        let ids: Vec<_> = {
            let displayed = self.feed.displayed();
            displayed
                .iter()
                .skip(self.offset)
                .take(self.visible_cards)
                .map(|a| a.id)
                .collect()
        };
        self.images.reveal(ids);
    }

    fn cycle_region(&mut self, forward: bool, now: Instant) {
        let options = region_options();
        let current = options
            .iter()
            .position(|r| *r == self.feed.selection().region)
            .unwrap_or(0);
        let len = options.len();
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        let region = options[next].clone();
        self.active_landscape = None;
        self.feed.update_selection(|s| s.set_region(region));
        self.after_filter_change(now);
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg, now: Instant) -> UpdateEffect {
    match msg {
        Msg::Quit => {
            model.should_quit = true;
        }
        Msg::NextTab => {
            model.focus = Focus::Cards;
            model.tab = model.tab.next();
        }
        Msg::PrevTab => {
            model.focus = Focus::Cards;
            model.tab = model.tab.prev();
        }
        Msg::SelectNext => {
            let len = model.feed.pagination().displayed_len();
            if model.selected + 1 < len {
                model.selected += 1;
                model.ensure_visible();
                model.reveal_visible();
            }
            model.load_if_end_visible(now);
        }
        Msg::SelectPrev => {
            if model.selected > 0 {
                model.selected -= 1;
                model.ensure_visible();
                model.reveal_visible();
            }
        }
        Msg::LoadMore => model.trigger_load_more(now),
        Msg::Open => {
            let url = model.displayed().get(model.selected).map(|a| a.url.clone());
            if let Some(url) = url {
                return UpdateEffect {
                    open_url: Some(url),
                };
            }
        }
        Msg::ResetFilters => {
            model.active_landscape = None;
            model.feed.reset_filters();
            model.after_filter_change(now);
        }
        Msg::OpenFilters => model.focus = Focus::Filters,
        Msg::CloseFilters | Msg::FocusCards => model.focus = Focus::Cards,
        Msg::FocusSidebar => model.focus = Focus::Sidebar,
        Msg::SidebarNext => {
            model.sidebar_selected = (model.sidebar_selected + 1) % landscape::SIDEBAR_LEN;
        }
        Msg::SidebarPrev => {
            model.sidebar_selected =
                (model.sidebar_selected + landscape::SIDEBAR_LEN - 1) % landscape::SIDEBAR_LEN;
        }
        Msg::SidebarApply => {
            if let Some(entry) = landscape::sidebar().get(model.sidebar_selected) {
                model.active_landscape = Some(entry.id);
                let region = RegionFilter::Named(entry.name.to_string());
                model.feed.update_selection(|s| s.set_region(region));
                model.after_filter_change(now);
            }
        }
        Msg::FieldNext => model.filter_field = model.filter_field.next(),
        Msg::FieldPrev => model.filter_field = model.filter_field.prev(),
        Msg::OptionNext | Msg::OptionPrev => {
            let forward = msg == Msg::OptionNext;
            match model.filter_field {
                FilterField::Region => model.cycle_region(forward, now),
                FilterField::Topics => {
                    let len = model.filter_topics().len();
                    model.topic_cursor = step_cursor(model.topic_cursor, len, forward);
                }
                FilterField::Sources => {
                    let len = model.feed.sources().len();
                    model.source_cursor = step_cursor(model.source_cursor, len, forward);
                }
                FilterField::Score => {
                    if forward {
                        model.feed.update_selection(|s| s.raise_min_score());
                    } else {
                        model.feed.update_selection(|s| s.lower_min_score());
                    }
                    model.after_filter_change(now);
                }
            }
        }
        Msg::ToggleOption => match model.filter_field {
            FilterField::Topics => {
                if let Some(topic) = model.filter_topics().get(model.topic_cursor).cloned() {
                    model.feed.update_selection(|s| s.toggle_topic(&topic));
                    model.after_filter_change(now);
                }
            }
            FilterField::Sources => {
                if let Some(source) = model.feed.sources().get(model.source_cursor).cloned() {
                    model.feed.update_selection(|s| s.toggle_source(&source));
                    model.after_filter_change(now);
                }
            }
            FilterField::Region | FilterField::Score => {}
        },
        Msg::Resize(height) => {
            let rows = height.saturating_sub(CHROME_ROWS) / CARD_HEIGHT;
            model.visible_cards = rows.max(1) as usize;
            model.ensure_visible();
            model.reveal_visible();
            model.load_if_end_visible(now);
        }
        Msg::Tick => model.finish_pending(now),
    }
    UpdateEffect::default()
}

/// 循環するカーソル移動（候補なしなら 0）
fn step_cursor(cursor: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        0
    } else if forward {
        (cursor + 1) % len
    } else {
        (cursor + len - 1) % len
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
