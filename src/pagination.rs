//! ページング制御
//!
//! 絞り込み結果のうち表示中の件数を管理する状態機械。
//! 表示中の記事は常に絞り込み結果の先頭部分（ページ番号 × ページサイズ件）。
//!
//! ```text
//! Empty --reset--> Loaded <--> LoadingMore
//!                    |             |
//!                    +--> Exhausted <+
//! ```

/// ページング状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    /// 未読み込み
    Empty,
    /// 表示中（続きあり）
    Loaded,
    /// 追加読み込み中
    LoadingMore,
    /// すべて表示済み
    Exhausted,
}

/// 追加読み込みの受付票
///
/// 受付後にフィルタが変わった場合、完了時に世代不一致で破棄される。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// ページング制御
#[derive(Debug, Clone)]
pub struct Pagination {
    page_size: usize,
    page: usize,
    filtered_len: usize,
    loading: bool,
    generation: u64,
}

impl Pagination {
    /// ページサイズを指定して作成（0 は 1 として扱う）
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page: 0,
            filtered_len: 0,
            loading: false,
            generation: 0,
        }
    }

    /// 絞り込み結果が変わったときに1ページ目へ戻す
    pub fn reset(&mut self, filtered_len: usize) {
        self.page = 1;
        self.filtered_len = filtered_len;
        self.loading = false;
        self.generation += 1;
    }

    pub fn state(&self) -> PageState {
        if self.page == 0 {
            PageState::Empty
        } else if self.loading {
            PageState::LoadingMore
        } else if self.has_more() {
            PageState::Loaded
        } else {
            PageState::Exhausted
        }
    }

    /// 現在のページ番号（1始まり、未読み込みなら 0）
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// 表示件数
    pub fn displayed_len(&self) -> usize {
        (self.page * self.page_size).min(self.filtered_len)
    }

    /// 続きがあるか
    pub fn has_more(&self) -> bool {
        self.page > 0 && self.displayed_len() < self.filtered_len
    }

    /// 表示中の先頭部分を切り出す
    pub fn displayed<'a, T>(&self, filtered: &'a [T]) -> &'a [T] {
        &filtered[..self.displayed_len().min(filtered.len())]
    }

    /// 追加読み込みを開始する
    ///
    /// 読み込み中・表示済み・未読み込みのときは何もせず None を返す。
    pub fn begin_load_more(&mut self) -> Option<LoadTicket> {
        if self.state() != PageState::Loaded {
            return None;
        }
        self.loading = true;
        Some(LoadTicket {
            generation: self.generation,
        })
    }

    /// 追加読み込みを完了し、次のページを表示に加える
    ///
    /// 受付後に reset された古い受付票は無視して false を返す。
    pub fn complete_load_more(&mut self, ticket: LoadTicket) -> bool {
        if !self.loading || ticket.generation != self.generation {
            return false;
        }
        self.page += 1;
        self.loading = false;
        true
    }

    /// 遅延なしで1ページ追加する（非対話モード用）
    pub fn load_more_now(&mut self) -> bool {
        match self.begin_load_more() {
            Some(ticket) => self.complete_load_more(ticket),
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "pagination_test.rs"]
mod tests;
