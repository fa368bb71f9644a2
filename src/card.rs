//! 記事カードの表示モデル
//!
//! CLI 出力と TUI 描画の共通部分。記事から表示用の文字列を組み立てるだけで状態を持たない。
//! 画像は一度ビューポートに入るまでプレースホルダーのまま（`LazyImages`）。

use crate::article::{Article, ArticleId, ScoreTier};
use std::collections::HashSet;

/// 画像枠の状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSlot {
    /// 画像なし
    None,
    /// 未表示（読み込み中インジケータ）
    Placeholder,
    /// 表示済み
    Loaded(String),
}

/// 記事カード
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub source: String,
    pub badge: String,
    pub tier: ScoreTier,
    pub published: String,
    pub title: String,
    pub summary: String,
    pub region: Option<String>,
    pub url: String,
    pub image: ImageSlot,
}

impl CardView {
    pub fn from_article(article: &Article, image_revealed: bool) -> Self {
        let image = if !article.has_image() {
            ImageSlot::None
        } else if image_revealed {
            ImageSlot::Loaded(article.image_url.clone())
        } else {
            ImageSlot::Placeholder
        };

        Self {
            source: article.source.name.clone(),
            badge: article.score_badge(),
            tier: article.score_tier(),
            published: article.published_label(),
            title: article.title.clone(),
            summary: article.summary.clone(),
            region: article.has_region().then(|| article.region.clone()),
            url: article.url.clone(),
            image,
        }
    }
}

/// 遅延読み込み画像の追跡
///
/// 一度でも可視範囲に入った記事の画像は以後ずっと表示する。
#[derive(Debug, Default)]
pub struct LazyImages {
    revealed: HashSet<ArticleId>,
}

impl LazyImages {
    pub fn new() -> Self {
        Self::default()
    }

    /// 可視範囲に入った記事を記録
    pub fn reveal<I: IntoIterator<Item = ArticleId>>(&mut self, ids: I) {
        self.revealed.extend(ids);
    }

    pub fn is_revealed(&self, id: ArticleId) -> bool {
        self.revealed.contains(&id)
    }

    pub fn card(&self, article: &Article) -> CardView {
        CardView::from_article(article, self.is_revealed(article.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::embedded_articles;
    use crate::test_support::make_article;

    #[test]
    fn test_card_fields() {
        let article = &embedded_articles()[1];
        let card = CardView::from_article(article, true);
        assert_eq!(card.source, "Göteborgs-Posten");
        assert_eq!(card.badge, "+87%");
        assert_eq!(card.tier, ScoreTier::Great);
        assert_eq!(card.published, "12 mars 09:15");
        assert_eq!(card.region.as_deref(), Some("Västra Götaland"));
        assert!(matches!(card.image, ImageSlot::Loaded(_)));
    }

    #[test]
    fn test_card_without_region_or_image() {
        let article = make_article(1, "", "Breakit", &[], 0.55);
        let card = CardView::from_article(&article, true);
        assert_eq!(card.region, None);
        assert_eq!(card.image, ImageSlot::None);
        assert_eq!(card.tier, ScoreTier::Faint);
    }

    #[test]
    fn test_lazy_images_placeholder_until_revealed() {
        let article = &embedded_articles()[0];
        let mut images = LazyImages::new();
        assert_eq!(images.card(article).image, ImageSlot::Placeholder);

        images.reveal([article.id]);
        assert_eq!(
            images.card(article).image,
            ImageSlot::Loaded(article.image_url.clone())
        );
    }
}
