//! フィードブラウザの描画
//!
//! Model を読むだけで状態は変更しない。

use super::app::{FilterField, Focus, Model, Tab, CARD_HEIGHT};
use crate::article::{format_score, ScoreTier};
use crate::card::{CardView, ImageSlot};
use crate::landscape::{self, Landscape};
use crate::pagination::PageState;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap};

/// サイドバーの幅
const SIDEBAR_WIDTH: u16 = 32;
/// トレンド欄に出す地方の数
const TRENDING_LEN: usize = 5;
/// 準備中タブの表示
const COMING_SOON: &str = "Kommer snart";

fn tier_color(tier: ScoreTier) -> Color {
    let (r, g, b) = tier.rgb();
    Color::Rgb(r, g, b)
}

fn badge_span(badge: &str, tier: ScoreTier) -> Span<'static> {
    Span::styled(
        format!(" {} ", badge),
        Style::default().fg(Color::Black).bg(tier_color(tier)),
    )
}

/// 画面を描画
pub fn view(f: &mut Frame, model: &Model) {
    f.render_widget(Clear, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // タブバー
            Constraint::Min(1),    // コンテンツ
            Constraint::Length(1), // 状態行
            Constraint::Length(1), // ヘルプ
        ])
        .split(f.area());

    let tab_titles: Vec<&str> = Tab::all().iter().map(|t| t.title()).collect();
    let tabs = Tabs::new(tab_titles)
        .select(model.tab.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" | ");
    f.render_widget(tabs, chunks[0]);

    match model.tab {
        Tab::Feed => render_feed_tab(f, model, chunks[1]),
        Tab::Trending => render_trending_tab(f, chunks[1]),
        Tab::Regional => render_placeholder_tab(f, "Regional utforskare", chunks[1]),
        Tab::User => render_placeholder_tab(f, "Användarflöde", chunks[1]),
    }

    let status = Paragraph::new(status_line(model)).style(Style::default().fg(Color::Yellow));
    f.render_widget(status, chunks[2]);

    let help = Paragraph::new(help_text(model)).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);

    if model.focus == Focus::Filters && model.tab == Tab::Feed {
        render_filter_panel(f, model, chunks[1]);
    }
}

fn help_text(model: &Model) -> &'static str {
    match (model.tab, model.focus) {
        (Tab::Feed, Focus::Filters) => {
            " ↑/↓: fält · ←/→: ändra · Space: välj ämne · r: återställ · Esc: stäng"
        }
        (Tab::Feed, Focus::Sidebar) => {
            " ↑/↓: region · Enter: filtrera · Esc: tillbaka · q: avsluta"
        }
        (Tab::Feed, Focus::Cards) => {
            " Tab: flik · ↑/↓: flytta · Enter: öppna · f: filter · s: regioner · m: fler · q: avsluta"
        }
        _ => " Tab: flik · q: avsluta",
    }
}

/// 状態行（読み込み中・末尾・件数）
pub fn status_line(model: &Model) -> String {
    let pagination = model.feed.pagination();
    let total = model.feed.filtered().len();
    let filters = if model.feed.has_active_filters() {
        " · filter aktiva"
    } else {
        ""
    };
    match model.feed.page_state() {
        PageState::LoadingMore => " Laddar fler artiklar...".to_string(),
        PageState::Exhausted if total == 0 => " r: återställ filter".to_string(),
        PageState::Exhausted => " Inga fler artiklar att visa".to_string(),
        _ => format!(
            " Visar {} av {} artiklar · källa: {}{}",
            pagination.displayed_len(),
            total,
            model.feed.tier(),
            filters
        ),
    }
}

// ============================================================================
// Nyhetsfeed
// ============================================================================

fn render_feed_tab(f: &mut Frame, model: &Model, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(SIDEBAR_WIDTH)])
        .split(area);

    if model.displayed().is_empty() {
        render_empty_state(f, columns[0]);
    } else {
        render_cards(f, model, columns[0]);
    }
    render_sidebar(f, model, columns[1]);
}

fn render_cards(f: &mut Frame, model: &Model, area: Rect) {
    let (start, cards) = model.viewport_cards();
    let mut lines: Vec<Line> = Vec::with_capacity(cards.len() * CARD_HEIGHT as usize);
    for (i, card) in cards.iter().enumerate() {
        lines.extend(card_lines(card, start + i == model.selected));
    }

    let title = format!(
        " Nyhetsfeed ({}/{}) · {} ",
        model.feed.pagination().displayed_len(),
        model.feed.filtered().len(),
        model.feed.selection().region.label()
    );
    let paragraph =
        Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

/// カード1枚分の行（CARD_HEIGHT 行）
fn card_lines(card: &CardView, selected: bool) -> Vec<Line<'static>> {
    let marker = if selected { "> " } else { "  " };
    let title_style = if selected {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let dim = Style::default().fg(Color::DarkGray);

    let mut meta = vec![Span::styled(format!("  {}", card.published), dim)];
    if let Some(region) = &card.region {
        meta.push(Span::styled(format!(" · {}", region), dim));
    }
    match &card.image {
        ImageSlot::Placeholder => meta.push(Span::styled(" · [bild laddas]", dim)),
        ImageSlot::Loaded(url) => meta.push(Span::styled(format!(" · bild: {}", url), dim)),
        ImageSlot::None => {}
    }

    vec![
        Line::from(vec![
            Span::raw(marker),
            Span::styled(card.source.clone(), dim),
            Span::raw("  "),
            badge_span(&card.badge, card.tier),
        ]),
        Line::from(vec![Span::raw("  "), Span::styled(card.title.clone(), title_style)]),
        Line::from(format!("  {}", card.summary)),
        Line::from(meta),
        Line::from(Span::styled(
            format!("  {}", card.url),
            Style::default().fg(Color::Blue),
        )),
        Line::default(),
    ]
}

fn render_empty_state(f: &mut Frame, area: Rect) {
    let content = Paragraph::new(vec![
        Line::default(),
        Line::from("  Inga artiklar matchar dina filter. Prova att ändra dina filterval."),
        Line::default(),
        Line::from(Span::styled(
            "  r: Återställ filter",
            Style::default().fg(Color::Yellow),
        )),
    ])
    .block(Block::default().title(" Nyhetsfeed ").borders(Borders::ALL));
    f.render_widget(content, area);
}

fn landscape_line(entry: &Landscape, marker: &str, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}{:<10}", marker, entry.name), style),
        Span::raw(" "),
        badge_span(&format_score(entry.positivity), entry.score_tier()),
        Span::styled(
            format!(" {} art.", entry.articles),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn render_sidebar(f: &mut Frame, model: &Model, area: Rect) {
    let lines: Vec<Line> = landscape::sidebar()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let is_cursor = model.focus == Focus::Sidebar && i == model.sidebar_selected;
            let is_active = model.active_landscape == Some(entry.id);
            let marker = if is_cursor { "> " } else { "  " };
            let style = if is_active {
                Style::default()
                    .fg(Color::Rgb(0xe6, 0x7e, 0x22))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            landscape_line(entry, marker, style)
        })
        .collect();

    let border_style = if model.focus == Focus::Sidebar {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let sidebar = Paragraph::new(lines).block(
        Block::default()
            .title(" Regioner ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(sidebar, area);
}

// ============================================================================
// フィルタパネル
// ============================================================================

fn render_filter_panel(f: &mut Frame, model: &Model, area: Rect) {
    let width = 60u16.min(area.width);
    let height = 14u16.min(area.height);
    let panel_area = Rect::new(area.x, area.y, width, height);
    f.render_widget(Clear, panel_area);

    let selection = model.feed.selection();
    let field_style = |field: FilterField| {
        if model.filter_field == field {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    };

    let region = Line::from(vec![
        Span::styled("Region: ", field_style(FilterField::Region)),
        Span::raw(format!("< {} >", selection.region.label())),
    ]);

    let mut chips = vec![Span::styled("Ämnen: ", field_style(FilterField::Topics))];
    for (i, topic) in model.filter_topics().iter().enumerate() {
        let checked = if selection.topics.contains(topic) { "x" } else { " " };
        let mut style = Style::default();
        if model.filter_field == FilterField::Topics && i == model.topic_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        chips.push(Span::styled(format!("[{}] {}", checked, topic), style));
        chips.push(Span::raw(" "));
    }

    let mut sources = vec![Span::styled("Källor: ", field_style(FilterField::Sources))];
    for (i, source) in model.feed.sources().iter().enumerate() {
        let checked = if selection.sources.contains(source) { "x" } else { " " };
        let mut style = Style::default();
        if model.filter_field == FilterField::Sources && i == model.source_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        sources.push(Span::styled(format!("[{}] {}", checked, source), style));
        sources.push(Span::raw(" "));
    }

    let score = Line::from(vec![
        Span::styled("Lägsta positivitet: ", field_style(FilterField::Score)),
        Span::raw(format!(
            "{} {}",
            score_bar(selection.min_score),
            format_score(selection.min_score)
        )),
    ]);

    let panel = Paragraph::new(vec![
        region,
        Line::default(),
        Line::from(chips),
        Line::default(),
        Line::from(sources),
        Line::default(),
        score,
    ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Filter ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(panel, panel_area);
}

/// 0.5〜1.0 の範囲を10マスで表す
fn score_bar(min_score: f64) -> String {
    let filled = (((min_score - 0.5) / 0.05).round().clamp(0.0, 10.0)) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

// ============================================================================
// その他のタブ
// ============================================================================

fn render_trending_tab(f: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "  Regioner med mest positiva nyheter",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    for entry in landscape::ranked(TRENDING_LEN) {
        lines.push(landscape_line(&entry, "  ", Style::default()));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("  Trendande ämnen: {}", COMING_SOON),
        Style::default().fg(Color::DarkGray),
    )));

    let content =
        Paragraph::new(lines).block(Block::default().title(" Trendande ").borders(Borders::ALL));
    f.render_widget(content, area);
}

fn render_placeholder_tab(f: &mut Frame, title: &str, area: Rect) {
    let content = Paragraph::new(format!("\n  {}", COMING_SOON))
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL),
        )
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(content, area);
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
