use super::*;
use crate::article::embedded_articles;
use crate::filter::RegionFilter;
use crate::test_support::make_article;

fn embedded_state() -> FeedState {
    FeedState::new(
        Resolved {
            articles: embedded_articles(),
            tier: SourceTier::Embedded,
        },
        5,
        0.7,
    )
}

fn ids(articles: &[&Article]) -> Vec<u64> {
    articles.iter().map(|a| a.id).collect()
}

#[test]
fn initial_load_shows_first_page() {
    let state = embedded_state();
    assert_eq!(state.displayed().len(), 5);
    assert!(state.pagination().has_more());
    assert_eq!(state.page_state(), PageState::Loaded);
}

#[test]
fn one_trigger_shows_all_six() {
    let mut state = embedded_state();
    assert!(state.load_more_now());
    assert_eq!(ids(&state.displayed()), vec![1, 2, 3, 4, 5, 6]);
    assert!(!state.pagination().has_more());
    assert!(!state.load_more_now());
}

#[test]
fn filter_change_resets_to_first_page() {
    let articles: Vec<Article> = (1..=12)
        .map(|id| make_article(id, if id % 2 == 0 { "Skåne" } else { "Uppland" }, "SVT", &[], 0.9))
        .collect();
    let mut state = FeedState::new(
        Resolved {
            articles,
            tier: SourceTier::Static,
        },
        5,
        0.7,
    );
    state.load_more_now();
    assert_eq!(state.pagination().page(), 2);

    state.update_selection(|s| s.set_region(RegionFilter::Named("Skåne".to_string())));
    assert_eq!(state.pagination().page(), 1);
    assert_eq!(ids(&state.displayed()), vec![2, 4, 6, 8, 10]);
    assert!(state.pagination().has_more());
}

#[test]
fn pending_load_dropped_by_filter_change() {
    let mut state = embedded_state();
    let ticket = state.begin_load_more().unwrap();
    state.update_selection(|s| s.toggle_topic("Miljö"));
    assert!(!state.complete_load_more(ticket));
    assert_eq!(ids(&state.displayed()), vec![1, 3, 4]);
}

#[test]
fn reset_filters_uses_configured_min_score() {
    let mut state = FeedState::new(
        Resolved {
            articles: embedded_articles(),
            tier: SourceTier::Embedded,
        },
        5,
        0.85,
    );
    assert_eq!(state.filtered().len(), 4);

    state.update_selection(|s| s.set_min_score(0.5));
    assert!(state.has_active_filters());
    state.reset_filters();
    assert!(!state.has_active_filters());
    assert_eq!(state.selection().min_score, 0.85);
}

#[test]
fn no_matches_is_exhausted_with_empty_display() {
    let mut state = embedded_state();
    state.update_selection(|s| s.toggle_source("Aftonbladet"));
    assert!(state.displayed().is_empty());
    assert_eq!(state.page_state(), PageState::Exhausted);
}

#[test]
fn vocabularies_come_from_articles() {
    let state = embedded_state();
    assert_eq!(state.topics().len(), 9);
    assert_eq!(state.sources().len(), 5);
}
