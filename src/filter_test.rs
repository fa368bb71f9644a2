use super::*;
use crate::article::embedded_articles;
use crate::test_support::make_article;

fn ids(articles: &[&Article]) -> Vec<u64> {
    articles.iter().map(|a| a.id).collect()
}

#[test]
fn default_selection_uses_min_score_only() {
    let articles = vec![
        make_article(1, "Uppsala", "SVT", &["Miljö"], 0.69),
        make_article(2, "Skåne", "DN", &[], 0.7),
    ];
    let result = filter_articles(&articles, &FilterSelection::default());
    assert_eq!(ids(&result), vec![2]);
}

#[test]
fn min_score_085_on_embedded_articles() {
    let articles = embedded_articles();
    let selection = FilterSelection::with_min_score(0.85);

    let result = filter_articles(&articles, &selection);
    let scores: Vec<f64> = result.iter().map(|a| a.positivity_score).collect();
    // 0.85 ちょうども含む
    assert_eq!(scores, vec![0.92, 0.87, 0.89, 0.85]);
}

#[test]
fn min_score_above_085_on_embedded_articles() {
    let articles = embedded_articles();
    let mut selection = FilterSelection::default();
    selection.set_min_score(0.86);

    let result = filter_articles(&articles, &selection);
    let scores: Vec<f64> = result.iter().map(|a| a.positivity_score).collect();
    assert_eq!(scores, vec![0.92, 0.87, 0.89]);
}

#[test]
fn region_filter_exact_match() {
    let articles = embedded_articles();
    let mut selection = FilterSelection::default();
    selection.set_region(RegionFilter::Named("National".to_string()));

    let result = filter_articles(&articles, &selection);
    assert_eq!(ids(&result), vec![5, 6]);
}

#[test]
fn source_filter_any_of_selected() {
    let articles = embedded_articles();
    let mut selection = FilterSelection::default();
    selection.toggle_source("SVT Nyheter");
    selection.toggle_source("Breakit");

    let result = filter_articles(&articles, &selection);
    assert_eq!(ids(&result), vec![1, 3, 4]);
}

#[test]
fn topic_filter_requires_one_overlap() {
    let articles = embedded_articles();
    let mut selection = FilterSelection::default();
    selection.toggle_topic("Ekonomi");

    let result = filter_articles(&articles, &selection);
    assert_eq!(ids(&result), vec![3, 6]);
}

#[test]
fn clauses_are_combined_with_and() {
    let articles = embedded_articles();
    let mut selection = FilterSelection::default();
    selection.toggle_topic("Miljö");
    selection.toggle_source("SVT Nyheter");
    selection.set_region(RegionFilter::Named("Kronoberg".to_string()));

    let result = filter_articles(&articles, &selection);
    assert_eq!(ids(&result), vec![4]);
}

#[test]
fn no_match_returns_empty() {
    let articles = embedded_articles();
    let mut selection = FilterSelection::default();
    selection.set_region(RegionFilter::Named("Dalarna".to_string()));

    assert!(filter_articles(&articles, &selection).is_empty());
}

#[test]
fn toggle_twice_removes_selection() {
    let mut selection = FilterSelection::default();
    selection.toggle_topic("Miljö");
    assert!(selection.topics.contains("Miljö"));
    selection.toggle_topic("Miljö");
    assert!(selection.topics.is_empty());
}

#[test]
fn reset_restores_defaults() {
    let mut selection = FilterSelection::default();
    selection.toggle_topic("Miljö");
    selection.toggle_source("Breakit");
    selection.set_region(RegionFilter::Named("Skåne".to_string()));
    selection.set_min_score(0.9);
    assert_ne!(selection, FilterSelection::default());

    selection.reset_to(DEFAULT_MIN_SCORE);
    assert_eq!(selection, FilterSelection::default());
}

#[test]
fn slider_steps_and_clamps() {
    let mut selection = FilterSelection::default();
    selection.raise_min_score();
    assert_eq!(selection.min_score, 0.75);

    for _ in 0..20 {
        selection.raise_min_score();
    }
    assert_eq!(selection.min_score, 1.0);

    for _ in 0..20 {
        selection.lower_min_score();
    }
    assert_eq!(selection.min_score, 0.5);
}

#[test]
fn slider_below_floor_never_raises_on_lower() {
    let mut selection = FilterSelection::with_min_score(0.3);
    selection.lower_min_score();
    assert_eq!(selection.min_score, 0.25);

    selection.raise_min_score();
    selection.raise_min_score();
    assert_eq!(selection.min_score, 0.35);

    for _ in 0..10 {
        selection.lower_min_score();
    }
    assert_eq!(selection.min_score, 0.0);
}

#[test]
fn slider_floor_holds_once_reached() {
    let mut selection = FilterSelection::with_min_score(0.52);
    selection.lower_min_score();
    assert_eq!(selection.min_score, 0.5);
    selection.lower_min_score();
    assert_eq!(selection.min_score, 0.5);
}

#[test]
fn region_parse_sentinels() {
    assert_eq!(RegionFilter::parse("all"), RegionFilter::Any);
    assert_eq!(RegionFilter::parse("ANY"), RegionFilter::Any);
    assert_eq!(RegionFilter::parse("  "), RegionFilter::Any);
    assert_eq!(
        RegionFilter::parse(" Skåne "),
        RegionFilter::Named("Skåne".to_string())
    );
}

#[test]
fn all_topics_first_seen_order() {
    let topics = all_topics(&embedded_articles());
    assert_eq!(
        topics,
        vec![
            "Miljö",
            "Forskning",
            "Hälsa",
            "Innovation",
            "Ekonomi",
            "Mode",
            "Transport",
            "Utbildning",
            "Arbetsmarknad"
        ]
    );
}

#[test]
fn all_sources_deduplicated() {
    let sources = all_sources(&embedded_articles());
    assert_eq!(
        sources,
        vec![
            "SVT Nyheter",
            "Göteborgs-Posten",
            "Breakit",
            "Dagens Nyheter",
            "Svenska Dagbladet"
        ]
    );
}
