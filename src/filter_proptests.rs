use super::*;
use crate::test_support::make_article;
use proptest::prelude::*;

const REGIONS: [&str; 4] = ["Uppsala", "Skåne", "National", ""];
const SOURCES: [&str; 3] = ["SVT Nyheter", "Breakit", "Dagens Nyheter"];
const TOPICS: [&str; 4] = ["Miljö", "Ekonomi", "Hälsa", "Mode"];

fn article_strategy() -> impl Strategy<Value = Article> {
    (
        0..REGIONS.len(),
        0..SOURCES.len(),
        proptest::sample::subsequence(TOPICS.to_vec(), 0..=TOPICS.len()),
        0u32..=100,
    )
        .prop_map(|(region, source, topics, score)| {
            make_article(0, REGIONS[region], SOURCES[source], &topics, score as f64 / 100.0)
        })
}

fn articles_strategy() -> impl Strategy<Value = Vec<Article>> {
    proptest::collection::vec(article_strategy(), 0..30).prop_map(|mut articles| {
        for (i, a) in articles.iter_mut().enumerate() {
            a.id = i as u64;
        }
        articles
    })
}

fn selection_strategy() -> impl Strategy<Value = FilterSelection> {
    (
        proptest::option::of(0..REGIONS.len()),
        proptest::sample::subsequence(TOPICS.to_vec(), 0..=2),
        proptest::sample::subsequence(SOURCES.to_vec(), 0..=2),
        0u32..=100,
    )
        .prop_map(|(region, topics, sources, score)| {
            let mut selection = FilterSelection::with_min_score(score as f64 / 100.0);
            if let Some(r) = region {
                selection.set_region(RegionFilter::Named(REGIONS[r].to_string()));
            }
            for t in topics {
                selection.toggle_topic(t);
            }
            for s in sources {
                selection.toggle_source(s);
            }
            selection
        })
}

proptest! {
    /// 出力に含まれる記事は4条件すべてを満たす
    #[test]
    fn prop_included_articles_satisfy_all_clauses(
        articles in articles_strategy(),
        selection in selection_strategy()
    ) {
        for article in filter_articles(&articles, &selection) {
            prop_assert!(selection.region_matches(article));
            prop_assert!(selection.source_matches(article));
            prop_assert!(selection.topic_matches(article));
            prop_assert!(selection.score_matches(article));
        }
    }

    /// 除外された記事は少なくとも1条件を満たさない
    #[test]
    fn prop_excluded_articles_fail_a_clause(
        articles in articles_strategy(),
        selection in selection_strategy()
    ) {
        let kept: Vec<u64> = filter_articles(&articles, &selection)
            .iter()
            .map(|a| a.id)
            .collect();
        for article in articles.iter().filter(|a| !kept.contains(&a.id)) {
            prop_assert!(
                !selection.region_matches(article)
                    || !selection.source_matches(article)
                    || !selection.topic_matches(article)
                    || !selection.score_matches(article)
            );
        }
    }

    /// 出力は入力の順序を保つ部分列
    #[test]
    fn prop_output_preserves_order(
        articles in articles_strategy(),
        selection in selection_strategy()
    ) {
        let kept: Vec<u64> = filter_articles(&articles, &selection)
            .iter()
            .map(|a| a.id)
            .collect();
        prop_assert!(kept.windows(2).all(|w| w[0] < w[1]));
    }

    /// スライダー操作後も値は範囲内
    #[test]
    fn prop_slider_stays_in_range(ups in 0usize..30, downs in 0usize..30) {
        let mut selection = FilterSelection::default();
        for _ in 0..ups {
            selection.raise_min_score();
        }
        for _ in 0..downs {
            selection.lower_min_score();
        }
        prop_assert!(selection.min_score >= SCORE_SLIDER_MIN);
        prop_assert!(selection.min_score <= SCORE_SLIDER_MAX);
    }

    /// 下げる操作で最小スコアが上がることはない
    #[test]
    fn prop_lower_never_raises(start in 0u32..=100) {
        let mut selection = FilterSelection::with_min_score(start as f64 / 100.0);
        let before = selection.min_score;
        selection.lower_min_score();
        prop_assert!(selection.min_score <= before);
        prop_assert!(selection.min_score >= 0.0);
    }
}
