//! 組み込みフォールバック記事
//!
//! API とローカル JSON の両方が使えないときに表示する6件。

use super::{Article, Source, Topic};
use chrono::DateTime;

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=400&width=600";

struct Seed {
    id: u64,
    title: &'static str,
    summary: &'static str,
    source: (u64, &'static str),
    published: &'static str,
    score: f64,
    topics: &'static [(u64, &'static str)],
    region: &'static str,
    url: &'static str,
}

const SEEDS: [Seed; 6] = [
    Seed {
        id: 1,
        title: "Genombrott i svensk forskning kring förnybar energi",
        summary: "Forskare vid Uppsala universitet har utvecklat en ny metod för att lagra solenergi med 40% högre effektivitet än tidigare teknik.",
        source: (3, "SVT Nyheter"),
        published: "2025-03-11T16:24:00Z",
        score: 0.92,
        topics: &[(1, "Miljö"), (2, "Forskning")],
        region: "Uppsala",
        url: "https://www.svt.se/nyheter/artikel/12345",
    },
    Seed {
        id: 2,
        title: "Nya vårdmetoden minskar väntetiden för patienter med 70 procent",
        summary: "En innovativ arbetsmodell vid Sahlgrenska Universitetssjukhuset har kraftigt reducerat väntetiden för patienter.",
        source: (5, "Göteborgs-Posten"),
        published: "2025-03-12T09:15:00Z",
        score: 0.87,
        topics: &[(4, "Hälsa"), (3, "Innovation")],
        region: "Västra Götaland",
        url: "https://www.gp.se/nyheter/artikel/67890",
    },
    Seed {
        id: 3,
        title: "Svensk startup säkrar miljardinvestering: \"Kommer förändra hållbart mode\"",
        summary: "Stockholmsbaserade Re:Textile har utvecklat en teknik för 100% återvinning av textilier.",
        source: (11, "Breakit"),
        published: "2025-03-12T07:30:00Z",
        score: 0.89,
        topics: &[(1, "Miljö"), (5, "Ekonomi"), (6, "Mode")],
        region: "Stockholm",
        url: "https://www.breakit.se/artikel/24680",
    },
    Seed {
        id: 4,
        title: "Småländsk kommun först i landet med 100% fossilfri kollektivtrafik",
        summary: "Växjö kommun har nått sitt mål om helt fossilfri kollektivtrafik fem år före tidsplanen.",
        source: (3, "SVT Nyheter"),
        published: "2025-03-11T14:12:00Z",
        score: 0.85,
        topics: &[(1, "Miljö"), (7, "Transport")],
        region: "Kronoberg",
        url: "https://www.svt.se/nyheter/artikel/13579",
    },
    Seed {
        id: 5,
        title: "Svenska elevresultat visar stark uppgång i internationella mätningar",
        summary: "De senaste PISA-resultaten visar att svenska elever presterar allt bättre i matematik och naturvetenskap.",
        source: (2, "Dagens Nyheter"),
        published: "2025-03-10T18:45:00Z",
        score: 0.83,
        topics: &[(8, "Utbildning")],
        region: "National",
        url: "https://www.dn.se/artikel/24680",
    },
    Seed {
        id: 6,
        title: "Arbetslösheten i Sverige sjunker till lägsta nivån på 15 år",
        summary: "Nya siffror från Arbetsförmedlingen visar att arbetslösheten i Sverige nu är nere på 4,2 procent.",
        source: (1, "Svenska Dagbladet"),
        published: "2025-03-12T10:30:00Z",
        score: 0.81,
        topics: &[(5, "Ekonomi"), (9, "Arbetsmarknad")],
        region: "National",
        url: "https://www.svd.se/artikel/97531",
    },
];

/// 組み込み記事一覧を生成
pub fn embedded_articles() -> Vec<Article> {
    SEEDS
        .iter()
        .filter_map(|seed| {
            // 定数のタイムスタンプは RFC 3339 として常に解釈できる
            let published_date = DateTime::parse_from_rfc3339(seed.published).ok()?;
            Some(Article {
                id: seed.id,
                title: seed.title.to_string(),
                summary: seed.summary.to_string(),
                source: Source {
                    id: seed.source.0,
                    name: seed.source.1.to_string(),
                },
                published_date,
                positivity_score: seed.score,
                topics: seed
                    .topics
                    .iter()
                    .map(|(id, name)| Topic {
                        id: *id,
                        name: name.to_string(),
                    })
                    .collect(),
                region: seed.region.to_string(),
                image_url: PLACEHOLDER_IMAGE.to_string(),
                url: seed.url.to_string(),
            })
        })
        .collect()
}
