//! スウェーデンの地方（ランドスケープ）
//!
//! サイドバーの地域ショートカットと地域セレクタに使う静的データ。

use crate::article::ScoreTier;

/// 地方
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landscape {
    pub id: u32,
    pub name: &'static str,
    pub positivity: f64,
    pub articles: u32,
}

impl Landscape {
    pub fn score_tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.positivity)
    }
}

pub const LANDSCAPES: [Landscape; 7] = [
    Landscape {
        id: 1,
        name: "Uppland",
        positivity: 0.91,
        articles: 98,
    },
    Landscape {
        id: 3,
        name: "Skåne",
        positivity: 0.79,
        articles: 156,
    },
    Landscape {
        id: 6,
        name: "Småland",
        positivity: 0.81,
        articles: 68,
    },
    Landscape {
        id: 7,
        name: "Halland",
        positivity: 0.84,
        articles: 65,
    },
    Landscape {
        id: 8,
        name: "Närke",
        positivity: 0.77,
        articles: 62,
    },
    Landscape {
        id: 9,
        name: "Dalarna",
        positivity: 0.75,
        articles: 58,
    },
    Landscape {
        id: 12,
        name: "Blekinge",
        positivity: 0.8,
        articles: 45,
    },
];

/// サイドバーに出す件数
pub const SIDEBAR_LEN: usize = 6;

/// サイドバー表示用（先頭6件）
pub fn sidebar() -> &'static [Landscape] {
    &LANDSCAPES[..SIDEBAR_LEN]
}

/// ポジティブ度の高い順に上位 `limit` 件
pub fn ranked(limit: usize) -> Vec<Landscape> {
    let mut sorted = LANDSCAPES.to_vec();
    sorted.sort_by(|a, b| b.positivity.total_cmp(&a.positivity));
    sorted.truncate(limit);
    sorted
}
