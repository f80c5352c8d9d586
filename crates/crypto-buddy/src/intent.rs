//! Intent Classification
//!
//! Keyword substring matching over the lower-cased query. Keyword sets are
//! tested in a fixed priority order and the first hit wins, so "green
//! trending coin" is a sustainability question. Matching is plain
//! containment: "buying" hits "buy" and "update" hits "up".

use std::fmt;

use serde::{Deserialize, Serialize};

/// What the user is asking about
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Sustainability,
    Trending,
    AdviceBuy,
    Compare,
    Goodbye,
    Unknown,
}

impl Intent {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Sustainability => "sustainability",
            Self::Trending => "trending",
            Self::AdviceBuy => "advice_buy",
            Self::Compare => "compare",
            Self::Goodbye => "goodbye",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const SUSTAINABILITY_KEYWORDS: &[&str] = &["sustain", "eco", "green", "environment", "energy"];
const TRENDING_KEYWORDS: &[&str] = &["trend", "trending", "up", "growing", "rise", "rising"];
const ADVICE_BUY_KEYWORDS: &[&str] = &["buy", "invest", "long-term", "hold", "should i buy"];
const COMPARE_KEYWORDS: &[&str] = &["compare", "which is better", "vs", "versus"];
const GREETING_KEYWORDS: &[&str] = &["help", "hello", "hi", "hey"];
const GOODBYE_KEYWORDS: &[&str] = &["bye", "exit", "quit", "thanks", "thank"];

/// Priority order; earlier entries shadow later ones
const RULES: &[(&[&str], Intent)] = &[
    (SUSTAINABILITY_KEYWORDS, Intent::Sustainability),
    (TRENDING_KEYWORDS, Intent::Trending),
    (ADVICE_BUY_KEYWORDS, Intent::AdviceBuy),
    (COMPARE_KEYWORDS, Intent::Compare),
    (GREETING_KEYWORDS, Intent::Greeting),
    (GOODBYE_KEYWORDS, Intent::Goodbye),
];

pub fn classify(text: &str) -> Intent {
    let lower = text.to_lowercase();

    RULES
        .iter()
        .find(|(keywords, _)| contains_any(&lower, keywords))
        .map_or(Intent::Unknown, |&(_, intent)| intent)
}

fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}
