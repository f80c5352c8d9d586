//! Response Generator
//!
//! Classifies a query once, then runs the matching selection rule against
//! the dataset and formats a canned reply. Every intent has a reply, so
//! responding never fails.

use crate::intent::{classify, Intent};
use crate::model::{AssetRecord, Dataset, MarketCap, PriceTrend};
use crate::picker::{choose, RandomPicker, ReplyPicker};
use crate::strategy::{best_by_profitability, best_by_sustainability, filter_trending_up};
use crate::BOT_NAME;

const GREETINGS: &[&str] = &[
    "Hey! I'm CryptoBuddy. How can I help you find green & growing crypto today?",
    "Hello! Ask me about trending coins, sustainability, or long-term picks.",
];

const FAREWELLS: &[&str] = &[
    "Goodbye! Trade safe and remember to do your own research. 👋",
    "See you! Keep learning and manage your risk.",
];

pub const NONE_TRENDING_REPLY: &str =
    "I don't see any coins with a 'rising' trend in my sample dataset.";

pub const COMPARE_PROMPT: &str =
    "Tell me two coin names to compare (e.g., 'Compare Bitcoin and Cardano').";

pub const UNKNOWN_REPLY: &str = "I didn't quite catch that. Try asking: \
    'Which crypto is trending up?', 'What's the most sustainable coin?', \
    or 'Which should I buy for long-term growth?'";

pub const NO_DATA_REPLY: &str = "I don't have any coins in my dataset yet.";

/// Rule-based responder over a read-only dataset
pub struct Responder<P = RandomPicker> {
    dataset: Dataset,
    picker: P,
}

impl Responder<RandomPicker> {
    /// Built-in dataset with entropy-seeded reply selection
    pub fn with_defaults() -> Self {
        Self::new(Dataset::builtin(), RandomPicker::from_entropy())
    }
}

impl<P: ReplyPicker> Responder<P> {
    pub const fn new(dataset: Dataset, picker: P) -> Self {
        Self { dataset, picker }
    }

    /// Reply to one free-text query
    pub fn respond(&mut self, text: &str) -> String {
        let intent = classify(text);
        tracing::debug!(%intent, "Classified query");

        match intent {
            Intent::Greeting => self.greeting(),
            Intent::Sustainability => self.sustainability(),
            Intent::Trending => self.trending(),
            Intent::AdviceBuy => self.advice_buy(),
            Intent::Compare => self.compare(text),
            Intent::Goodbye => choose(&mut self.picker, FAREWELLS).to_string(),
            Intent::Unknown => UNKNOWN_REPLY.to_string(),
        }
    }

    fn greeting(&mut self) -> String {
        choose(&mut self.picker, GREETINGS).to_string()
    }

    fn sustainability(&self) -> String {
        let Some((name, data)) = best_by_sustainability(&self.dataset) else {
            return NO_DATA_REPLY.to_string();
        };

        format!(
            "Top sustainability pick: {name} ({}).\n\
             Sustainability score: {}/10.\n\
             Why: {} energy use — {}",
            data.symbol, data.sustainability_score, data.energy_use, data.notes
        )
    }

    fn trending(&self) -> String {
        let trending = filter_trending_up(&self.dataset);
        if trending.is_empty() {
            return NONE_TRENDING_REPLY.to_string();
        }

        format!(
            "Coins trending up right now: {}. Consider market cap and risk before acting.",
            trending.join(", ")
        )
    }

    /// Three tiers: a rising blue chip, then a rising green pick, then the
    /// plain profitability winner.
    fn advice_buy(&self) -> String {
        let Some((profit_name, profit)) = best_by_profitability(&self.dataset) else {
            return NO_DATA_REPLY.to_string();
        };

        if profit.price_trend == PriceTrend::Rising && profit.market_cap == MarketCap::High {
            return format!(
                "For long-term growth, I recommend checking out {profit_name} ({}). \
                 It's trending {} with {} market cap. \
                 Remember: this is NOT financial advice — do your own research.",
                profit.symbol, profit.price_trend, profit.market_cap
            );
        }

        if let Some((green_name, green)) = best_by_sustainability(&self.dataset) {
            if green.price_trend == PriceTrend::Rising {
                return format!(
                    "{green_name} ({}) looks like a strong long-term pick for a \
                     balance of growth + sustainability. But crypto is risky — DYOR.",
                    green.symbol
                );
            }
        }

        format!(
            "My top pick by simple profitability rules is {profit_name} ({}). \
             Use proper risk management and consider diversification.",
            profit.symbol
        )
    }

    /// Names are matched case-sensitively against the raw query
    fn compare(&self, text: &str) -> String {
        let found: Vec<_> = self
            .dataset
            .iter()
            .filter(|(name, _)| text.contains(name))
            .take(2)
            .collect();

        match found.as_slice() {
            [(a, a_data), (b, b_data)] => {
                format!("{}\n{}", compare_line(a, a_data), compare_line(b, b_data))
            }
            _ => COMPARE_PROMPT.to_string(),
        }
    }
}

fn compare_line(name: &str, data: &AssetRecord) -> String {
    format!(
        "{name} ({}): trend={}, market_cap={}, sustainability={}/10",
        data.symbol, data.price_trend, data.market_cap, data.sustainability_score
    )
}
