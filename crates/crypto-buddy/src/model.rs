//! Domain Models
//!
//! The asset records CryptoBuddy knows about and the ordered, read-only
//! dataset that holds them. Scores use `rust_decimal` so ties compare
//! exactly and `3.0` prints as `3.0`.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{BuddyError, Result};

/// Direction of recent price movement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Rising,
    Stable,
    Falling,
}

impl PriceTrend {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rising => "rising",
            Self::Stable => "stable",
            Self::Falling => "falling",
        }
    }
}

/// Coarse market capitalization bucket
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketCap {
    High,
    Medium,
    Low,
}

impl MarketCap {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Coarse energy consumption bucket
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyUse {
    High,
    Medium,
    Low,
}

impl EnergyUse {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for PriceTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MarketCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EnergyUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What CryptoBuddy knows about one cryptocurrency
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Ticker symbol (e.g., "BTC")
    pub symbol: String,

    pub price_trend: PriceTrend,

    pub market_cap: MarketCap,

    pub energy_use: EnergyUse,

    /// 0 (worst) to 10 (best)
    pub sustainability_score: Decimal,

    /// Free-text annotation shown in replies
    pub notes: String,
}

impl AssetRecord {
    pub fn new(
        symbol: impl Into<String>,
        price_trend: PriceTrend,
        market_cap: MarketCap,
        energy_use: EnergyUse,
        sustainability_score: Decimal,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            price_trend,
            market_cap,
            energy_use,
            sustainability_score,
            notes: notes.into(),
        }
    }
}

/// Named record as it appears in a JSON dataset
#[derive(Deserialize)]
struct NamedRecord {
    name: String,
    #[serde(flatten)]
    record: AssetRecord,
}

/// Ordered mapping from asset name to record.
///
/// Iteration order is insertion order; selection rules rely on it to break
/// ties. Nothing mutates a dataset once it is handed to a responder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    entries: Vec<(String, AssetRecord)>,
}

impl Dataset {
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// The five coins CryptoBuddy ships with
    pub fn builtin() -> Self {
        let records = [
            (
                "Bitcoin",
                AssetRecord::new(
                    "BTC",
                    PriceTrend::Rising,
                    MarketCap::High,
                    EnergyUse::High,
                    dec!(3.0),
                    "Largest market cap; energy-intensive proof-of-work.",
                ),
            ),
            (
                "Ethereum",
                AssetRecord::new(
                    "ETH",
                    PriceTrend::Stable,
                    MarketCap::High,
                    EnergyUse::Medium,
                    dec!(6.0),
                    "Smart contracts leader; moving to greener consensus (historical).",
                ),
            ),
            (
                "Cardano",
                AssetRecord::new(
                    "ADA",
                    PriceTrend::Rising,
                    MarketCap::Medium,
                    EnergyUse::Low,
                    dec!(8.0),
                    "Paper-driven design; proof-of-stake, energy-efficient.",
                ),
            ),
            (
                "Solana",
                AssetRecord::new(
                    "SOL",
                    PriceTrend::Falling,
                    MarketCap::Medium,
                    EnergyUse::Low,
                    dec!(7.0),
                    "Fast network, but has had outages in the past.",
                ),
            ),
            (
                "Polkadot",
                AssetRecord::new(
                    "DOT",
                    PriceTrend::Stable,
                    MarketCap::Medium,
                    EnergyUse::Low,
                    dec!(7.5),
                    "Interoperability focused; proof-of-stake.",
                ),
            ),
        ];

        Self {
            entries: records
                .into_iter()
                .map(|(name, record)| (name.to_string(), record))
                .collect(),
        }
    }

    /// Build a dataset from a JSON array of `{ "name": ..., <record fields> }`.
    ///
    /// Array order becomes iteration order.
    pub fn from_json(json: &str) -> Result<Self> {
        let named: Vec<NamedRecord> = serde_json::from_str(json)?;
        let mut dataset = Self::new();
        for entry in named {
            dataset.insert(entry.name, entry.record)?;
        }
        Ok(dataset)
    }

    /// Append a record, rejecting duplicate names and out-of-range scores
    pub fn insert(&mut self, name: impl Into<String>, record: AssetRecord) -> Result<()> {
        let name = name.into();

        if self.get(&name).is_some() {
            return Err(BuddyError::DuplicateAsset(name));
        }

        let score = record.sustainability_score;
        if score < Decimal::ZERO || score > dec!(10) {
            return Err(BuddyError::ScoreOutOfRange { asset: name, score });
        }

        self.entries.push((name, record));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&AssetRecord> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, record)| record)
    }

    /// Records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AssetRecord)> {
        self.entries.iter().map(|(name, record)| (name.as_str(), record))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
