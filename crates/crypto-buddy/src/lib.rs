//! # crypto-buddy
//!
//! A small rule-based chat responder that answers questions about a fixed
//! set of cryptocurrencies: which coin is greenest, which are trending,
//! what to buy, and how two coins compare.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────┐   ┌──────────────┐   ┌────────────────┐   ┌────────────┐
//! │  query   │──▶│   classify   │──▶│ selection rule │──▶│   reply    │
//! │  (text)  │   │  (keywords)  │   │  (over Dataset)│   │ (template) │
//! └──────────┘   └──────────────┘   └────────────────┘   └────────────┘
//! ```
//!
//! Greeting and farewell replies are drawn through a [`ReplyPicker`], so a
//! seeded or fixed picker makes the whole pipeline deterministic.
//!
//! ```
//! use crypto_buddy::{Dataset, FirstPicker, Responder};
//!
//! let mut buddy = Responder::new(Dataset::builtin(), FirstPicker);
//! let reply = buddy.respond("Which crypto is trending up?");
//! assert!(reply.contains("Bitcoin, Cardano"));
//! ```
//!
//! This is not financial advice, and the dataset is a static sample.

pub mod error;
pub mod intent;
pub mod model;
pub mod picker;
pub mod responder;
pub mod strategy;
pub mod wrap;

pub use error::{BuddyError, Result};
pub use intent::{classify, Intent};
pub use model::{AssetRecord, Dataset, EnergyUse, MarketCap, PriceTrend};
pub use picker::{FirstPicker, RandomPicker, ReplyPicker};
pub use responder::Responder;

/// Name the bot uses for itself
pub const BOT_NAME: &str = "CryptoBuddy";
