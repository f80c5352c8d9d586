//! Error Types for CryptoBuddy
//!
//! Only dataset construction can fail. Classifying and responding always
//! produce a reply.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BuddyError>;

#[derive(Error, Debug)]
pub enum BuddyError {
    #[error("Duplicate asset: {0}")]
    DuplicateAsset(String),

    #[error("Sustainability score for {asset} is {score}, expected 0 to 10")]
    ScoreOutOfRange {
        asset: String,
        score: rust_decimal::Decimal,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
