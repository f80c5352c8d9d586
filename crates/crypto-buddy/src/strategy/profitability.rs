//! Profitability Heuristic
//!
//! score = 0.6 × trend weight + 0.4 × cap weight

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::model::{AssetRecord, Dataset, MarketCap, PriceTrend};

use super::first_max_by_key;

const TREND_FACTOR: Decimal = dec!(0.6);
const CAP_FACTOR: Decimal = dec!(0.4);

pub const fn trend_weight(trend: PriceTrend) -> u8 {
    match trend {
        PriceTrend::Rising => 3,
        PriceTrend::Stable => 2,
        PriceTrend::Falling => 1,
    }
}

pub const fn cap_weight(cap: MarketCap) -> u8 {
    match cap {
        MarketCap::High => 3,
        MarketCap::Medium => 2,
        MarketCap::Low => 1,
    }
}

pub fn profitability_score(record: &AssetRecord) -> Decimal {
    TREND_FACTOR * Decimal::from(trend_weight(record.price_trend))
        + CAP_FACTOR * Decimal::from(cap_weight(record.market_cap))
}

/// Asset with the highest profitability score
pub fn best_by_profitability(db: &Dataset) -> Option<(&str, &AssetRecord)> {
    first_max_by_key(db.iter(), profitability_score)
}
