use crate::model::{Dataset, PriceTrend};

/// Names of every rising asset, in dataset order
pub fn filter_trending_up(db: &Dataset) -> Vec<&str> {
    db.iter()
        .filter(|(_, record)| record.price_trend == PriceTrend::Rising)
        .map(|(name, _)| name)
        .collect()
}
