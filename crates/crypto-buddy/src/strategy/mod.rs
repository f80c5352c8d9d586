//! Selection Rules
//!
//! Pure functions that pick assets out of a [`Dataset`](crate::model::Dataset).
//! Ties always resolve to the earliest record in dataset order.

mod profitability;
mod sustainability;
mod trending;

pub use profitability::{best_by_profitability, cap_weight, profitability_score, trend_weight};
pub use sustainability::best_by_sustainability;
pub use trending::filter_trending_up;

use crate::model::AssetRecord;

/// Return the first entry with the greatest key, or `None` when empty.
///
/// `Iterator::max_by_key` keeps the *last* maximum, which would break the
/// dataset-order tie rule.
fn first_max_by_key<'a, I, K, F>(entries: I, mut key: F) -> Option<(&'a str, &'a AssetRecord)>
where
    I: Iterator<Item = (&'a str, &'a AssetRecord)>,
    K: PartialOrd,
    F: FnMut(&AssetRecord) -> K,
{
    let mut best: Option<((&'a str, &'a AssetRecord), K)> = None;

    for entry in entries {
        let candidate = key(entry.1);
        if best.as_ref().is_none_or(|(_, current)| candidate > *current) {
            best = Some((entry, candidate));
        }
    }

    best.map(|(entry, _)| entry)
}
