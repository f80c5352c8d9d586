//! Greenest asset

use crate::model::{AssetRecord, Dataset};

use super::first_max_by_key;

/// Asset with the highest sustainability score
pub fn best_by_sustainability(db: &Dataset) -> Option<(&str, &AssetRecord)> {
    first_max_by_key(db.iter(), |record| record.sustainability_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EnergyUse, MarketCap, PriceTrend};
    use rust_decimal_macros::dec;

    #[test]
    fn test_builtin_pick_is_cardano() {
        let db = Dataset::builtin();
        let (name, record) = best_by_sustainability(&db).unwrap();
        assert_eq!(name, "Cardano");
        assert_eq!(record.sustainability_score, dec!(8.0));
    }

    #[test]
    fn test_never_beaten_by_another_asset() {
        let db = Dataset::builtin();
        let (_, best) = best_by_sustainability(&db).unwrap();
        for (_, record) in db.iter() {
            assert!(record.sustainability_score <= best.sustainability_score);
        }
    }

    #[test]
    fn test_tie_keeps_first() {
        let mut db = Dataset::new();
        for name in ["First", "Second"] {
            let record = AssetRecord::new(
                name.to_uppercase(),
                PriceTrend::Stable,
                MarketCap::Low,
                EnergyUse::Low,
                dec!(5.0),
                "",
            );
            db.insert(name, record).unwrap();
        }
        assert_eq!(best_by_sustainability(&db).unwrap().0, "First");
    }

    #[test]
    fn test_empty_dataset() {
        assert!(best_by_sustainability(&Dataset::new()).is_none());
    }
}
