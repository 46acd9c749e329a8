//! Shared wire types for the asset dataset.
//! These structs mirror the on-disk JSON written by the generator so the
//! frontend can deserialize the dataset without duplicating shapes.

mod universe;

pub use universe::{AssetClass, ASSET_CLASSES};

use serde::{Deserialize, Serialize};

/// One record of the synthetic asset dataset. Loaded in bulk, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    pub id: u32,
    /// Top-level asset grouping, e.g. a market or strategy bucket.
    pub category: String,
    /// A tradable asset name within the category.
    pub asset_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_record_uses_camel_case_field_names() {
        let record = AssetRecord {
            id: 1,
            category: "US ETFs".to_string(),
            asset_name: "SPY".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "category": "US ETFs",
                "assetName": "SPY",
            })
        );
    }

    #[test]
    fn test_asset_record_round_trips_from_dataset_shape() {
        let record: AssetRecord = serde_json::from_str(
            r#"{"id": 42, "category": "Korean Stocks", "assetName": "Naver"}"#,
        )
        .unwrap();

        assert_eq!(record.id, 42);
        assert_eq!(record.category, "Korean Stocks");
        assert_eq!(record.asset_name, "Naver");
    }
}
