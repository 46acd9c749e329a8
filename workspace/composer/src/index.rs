use std::collections::HashMap;

use common::AssetRecord;
use tracing::debug;

/// Lookup table derived from the loaded dataset: the distinct categories
/// and, per category, the distinct instrument names, both in
/// first-occurrence order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssetIndex {
    categories: Vec<String>,
    assets_by_category: HashMap<String, Vec<String>>,
}

impl AssetIndex {
    /// Single pass over the records. Instrument lists stay small (a handful
    /// of names per category), so dedup is a linear scan.
    pub fn build(records: &[AssetRecord]) -> Self {
        let mut categories: Vec<String> = Vec::new();
        let mut assets_by_category: HashMap<String, Vec<String>> = HashMap::new();

        for record in records {
            if !assets_by_category.contains_key(&record.category) {
                categories.push(record.category.clone());
            }
            let assets = assets_by_category
                .entry(record.category.clone())
                .or_default();
            if !assets.iter().any(|name| name == &record.asset_name) {
                assets.push(record.asset_name.clone());
            }
        }

        debug!(
            "Indexed {} categories from {} records",
            categories.len(),
            records.len()
        );

        Self {
            categories,
            assets_by_category,
        }
    }

    /// Distinct categories in first-occurrence order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Distinct instruments for `category` in first-occurrence order; empty
    /// for an unknown category.
    pub fn assets_in(&self, category: &str) -> &[String] {
        self.assets_by_category
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, category: &str, asset_name: &str) -> AssetRecord {
        AssetRecord {
            id,
            category: category.to_string(),
            asset_name: asset_name.to_string(),
        }
    }

    #[test]
    fn test_categories_keep_first_occurrence_order() {
        let records = vec![
            record(1, "Bonds", "US 10Y Treasury"),
            record(2, "Equities", "Apple"),
            record(3, "Bonds", "US 2Y Treasury"),
            record(4, "Commodities", "Gold"),
            record(5, "Equities", "Tesla"),
        ];

        let index = AssetIndex::build(&records);
        assert_eq!(index.categories(), ["Bonds", "Equities", "Commodities"]);
    }

    #[test]
    fn test_assets_are_distinct_per_category_in_first_occurrence_order() {
        let records = vec![
            record(1, "Equities", "Apple"),
            record(2, "Equities", "Tesla"),
            record(3, "Equities", "Apple"),
            record(4, "Equities", "Amazon"),
            record(5, "Equities", "Tesla"),
        ];

        let index = AssetIndex::build(&records);
        assert_eq!(index.assets_in("Equities"), ["Apple", "Tesla", "Amazon"]);
    }

    #[test]
    fn test_same_asset_name_in_two_categories_is_indexed_in_both() {
        let records = vec![
            record(1, "Korean ETFs", "KODEX 200"),
            record(2, "Korean Indices", "KODEX 200"),
        ];

        let index = AssetIndex::build(&records);
        assert_eq!(index.assets_in("Korean ETFs"), ["KODEX 200"]);
        assert_eq!(index.assets_in("Korean Indices"), ["KODEX 200"]);
    }

    #[test]
    fn test_unknown_category_yields_no_assets() {
        let index = AssetIndex::build(&[record(1, "A", "x")]);

        assert!(index.assets_in("B").is_empty());
    }

    #[test]
    fn test_empty_dataset_yields_empty_index() {
        let index = AssetIndex::build(&[]);

        assert!(index.categories().is_empty());
    }
}
