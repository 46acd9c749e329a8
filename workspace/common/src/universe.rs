//! The fixed asset universe the generator cycles through.
//!
//! Seven category groups with a handful of instruments each; the dataset is
//! large only because records repeat over this catalog.

/// A fixed asset category and the instrument names offered within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetClass {
    pub name: &'static str,
    pub instruments: &'static [&'static str],
}

/// Category groups and their instrument lists, in generation order.
pub const ASSET_CLASSES: &[AssetClass] = &[
    AssetClass {
        name: "Korean Indices",
        instruments: &["KOSPI", "KOSDAQ", "KOSPI 200"],
    },
    AssetClass {
        name: "US Assets",
        instruments: &[
            "NASDAQ",
            "NASDAQ Inverse",
            "US 10Y Treasury",
            "US 2Y Treasury",
            "US 30Y Treasury",
            "US Short-Term Bonds",
            "Commodities",
        ],
    },
    AssetClass {
        name: "Strategies",
        instruments: &["Defensive", "Aggressive", "Balanced"],
    },
    AssetClass {
        name: "Korean ETFs",
        instruments: &["KODEX 200", "TIGER KOSDAQ 150", "ARIRANG ESG"],
    },
    AssetClass {
        name: "US ETFs",
        instruments: &["SPY", "QQQ", "VTI"],
    },
    AssetClass {
        name: "Korean Stocks",
        instruments: &["Samsung Electronics", "Hyundai Motor", "Naver"],
    },
    AssetClass {
        name: "US Stocks",
        instruments: &["Apple", "Tesla", "Amazon"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_universe_has_seven_classes() {
        assert_eq!(ASSET_CLASSES.len(), 7);
    }

    #[test]
    fn test_class_names_are_distinct() {
        let names: HashSet<&str> = ASSET_CLASSES.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), ASSET_CLASSES.len());
    }

    #[test]
    fn test_every_class_offers_instruments() {
        for class in ASSET_CLASSES {
            assert!(
                !class.instruments.is_empty(),
                "{} has no instruments",
                class.name
            );
        }
    }
}
