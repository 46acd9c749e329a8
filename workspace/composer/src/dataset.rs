use std::rc::Rc;

use common::AssetRecord;

/// Shared handle over the loaded asset records.
///
/// Equality is pointer identity, not content: two handles compare equal only
/// when they refer to the same allocation. Memoized work keyed on a `Dataset`
/// is therefore redone only when the collection itself is replaced by a new
/// load, never on a plain re-render.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Rc<Vec<AssetRecord>>,
}

impl Dataset {
    pub fn new(records: Vec<AssetRecord>) -> Self {
        Self {
            records: Rc::new(records),
        }
    }

    pub fn records(&self) -> &[AssetRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl PartialEq for Dataset {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.records, &other.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32) -> AssetRecord {
        AssetRecord {
            id,
            category: "A".to_string(),
            asset_name: "x".to_string(),
        }
    }

    #[test]
    fn test_clones_share_identity() {
        let dataset = Dataset::new(vec![record(1)]);
        let clone = dataset.clone();

        assert_eq!(dataset, clone);
    }

    #[test]
    fn test_equal_content_is_not_the_same_dataset() {
        let a = Dataset::new(vec![record(1)]);
        let b = Dataset::new(vec![record(1)]);

        assert_eq!(a.records(), b.records());
        assert_ne!(a, b);
    }
}
