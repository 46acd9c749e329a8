use tracing::debug;

/// Identifier for a selection row. Unique for the lifetime of a
/// [`PortfolioDraft`] and never reused, including across resets.
pub type RowId = u32;

/// One editable category/instrument/weight selection unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRow {
    pub id: RowId,
    pub category: Option<String>,
    pub asset_name: Option<String>,
    /// Raw accepted weight input, kept verbatim; empty means unset.
    pub weight: String,
}

impl SelectionRow {
    fn empty(id: RowId) -> Self {
        Self {
            id,
            category: None,
            asset_name: None,
            weight: String::new(),
        }
    }
}

/// Ordered, editable list of selection rows.
///
/// The draft owns its rows exclusively; every operation is synchronous and
/// in-memory. Ids come from a monotonically increasing counter that survives
/// `reset`, so an id observed on one row is never seen on another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioDraft {
    rows: Vec<SelectionRow>,
    next_id: RowId,
}

impl PortfolioDraft {
    /// Starts with a single empty row, like a freshly opened form.
    pub fn new() -> Self {
        Self {
            rows: vec![SelectionRow::empty(0)],
            next_id: 1,
        }
    }

    pub fn rows(&self) -> &[SelectionRow] {
        &self.rows
    }

    fn row_mut(&mut self, id: RowId) -> Option<&mut SelectionRow> {
        self.rows.iter_mut().find(|row| row.id == id)
    }

    fn fresh_id(&mut self) -> RowId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Appends a new empty row and returns its id.
    pub fn add_row(&mut self) -> RowId {
        let id = self.fresh_id();
        self.rows.push(SelectionRow::empty(id));
        debug!("Added row {}", id);
        id
    }

    /// Removes the row with `id`; silently does nothing if it is absent.
    pub fn remove_row(&mut self, id: RowId) {
        self.rows.retain(|row| row.id != id);
    }

    /// Sets the category and always clears the instrument, so a stale
    /// instrument can never outlive a category change.
    pub fn set_category(&mut self, id: RowId, category: Option<String>) {
        if let Some(row) = self.row_mut(id) {
            row.category = category;
            row.asset_name = None;
        }
    }

    /// Sets the instrument. The UI only offers instruments belonging to the
    /// row's current category; no further validation happens here.
    pub fn set_asset(&mut self, id: RowId, asset_name: Option<String>) {
        if let Some(row) = self.row_mut(id) {
            row.asset_name = asset_name;
        }
    }

    /// Stores `input` verbatim if it is empty or parses to a number in
    /// `[0, 100]`; anything else leaves the previous value untouched.
    /// Weights are never summed or renormalized.
    pub fn set_weight(&mut self, id: RowId, input: &str) {
        if !input.is_empty() {
            match input.parse::<f64>() {
                Ok(value) if (0.0..=100.0).contains(&value) => {}
                _ => {
                    debug!("Rejected weight input {:?} for row {}", input, id);
                    return;
                }
            }
        }
        if let Some(row) = self.row_mut(id) {
            row.weight = input.to_string();
        }
    }

    /// Collapses the list back to a single empty row. The id counter keeps
    /// counting up, so rows created after a reset cannot collide with ids
    /// handed out before it.
    pub fn reset(&mut self) {
        debug!("Resetting draft with {} rows", self.rows.len());
        let id = self.fresh_id();
        self.rows = vec![SelectionRow::empty(id)];
    }
}

impl Default for PortfolioDraft {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_draft_has_one_empty_row() {
        let draft = PortfolioDraft::new();

        assert_eq!(draft.rows().len(), 1);
        let row = &draft.rows()[0];
        assert_eq!(row.category, None);
        assert_eq!(row.asset_name, None);
        assert_eq!(row.weight, "");
    }

    #[test]
    fn test_ids_stay_unique_across_add_and_remove() {
        let mut draft = PortfolioDraft::new();
        let mut seen: HashSet<RowId> = draft.rows().iter().map(|row| row.id).collect();

        for round in 0..10 {
            let id = draft.add_row();
            assert!(seen.insert(id), "id {} handed out twice", id);

            // Remove every other added row; freed ids must not come back.
            if round % 2 == 0 {
                draft.remove_row(id);
            }
        }

        let live: Vec<RowId> = draft.rows().iter().map(|row| row.id).collect();
        let distinct: HashSet<RowId> = live.iter().copied().collect();
        assert_eq!(live.len(), distinct.len());
    }

    #[test]
    fn test_remove_missing_row_is_a_noop() {
        let mut draft = PortfolioDraft::new();
        draft.remove_row(999);

        assert_eq!(draft.rows().len(), 1);
    }

    #[test]
    fn test_set_category_always_clears_asset() {
        let mut draft = PortfolioDraft::new();
        let id = draft.rows()[0].id;

        draft.set_category(id, Some("US ETFs".to_string()));
        draft.set_asset(id, Some("SPY".to_string()));
        assert_eq!(draft.rows()[0].asset_name.as_deref(), Some("SPY"));

        // Re-selecting the same category still clears the instrument.
        draft.set_category(id, Some("US ETFs".to_string()));
        assert_eq!(draft.rows()[0].asset_name, None);

        draft.set_asset(id, Some("QQQ".to_string()));
        draft.set_category(id, None);
        assert_eq!(draft.rows()[0].category, None);
        assert_eq!(draft.rows()[0].asset_name, None);
    }

    #[test]
    fn test_set_weight_accepts_in_range_and_empty_input() {
        let mut draft = PortfolioDraft::new();
        let id = draft.rows()[0].id;

        draft.set_weight(id, "0");
        assert_eq!(draft.rows()[0].weight, "0");

        draft.set_weight(id, "37.5");
        assert_eq!(draft.rows()[0].weight, "37.5");

        draft.set_weight(id, "100");
        assert_eq!(draft.rows()[0].weight, "100");

        draft.set_weight(id, "");
        assert_eq!(draft.rows()[0].weight, "");
    }

    #[test]
    fn test_set_weight_rejects_out_of_range_and_non_numeric_input() {
        let mut draft = PortfolioDraft::new();
        let id = draft.rows()[0].id;
        draft.set_weight(id, "42");

        for input in ["-1", "100.01", "101", "abc", "4two", "NaN", "inf"] {
            draft.set_weight(id, input);
            assert_eq!(draft.rows()[0].weight, "42", "{:?} should be rejected", input);
        }
    }

    #[test]
    fn test_set_weight_keeps_input_verbatim() {
        let mut draft = PortfolioDraft::new();
        let id = draft.rows()[0].id;

        // Accepted values are stored as entered, not renormalized.
        draft.set_weight(id, "07.50");
        assert_eq!(draft.rows()[0].weight, "07.50");
    }

    #[test]
    fn test_weights_are_independent_per_row() {
        let mut draft = PortfolioDraft::new();
        let first = draft.rows()[0].id;
        let second = draft.add_row();

        draft.set_weight(first, "60");
        draft.set_weight(second, "70");

        // The sum exceeding 100 is allowed; weights are never validated
        // against each other.
        assert_eq!(draft.rows()[0].weight, "60");
        assert_eq!(draft.rows()[1].weight, "70");
    }

    #[test]
    fn test_reset_yields_one_empty_row_with_a_fresh_id() {
        let mut draft = PortfolioDraft::new();
        let mut used: HashSet<RowId> = draft.rows().iter().map(|row| row.id).collect();
        for _ in 0..3 {
            used.insert(draft.add_row());
        }
        let id = draft.rows()[0].id;
        draft.set_category(id, Some("US Stocks".to_string()));
        draft.set_weight(id, "25");

        draft.reset();

        assert_eq!(draft.rows().len(), 1);
        let reset_id = draft.rows()[0].id;
        assert_eq!(draft.rows()[0].category, None);
        assert_eq!(draft.rows()[0].asset_name, None);
        assert_eq!(draft.rows()[0].weight, "");

        let next = draft.add_row();
        assert!(!used.contains(&reset_id));
        assert!(!used.contains(&next));
    }

    #[test]
    fn test_edits_to_unknown_rows_are_ignored() {
        let mut draft = PortfolioDraft::new();

        draft.set_category(999, Some("A".to_string()));
        draft.set_asset(999, Some("x".to_string()));
        draft.set_weight(999, "10");

        let row = &draft.rows()[0];
        assert_eq!(row.category, None);
        assert_eq!(row.asset_name, None);
        assert_eq!(row.weight, "");
    }
}
