use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::schema::{MultiField, SingleField, DATE_RANGE_CUSTOM};

// ---------------------------------------------------------------------------
// Custom date range
// ---------------------------------------------------------------------------

/// User-specified from/to pair in `yyyy-mm-dd` format, empty string = unset.
/// Inert unless the date-range field is set to [`DATE_RANGE_CUSTOM`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRange {
    pub date_from: String,
    pub date_to: String,
}

impl CustomRange {
    /// Both endpoints populated. Only a complete pair counts as a filter.
    pub fn is_complete(&self) -> bool {
        !self.date_from.is_empty() && !self.date_to.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Filter state
// ---------------------------------------------------------------------------

/// The complete filter selection of one dashboard view.
///
/// `FilterState` is an immutable value: every transition returns a new state
/// and leaves the receiver untouched, so the owning view can swap states
/// atomically and hand the full new value to its change callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    single: BTreeMap<SingleField, String>,
    multi: BTreeMap<MultiField, Vec<String>>,
    custom_range: CustomRange,
}

impl Default for FilterState {
    fn default() -> Self {
        let single = SingleField::ALL
            .iter()
            .map(|f| (*f, f.default_value().to_string()))
            .collect();
        let multi = MultiField::ALL.iter().map(|f| (*f, Vec::new())).collect();
        Self {
            single,
            multi,
            custom_range: CustomRange::default(),
        }
    }
}

impl FilterState {
    // -- reads --------------------------------------------------------------

    pub fn single(&self, field: SingleField) -> &str {
        self.single
            .get(&field)
            .map(String::as_str)
            .unwrap_or_else(|| field.default_value())
    }

    pub fn selected(&self, field: MultiField) -> &[String] {
        self.multi.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_selected(&self, field: MultiField, value: &str) -> bool {
        self.selected(field).iter().any(|v| v == value)
    }

    pub fn custom_range(&self) -> &CustomRange {
        &self.custom_range
    }

    /// Whether a field currently differs from its documented default.
    /// `date_range == "custom"` is only active once both endpoints are set.
    pub fn single_is_active(&self, field: SingleField) -> bool {
        let value = self.single(field);
        if field == SingleField::DateRange && value == DATE_RANGE_CUSTOM {
            return self.custom_range.is_complete();
        }
        value != field.default_value()
    }

    /// Number of fields whose value differs from the default; the custom
    /// from/to pair counts as one field together with the `custom` option.
    pub fn active_filter_count(&self) -> usize {
        let singles = SingleField::ALL
            .iter()
            .filter(|f| self.single_is_active(**f))
            .count();
        let multis = MultiField::ALL
            .iter()
            .filter(|f| !self.selected(**f).is_empty())
            .count();
        singles + multis
    }

    // -- transitions --------------------------------------------------------

    /// New state with only `field` changed. The value must belong to the
    /// field's option set; a violation is a caller bug (the UI controls are
    /// populated from the same option tables), so it is asserted in debug
    /// builds and ignored in release.
    #[must_use]
    pub fn set_single(&self, field: SingleField, value: &str) -> Self {
        debug_assert!(field.is_valid(value), "{} rejects {:?}", field.key(), value);
        if !field.is_valid(value) {
            return self.clone();
        }
        let mut next = self.clone();
        next.single.insert(field, value.to_string());
        next
    }

    /// New state with `value` added to (`included == true`) or removed from
    /// the field's selection. Adding a present value and removing an absent
    /// one are no-ops; the order of the remaining values is preserved.
    #[must_use]
    pub fn set_multi(&self, field: MultiField, value: &str, included: bool) -> Self {
        debug_assert!(field.is_valid(value), "{} rejects {:?}", field.key(), value);
        if !field.is_valid(value) {
            return self.clone();
        }
        let mut next = self.clone();
        let selection = next.multi.entry(field).or_default();
        if included {
            if !selection.iter().any(|v| v == value) {
                selection.push(value.to_string());
            }
        } else {
            selection.retain(|v| v != value);
        }
        next
    }

    /// New state with the custom from/to pair replaced. The pair stays inert
    /// until the date-range field is set to [`DATE_RANGE_CUSTOM`].
    #[must_use]
    pub fn set_custom_range(&self, date_from: &str, date_to: &str) -> Self {
        let mut next = self.clone();
        next.custom_range = CustomRange {
            date_from: date_from.to_string(),
            date_to: date_to.to_string(),
        };
        next
    }

    /// The documented default state, independent of any prior state.
    #[must_use]
    pub fn clear_all() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_has_no_active_filters() {
        let state = FilterState::default();
        assert_eq!(state.active_filter_count(), 0);
        assert_eq!(state.single(SingleField::DateRange), "30d");
        assert!(state.selected(MultiField::Categories).is_empty());
    }

    #[test]
    fn set_single_changes_only_that_field() {
        let state = FilterState::default();
        let next = state.set_single(SingleField::Metric, "orders");
        assert_eq!(next.single(SingleField::Metric), "orders");
        assert_eq!(next.single(SingleField::Timeframe), "daily");
        // the original value is untouched
        assert_eq!(state.single(SingleField::Metric), "revenue");
        assert_eq!(next.active_filter_count(), 1);
    }

    #[test]
    fn multi_add_is_idempotent() {
        let state = FilterState::default();
        let once = state.set_multi(MultiField::Categories, "delivery", true);
        let twice = once.set_multi(MultiField::Categories, "delivery", true);
        assert_eq!(once, twice);
        assert_eq!(twice.selected(MultiField::Categories), ["delivery"]);
        assert_eq!(twice.active_filter_count(), 1);
    }

    #[test]
    fn multi_remove_is_idempotent() {
        let state = FilterState::default();
        let removed = state.set_multi(MultiField::Regions, "lviv", false);
        assert_eq!(state, removed);
    }

    #[test]
    fn multi_remove_preserves_order() {
        let state = FilterState::default()
            .set_multi(MultiField::Regions, "kyiv", true)
            .set_multi(MultiField::Regions, "lviv", true)
            .set_multi(MultiField::Regions, "odesa", true)
            .set_multi(MultiField::Regions, "lviv", false);
        assert_eq!(state.selected(MultiField::Regions), ["kyiv", "odesa"]);
    }

    #[test]
    fn toggle_cycle_returns_count_to_zero() {
        let state = FilterState::default();
        let added = state.set_multi(MultiField::Categories, "delivery", true);
        assert_eq!(added.active_filter_count(), 1);
        let again = added.set_multi(MultiField::Categories, "delivery", true);
        assert_eq!(again.active_filter_count(), 1);
        let removed = again.set_multi(MultiField::Categories, "delivery", false);
        assert_eq!(removed.active_filter_count(), 0);
    }

    #[test]
    fn two_multi_fields_count_as_two() {
        let state = FilterState::default()
            .set_multi(MultiField::Regions, "kyiv", true)
            .set_multi(MultiField::WorkerTiers, "pro", true);
        assert_eq!(state.active_filter_count(), 2);
    }

    #[test]
    fn incomplete_custom_range_does_not_count() {
        let state = FilterState::default().set_single(SingleField::DateRange, "custom");
        assert_eq!(state.active_filter_count(), 0);

        let half = state.set_custom_range("2026-07-01", "");
        assert_eq!(half.active_filter_count(), 0);

        let full = half.set_custom_range("2026-07-01", "2026-07-31");
        assert_eq!(full.active_filter_count(), 1);
    }

    #[test]
    fn custom_range_is_inert_for_other_date_ranges() {
        let state = FilterState::default().set_custom_range("2026-07-01", "2026-07-31");
        // the pair is stored but the period stayed on its default
        assert_eq!(state.active_filter_count(), 0);
        assert!(state.custom_range().is_complete());

        let custom = state.set_single(SingleField::DateRange, "custom");
        assert_eq!(custom.active_filter_count(), 1);
    }

    #[test]
    fn clear_all_is_the_default_state_from_anywhere() {
        let messy = FilterState::default()
            .set_single(SingleField::Metric, "orders")
            .set_single(SingleField::DateRange, "custom")
            .set_custom_range("2026-01-01", "2026-02-01")
            .set_multi(MultiField::Regions, "dnipro", true)
            .set_multi(MultiField::UserSegments, "loyal", true);
        assert!(messy.active_filter_count() > 0);

        let cleared = FilterState::clear_all();
        assert_eq!(cleared, FilterState::default());
        assert_eq!(cleared.active_filter_count(), 0);
    }

    #[test]
    fn invalid_value_is_ignored_in_release() {
        // debug_assert fires under `cargo test`; exercise the guard directly
        let state = FilterState::default();
        assert!(!SingleField::Metric.is_valid("bogus"));
        assert!(!MultiField::Regions.is_valid("atlantis"));
    }

    #[test]
    fn state_round_trips_through_json() {
        let state = FilterState::default()
            .set_single(SingleField::ChartType, "bar")
            .set_multi(MultiField::Categories, "beauty", true);
        let json = serde_json::to_string(&state).unwrap();
        let back: FilterState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
