use chrono::NaiveDate;

use super::schema::{MultiField, SingleField, DATE_RANGE_CUSTOM};
use super::state::FilterState;

// ---------------------------------------------------------------------------
// Active filter chips
// ---------------------------------------------------------------------------

/// One removable chip in the filter panel's tag row.
///
/// A chip knows enough about its origin to undo itself: removing a single
/// chip resets the field to its default, removing a multi chip deselects the
/// one value, removing the custom-range chip returns to the default period.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterChip {
    Single { field: SingleField, label: String },
    Multi {
        field: MultiField,
        value: String,
        label: String,
    },
    CustomRange { label: String },
}

impl FilterChip {
    pub fn label(&self) -> &str {
        match self {
            FilterChip::Single { label, .. } => label,
            FilterChip::Multi { label, .. } => label,
            FilterChip::CustomRange { label } => label,
        }
    }

    /// The state with this chip's selection undone.
    #[must_use]
    pub fn remove_from(&self, state: &FilterState) -> FilterState {
        match self {
            FilterChip::Single { field, .. } => {
                state.set_single(*field, field.default_value())
            }
            FilterChip::Multi { field, value, .. } => state.set_multi(*field, value, false),
            FilterChip::CustomRange { .. } => state.set_single(
                SingleField::DateRange,
                SingleField::DateRange.default_value(),
            ),
        }
    }
}

/// Derives the chip row for the current state: one chip per active single
/// field, one per selected multi value, one for a complete custom range.
/// Chip order follows the schema order, so re-renders are stable.
pub fn active_chips(state: &FilterState) -> Vec<FilterChip> {
    let mut chips = Vec::new();

    for field in SingleField::ALL {
        if !state.single_is_active(field) {
            continue;
        }
        let value = state.single(field);
        if field == SingleField::DateRange && value == DATE_RANGE_CUSTOM {
            let range = state.custom_range();
            chips.push(FilterChip::CustomRange {
                label: format!(
                    "{}: {} — {}",
                    field.label(),
                    display_date(&range.date_from),
                    display_date(&range.date_to)
                ),
            });
        } else {
            let option = field.option_label(value).unwrap_or(value);
            chips.push(FilterChip::Single {
                field,
                label: format!("{}: {}", field.label(), option),
            });
        }
    }

    for field in MultiField::ALL {
        for value in state.selected(field) {
            let option = field.option_label(value).map(str::to_string);
            chips.push(FilterChip::Multi {
                field,
                value: value.clone(),
                label: format!(
                    "{}: {}",
                    field.label(),
                    option.unwrap_or_else(|| value.clone())
                ),
            });
        }
    }

    chips
}

/// `yyyy-mm-dd` -> `dd.mm.yyyy`; anything unparsable is shown as-is.
fn display_date(iso: &str) -> String {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_has_no_chips() {
        assert!(active_chips(&FilterState::default()).is_empty());
    }

    #[test]
    fn chips_match_active_filter_count() {
        let state = FilterState::default()
            .set_single(SingleField::Metric, "orders")
            .set_multi(MultiField::Regions, "kyiv", true)
            .set_multi(MultiField::Regions, "lviv", true);
        // two region values render as two chips but count as one field
        assert_eq!(active_chips(&state).len(), 3);
        assert_eq!(state.active_filter_count(), 2);
    }

    #[test]
    fn single_chip_removal_resets_to_default() {
        let state = FilterState::default().set_single(SingleField::ChartType, "area");
        let chips = active_chips(&state);
        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].label(), "Chart: Area");

        let restored = chips[0].remove_from(&state);
        assert_eq!(restored, FilterState::default());
    }

    #[test]
    fn multi_chip_removal_deselects_one_value() {
        let state = FilterState::default()
            .set_multi(MultiField::WorkerTiers, "pro", true)
            .set_multi(MultiField::WorkerTiers, "elite", true);
        let chips = active_chips(&state);
        assert_eq!(chips.len(), 2);

        let next = chips[0].remove_from(&state);
        assert_eq!(next.selected(MultiField::WorkerTiers), ["elite"]);
    }

    #[test]
    fn custom_range_renders_one_chip_with_formatted_dates() {
        let state = FilterState::default()
            .set_single(SingleField::DateRange, "custom")
            .set_custom_range("2026-07-01", "2026-07-31");
        let chips = active_chips(&state);
        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].label(), "Period: 01.07.2026 — 31.07.2026");

        let restored = chips[0].remove_from(&state);
        assert_eq!(restored.single(SingleField::DateRange), "30d");
        assert_eq!(restored.active_filter_count(), 0);
    }

    #[test]
    fn incomplete_custom_range_renders_no_chip() {
        let state = FilterState::default()
            .set_single(SingleField::DateRange, "custom")
            .set_custom_range("2026-07-01", "");
        assert!(active_chips(&state).is_empty());
    }
}
