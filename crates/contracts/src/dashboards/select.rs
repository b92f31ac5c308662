//! Applies a [`FilterState`] to the order dataset. This is the only place
//! record selection is defined; every dashboard derives from the slice
//! returned here.

use chrono::{Duration, NaiveDate};

use super::orders::ServiceOrder;
use crate::shared::filters::{FilterState, MultiField, SingleField, DATE_RANGE_CUSTOM};

/// Resolves the date-range selection into an inclusive `(from, to)` window
/// relative to `today`. Returns `None` when no window applies: a custom
/// period whose pair is incomplete or unparsable imposes no restriction.
pub fn date_window(state: &FilterState, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    match state.single(SingleField::DateRange) {
        "7d" => Some((today - Duration::days(6), today)),
        "30d" => Some((today - Duration::days(29), today)),
        "90d" => Some((today - Duration::days(89), today)),
        "180d" => Some((today - Duration::days(179), today)),
        DATE_RANGE_CUSTOM => {
            let range = state.custom_range();
            if !range.is_complete() {
                return None;
            }
            let from = NaiveDate::parse_from_str(&range.date_from, "%Y-%m-%d").ok()?;
            let to = NaiveDate::parse_from_str(&range.date_to, "%Y-%m-%d").ok()?;
            Some(if from <= to { (from, to) } else { (to, from) })
        }
        _ => None,
    }
}

/// The window the charts actually draw: the resolved selection, or the whole
/// trailing year when nothing restricts the dates.
pub fn effective_window(state: &FilterState, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    date_window(state, today).unwrap_or((today - Duration::days(364), today))
}

/// The window of equal length immediately before `window`, for
/// period-over-period comparisons.
pub fn previous_window(window: (NaiveDate, NaiveDate)) -> (NaiveDate, NaiveDate) {
    let len = (window.1 - window.0).num_days() + 1;
    (window.0 - Duration::days(len), window.0 - Duration::days(1))
}

fn multi_matches(state: &FilterState, field: MultiField, value: &str) -> bool {
    let selection = state.selected(field);
    selection.is_empty() || selection.iter().any(|v| v == value)
}

/// Membership test for one record: inside the window (when one applies) and
/// accepted by all five multi-value selections (empty = no restriction).
pub fn order_matches(
    order: &ServiceOrder,
    state: &FilterState,
    window: Option<(NaiveDate, NaiveDate)>,
) -> bool {
    if let Some((from, to)) = window {
        let date = order.date();
        if date < from || date > to {
            return false;
        }
    }
    multi_matches(state, MultiField::Categories, &order.category)
        && multi_matches(state, MultiField::Subcategories, &order.subcategory)
        && multi_matches(state, MultiField::UserSegments, &order.segment)
        && multi_matches(state, MultiField::Regions, &order.region)
        && multi_matches(state, MultiField::WorkerTiers, &order.worker_tier)
}

/// The record slice a dashboard renders for the current state.
pub fn filter_orders<'a>(
    orders: &'a [ServiceOrder],
    state: &FilterState,
    today: NaiveDate,
) -> Vec<&'a ServiceOrder> {
    let window = date_window(state, today);
    orders
        .iter()
        .filter(|o| order_matches(o, state, window))
        .collect()
}

/// Like [`filter_orders`] but with an explicit window, used for the
/// scorecard's previous-period slice.
pub fn filter_orders_in_window<'a>(
    orders: &'a [ServiceOrder],
    state: &FilterState,
    window: (NaiveDate, NaiveDate),
) -> Vec<&'a ServiceOrder> {
    orders
        .iter()
        .filter(|o| order_matches(o, state, Some(window)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    fn order(date: NaiveDate, category: &str, region: &str) -> ServiceOrder {
        ServiceOrder {
            id: Uuid::new_v4(),
            placed_at: date.and_hms_opt(12, 0, 0).unwrap(),
            category: category.to_string(),
            subcategory: "courier".to_string(),
            region: region.to_string(),
            segment: "returning".to_string(),
            worker_tier: "verified".to_string(),
            amount_uah: 100.0,
            completed: true,
        }
    }

    #[test]
    fn default_window_is_the_trailing_30_days_inclusive() {
        let state = FilterState::default();
        let (from, to) = date_window(&state, today()).unwrap();
        assert_eq!(to, today());
        assert_eq!((to - from).num_days(), 29);
    }

    #[test]
    fn window_boundaries_are_inclusive() {
        let state = FilterState::default();
        let window = date_window(&state, today());
        let oldest_in = order(today() - Duration::days(29), "delivery", "kyiv");
        let one_too_old = order(today() - Duration::days(30), "delivery", "kyiv");
        assert!(order_matches(&oldest_in, &state, window));
        assert!(!order_matches(&one_too_old, &state, window));
    }

    #[test]
    fn incomplete_custom_range_imposes_no_window() {
        let state = FilterState::default()
            .set_single(SingleField::DateRange, "custom")
            .set_custom_range("2026-01-01", "");
        assert_eq!(date_window(&state, today()), None);
        // an order far outside any preset range still matches
        let old = order(today() - Duration::days(300), "delivery", "kyiv");
        assert!(order_matches(&old, &state, None));
    }

    #[test]
    fn reversed_custom_range_is_normalized() {
        let state = FilterState::default()
            .set_single(SingleField::DateRange, "custom")
            .set_custom_range("2026-07-31", "2026-07-01");
        let (from, to) = date_window(&state, today()).unwrap();
        assert!(from <= to);
        assert_eq!(from, NaiveDate::from_ymd_opt(2026, 7, 1).unwrap());
    }

    #[test]
    fn multi_selection_restricts_records() {
        let orders = vec![
            order(today(), "delivery", "kyiv"),
            order(today(), "cleaning", "lviv"),
            order(today(), "delivery", "lviv"),
        ];
        let state = FilterState::default().set_multi(MultiField::Regions, "lviv", true);
        let hits = filter_orders(&orders, &state, today());
        assert_eq!(hits.len(), 2);

        let narrowed = state.set_multi(MultiField::Categories, "delivery", true);
        let hits = filter_orders(&orders, &narrowed, today());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].region, "lviv");
        assert_eq!(hits[0].category, "delivery");
    }

    #[test]
    fn previous_window_has_equal_length() {
        let window = (
            NaiveDate::from_ymd_opt(2026, 7, 9).unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
        );
        let (prev_from, prev_to) = previous_window(window);
        assert_eq!(prev_to, window.0 - Duration::days(1));
        assert_eq!(
            (prev_to - prev_from).num_days(),
            (window.1 - window.0).num_days()
        );
    }

    #[test]
    fn effective_window_falls_back_to_the_trailing_year() {
        let state = FilterState::default().set_single(SingleField::DateRange, "custom");
        let (from, to) = effective_window(&state, today());
        assert_eq!(to, today());
        assert_eq!((to - from).num_days(), 364);
    }
}
