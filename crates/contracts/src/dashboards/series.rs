//! Derivations consumed by the dashboard views. Each aggregation is defined
//! once here so sibling views cannot drift apart on the numbers.

use chrono::{Datelike, Duration, NaiveDate, Timelike};

use super::orders::ServiceOrder;
use crate::shared::filters::MultiField;
use crate::shared::indicators::{scorecard_catalog, status_for_change, IndicatorValue};

// ---------------------------------------------------------------------------
// Metric evaluation
// ---------------------------------------------------------------------------

/// Evaluates one metric option over a record slice.
///
/// Revenue and average order value are computed over completed orders only;
/// the order count includes pending ones; the completion rate relates the
/// two populations.
pub fn metric_value(orders: &[&ServiceOrder], metric: &str) -> f64 {
    let total = orders.len();
    let completed = orders.iter().filter(|o| o.completed).count();
    let revenue: f64 = orders
        .iter()
        .filter(|o| o.completed)
        .map(|o| o.amount_uah)
        .sum();

    match metric {
        "revenue" => revenue,
        "orders" => total as f64,
        "avg_order_value" => {
            if completed == 0 {
                0.0
            } else {
                revenue / completed as f64
            }
        }
        "completion_rate" => {
            if total == 0 {
                0.0
            } else {
                completed as f64 / total as f64 * 100.0
            }
        }
        _ => 0.0,
    }
}

// ---------------------------------------------------------------------------
// Time series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// First day of the bucket containing `date`.
fn bucket_start(date: NaiveDate, timeframe: &str) -> NaiveDate {
    match timeframe {
        "weekly" => date - Duration::days(date.weekday().num_days_from_monday() as i64),
        "monthly" => date.with_day(1).unwrap_or(date),
        _ => date,
    }
}

fn next_bucket(start: NaiveDate, timeframe: &str) -> NaiveDate {
    match timeframe {
        "weekly" => start + Duration::days(7),
        "monthly" => {
            let (year, month) = if start.month() == 12 {
                (start.year() + 1, 1)
            } else {
                (start.year(), start.month() + 1)
            };
            NaiveDate::from_ymd_opt(year, month, 1).expect("first of month")
        }
        _ => start + Duration::days(1),
    }
}

fn bucket_label(start: NaiveDate, timeframe: &str) -> String {
    match timeframe {
        "monthly" => start.format("%m.%Y").to_string(),
        _ => start.format("%d.%m").to_string(),
    }
}

/// All bucket starts covering the inclusive window. The first bucket may
/// begin before the window when weekly/monthly alignment requires it.
fn bucket_starts(window: (NaiveDate, NaiveDate), timeframe: &str) -> Vec<NaiveDate> {
    let mut starts = Vec::new();
    let mut cursor = bucket_start(window.0, timeframe);
    while cursor <= window.1 {
        starts.push(cursor);
        cursor = next_bucket(cursor, timeframe);
    }
    starts
}

/// The selected metric bucketed over the window by the timeframe option.
/// Buckets with no records contribute an explicit zero point, so the chart
/// shows gaps instead of skipping them.
pub fn series_over_time(
    orders: &[&ServiceOrder],
    metric: &str,
    timeframe: &str,
    window: (NaiveDate, NaiveDate),
) -> Vec<SeriesPoint> {
    let starts = bucket_starts(window, timeframe);
    starts
        .iter()
        .enumerate()
        .map(|(idx, start)| {
            let end = starts
                .get(idx + 1)
                .map(|next| *next - Duration::days(1))
                .unwrap_or(window.1);
            let slice: Vec<&ServiceOrder> = orders
                .iter()
                .copied()
                .filter(|o| o.date() >= *start && o.date() <= end)
                .collect();
            SeriesPoint {
                label: bucket_label(*start, timeframe),
                value: metric_value(&slice, metric),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Geographic performance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct RegionStat {
    pub region: String,
    pub label: String,
    pub value: f64,
    /// Fraction of the metric total, 0..1.
    pub share: f64,
    /// Value relative to the strongest region, 0..1; drives map coloring.
    pub intensity: f64,
}

/// Per-region metric values in schema order, with share and intensity
/// derived for the map's coloring and legend.
pub fn region_stats(orders: &[&ServiceOrder], metric: &str) -> Vec<RegionStat> {
    let regions = MultiField::Regions.options();
    let values: Vec<f64> = regions
        .iter()
        .map(|r| {
            let slice: Vec<&ServiceOrder> = orders
                .iter()
                .copied()
                .filter(|o| o.region == r.value)
                .collect();
            metric_value(&slice, metric)
        })
        .collect();

    let total: f64 = values.iter().sum();
    let max = values.iter().cloned().fold(0.0_f64, f64::max);

    regions
        .iter()
        .zip(values)
        .map(|(r, value)| RegionStat {
            region: r.value.to_string(),
            label: r.label.to_string(),
            value,
            share: if total > 0.0 { value / total } else { 0.0 },
            intensity: if max > 0.0 { value / max } else { 0.0 },
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Behavior heatmap
// ---------------------------------------------------------------------------

const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const HOUR_SLOT_LABELS: [&str; 7] = [
    "08-10", "10-12", "12-14", "14-16", "16-18", "18-20", "20-22",
];

#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapGrid {
    pub row_labels: Vec<&'static str>,
    pub col_labels: Vec<String>,
    /// Order counts, `cells[row][col]`, rows = weekdays.
    pub cells: Vec<Vec<f64>>,
    pub max: f64,
}

/// Order activity as weekday rows against a time axis chosen by the cohort
/// period: hour slots for `daily`, week buckets for `weekly`, month buckets
/// for `monthly`.
pub fn behavior_heatmap(
    orders: &[&ServiceOrder],
    cohort_period: &str,
    window: (NaiveDate, NaiveDate),
) -> HeatmapGrid {
    let (col_labels, col_of): (Vec<String>, Box<dyn Fn(&ServiceOrder) -> Option<usize>>) =
        match cohort_period {
            "daily" => {
                let labels = HOUR_SLOT_LABELS.iter().map(|l| l.to_string()).collect();
                let col = |o: &ServiceOrder| {
                    let hour = o.placed_at.hour();
                    if (8..22).contains(&hour) {
                        Some(((hour - 8) / 2) as usize)
                    } else {
                        None
                    }
                };
                (labels, Box::new(col))
            }
            timeframe => {
                let starts = bucket_starts(window, timeframe);
                let labels = starts
                    .iter()
                    .map(|s| bucket_label(*s, timeframe))
                    .collect();
                let starts_for_col = starts.clone();
                let timeframe = timeframe.to_string();
                let col = move |o: &ServiceOrder| {
                    let start = bucket_start(o.date(), &timeframe);
                    starts_for_col.iter().position(|s| *s == start)
                };
                (labels, Box::new(col))
            }
        };

    let mut cells = vec![vec![0.0; col_labels.len()]; 7];
    for order in orders {
        let row = order.date().weekday().num_days_from_monday() as usize;
        if let Some(col) = col_of(order) {
            cells[row][col] += 1.0;
        }
    }

    let max = cells
        .iter()
        .flatten()
        .cloned()
        .fold(0.0_f64, f64::max);

    HeatmapGrid {
        row_labels: WEEKDAY_LABELS.to_vec(),
        col_labels,
        cells,
        max,
    }
}

// ---------------------------------------------------------------------------
// Scorecard
// ---------------------------------------------------------------------------

/// The four scorecard indicators over the current slice, compared against
/// the previous window's slice.
pub fn scorecard(
    current: &[&ServiceOrder],
    previous: &[&ServiceOrder],
) -> Vec<IndicatorValue> {
    scorecard_catalog()
        .into_iter()
        .map(|meta| {
            let metric = meta.id.0.as_str();
            let value = (!current.is_empty()).then(|| metric_value(current, metric));
            let previous_value = (!previous.is_empty()).then(|| metric_value(previous, metric));
            let change_percent = match (value, previous_value) {
                (Some(cur), Some(prev)) if prev.abs() > f64::EPSILON => {
                    Some((cur - prev) / prev * 100.0)
                }
                _ => None,
            };
            IndicatorValue {
                id: meta.id,
                value,
                previous_value,
                change_percent,
                status: status_for_change(change_percent),
                subtitle: None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::indicators::IndicatorStatus;
    use uuid::Uuid;

    fn order(date: NaiveDate, hour: u32, amount: f64, completed: bool) -> ServiceOrder {
        ServiceOrder {
            id: Uuid::new_v4(),
            placed_at: date.and_hms_opt(hour, 0, 0).unwrap(),
            category: "delivery".to_string(),
            subcategory: "courier".to_string(),
            region: "kyiv".to_string(),
            segment: "new".to_string(),
            worker_tier: "verified".to_string(),
            amount_uah: amount,
            completed,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 7, d).unwrap()
    }

    #[test]
    fn metric_values_over_a_mixed_slice() {
        let a = order(day(1), 10, 100.0, true);
        let b = order(day(1), 11, 300.0, true);
        let c = order(day(2), 12, 900.0, false);
        let slice = vec![&a, &b, &c];

        assert_eq!(metric_value(&slice, "revenue"), 400.0);
        assert_eq!(metric_value(&slice, "orders"), 3.0);
        assert_eq!(metric_value(&slice, "avg_order_value"), 200.0);
        let rate = metric_value(&slice, "completion_rate");
        assert!((rate - 66.666).abs() < 0.01);
    }

    #[test]
    fn empty_slice_yields_zero_for_every_metric() {
        let slice: Vec<&ServiceOrder> = Vec::new();
        for metric in ["revenue", "orders", "avg_order_value", "completion_rate"] {
            assert_eq!(metric_value(&slice, metric), 0.0);
        }
    }

    #[test]
    fn daily_series_has_one_point_per_day_including_empty_days() {
        let a = order(day(1), 10, 100.0, true);
        let b = order(day(3), 10, 50.0, true);
        let series = series_over_time(
            &[&a, &b],
            "revenue",
            "daily",
            (day(1), day(4)),
        );
        assert_eq!(series.len(), 4);
        assert_eq!(series[0].value, 100.0);
        assert_eq!(series[1].value, 0.0);
        assert_eq!(series[2].value, 50.0);
        assert_eq!(series[0].label, "01.07");
    }

    #[test]
    fn weekly_buckets_start_on_monday() {
        // 2026-07-01 is a Wednesday; its week starts on 2026-06-29
        assert_eq!(
            bucket_start(day(1), "weekly"),
            NaiveDate::from_ymd_opt(2026, 6, 29).unwrap()
        );
        let a = order(day(1), 10, 10.0, true);
        let b = order(day(7), 10, 20.0, true);
        let series = series_over_time(&[&a, &b], "revenue", "weekly", (day(1), day(8)));
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].value, 10.0);
        assert_eq!(series[1].value, 20.0);
    }

    #[test]
    fn monthly_buckets_roll_over_december() {
        let dec = NaiveDate::from_ymd_opt(2025, 12, 15).unwrap();
        assert_eq!(
            next_bucket(bucket_start(dec, "monthly"), "monthly"),
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
        );
    }

    #[test]
    fn region_stats_share_and_intensity() {
        let mut a = order(day(1), 10, 300.0, true);
        a.region = "kyiv".to_string();
        let mut b = order(day(1), 10, 100.0, true);
        b.region = "lviv".to_string();
        let stats = region_stats(&[&a, &b], "revenue");

        // schema order, all regions present
        assert_eq!(stats.len(), 6);
        let kyiv = &stats[0];
        let lviv = &stats[1];
        assert_eq!(kyiv.region, "kyiv");
        assert_eq!(kyiv.value, 300.0);
        assert_eq!(kyiv.intensity, 1.0);
        assert!((kyiv.share - 0.75).abs() < 1e-9);
        assert!((lviv.intensity - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats[2].value, 0.0);
        assert_eq!(stats[2].intensity, 0.0);
    }

    #[test]
    fn daily_heatmap_slots_orders_by_weekday_and_hour() {
        // 2026-07-06 is a Monday
        let monday = NaiveDate::from_ymd_opt(2026, 7, 6).unwrap();
        let a = order(monday, 9, 10.0, true);
        let b = order(monday, 9, 10.0, true);
        let c = order(monday, 21, 10.0, true);
        let grid = behavior_heatmap(&[&a, &b, &c], "daily", (day(1), day(31)));

        assert_eq!(grid.row_labels[0], "Mon");
        assert_eq!(grid.col_labels.len(), 7);
        assert_eq!(grid.cells[0][0], 2.0); // 08-10
        assert_eq!(grid.cells[0][6], 1.0); // 20-22
        assert_eq!(grid.max, 2.0);
    }

    #[test]
    fn monthly_heatmap_uses_month_columns() {
        let june = NaiveDate::from_ymd_opt(2026, 6, 10).unwrap();
        let july = NaiveDate::from_ymd_opt(2026, 7, 10).unwrap();
        let a = order(june, 10, 10.0, true);
        let b = order(july, 10, 10.0, true);
        let grid = behavior_heatmap(&[&a, &b], "monthly", (june, july));
        assert_eq!(grid.col_labels, vec!["06.2026", "07.2026"]);
        let june_total: f64 = grid.cells.iter().map(|row| row[0]).sum();
        let july_total: f64 = grid.cells.iter().map(|row| row[1]).sum();
        assert_eq!(june_total, 1.0);
        assert_eq!(july_total, 1.0);
    }

    #[test]
    fn scorecard_reports_change_against_previous_window() {
        let cur_a = order(day(10), 10, 200.0, true);
        let cur_b = order(day(11), 10, 200.0, true);
        let prev = order(day(1), 10, 200.0, true);
        let cards = scorecard(&[&cur_a, &cur_b], &[&prev]);

        assert_eq!(cards.len(), 4);
        let revenue = &cards[0];
        assert_eq!(revenue.id.0, "revenue");
        assert_eq!(revenue.value, Some(400.0));
        assert_eq!(revenue.previous_value, Some(200.0));
        assert_eq!(revenue.change_percent, Some(100.0));
        assert_eq!(revenue.status, IndicatorStatus::Good);
    }

    #[test]
    fn scorecard_with_no_previous_data_stays_neutral() {
        let cur = order(day(10), 10, 200.0, true);
        let cards = scorecard(&[&cur], &[]);
        assert_eq!(cards[0].previous_value, None);
        assert_eq!(cards[0].change_percent, None);
        assert_eq!(cards[0].status, IndicatorStatus::Neutral);
    }
}
