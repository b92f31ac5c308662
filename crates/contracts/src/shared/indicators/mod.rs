use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Indicator identity & display metadata
// ---------------------------------------------------------------------------

/// Unique indicator identifier. The scorecard reuses the metric option
/// values ("revenue", "orders", ...) so cards and filters stay in sync.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorId(pub String);

impl IndicatorId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// How to format the numeric value on the card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

/// Visual status of the indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
    Warning,
}

/// Static metadata describing one indicator (label, format, icon).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorMeta {
    pub id: IndicatorId,
    pub label: String,
    pub icon: String,
    pub format: ValueFormat,
}

// ---------------------------------------------------------------------------
// Computed values
// ---------------------------------------------------------------------------

/// A single computed indicator result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorValue {
    pub id: IndicatorId,
    /// Primary numeric value (`None` when no data falls into the window).
    pub value: Option<f64>,
    /// Value for the previous comparable window.
    pub previous_value: Option<f64>,
    /// Change relative to the previous window, expressed as a percentage.
    pub change_percent: Option<f64>,
    pub status: IndicatorStatus,
    /// Optional secondary text displayed below the value.
    pub subtitle: Option<String>,
}

/// Status from the period-over-period change. Small movements stay neutral
/// so the scorecard does not flash on noise.
pub fn status_for_change(change_percent: Option<f64>) -> IndicatorStatus {
    match change_percent {
        Some(c) if c > 2.0 => IndicatorStatus::Good,
        Some(c) if c < -2.0 => IndicatorStatus::Bad,
        Some(_) => IndicatorStatus::Neutral,
        None => IndicatorStatus::Neutral,
    }
}

// ---------------------------------------------------------------------------
// Scorecard catalogue
// ---------------------------------------------------------------------------

/// The four cards of the performance scorecard, in display order.
pub fn scorecard_catalog() -> Vec<IndicatorMeta> {
    vec![
        IndicatorMeta {
            id: IndicatorId::new("revenue"),
            label: "Revenue".to_string(),
            icon: "cash".to_string(),
            format: ValueFormat::Money {
                currency: "UAH".to_string(),
            },
        },
        IndicatorMeta {
            id: IndicatorId::new("orders"),
            label: "Orders".to_string(),
            icon: "list".to_string(),
            format: ValueFormat::Integer,
        },
        IndicatorMeta {
            id: IndicatorId::new("avg_order_value"),
            label: "Avg order value".to_string(),
            icon: "activity".to_string(),
            format: ValueFormat::Money {
                currency: "UAH".to_string(),
            },
        },
        IndicatorMeta {
            id: IndicatorId::new("completion_rate"),
            label: "Completion rate".to_string(),
            icon: "check-circle".to_string(),
            format: ValueFormat::Percent { decimals: 1 },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filters::SingleField;

    #[test]
    fn catalog_ids_are_metric_options() {
        for meta in scorecard_catalog() {
            assert!(
                SingleField::Metric.is_valid(&meta.id.0),
                "{} is not a metric option",
                meta.id.0
            );
        }
    }

    #[test]
    fn status_thresholds() {
        assert_eq!(status_for_change(Some(12.0)), IndicatorStatus::Good);
        assert_eq!(status_for_change(Some(-8.5)), IndicatorStatus::Bad);
        assert_eq!(status_for_change(Some(0.4)), IndicatorStatus::Neutral);
        assert_eq!(status_for_change(None), IndicatorStatus::Neutral);
    }
}
