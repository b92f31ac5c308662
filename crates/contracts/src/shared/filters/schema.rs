use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// One selectable option of a filter field: machine value + human label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> FilterOption {
    FilterOption { value, label }
}

/// The date-range option that activates the custom from/to pair.
pub const DATE_RANGE_CUSTOM: &str = "custom";

const DATE_RANGE_OPTIONS: &[FilterOption] = &[
    opt("7d", "Last 7 days"),
    opt("30d", "Last 30 days"),
    opt("90d", "Last 90 days"),
    opt("180d", "Last 180 days"),
    opt(DATE_RANGE_CUSTOM, "Custom period"),
];

const COHORT_PERIOD_OPTIONS: &[FilterOption] = &[
    opt("daily", "Daily"),
    opt("weekly", "Weekly"),
    opt("monthly", "Monthly"),
];

const METRIC_OPTIONS: &[FilterOption] = &[
    opt("revenue", "Revenue"),
    opt("orders", "Orders"),
    opt("avg_order_value", "Avg order value"),
    opt("completion_rate", "Completion rate"),
];

const TIMEFRAME_OPTIONS: &[FilterOption] = &[
    opt("daily", "By day"),
    opt("weekly", "By week"),
    opt("monthly", "By month"),
];

const CHART_TYPE_OPTIONS: &[FilterOption] = &[
    opt("line", "Line"),
    opt("bar", "Bars"),
    opt("area", "Area"),
];

const CATEGORY_OPTIONS: &[FilterOption] = &[
    opt("cleaning", "Cleaning"),
    opt("repair", "Repair"),
    opt("delivery", "Delivery"),
    opt("beauty", "Beauty"),
    opt("tutoring", "Tutoring"),
    opt("moving", "Moving"),
];

const SUBCATEGORY_OPTIONS: &[FilterOption] = &[
    opt("deep_cleaning", "Deep cleaning"),
    opt("office_cleaning", "Office cleaning"),
    opt("appliance_repair", "Appliance repair"),
    opt("furniture_assembly", "Furniture assembly"),
    opt("courier", "Courier delivery"),
    opt("cargo", "Cargo delivery"),
    opt("hairdressing", "Hairdressing"),
    opt("manicure", "Manicure"),
    opt("math", "Math tutoring"),
    opt("languages", "Language tutoring"),
    opt("apartment_moving", "Apartment moving"),
    opt("freight", "Freight moving"),
];

const USER_SEGMENT_OPTIONS: &[FilterOption] = &[
    opt("new", "New customers"),
    opt("returning", "Returning"),
    opt("loyal", "Loyal"),
    opt("dormant", "Dormant"),
];

const REGION_OPTIONS: &[FilterOption] = &[
    opt("kyiv", "Kyiv"),
    opt("lviv", "Lviv"),
    opt("odesa", "Odesa"),
    opt("kharkiv", "Kharkiv"),
    opt("dnipro", "Dnipro"),
    opt("zaporizhzhia", "Zaporizhzhia"),
];

const WORKER_TIER_OPTIONS: &[FilterOption] = &[
    opt("starter", "Starter"),
    opt("verified", "Verified"),
    opt("pro", "Pro"),
    opt("elite", "Elite"),
];

// ---------------------------------------------------------------------------
// Single-value fields
// ---------------------------------------------------------------------------

/// A filter dimension holding exactly one selected option at a time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SingleField {
    DateRange,
    CohortPeriod,
    Metric,
    Timeframe,
    ChartType,
}

impl SingleField {
    pub const ALL: [SingleField; 5] = [
        SingleField::DateRange,
        SingleField::CohortPeriod,
        SingleField::Metric,
        SingleField::Timeframe,
        SingleField::ChartType,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SingleField::DateRange => "date_range",
            SingleField::CohortPeriod => "cohort_period",
            SingleField::Metric => "metric",
            SingleField::Timeframe => "timeframe",
            SingleField::ChartType => "chart_type",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SingleField::DateRange => "Period",
            SingleField::CohortPeriod => "Cohort",
            SingleField::Metric => "Metric",
            SingleField::Timeframe => "Timeframe",
            SingleField::ChartType => "Chart",
        }
    }

    pub fn options(&self) -> &'static [FilterOption] {
        match self {
            SingleField::DateRange => DATE_RANGE_OPTIONS,
            SingleField::CohortPeriod => COHORT_PERIOD_OPTIONS,
            SingleField::Metric => METRIC_OPTIONS,
            SingleField::Timeframe => TIMEFRAME_OPTIONS,
            SingleField::ChartType => CHART_TYPE_OPTIONS,
        }
    }

    /// The documented default, counted as "no filter" by the active count.
    pub fn default_value(&self) -> &'static str {
        match self {
            SingleField::DateRange => "30d",
            SingleField::CohortPeriod => "weekly",
            SingleField::Metric => "revenue",
            SingleField::Timeframe => "daily",
            SingleField::ChartType => "line",
        }
    }

    pub fn is_valid(&self, value: &str) -> bool {
        self.options().iter().any(|o| o.value == value)
    }

    pub fn option_label(&self, value: &str) -> Option<&'static str> {
        self.options()
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label)
    }
}

// ---------------------------------------------------------------------------
// Multi-value fields
// ---------------------------------------------------------------------------

/// A filter dimension holding a set of zero or more selected options.
/// The default is the empty set ("no restriction").
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MultiField {
    Categories,
    Subcategories,
    UserSegments,
    Regions,
    WorkerTiers,
}

impl MultiField {
    pub const ALL: [MultiField; 5] = [
        MultiField::Categories,
        MultiField::Subcategories,
        MultiField::UserSegments,
        MultiField::Regions,
        MultiField::WorkerTiers,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MultiField::Categories => "categories",
            MultiField::Subcategories => "subcategories",
            MultiField::UserSegments => "user_segments",
            MultiField::Regions => "regions",
            MultiField::WorkerTiers => "worker_tiers",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MultiField::Categories => "Categories",
            MultiField::Subcategories => "Subcategories",
            MultiField::UserSegments => "Customer segments",
            MultiField::Regions => "Regions",
            MultiField::WorkerTiers => "Worker tiers",
        }
    }

    pub fn options(&self) -> &'static [FilterOption] {
        match self {
            MultiField::Categories => CATEGORY_OPTIONS,
            MultiField::Subcategories => SUBCATEGORY_OPTIONS,
            MultiField::UserSegments => USER_SEGMENT_OPTIONS,
            MultiField::Regions => REGION_OPTIONS,
            MultiField::WorkerTiers => WORKER_TIER_OPTIONS,
        }
    }

    pub fn is_valid(&self, value: &str) -> bool {
        self.options().iter().any(|o| o.value == value)
    }

    pub fn option_label(&self, value: &str) -> Option<&'static str> {
        self.options()
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_belong_to_option_sets() {
        for field in SingleField::ALL {
            assert!(
                field.is_valid(field.default_value()),
                "default of {:?} is not in its option set",
                field
            );
        }
    }

    #[test]
    fn option_values_are_unique_per_field() {
        for field in SingleField::ALL {
            let mut values: Vec<_> = field.options().iter().map(|o| o.value).collect();
            values.sort_unstable();
            values.dedup();
            assert_eq!(values.len(), field.options().len());
        }
        for field in MultiField::ALL {
            let mut values: Vec<_> = field.options().iter().map(|o| o.value).collect();
            values.sort_unstable();
            values.dedup();
            assert_eq!(values.len(), field.options().len());
        }
    }

    #[test]
    fn custom_is_a_date_range_option() {
        assert!(SingleField::DateRange.is_valid(DATE_RANGE_CUSTOM));
        assert_ne!(SingleField::DateRange.default_value(), DATE_RANGE_CUSTOM);
    }

    #[test]
    fn field_keys_are_unique() {
        let mut keys: Vec<&str> = SingleField::ALL
            .iter()
            .map(|f| f.key())
            .chain(MultiField::ALL.iter().map(|f| f.key()))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), SingleField::ALL.len() + MultiField::ALL.len());
    }

    #[test]
    fn option_label_lookup() {
        assert_eq!(
            SingleField::Metric.option_label("avg_order_value"),
            Some("Avg order value")
        );
        assert_eq!(MultiField::Regions.option_label("lviv"), Some("Lviv"));
        assert_eq!(MultiField::Regions.option_label("mars"), None);
    }
}
