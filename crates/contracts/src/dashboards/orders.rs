use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Demo record
// ---------------------------------------------------------------------------

/// One completed or pending service order, the unit record behind every
/// analytics view. All categorical fields hold values from the filter
/// schema's option sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOrder {
    pub id: Uuid,
    pub placed_at: NaiveDateTime,
    pub category: String,
    pub subcategory: String,
    pub region: String,
    pub segment: String,
    pub worker_tier: String,
    pub amount_uah: f64,
    pub completed: bool,
}

impl ServiceOrder {
    pub fn date(&self) -> NaiveDate {
        self.placed_at.date()
    }
}

// ---------------------------------------------------------------------------
// Demo dataset
// ---------------------------------------------------------------------------

static DEMO_ORDERS: Lazy<Vec<ServiceOrder>> =
    Lazy::new(|| build_demo_orders(Utc::now().date_naive()));

/// The process-resident demonstration dataset: the trailing twelve months,
/// built once on first access.
pub fn demo_orders() -> &'static [ServiceOrder] {
    &DEMO_ORDERS
}

// category, its subcategories, base price in UAH
const CATEGORY_PROFILE: &[(&str, &[&str], f64)] = &[
    ("cleaning", &["deep_cleaning", "office_cleaning"], 900.0),
    ("repair", &["appliance_repair", "furniture_assembly"], 1400.0),
    ("delivery", &["courier", "cargo"], 350.0),
    ("beauty", &["hairdressing", "manicure"], 650.0),
    ("tutoring", &["math", "languages"], 500.0),
    ("moving", &["apartment_moving", "freight"], 2500.0),
];

// Weighted pick tables: repetition = weight.
const REGION_WEIGHTS: &[&str] = &[
    "kyiv",
    "kyiv",
    "kyiv",
    "lviv",
    "lviv",
    "odesa",
    "kharkiv",
    "dnipro",
    "zaporizhzhia",
];

const SEGMENT_WEIGHTS: &[&str] = &[
    "new",
    "new",
    "returning",
    "returning",
    "returning",
    "loyal",
    "loyal",
    "dormant",
];

const TIER_WEIGHTS: &[&str] = &[
    "starter",
    "starter",
    "verified",
    "verified",
    "verified",
    "pro",
    "pro",
    "elite",
];

/// splitmix64 finalizer; keeps the dataset reproducible without an RNG crate.
fn mix(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}

fn pick<'a>(table: &'a [&'a str], seed: u64) -> &'a str {
    table[(seed % table.len() as u64) as usize]
}

/// Builds the dataset for the 365 days ending at `today`. Everything except
/// the record ids is a pure function of `today`.
pub fn build_demo_orders(today: NaiveDate) -> Vec<ServiceOrder> {
    let mut orders = Vec::new();

    for day_back in 0..365i64 {
        let date = today - Duration::days(day_back);
        let day_seed = mix(day_back as u64);

        let mut count = 5 + (day_seed % 4) as usize;
        // weekends are busier on the marketplace
        if date.weekday().number_from_monday() >= 6 {
            count += 2;
        }

        for i in 0..count {
            let s = mix(day_seed ^ ((i as u64) << 32));
            let profile_idx = (s % CATEGORY_PROFILE.len() as u64) as usize;
            let (category, subcategories, base_price) = CATEGORY_PROFILE[profile_idx];

            let subcategory = pick(subcategories, mix(s ^ 1));
            let region = pick(REGION_WEIGHTS, mix(s ^ 2));
            let segment = pick(SEGMENT_WEIGHTS, mix(s ^ 3));
            let worker_tier = pick(TIER_WEIGHTS, mix(s ^ 4));

            let hour = 8 + (mix(s ^ 5) % 13) as u32;
            let minute = (mix(s ^ 6) % 60) as u32;
            let placed_at = date
                .and_hms_opt(hour, minute, 0)
                .expect("demo timestamp in range");

            let tier_factor = match worker_tier {
                "starter" => 0.85,
                "verified" => 1.0,
                "pro" => 1.15,
                _ => 1.35,
            };
            let spread = 0.7 + (mix(s ^ 7) % 61) as f64 / 100.0;
            let amount_uah = (base_price * tier_factor * spread * 100.0).round() / 100.0;

            orders.push(ServiceOrder {
                id: Uuid::new_v4(),
                placed_at,
                category: category.to_string(),
                subcategory: subcategory.to_string(),
                region: region.to_string(),
                segment: segment.to_string(),
                worker_tier: worker_tier.to_string(),
                amount_uah,
                completed: mix(s ^ 8) % 13 != 0,
            });
        }
    }

    orders
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filters::MultiField;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[test]
    fn every_record_uses_schema_option_values() {
        for order in build_demo_orders(fixed_today()) {
            assert!(MultiField::Categories.is_valid(&order.category));
            assert!(MultiField::Subcategories.is_valid(&order.subcategory));
            assert!(MultiField::Regions.is_valid(&order.region));
            assert!(MultiField::UserSegments.is_valid(&order.segment));
            assert!(MultiField::WorkerTiers.is_valid(&order.worker_tier));
            assert!(order.amount_uah > 0.0);
        }
    }

    #[test]
    fn dataset_spans_the_trailing_year() {
        let today = fixed_today();
        let orders = build_demo_orders(today);
        let min = orders.iter().map(ServiceOrder::date).min().unwrap();
        let max = orders.iter().map(ServiceOrder::date).max().unwrap();
        assert_eq!(max, today);
        assert_eq!(min, today - Duration::days(364));
        // at least five orders every day
        assert!(orders.len() >= 365 * 5);
    }

    #[test]
    fn generation_is_deterministic_apart_from_ids() {
        let a = build_demo_orders(fixed_today());
        let b = build_demo_orders(fixed_today());
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.placed_at, y.placed_at);
            assert_eq!(x.category, y.category);
            assert_eq!(x.amount_uah, y.amount_uah);
            assert_eq!(x.completed, y.completed);
        }
    }
}
