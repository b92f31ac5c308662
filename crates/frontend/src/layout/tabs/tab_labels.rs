//! Tab labels - the single source of truth for tab titles.

/// Returns the readable tab title for the given key. Fallback: the key
/// itself is unknown and gets an empty title.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Dashboards (d4xx) ─────────────────────────────────────────────
        "d410_revenue_analytics" => "Revenue analytics",
        "d411_geo_performance" => "Geographic performance",
        "d412_behavior_heatmap" => "User behavior",
        "d413_performance_scorecard" => "Performance scorecard",

        // ── Fallback ──────────────────────────────────────────────────────
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_dashboard_key_has_a_label() {
        for key in [
            "d410_revenue_analytics",
            "d411_geo_performance",
            "d412_behavior_heatmap",
            "d413_performance_scorecard",
        ] {
            assert!(!tab_label_for_key(key).is_empty(), "missing label: {}", key);
        }
    }

    #[test]
    fn unknown_key_yields_empty_label() {
        assert_eq!(tab_label_for_key("d999_nope"), "");
    }
}
