//! Tab content registry - the single source of truth for mapping
//! tab.key -> View. All tab keys are collected here in one place.

use crate::dashboards::d410_revenue_analytics::RevenueAnalyticsDashboard;
use crate::dashboards::d411_geo_performance::GeoPerformanceDashboard;
use crate::dashboards::d412_behavior_heatmap::BehaviorHeatmapDashboard;
use crate::dashboards::d413_performance_scorecard::PerformanceScorecardDashboard;
use leptos::logging::log;
use leptos::prelude::*;

/// Renders the content of a tab by its key.
///
/// Returns an AnyView with the tab content, or a placeholder for unknown
/// keys.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        // ═══════════════════════════════════════════════════════════════════
        // Dashboards (d410-d413)
        // ═══════════════════════════════════════════════════════════════════
        "d410_revenue_analytics" => view! { <RevenueAnalyticsDashboard /> }.into_any(),
        "d411_geo_performance" => view! { <GeoPerformanceDashboard /> }.into_any(),
        "d412_behavior_heatmap" => view! { <BehaviorHeatmapDashboard /> }.into_any(),
        "d413_performance_scorecard" => {
            view! { <PerformanceScorecardDashboard /> }.into_any()
        }

        // ═══════════════════════════════════════════════════════════════════
        // Unknown / Fallback
        // ═══════════════════════════════════════════════════════════════════
        _ => {
            log!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
