pub mod d410_revenue_analytics;
pub mod d411_geo_performance;
pub mod d412_behavior_heatmap;
pub mod d413_performance_scorecard;
pub mod filters;

pub use d410_revenue_analytics::RevenueAnalyticsDashboard;
pub use d411_geo_performance::GeoPerformanceDashboard;
pub use d412_behavior_heatmap::BehaviorHeatmapDashboard;
pub use d413_performance_scorecard::PerformanceScorecardDashboard;
