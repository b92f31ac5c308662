pub mod dashboard;

pub use dashboard::BehaviorHeatmapDashboard;
