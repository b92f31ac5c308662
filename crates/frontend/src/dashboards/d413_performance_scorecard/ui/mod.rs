pub mod dashboard;

pub use dashboard::PerformanceScorecardDashboard;
