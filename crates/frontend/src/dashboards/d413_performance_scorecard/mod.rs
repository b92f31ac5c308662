pub mod ui;

pub use ui::PerformanceScorecardDashboard;
