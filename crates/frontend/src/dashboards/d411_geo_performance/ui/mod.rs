pub mod dashboard;

pub use dashboard::GeoPerformanceDashboard;
