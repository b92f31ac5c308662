pub mod ui;

pub use ui::RevenueAnalyticsDashboard;
