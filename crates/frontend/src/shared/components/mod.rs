pub mod custom_range_picker;
pub mod filter_panel;
pub mod page_header;
pub mod stat_card;
pub mod ui;

pub use custom_range_picker::CustomRangePicker;
pub use filter_panel::{FilterPanel, FilterTag};
pub use page_header::PageHeader;
pub use stat_card::StatCard;
