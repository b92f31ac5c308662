//! Filter state shared by the analytics dashboards.
//!
//! The module is split into:
//! - `schema` - the filter dimensions and their enumerated option sets
//!   (first-class data, not implied by UI wiring)
//! - `state` - the immutable [`FilterState`] value and its transitions
//! - `summary` - derived display data (active filter chips)

pub mod schema;
pub mod state;
pub mod summary;

pub use schema::{FilterOption, MultiField, SingleField, DATE_RANGE_CUSTOM};
pub use state::{CustomRange, FilterState};
pub use summary::{active_chips, FilterChip};
