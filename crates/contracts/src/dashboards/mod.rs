//! Data feeding the analytics dashboards: the demo order dataset, the
//! filter application over it, and the per-view derivations (time series,
//! region stats, heatmap grid, scorecard).

pub mod orders;
pub mod select;
pub mod series;
