//! Presentation layer: UI models, view-models and the chart layout engine.
//!
//! Nothing in here draws or owns a window; the host UI renders
//! [`coin_list::CoinListState`] and [`chart::ChartFrame`] however it likes.

pub mod chart;
pub mod coin_list;
pub mod models;
