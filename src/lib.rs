//! Catalog of investment portfolios ("carteras de inversión").
//!
//! The core is a set of pure functions over an immutable catalog: lookup,
//! risk filtering, top-N holdings, chart series and instrument categories.
//! The `render` and `tui` modules put a terminal front end on top of them.

pub mod catalog;
pub mod category;
pub mod chart;
pub mod error;
pub mod investment;
pub mod query;
pub mod render;
pub mod seed;
pub mod tui;
pub mod view;

pub use catalog::{get_investment, list_investments, Catalog};
pub use category::{categorize, InstrumentCategory};
pub use chart::{to_chart_series, ChartMode, ChartPoint};
pub use error::{CatalogError, ParseError, ValidationError};
pub use investment::{EvolutionPoint, Holding, InvestmentRecord, PerformanceSnapshot, RiskLevel};
pub use query::{filter_by_risk, top_holdings, HoldingSlice, RiskSelection};
