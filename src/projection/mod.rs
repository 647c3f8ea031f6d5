//! Monthly cash-flow projection of an investment plan and its period roll-ups.

pub mod aggregate;
pub mod engine;
pub mod table;

pub use aggregate::{aggregate, aggregate_loaded, Granularity, UnknownGranularity};
pub use engine::{project, project_loaded, DEFAULT_HORIZON_MONTHS, MAX_HORIZON_MONTHS};
pub use table::{ChartSeries, ColumnLabel, RowLabel, Table};
