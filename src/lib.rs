//! chart-config: static charting vocabulary for dashboard widgets.
//!
//! This crate defines the closed vocabulary a widget chart definition is
//! built from (variable roles, aggregation functions, chart types) plus the
//! fixed mapping from each chart type to the ordered variable roles it
//! requires. Rendering, aggregation execution, and query building live in
//! consuming crates; this one only owns the vocabulary and its validation.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ChartConfig, MetricDefinition};
pub use core::{AggregationFunction, ChartType, VariableRole};
pub use error::{ConfigError, ConfigResult};
