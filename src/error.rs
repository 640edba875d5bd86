use thiserror::Error;

use crate::core::{ChartType, VariableRole};

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown chart type: `{0}`")]
    UnknownChartType(String),

    #[error("unknown aggregation function: `{0}`")]
    UnknownAggregationFunction(String),

    #[error("unknown variable role: `{0}`")]
    UnknownVariableRole(String),

    #[error("chart type `{chart_type}` is missing required variable `{role}`")]
    MissingVariable {
        chart_type: ChartType,
        role: VariableRole,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
