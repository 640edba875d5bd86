use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AggregationFunction, ChartType, VariableRole};
use crate::error::{ConfigError, ConfigResult};

/// A metric definition pairing an aggregation with its source column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricDefinition {
    pub aggregation: AggregationFunction,
    pub column: String,
}

impl MetricDefinition {
    #[must_use]
    pub fn new(aggregation: AggregationFunction, column: impl Into<String>) -> Self {
        Self {
            aggregation,
            column: column.into(),
        }
    }
}

/// A widget chart configuration binding variable roles to data columns.
///
/// This type is serializable so host applications can persist/load widget
/// setup without inventing their own ad-hoc format. Variable keys are kept
/// as raw strings because configurations arrive from user-authored files;
/// [`ChartConfig::validate`] is where unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub chart_type: ChartType,
    #[serde(default)]
    pub variables: IndexMap<String, String>,
    #[serde(default)]
    pub metrics: Vec<MetricDefinition>,
}

impl ChartConfig {
    /// Creates an empty configuration for the given chart type.
    #[must_use]
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            variables: IndexMap::new(),
            metrics: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_variable(mut self, role: VariableRole, column: impl Into<String>) -> Self {
        self.variables.insert(role.name().to_owned(), column.into());
        self
    }

    #[must_use]
    pub fn with_metric(mut self, metric: MetricDefinition) -> Self {
        self.metrics.push(metric);
        self
    }

    /// Checks this configuration against the chart type's binding table.
    ///
    /// Every variable key must be a declared role name, and every role the
    /// chart type requires must be bound.
    pub fn validate(&self) -> ConfigResult<()> {
        for key in self.variables.keys() {
            key.parse::<VariableRole>()?;
        }

        for role in self.chart_type.required_roles() {
            if !self.variables.contains_key(role.name()) {
                return Err(ConfigError::MissingVariable {
                    chart_type: self.chart_type,
                    role: *role,
                });
            }
        }

        debug!(
            chart_type = %self.chart_type,
            variable_count = self.variables.len(),
            metric_count = self.metrics.len(),
            "validated chart config"
        );
        Ok(())
    }
}
