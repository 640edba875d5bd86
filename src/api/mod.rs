pub mod chart_config;
pub mod json_contract;

pub use chart_config::{ChartConfig, MetricDefinition};
pub use json_contract::{ChartConfigJsonContractV1, CHART_CONFIG_JSON_SCHEMA_V1};
