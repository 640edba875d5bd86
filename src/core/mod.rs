pub mod aggregation;
pub mod bindings;
pub mod chart_type;
pub mod role;

pub use aggregation::AggregationFunction;
pub use bindings::{required_roles_for_name, required_roles_registry};
pub use chart_type::ChartType;
pub use role::{
    VariableRole, VARIABLE_NAME_BUCKETS, VARIABLE_NAME_GROUP_BY, VARIABLE_NAME_LIMIT,
    VARIABLE_NAME_METRICS, VARIABLE_NAME_X, VARIABLE_NAME_Y,
};
