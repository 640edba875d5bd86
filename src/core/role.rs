use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const VARIABLE_NAME_BUCKETS: &str = "buckets";
pub const VARIABLE_NAME_GROUP_BY: &str = "group_by";
pub const VARIABLE_NAME_LIMIT: &str = "limit";
pub const VARIABLE_NAME_METRICS: &str = "metrics";
pub const VARIABLE_NAME_X: &str = "x";
pub const VARIABLE_NAME_Y: &str = "y";

/// Semantic slot a chart variable can occupy in a widget definition.
///
/// Downstream logic binds each role to an actual data column or computed
/// series. The string forms are stable and shared with persisted widget
/// definitions, so they must not drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableRole {
    Buckets,
    GroupBy,
    Limit,
    Metrics,
    X,
    Y,
}

impl VariableRole {
    /// Every role, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Buckets,
        Self::GroupBy,
        Self::Limit,
        Self::Metrics,
        Self::X,
        Self::Y,
    ];

    /// Stable string form used in persisted widget definitions.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Buckets => VARIABLE_NAME_BUCKETS,
            Self::GroupBy => VARIABLE_NAME_GROUP_BY,
            Self::Limit => VARIABLE_NAME_LIMIT,
            Self::Metrics => VARIABLE_NAME_METRICS,
            Self::X => VARIABLE_NAME_X,
            Self::Y => VARIABLE_NAME_Y,
        }
    }
}

impl fmt::Display for VariableRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VariableRole {
    type Err = ConfigError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.name() == input)
            .ok_or_else(|| ConfigError::UnknownVariableRole(input.to_owned()))
    }
}
