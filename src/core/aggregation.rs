use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Statistical reduction applied to a data series when building chart values.
///
/// Purely a tag; execution happens in the data layer that consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationFunction {
    Average,
    Count,
    CountDistinct,
    Max,
    Median,
    Min,
    Mode,
    Sum,
}

impl AggregationFunction {
    /// Every aggregation function, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Average,
        Self::Count,
        Self::CountDistinct,
        Self::Max,
        Self::Median,
        Self::Min,
        Self::Mode,
        Self::Sum,
    ];

    /// Stable string form used in persisted widget definitions.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Average => "average",
            Self::Count => "count",
            Self::CountDistinct => "count_distinct",
            Self::Max => "max",
            Self::Median => "median",
            Self::Min => "min",
            Self::Mode => "mode",
            Self::Sum => "sum",
        }
    }
}

impl fmt::Display for AggregationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AggregationFunction {
    type Err = ConfigError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|function| function.name() == input)
            .ok_or_else(|| ConfigError::UnknownAggregationFunction(input.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::AggregationFunction;

    #[test]
    fn count_distinct_uses_snake_case_name() {
        assert_eq!(AggregationFunction::CountDistinct.name(), "count_distinct");
        assert_eq!(
            "count_distinct".parse::<AggregationFunction>().ok(),
            Some(AggregationFunction::CountDistinct)
        );
    }
}
