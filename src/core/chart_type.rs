use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Visualization format a widget definition renders as.
///
/// Several string forms contain a space (`"bar chart"`); persisted widget
/// definitions rely on those exact spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartType {
    #[serde(rename = "bar chart")]
    BarChart,
    #[serde(rename = "histogram")]
    Histogram,
    #[serde(rename = "line chart")]
    LineChart,
    #[serde(rename = "pie chart")]
    PieChart,
    #[serde(rename = "table")]
    Table,
}

impl ChartType {
    /// Every chart type, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::BarChart,
        Self::Histogram,
        Self::LineChart,
        Self::PieChart,
        Self::Table,
    ];

    /// Stable string form used in persisted widget definitions.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::BarChart => "bar chart",
            Self::Histogram => "histogram",
            Self::LineChart => "line chart",
            Self::PieChart => "pie chart",
            Self::Table => "table",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartType {
    type Err = ConfigError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|chart_type| chart_type.name() == input)
            .ok_or_else(|| ConfigError::UnknownChartType(input.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::ChartType;

    #[test]
    fn spaced_names_parse_back() {
        for chart_type in ChartType::ALL {
            assert_eq!(chart_type.name().parse::<ChartType>().ok(), Some(chart_type));
        }
    }
}
