//! Fixed binding table from chart type to the variable roles it requires.
//!
//! The table is total over [`ChartType`] and the role order inside each
//! entry is positional: consumers bind data columns to roles by position.

use indexmap::IndexMap;

use crate::core::{ChartType, VariableRole};
use crate::error::ConfigResult;

impl ChartType {
    /// Ordered variable roles this chart type requires.
    #[must_use]
    pub fn required_roles(self) -> &'static [VariableRole] {
        match self {
            Self::BarChart => &[VariableRole::X, VariableRole::Y],
            Self::Histogram => &[VariableRole::X],
            Self::LineChart => &[VariableRole::X, VariableRole::Y],
            Self::PieChart => &[VariableRole::X],
            Self::Table => &[VariableRole::X, VariableRole::Y],
        }
    }
}

/// Looks up required roles from a chart type's string form.
///
/// Unknown names surface as [`ConfigError::UnknownChartType`] rather than
/// any silent default.
///
/// [`ConfigError::UnknownChartType`]: crate::error::ConfigError::UnknownChartType
pub fn required_roles_for_name(name: &str) -> ConfigResult<&'static [VariableRole]> {
    Ok(name.parse::<ChartType>()?.required_roles())
}

/// Full binding table in chart-type declaration order.
#[must_use]
pub fn required_roles_registry() -> IndexMap<ChartType, &'static [VariableRole]> {
    ChartType::ALL
        .into_iter()
        .map(|chart_type| (chart_type, chart_type.required_roles()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{required_roles_for_name, required_roles_registry};
    use crate::core::{ChartType, VariableRole};

    #[test]
    fn binding_table_is_total_and_non_empty() {
        for chart_type in ChartType::ALL {
            assert!(!chart_type.required_roles().is_empty());
        }
    }

    #[test]
    fn bar_chart_binds_x_then_y() {
        assert_eq!(
            ChartType::BarChart.required_roles(),
            &[VariableRole::X, VariableRole::Y]
        );
    }

    #[test]
    fn registry_preserves_declaration_order() {
        let registry = required_roles_registry();
        let keys: Vec<ChartType> = registry.keys().copied().collect();
        assert_eq!(keys, ChartType::ALL);
    }

    #[test]
    fn lookup_by_unknown_name_fails() {
        assert!(required_roles_for_name("scatter plot").is_err());
    }
}
