use chart_config::{
    AggregationFunction, ChartConfig, ChartType, ConfigError, MetricDefinition, VariableRole,
};

#[test]
fn config_binding_all_required_roles_validates() {
    let config = ChartConfig::new(ChartType::BarChart)
        .with_variable(VariableRole::X, "country")
        .with_variable(VariableRole::Y, "revenue");

    config.validate().expect("complete bar chart config");
}

#[test]
fn config_with_extra_declared_roles_still_validates() {
    let config = ChartConfig::new(ChartType::Histogram)
        .with_variable(VariableRole::X, "age")
        .with_variable(VariableRole::GroupBy, "cohort")
        .with_metric(MetricDefinition::new(AggregationFunction::Count, "age"));

    config.validate().expect("histogram config with extras");
}

#[test]
fn missing_required_role_is_reported_by_name() {
    let config = ChartConfig::new(ChartType::LineChart).with_variable(VariableRole::X, "day");

    let err = config.validate().expect_err("missing y binding");
    match err {
        ConfigError::MissingVariable { chart_type, role } => {
            assert_eq!(chart_type, ChartType::LineChart);
            assert_eq!(role, VariableRole::Y);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unrecognized_variable_key_is_rejected() {
    let mut config = ChartConfig::new(ChartType::PieChart);
    config.variables.insert("x".to_owned(), "category".to_owned());
    config.variables.insert("theta".to_owned(), "share".to_owned());

    let err = config.validate().expect_err("unknown role key");
    match err {
        ConfigError::UnknownVariableRole(name) => assert_eq!(name, "theta"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn json_contract_round_trips() {
    let config = ChartConfig::new(ChartType::Table)
        .with_variable(VariableRole::X, "sku")
        .with_variable(VariableRole::Y, "units")
        .with_metric(MetricDefinition::new(AggregationFunction::Sum, "units"));

    let json = config.to_json_contract_v1_pretty().expect("serialize");
    let decoded = ChartConfig::from_json_compat_str(&json).expect("deserialize");
    assert_eq!(decoded, config);
}

#[test]
fn bare_config_payload_is_accepted() {
    let json = r#"{
        "chart_type": "pie chart",
        "variables": { "x": "category" }
    }"#;

    let config = ChartConfig::from_json_compat_str(json).expect("bare payload");
    assert_eq!(config.chart_type, ChartType::PieChart);
    assert_eq!(config.variables.get("x").map(String::as_str), Some("category"));
}

#[test]
fn foreign_schema_version_is_rejected() {
    let json = r#"{
        "schema_version": 99,
        "config": { "chart_type": "table", "variables": {} }
    }"#;

    assert!(ChartConfig::from_json_compat_str(json).is_err());
}

#[test]
fn unknown_chart_type_tag_fails_deserialization() {
    let json = r#"{ "chart_type": "scatter plot", "variables": {} }"#;
    assert!(ChartConfig::from_json_compat_str(json).is_err());
}
