use chart_options::core::ScaleValue;
use chart_options::native::{NativeNode, NativeValue, OPTIONS_JSON_SCHEMA_V1, OptionsJsonContractV1};
use chart_options::scriptable::{DatasetContext, ScaleContext};
use chart_options::{Chart, Engine, HasMinMax};
use chrono::{TimeZone, Utc};
use serde_json::json;

#[test]
fn export_keeps_constants_and_drops_callbacks() {
    let mut chart = Chart::new("line").expect("chart");
    let axis = chart.add_axis("y", "linear").expect("axis");
    axis.set_min(0.0).expect("min");
    axis.set_max_callback(|_: &ScaleContext| None);
    axis.grid().color().set_css("rgba(0, 0, 0, 0.5)").expect("grid color");
    chart
        .animation()
        .duration()
        .set_callback(|_: &DatasetContext| Some(10.0));

    let contract = chart.to_json_contract().expect("contract");
    assert_eq!(contract.schema_version, OPTIONS_JSON_SCHEMA_V1);
    assert_eq!(contract.chart_type, "line");

    let scale = &contract.config["options"]["scales"]["y"];
    assert_eq!(scale["type"], json!("linear"));
    assert_eq!(scale["min"], json!(0.0));
    assert!(scale.get("max").is_none());
    assert_eq!(scale["grid"]["color"], json!("rgba(0,0,0,0.5)"));
    assert!(contract.config["options"]["animation"].get("duration").is_none());
}

#[test]
fn contract_round_trips_through_text() {
    let chart = Chart::new("bar").expect("chart");
    let text = chart.to_json_pretty().expect("json text");
    let parsed = OptionsJsonContractV1::from_json_str(&text).expect("parse contract");
    assert_eq!(parsed, chart.to_json_contract().expect("contract"));
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let text = r#"{ "schema_version": 9, "chart_type": "line", "config": {} }"#;
    assert!(OptionsJsonContractV1::from_json_str(text).is_err());
}

#[test]
fn native_tree_loads_from_json() {
    let node = NativeNode::from_json_str(
        r#"{ "ticks": { "color": "red", "display": false }, "labels": ["a", "b"], "min": null }"#,
    )
    .expect("native tree");
    let ticks = node.child_if_present("ticks").expect("ticks");
    assert_eq!(ticks.get_string("color").as_deref(), Some("red"));
    assert_eq!(ticks.get_bool("display"), Some(false));
    assert_eq!(
        node.get("labels"),
        NativeValue::Array(vec![
            NativeValue::String("a".to_owned()),
            NativeValue::String("b".to_owned()),
        ])
    );
    assert_eq!(node.get("min"), NativeValue::Null);
}

#[test]
fn resolved_date_bounds_serialize_as_rfc3339() {
    let mut chart = Chart::new("line").expect("chart");
    let axis = chart.add_axis("x", "time").expect("axis");
    let start = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid date");
    axis.set_min(start).expect("min");

    let bounds = Engine::new(&chart).resolve_bounds("x").expect("bounds");
    let value = serde_json::to_value(&bounds).expect("serialize bounds");
    assert_eq!(value["min"], json!({ "Date": "2024-01-01T00:00:00Z" }));
    assert_eq!(value["max"], serde_json::Value::Null);
    assert_eq!(value["beginAtZero"], json!(false));

    let min: ScaleValue = serde_json::from_value(value["min"].clone()).expect("deserialize");
    assert_eq!(min, ScaleValue::Date(start));
}
