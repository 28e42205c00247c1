use chart_options::config::{AxisType, AxisTypeRegistry};
use chart_options::core::{AxisKind, ScaleDataType, ScaleValue};
use chart_options::engine::scale_context;
use chart_options::native::NativeValue;
use chart_options::scriptable::ScaleContext;
use chart_options::{Chart, ChartError, Engine, HasBeginAtZero, HasMinMax};
use chrono::{TimeZone, Utc};

#[test]
fn builtin_registry_knows_standard_axis_types() {
    let registry = AxisTypeRegistry::builtin();
    for name in ["linear", "logarithmic", "category", "time", "timeseries", "radialLinear"] {
        assert!(registry.contains(name), "missing builtin axis type {name}");
    }
    assert_eq!(
        registry.lookup("time").expect("time axis").data_type,
        ScaleDataType::Date
    );
}

#[test]
fn custom_axis_types_are_added_once() {
    let mut registry = AxisTypeRegistry::builtin();
    registry
        .register(AxisType::new("log2", AxisKind::Cartesian, ScaleDataType::Number))
        .expect("new axis type");
    let err = registry
        .register(AxisType::new("log2", AxisKind::Cartesian, ScaleDataType::Text))
        .expect_err("duplicate name");
    assert!(matches!(err, ChartError::DuplicateAxisType(name) if name == "log2"));
    assert_eq!(
        registry.lookup("log2").expect("registered").data_type,
        ScaleDataType::Number
    );
}

#[test]
fn injected_registry_decides_which_axes_exist() {
    let mut registry = AxisTypeRegistry::empty();
    registry
        .register(AxisType::new("ordinal", AxisKind::Cartesian, ScaleDataType::Text))
        .expect("register");
    let mut chart = Chart::with_registry("bar", registry).expect("chart");

    let err = chart
        .add_axis("y", "linear")
        .map(|_| ())
        .expect_err("linear is not registered");
    assert!(matches!(err, ChartError::UnknownAxisType(_)));

    let axis = chart.add_axis("x", "ordinal").expect("ordinal axis");
    assert_eq!(axis.node().get_string("type").as_deref(), Some("ordinal"));
}

#[test]
fn invalid_axis_id_is_rejected() {
    let mut chart = Chart::new("line").expect("chart");
    let err = chart
        .add_axis("x.y", "linear")
        .map(|_| ())
        .expect_err("dotted id");
    assert!(matches!(err, ChartError::InvalidKey(_)));
}

#[test]
fn min_and_max_are_stored_under_their_own_keys() {
    let mut chart = Chart::new("line").expect("chart");
    let axis = chart.add_axis("y", "linear").expect("axis");
    axis.set_min(-5.0).expect("min");
    axis.set_max(25.0).expect("max");

    assert_eq!(axis.node().get("min"), NativeValue::Number(-5.0));
    assert_eq!(axis.node().get("max"), NativeValue::Number(25.0));
    assert_eq!(axis.min(), Some(ScaleValue::Number(-5.0)));
    assert_eq!(axis.max(), Some(ScaleValue::Number(25.0)));
}

#[test]
fn bound_of_wrong_kind_is_rejected() {
    let mut chart = Chart::new("line").expect("chart");
    let axis = chart.add_axis("y", "linear").expect("axis");
    let err = axis.set_min("low").expect_err("text bound on numeric axis");
    assert!(matches!(err, ChartError::InvalidValue { key: "min", .. }));
    assert!(!axis.node().has("min"));
}

#[test]
fn bound_callbacks_are_coerced_by_axis_data_type() {
    let mut chart = Chart::new("line").expect("chart");
    let axis = chart.add_axis("y", "linear").expect("axis");
    axis.set_max_callback(|context: &ScaleContext| Some(ScaleValue::Number(context.index as f64 + 100.0)));
    axis.set_min_callback(|_: &ScaleContext| Some(ScaleValue::Text("nope".to_owned())));

    let bounds = Engine::new(&chart).resolve_bounds("y").expect("bounds");
    assert_eq!(bounds.max, Some(ScaleValue::Number(100.0)));
    assert_eq!(bounds.min, None);
    assert_eq!(bounds.suggested_min, None);
}

#[test]
fn time_axis_bounds_round_trip_as_dates() {
    let mut chart = Chart::new("line").expect("chart");
    let axis = chart.add_axis("x", "time").expect("axis");
    let start = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid date");
    axis.set_suggested_min(start).expect("suggested min");
    assert_eq!(
        axis.node().get("suggestedMin"),
        NativeValue::Number(start.timestamp_millis() as f64)
    );

    let bounds = Engine::new(&chart).resolve_bounds("x").expect("bounds");
    assert_eq!(bounds.suggested_min, Some(ScaleValue::Date(start)));
    assert!(!bounds.begin_at_zero);
}

#[test]
fn time_axis_bounds_read_back_as_dates() {
    let mut chart = Chart::new("line").expect("chart");
    let id = chart.id().clone();
    let axis = chart.add_axis("x", "time").expect("axis");
    let start = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid date");
    let end = Utc
        .with_ymd_and_hms(2024, 6, 30, 12, 0, 0)
        .single()
        .expect("valid date");
    axis.set_min(start).expect("min");
    axis.set_max_callback(move |_: &ScaleContext| Some(ScaleValue::Date(end)));

    assert_eq!(axis.min(), Some(ScaleValue::Date(start)));
    assert_eq!(
        axis.min_max().min().resolve(&NativeValue::Undefined, &[]),
        Some(ScaleValue::Date(start))
    );
    let context = [scale_context(&id, "x", 0, None)];
    assert_eq!(
        axis.min_max().max().resolve(&NativeValue::Undefined, &context),
        Some(ScaleValue::Date(end))
    );
    assert_eq!(axis.max(), None);
    assert_eq!(
        axis.node().get("min"),
        NativeValue::Number(start.timestamp_millis() as f64)
    );
}

#[test]
fn begin_at_zero_only_on_numeric_axes() {
    let mut chart = Chart::new("bar").expect("chart");
    chart.add_axis("x", "category").expect("category axis");
    chart.add_axis("y", "linear").expect("linear axis");

    let category = chart.axis("x").expect("x");
    assert!(matches!(
        category.set_begin_at_zero(true),
        Err(ChartError::InvalidData(_))
    ));

    let linear = chart.axis("y").expect("y");
    assert!(!linear.is_begin_at_zero());
    linear.set_begin_at_zero(true).expect("numeric axis");
    assert!(linear.is_begin_at_zero());
    assert!(Engine::new(&chart).resolve_bounds("y").expect("bounds").begin_at_zero);
}

#[test]
fn begin_at_zero_callback_runs_through_proxy() {
    let mut chart = Chart::new("line").expect("chart");
    let axis = chart.add_axis("r", "radialLinear").expect("axis");
    axis.set_begin_at_zero_callback(|context: &ScaleContext| Some(context.axis_id == "r"))
        .expect("numeric axis");
    assert!(axis.node().get("beginAtZero").as_function().is_some());
    assert!(Engine::new(&chart).resolve_bounds("r").expect("bounds").begin_at_zero);
}

#[test]
fn radial_axes_show_label_backdrop_by_default() {
    let mut chart = Chart::new("radar").expect("chart");
    chart.add_axis("r", "radialLinear").expect("radial");
    chart.add_axis("y", "linear").expect("linear");

    let radial = chart.axis("r").expect("r");
    let linear = chart.axis("y").expect("y");
    assert!(radial.ticks().show_label_backdrop().value_or_default());
    assert!(!linear.ticks().show_label_backdrop().value_or_default());
}

#[test]
fn grid_widths_reject_negative_constants() {
    let mut chart = Chart::new("line").expect("chart");
    let axis = chart.add_axis("y", "linear").expect("axis");
    assert!(axis.grid().line_width().set_constant(-1.0).is_err());
    axis.grid().line_width().set_constant(2.5).expect("width");
    assert_eq!(axis.grid().line_width().value(), Some(2.5));
}
