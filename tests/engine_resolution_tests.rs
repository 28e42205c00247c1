use approx::assert_relative_eq;
use chart_options::config::ChartDefaults;
use chart_options::core::{Color, Easing};
use chart_options::scriptable::DatasetContext;
use chart_options::{AxisTypeRegistry, Chart, ChartError, Engine, HasLineOptions};

#[test]
fn animation_defaults_apply_when_unset() {
    let chart = Chart::new("line").expect("chart");
    let animation = Engine::new(&chart)
        .resolve_animation(0, Some(0))
        .expect("animation");
    assert_relative_eq!(animation.duration, 1000.0);
    assert_relative_eq!(animation.delay, 0.0);
    assert_eq!(animation.easing, Easing::EaseOutQuart);
    assert!(!animation.looping);
}

#[test]
fn staggered_delay_callback() {
    let chart = Chart::new("line").expect("chart");
    chart
        .animation()
        .delay()
        .set_callback(|context: &DatasetContext| {
            context
                .data_index
                .map(|index| index as f64 * 50.0 + context.dataset_index.unwrap_or(0) as f64)
        });
    chart
        .animation()
        .easing()
        .set_constant(Easing::EaseInOutBounce)
        .expect("easing");

    let engine = Engine::new(&chart);
    let element = engine.resolve_animation(1, Some(4)).expect("animation");
    assert_relative_eq!(element.delay, 201.0);
    assert_eq!(element.easing, Easing::EaseInOutBounce);

    // dataset-level invocation has no data index, so the callback defers to the default
    let dataset = engine.resolve_animation(1, None).expect("animation");
    assert_relative_eq!(dataset.delay, 0.0);
}

#[test]
fn negative_durations_fall_back_to_default() {
    let chart = Chart::new("line").expect("chart");
    assert!(chart.animation().duration().set_constant(-10.0).is_err());
    chart
        .animation()
        .duration()
        .set_callback(|_: &DatasetContext| Some(-10.0));

    let animation = Engine::new(&chart)
        .resolve_animation(0, Some(0))
        .expect("animation");
    assert_relative_eq!(animation.duration, 1000.0);
}

#[test]
fn dataset_line_options_override_chart_element() {
    let mut chart = Chart::new("line").expect("chart");
    chart
        .line_element()
        .border_width()
        .set_constant(1.0)
        .expect("element width");
    chart
        .line_element()
        .border_color()
        .set_css("#336699")
        .expect("element color");
    chart.add_dataset("sales").expect("dataset 0");
    let dataset = chart.add_dataset("costs").expect("dataset 1");
    dataset
        .border_width()
        .set_callback(|context: &DatasetContext| context.data_index.map(|index| index as f64 + 2.0));

    let engine = Engine::new(&chart);
    let first = engine.resolve_line(0, Some(3)).expect("line");
    assert_relative_eq!(first.border_width, 1.0);
    assert_eq!(first.border_color, Color::rgb(0x33, 0x66, 0x99));

    let second = engine.resolve_line(1, Some(3)).expect("line");
    assert_relative_eq!(second.border_width, 5.0);
    assert_eq!(second.border_color, Color::rgb(0x33, 0x66, 0x99));
    assert_eq!(second.background_color, chart.defaults().line.background_color);
}

#[test]
fn tension_outside_unit_range_is_rejected() {
    let mut chart = Chart::new("line").expect("chart");
    let dataset = chart.add_dataset("a").expect("dataset");
    assert!(dataset.tension().set_constant(1.5).is_err());
    dataset.tension().set_callback(|_: &DatasetContext| Some(2.0));

    let line = Engine::new(&chart).resolve_line(0, Some(0)).expect("line");
    assert_relative_eq!(line.tension, 0.0);
}

#[test]
fn missing_dataset_is_reported() {
    let chart = Chart::new("line").expect("chart");
    let err = Engine::new(&chart)
        .resolve_line(3, None)
        .expect_err("no datasets");
    assert!(matches!(err, ChartError::MissingNode(_)));
}

#[test]
fn host_defaults_feed_every_fallback() {
    let defaults = ChartDefaults::from_json_str(
        r#"{ "animation": { "duration": 250, "loop": true }, "line": { "borderWidth": 7 } }"#,
    )
    .expect("defaults json");
    let mut chart =
        Chart::with_config("line", AxisTypeRegistry::builtin(), defaults).expect("chart");
    chart.add_dataset("a").expect("dataset");

    let engine = Engine::new(&chart);
    let animation = engine.resolve_animation(0, Some(0)).expect("animation");
    assert_relative_eq!(animation.duration, 250.0);
    assert!(animation.looping);
    assert_relative_eq!(
        engine.resolve_line(0, Some(0)).expect("line").border_width,
        7.0
    );
    assert_relative_eq!(chart.animation().duration().default_value(), 250.0);
}
