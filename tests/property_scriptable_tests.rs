use std::rc::Rc;

use chart_options::config::AxisBuildTicksCallback;
use chart_options::core::{Color, TickItem};
use chart_options::engine::dataset_context;
use chart_options::native::NativeValue;
use chart_options::scriptable::{AxisItem, DatasetContext, OptionMode};
use chart_options::{Chart, Engine, HasLineOptions};
use proptest::prelude::*;

proptest! {
    #[test]
    fn constant_is_read_back_exactly(width in 0.0f64..1_000.0, repeats in 1usize..5) {
        let mut chart = Chart::new("line").expect("chart");
        let dataset = chart.add_dataset("a").expect("dataset");
        dataset.border_width().set_callback(|_: &DatasetContext| Some(1.0));
        for _ in 0..repeats {
            dataset.border_width().set_constant(width).expect("constant");
        }

        prop_assert_eq!(dataset.node().get("borderWidth"), NativeValue::Number(width));
        prop_assert_eq!(dataset.border_width().mode(), OptionMode::Constant);
        prop_assert!(dataset.border_width().callback().is_none());
    }

    #[test]
    fn callback_results_pass_through_checker(result in -1_000.0f64..1_000.0, index in 0usize..64) {
        let mut chart = Chart::new("line").expect("chart");
        let id = chart.id().clone();
        let dataset = chart.add_dataset("a").expect("dataset");
        dataset.border_width().set_callback(move |_: &DatasetContext| Some(result));
        let default = dataset.border_width().default_value();

        let resolved = dataset.border_width().resolve(
            &NativeValue::Undefined,
            &[dataset_context(&id, 0, Some(index))],
        );
        let expected = if result >= 0.0 { result } else { default };
        prop_assert_eq!(resolved, expected);
    }

    #[test]
    fn context_index_reaches_callback(index in 0usize..10_000) {
        let mut chart = Chart::new("line").expect("chart");
        let dataset = chart.add_dataset("a").expect("dataset");
        dataset
            .border_width()
            .set_callback(|context: &DatasetContext| Some(context.index as f64 * 2.0));

        let line = Engine::new(&chart).resolve_line(0, Some(index)).expect("line");
        prop_assert_eq!(line.border_width, index as f64 * 2.0);
    }

    #[test]
    fn color_constants_survive_the_native_tree(
        red in any::<u8>(),
        green in any::<u8>(),
        blue in any::<u8>(),
        alpha_step in 0u8..=20,
    ) {
        let color = Color::rgba(red, green, blue, f64::from(alpha_step) / 20.0);
        let mut chart = Chart::new("line").expect("chart");
        chart.add_dataset("a").expect("dataset");
        chart.line_element().border_color().set_constant(color).expect("color");

        let line = Engine::new(&chart).resolve_line(0, None).expect("line");
        prop_assert_eq!(line.border_color, color);
    }

    #[test]
    fn linear_labels_match_tick_count(values in prop::collection::vec(-1.0e6f64..1.0e6, 0..24)) {
        let mut chart = Chart::new("line").expect("chart");
        let axis = chart.add_axis("y", "linear").expect("axis");
        axis.set_linear_tick_callback(|_: &AxisItem, value: &f64, _: usize, _: &[TickItem]| {
            (*value >= 0.0).then(|| "positive".to_owned())
        })
        .expect("callback");
        let ticks: Vec<TickItem> = values.iter().copied().map(TickItem::new).collect();

        let resolved = Engine::new(&chart).build_ticks("y", ticks).expect("tick pass");
        prop_assert_eq!(resolved.len(), values.len());
        for (tick, value) in resolved.iter().zip(&values) {
            if *value >= 0.0 {
                prop_assert_eq!(tick.label(), "positive");
            } else {
                prop_assert_eq!(tick.label(), format!("{value:?}"));
            }
        }
    }
}

struct NoopHooks;

impl AxisBuildTicksCallback for NoopHooks {}

proptest! {
    #[test]
    fn toggling_build_hooks_leaves_no_residue(toggles in prop::collection::vec(any::<bool>(), 1..12)) {
        let mut chart = Chart::new("line").expect("chart");
        let axis = chart.add_axis("y", "linear").expect("axis");
        for install in &toggles {
            let callback: Option<Rc<dyn AxisBuildTicksCallback>> =
                install.then(|| Rc::new(NoopHooks) as Rc<dyn AxisBuildTicksCallback>);
            axis.set_build_ticks_callback(callback);
        }
        let last = toggles.last().copied().unwrap_or(false);
        prop_assert_eq!(axis.is_build_ticks_installed(), last);
        prop_assert_eq!(axis.node().has("beforeBuildTicks"), last);
        prop_assert_eq!(axis.node().has("afterBuildTicks"), last);
    }
}
