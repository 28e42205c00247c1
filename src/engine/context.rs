use crate::core::{ChartId, Key, TickItem};
use crate::native::{NativeNode, NativeValue};
use crate::scriptable::ContextKey;

/// Raw context object for one dataset element, as the engine hands it to option functions.
#[must_use]
pub fn dataset_context(
    chart_id: &ChartId,
    dataset_index: usize,
    data_index: Option<usize>,
) -> NativeValue {
    let context = NativeNode::new();
    context.set(ContextKey::Chart.value(), chart_id.as_str());
    context.set(ContextKey::DatasetIndex.value(), dataset_index);
    match data_index {
        Some(data_index) => {
            context.set(ContextKey::Type.value(), "data");
            context.set(ContextKey::Index.value(), data_index);
            context.set(ContextKey::DataIndex.value(), data_index);
        }
        None => {
            context.set(ContextKey::Type.value(), "dataset");
            context.set(ContextKey::Index.value(), dataset_index);
        }
    }
    context.set(ContextKey::Active.value(), false);
    context.set(ContextKey::Mode.value(), "default");
    NativeValue::Object(context)
}

/// Raw context object for one scale, or for one of its ticks when `tick` is given.
#[must_use]
pub fn scale_context(
    chart_id: &ChartId,
    axis_id: &str,
    index: usize,
    tick: Option<&TickItem>,
) -> NativeValue {
    let context = NativeNode::new();
    context.set(ContextKey::Chart.value(), chart_id.as_str());
    context.set(ContextKey::Scale.value(), axis_id);
    context.set(ContextKey::Index.value(), index);
    match tick {
        Some(tick) => {
            context.set(ContextKey::Type.value(), "tick");
            context.set(ContextKey::Tick.value(), tick.to_node());
        }
        None => context.set(ContextKey::Type.value(), "scale"),
    }
    NativeValue::Object(context)
}

#[cfg(test)]
mod tests {
    use super::{dataset_context, scale_context};
    use crate::core::{ChartId, TickItem};

    #[test]
    fn dataset_context_carries_element_indexes() {
        let id = ChartId::next();
        let context = dataset_context(&id, 2, Some(5));
        let node = context.as_object().expect("object context");
        assert_eq!(node.get_string("chart").as_deref(), Some(id.as_str()));
        assert_eq!(node.get_string("type").as_deref(), Some("data"));
        assert_eq!(node.get("datasetIndex").as_index(), Some(2));
        assert_eq!(node.get("index").as_index(), Some(5));
    }

    #[test]
    fn tick_context_embeds_tick_object() {
        let id = ChartId::next();
        let context = scale_context(&id, "y", 1, Some(&TickItem::new(20.0)));
        let node = context.as_object().expect("object context");
        assert_eq!(node.get_string("scale").as_deref(), Some("y"));
        assert_eq!(node.get_string("type").as_deref(), Some("tick"));
        assert_eq!(
            node.child_if_present("tick").and_then(|tick| tick.get_f64("value")),
            Some(20.0)
        );
    }
}
