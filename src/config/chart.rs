use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::debug;

use crate::core::{ChartId, ChartRef, ChartShared, Key, check_key};
use crate::error::{ChartError, ChartResult};
use crate::native::{NativeNode, NativeValue, OPTIONS_JSON_SCHEMA_V1, OptionsJsonContractV1};

use super::animation::Animation;
use super::axis::Axis;
use super::axis_types::AxisTypeRegistry;
use super::capabilities::HasLineOptions;
use super::defaults::ChartDefaults;
use super::line::LineOptions;

#[derive(Debug, Clone, Copy)]
enum ChartProperty {
    Type,
    Data,
    Datasets,
    Label,
    Options,
    Animation,
    Scales,
    Elements,
    Line,
}

impl Key for ChartProperty {
    fn value(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Data => "data",
            Self::Datasets => "datasets",
            Self::Label => "label",
            Self::Options => "options",
            Self::Animation => "animation",
            Self::Scales => "scales",
            Self::Elements => "elements",
            Self::Line => "line",
        }
    }
}

/// Chart-wide line element options (`options.elements.line`).
#[derive(Debug)]
pub struct LineElement {
    options: LineOptions,
}

impl HasLineOptions for LineElement {
    fn line_options(&self) -> &LineOptions {
        &self.options
    }
}

/// One dataset entry of `data.datasets`, carrying its own line styling.
pub struct Dataset {
    index: usize,
    node: NativeNode,
    options: LineOptions,
}

impl Dataset {
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn node(&self) -> &NativeNode {
        &self.node
    }

    #[must_use]
    pub fn label(&self) -> Option<String> {
        self.node.get_string(ChartProperty::Label.value())
    }

    pub fn set_label(&self, label: &str) {
        self.node.set(ChartProperty::Label.value(), label);
    }
}

impl HasLineOptions for Dataset {
    fn line_options(&self) -> &LineOptions {
        &self.options
    }
}

impl fmt::Debug for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dataset")
            .field("index", &self.index)
            .field("label", &self.label())
            .field("options", &self.options)
            .finish()
    }
}

/// Owner of one native option tree and every configuration node bound to it.
///
/// Proxies only hold a weak reference to the chart; once the chart is
/// dropped they keep answering with defaults.
pub struct Chart {
    shared: Rc<ChartShared>,
    root: NativeNode,
    registry: AxisTypeRegistry,
    defaults: Rc<ChartDefaults>,
    animation: Animation,
    line: LineElement,
    axes: IndexMap<String, Axis>,
    datasets: Vec<Dataset>,
}

impl Chart {
    /// Chart using the built-in axis types and default option values.
    pub fn new(chart_type: &str) -> ChartResult<Self> {
        Self::with_registry(chart_type, AxisTypeRegistry::builtin())
    }

    pub fn with_registry(chart_type: &str, registry: AxisTypeRegistry) -> ChartResult<Self> {
        Self::with_config(chart_type, registry, ChartDefaults::default())
    }

    pub fn with_config(
        chart_type: &str,
        registry: AxisTypeRegistry,
        defaults: ChartDefaults,
    ) -> ChartResult<Self> {
        let chart_type = check_key(chart_type)?;
        let shared = Rc::new(ChartShared {
            id: ChartId::next(),
            chart_type: chart_type.to_owned(),
        });
        let chart = ChartRef::new(&shared);
        let defaults = Rc::new(defaults);

        let root = NativeNode::new();
        root.set(ChartProperty::Type.value(), chart_type);
        root.child(ChartProperty::Data.value())
            .set(ChartProperty::Datasets.value(), NativeValue::Array(Vec::new()));
        let options = root.child(ChartProperty::Options.value());
        options.child(ChartProperty::Scales.value());
        let animation = Animation::new(
            options.child(ChartProperty::Animation.value()),
            &chart,
            &defaults,
        );
        let line = LineElement {
            options: LineOptions::new(
                options
                    .child(ChartProperty::Elements.value())
                    .child(ChartProperty::Line.value()),
                &chart,
                &defaults,
            ),
        };

        debug!(chart = %shared.id, chart_type, "create chart");
        Ok(Self {
            shared,
            root,
            registry,
            defaults,
            animation,
            line,
            axes: IndexMap::new(),
            datasets: Vec::new(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &ChartId {
        &self.shared.id
    }

    #[must_use]
    pub fn chart_type(&self) -> &str {
        &self.shared.chart_type
    }

    /// Weak reference handed to proxies and contexts.
    #[must_use]
    pub fn chart_ref(&self) -> ChartRef {
        ChartRef::new(&self.shared)
    }

    /// Root of the native option tree the engine reads.
    #[must_use]
    pub fn native(&self) -> &NativeNode {
        &self.root
    }

    #[must_use]
    pub fn registry(&self) -> &AxisTypeRegistry {
        &self.registry
    }

    #[must_use]
    pub fn defaults(&self) -> &ChartDefaults {
        &self.defaults
    }

    #[must_use]
    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    #[must_use]
    pub fn line_element(&self) -> &LineElement {
        &self.line
    }

    /// Adds an axis of a registered type under `options.scales.<id>`.
    pub fn add_axis(&mut self, id: &str, type_name: &str) -> ChartResult<&Axis> {
        let id = check_key(id)?;
        if self.axes.contains_key(id) {
            return Err(ChartError::InvalidKey(format!("axis `{id}` already exists")));
        }
        let axis_type = self.registry.lookup(type_name)?.clone();
        let node = self.options_node(ChartProperty::Scales)?.child(id);
        let axis = Axis::new(node, id, axis_type, &self.chart_ref(), &self.defaults);
        Ok(self.axes.entry(id.to_owned()).or_insert(axis))
    }

    #[must_use]
    pub fn axis(&self, id: &str) -> Option<&Axis> {
        self.axes.get(id)
    }

    pub fn require_axis(&self, id: &str) -> ChartResult<&Axis> {
        self.axis(id)
            .ok_or_else(|| ChartError::MissingNode(format!("options.scales.{id}")))
    }

    pub fn axes(&self) -> impl Iterator<Item = &Axis> {
        self.axes.values()
    }

    /// Appends a dataset entry to `data.datasets`.
    pub fn add_dataset(&mut self, label: &str) -> ChartResult<&Dataset> {
        let data = self
            .root
            .child_if_present(ChartProperty::Data.value())
            .ok_or_else(|| ChartError::MissingNode(ChartProperty::Data.value().to_owned()))?;
        let node = NativeNode::new();
        node.set(ChartProperty::Label.value(), label);
        // push reports the new length, like the engine's arrays
        let index = data
            .push(ChartProperty::Datasets.value(), node.clone())
            .saturating_sub(1);
        debug!(chart = %self.shared.id, dataset = index, "add dataset");
        let options = LineOptions::new(node.clone(), &self.chart_ref(), &self.defaults);
        self.datasets.push(Dataset {
            index,
            node,
            options,
        });
        self.datasets
            .last()
            .ok_or_else(|| ChartError::MissingNode(ChartProperty::Datasets.value().to_owned()))
    }

    #[must_use]
    pub fn dataset(&self, index: usize) -> Option<&Dataset> {
        self.datasets.get(index)
    }

    #[must_use]
    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    /// Versioned JSON snapshot of the option tree. Callbacks have no JSON form and are left out.
    pub fn to_json_contract(&self) -> ChartResult<OptionsJsonContractV1> {
        Ok(OptionsJsonContractV1 {
            schema_version: OPTIONS_JSON_SCHEMA_V1,
            chart_type: self.shared.chart_type.clone(),
            config: self.root.to_json()?,
        })
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        self.to_json_contract()?.to_json_pretty()
    }

    fn options_node(&self, property: ChartProperty) -> ChartResult<NativeNode> {
        self.root
            .child_if_present(ChartProperty::Options.value())
            .and_then(|options| options.child_if_present(property.value()))
            .ok_or_else(|| ChartError::MissingNode(format!("options.{}", property.value())))
    }
}

impl fmt::Debug for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chart")
            .field("id", &self.shared.id)
            .field("chart_type", &self.shared.chart_type)
            .field("axes", &self.axes.keys().collect::<Vec<_>>())
            .field("datasets", &self.datasets.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Chart;
    use crate::error::ChartError;
    use crate::native::NativeValue;

    #[test]
    fn new_chart_lays_out_native_tree() {
        let chart = Chart::new("line").expect("chart");
        let root = chart.native();
        assert_eq!(root.get_string("type").as_deref(), Some("line"));
        let options = root.child_if_present("options").expect("options node");
        assert!(options.child_if_present("scales").is_some());
        assert!(options.child_if_present("animation").is_some());
        assert!(matches!(
            root.child("data").get("datasets"),
            NativeValue::Array(ref datasets) if datasets.is_empty()
        ));
    }

    #[test]
    fn duplicate_axis_id_is_rejected() {
        let mut chart = Chart::new("bar").expect("chart");
        chart.add_axis("y", "linear").expect("first axis");
        assert!(matches!(
            chart.add_axis("y", "category"),
            Err(ChartError::InvalidKey(_))
        ));
    }

    #[test]
    fn datasets_are_appended_in_order() {
        let mut chart = Chart::new("line").expect("chart");
        chart.add_dataset("first").expect("dataset");
        let second = chart.add_dataset("second").expect("dataset");
        assert_eq!(second.index(), 1);
        assert_eq!(chart.datasets().len(), 2);
        assert_eq!(chart.dataset(0).and_then(|d| d.label()).as_deref(), Some("first"));
    }
}
