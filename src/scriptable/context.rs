use serde::{Deserialize, Serialize};

use crate::core::{ChartRef, Key, ScaleDataType, TickItem};
use crate::native::{NativeNode, NativeValue};

/// Property names of the raw context objects the engine passes to proxies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextKey {
    Chart,
    Type,
    Index,
    DatasetIndex,
    DataIndex,
    Scale,
    Tick,
    Active,
    Mode,
}

impl Key for ContextKey {
    fn value(self) -> &'static str {
        match self {
            Self::Chart => "chart",
            Self::Type => "type",
            Self::Index => "index",
            Self::DatasetIndex => "datasetIndex",
            Self::DataIndex => "dataIndex",
            Self::Scale => "scale",
            Self::Tick => "tick",
            Self::Active => "active",
            Self::Mode => "mode",
        }
    }
}

/// Typed view over the raw arguments of one proxy invocation.
///
/// Each option category has its own adapter; the proxy builds a fresh
/// context per call and drops it afterwards.
pub trait CallbackContext: Sized + 'static {
    /// What the owning configuration node hands to its proxies.
    type Owner: Clone + 'static;

    fn from_native(owner: &Self::Owner, this: &NativeValue, args: &[NativeValue]) -> Self;

    /// `false` when the owner reference embedded in the invocation is stale or foreign.
    fn is_consistent(&self) -> bool;
}

fn raw_context(args: &[NativeValue]) -> NativeNode {
    args.first()
        .and_then(NativeValue::as_object)
        .cloned()
        .unwrap_or_default()
}

/// Context for options resolved per dataset element (animations, line elements).
#[derive(Debug, Clone)]
pub struct DatasetContext {
    pub chart: ChartRef,
    pub index: usize,
    pub dataset_index: Option<usize>,
    pub data_index: Option<usize>,
    pub active: bool,
    pub mode: Option<String>,
    pub context_type: Option<String>,
    consistent: bool,
    raw: NativeNode,
}

impl DatasetContext {
    #[must_use]
    pub fn raw(&self) -> &NativeNode {
        &self.raw
    }
}

impl CallbackContext for DatasetContext {
    type Owner = ChartRef;

    fn from_native(owner: &ChartRef, _this: &NativeValue, args: &[NativeValue]) -> Self {
        let raw = raw_context(args);
        let consistent = owner.matches(raw.get_string(ContextKey::Chart.value()).as_deref());
        Self {
            chart: owner.clone(),
            index: raw.get(ContextKey::Index.value()).as_index().unwrap_or(0),
            dataset_index: raw.get(ContextKey::DatasetIndex.value()).as_index(),
            data_index: raw.get(ContextKey::DataIndex.value()).as_index(),
            active: raw.get_bool(ContextKey::Active.value()).unwrap_or(false),
            mode: raw.get_string(ContextKey::Mode.value()),
            context_type: raw.get_string(ContextKey::Type.value()),
            consistent,
            raw,
        }
    }

    fn is_consistent(&self) -> bool {
        self.consistent
    }
}

/// Identity of the axis that owns a set of scale options.
#[derive(Debug, Clone)]
pub struct ScaleOwner {
    pub chart: ChartRef,
    pub axis_id: String,
    pub data_type: ScaleDataType,
}

impl ScaleOwner {
    /// `true` when the chart is alive and both raw ids name this axis.
    #[must_use]
    pub fn matches(&self, chart_id: Option<&str>, axis_id: Option<&str>) -> bool {
        self.chart.matches(chart_id) && axis_id == Some(self.axis_id.as_str())
    }
}

/// Context for options resolved per scale or per tick.
#[derive(Debug, Clone)]
pub struct ScaleContext {
    pub chart: ChartRef,
    pub axis_id: String,
    pub index: usize,
    pub tick: Option<TickItem>,
    consistent: bool,
    raw: NativeNode,
}

impl ScaleContext {
    #[must_use]
    pub fn raw(&self) -> &NativeNode {
        &self.raw
    }
}

impl CallbackContext for ScaleContext {
    type Owner = ScaleOwner;

    fn from_native(owner: &ScaleOwner, _this: &NativeValue, args: &[NativeValue]) -> Self {
        let raw = raw_context(args);
        let consistent = owner.matches(
            raw.get_string(ContextKey::Chart.value()).as_deref(),
            raw.get_string(ContextKey::Scale.value()).as_deref(),
        );
        Self {
            chart: owner.chart.clone(),
            axis_id: owner.axis_id.clone(),
            index: raw.get(ContextKey::Index.value()).as_index().unwrap_or(0),
            tick: TickItem::from_native(&raw.get(ContextKey::Tick.value())),
            consistent,
            raw,
        }
    }

    fn is_consistent(&self) -> bool {
        self.consistent
    }
}

/// Native view of a scale, as the engine passes it to tick and build-ticks hooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisItem {
    pub id: String,
    pub axis_type: String,
    pub chart_id: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub ticks: Vec<TickItem>,
}

impl AxisItem {
    #[must_use]
    pub fn from_native(value: &NativeValue) -> Option<Self> {
        let node = value.as_object()?;
        Some(Self {
            id: node.get_string("id")?,
            axis_type: node.get_string("type").unwrap_or_default(),
            chart_id: node.get_string("chart").unwrap_or_default(),
            min: node.get_f64("min"),
            max: node.get_f64("max"),
            ticks: TickItem::list_from_native(&node.get("ticks")),
        })
    }

    #[must_use]
    pub fn to_node(&self) -> NativeNode {
        let node = NativeNode::new();
        node.set("id", self.id.as_str());
        node.set("type", self.axis_type.as_str());
        node.set("chart", self.chart_id.as_str());
        if let Some(min) = self.min {
            node.set("min", min);
        }
        if let Some(max) = self.max {
            node.set("max", max);
        }
        node.set("ticks", TickItem::list_to_native(&self.ticks));
        node
    }

    /// `true` when this item belongs to the axis described by `owner`.
    #[must_use]
    pub fn is_owned_by(&self, owner: &ScaleOwner) -> bool {
        owner.matches(Some(&self.chart_id), Some(&self.id))
    }
}
