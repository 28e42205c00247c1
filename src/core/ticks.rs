use serde::{Deserialize, Serialize};

use crate::native::{NativeNode, NativeValue};

/// One tick produced by the engine's tick-generation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickItem {
    pub value: f64,
    pub label: Option<String>,
    pub major: bool,
}

impl TickItem {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            label: None,
            major: false,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_major(mut self, major: bool) -> Self {
        self.major = major;
        self
    }

    #[must_use]
    pub fn to_node(&self) -> NativeNode {
        let node = NativeNode::new();
        node.set("value", self.value);
        if let Some(label) = &self.label {
            node.set("label", label.as_str());
        }
        node.set("major", self.major);
        node
    }

    /// Reads a tick object; entries without a numeric `value` are skipped by callers.
    #[must_use]
    pub fn from_native(value: &NativeValue) -> Option<Self> {
        match value {
            NativeValue::Object(node) => Some(Self {
                value: node.get_f64("value")?,
                label: node.get_string("label"),
                major: node.get_bool("major").unwrap_or(false),
            }),
            NativeValue::Number(value) => Some(Self::new(*value)),
            _ => None,
        }
    }

    #[must_use]
    pub fn list_from_native(value: &NativeValue) -> Vec<Self> {
        value
            .as_array()
            .map(|items| items.iter().filter_map(Self::from_native).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn list_to_native(ticks: &[Self]) -> NativeValue {
        NativeValue::Array(
            ticks
                .iter()
                .map(|tick| NativeValue::Object(tick.to_node()))
                .collect(),
        )
    }
}
