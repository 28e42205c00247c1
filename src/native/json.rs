use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Number, Value};

use crate::error::{ChartError, ChartResult};

use super::{NativeNode, NativeValue};

pub const OPTIONS_JSON_SCHEMA_V1: u32 = 1;

/// Versioned JSON payload for exporting a chart option tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionsJsonContractV1 {
    pub schema_version: u32,
    pub chart_type: String,
    pub config: Value,
}

impl OptionsJsonContractV1 {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize options contract v1: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let payload: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse options json payload: {e}"))
        })?;
        if payload.schema_version != OPTIONS_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported options schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload)
    }
}

// Function and undefined slots are dropped: they have no JSON form.
fn is_serializable(value: &NativeValue) -> bool {
    !matches!(value, NativeValue::Undefined | NativeValue::Function(_))
}

impl Serialize for NativeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Undefined | Self::Null | Self::Function(_) => serializer.serialize_unit(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Number(value) if value.is_finite() => serializer.serialize_f64(*value),
            Self::Number(_) => serializer.serialize_unit(),
            Self::String(value) => serializer.serialize_str(value),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(node) => node.serialize(serializer),
        }
    }
}

impl Serialize for NativeNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.entries();
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in entries.iter().filter(|(_, value)| is_serializable(value)) {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl NativeNode {
    pub fn to_json(&self) -> ChartResult<Value> {
        serde_json::to_value(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize native node: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize native node: {e}")))
    }

    /// Builds a node from a JSON object. Non-object roots are rejected.
    pub fn from_json(value: &Value) -> ChartResult<Self> {
        match value {
            Value::Object(map) => Ok(node_from_map(map)),
            other => Err(ChartError::InvalidData(format!(
                "native node root must be a json object, got `{other}`"
            ))),
        }
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse native json: {e}")))?;
        Self::from_json(&value)
    }
}

fn node_from_map(map: &Map<String, Value>) -> NativeNode {
    let node = NativeNode::new();
    for (key, value) in map {
        node.set(key, value_from_json(value));
    }
    node
}

fn value_from_json(value: &Value) -> NativeValue {
    match value {
        Value::Null => NativeValue::Null,
        Value::Bool(value) => NativeValue::Bool(*value),
        Value::Number(number) => number_from_json(number),
        Value::String(value) => NativeValue::String(value.clone()),
        Value::Array(items) => NativeValue::Array(items.iter().map(value_from_json).collect()),
        Value::Object(map) => NativeValue::Object(node_from_map(map)),
    }
}

fn number_from_json(number: &Number) -> NativeValue {
    number
        .as_f64()
        .map(NativeValue::Number)
        .unwrap_or(NativeValue::Null)
}
