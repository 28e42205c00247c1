use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AxisKind, ScaleDataType, check_key};
use crate::error::{ChartError, ChartResult};

/// Descriptor of one axis type the engine knows about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisType {
    pub name: String,
    pub kind: AxisKind,
    pub data_type: ScaleDataType,
}

impl AxisType {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: AxisKind, data_type: ScaleDataType) -> Self {
        Self {
            name: name.into(),
            kind,
            data_type,
        }
    }
}

const BUILTIN_AXIS_TYPES: &[(&str, AxisKind, ScaleDataType)] = &[
    ("linear", AxisKind::Cartesian, ScaleDataType::Number),
    ("logarithmic", AxisKind::Cartesian, ScaleDataType::Number),
    ("category", AxisKind::Cartesian, ScaleDataType::Text),
    ("time", AxisKind::Cartesian, ScaleDataType::Date),
    ("timeseries", AxisKind::Cartesian, ScaleDataType::Date),
    ("radialLinear", AxisKind::Radial, ScaleDataType::Number),
];

/// Lookup table of axis types, injected into each chart.
///
/// Entries are only ever added: a registered name keeps its descriptor for
/// the lifetime of the registry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisTypeRegistry {
    types: IndexMap<String, AxisType>,
}

impl AxisTypeRegistry {
    /// An empty registry; every chart axis must be registered explicitly.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry preloaded with the engine's built-in axis types.
    #[must_use]
    pub fn builtin() -> Self {
        let types = BUILTIN_AXIS_TYPES
            .iter()
            .map(|(name, kind, data_type)| {
                ((*name).to_owned(), AxisType::new(*name, *kind, *data_type))
            })
            .collect();
        Self { types }
    }

    /// Adds a controller-provided axis type. Names are unique.
    pub fn register(&mut self, axis_type: AxisType) -> ChartResult<()> {
        check_key(&axis_type.name)?;
        if self.types.contains_key(&axis_type.name) {
            return Err(ChartError::DuplicateAxisType(axis_type.name));
        }
        debug!(name = %axis_type.name, kind = ?axis_type.kind, "register axis type");
        self.types.insert(axis_type.name.clone(), axis_type);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AxisType> {
        self.types.get(name)
    }

    pub fn lookup(&self, name: &str) -> ChartResult<&AxisType> {
        self.get(name)
            .ok_or_else(|| ChartError::UnknownAxisType(name.to_owned()))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisType, AxisTypeRegistry};
    use crate::core::{AxisKind, ScaleDataType};
    use crate::error::ChartError;

    #[test]
    fn builtin_table_resolves_data_types() {
        let registry = AxisTypeRegistry::builtin();
        assert_eq!(
            registry.lookup("time").expect("time").data_type,
            ScaleDataType::Date
        );
        assert_eq!(
            registry.lookup("radialLinear").expect("radial").kind,
            AxisKind::Radial
        );
        assert!(matches!(
            registry.lookup("polar"),
            Err(ChartError::UnknownAxisType(_))
        ));
    }

    #[test]
    fn registration_never_replaces() {
        let mut registry = AxisTypeRegistry::builtin();
        let result = registry.register(AxisType::new(
            "linear",
            AxisKind::Radial,
            ScaleDataType::Text,
        ));
        assert!(matches!(result, Err(ChartError::DuplicateAxisType(_))));
        assert_eq!(
            registry.lookup("linear").expect("linear").kind,
            AxisKind::Cartesian
        );
    }

    #[test]
    fn custom_types_are_added() {
        let mut registry = AxisTypeRegistry::empty();
        registry
            .register(AxisType::new(
                "colorScale",
                AxisKind::Cartesian,
                ScaleDataType::Number,
            ))
            .expect("register");
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["colorScale"]);
    }
}
