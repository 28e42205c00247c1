use serde::{Deserialize, Serialize};

use crate::native::NativeNode;

use super::key::{EnumKey, Key};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

impl Key for FontStyle {
    fn value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
            Self::Oblique => "oblique",
        }
    }
}

impl EnumKey for FontStyle {
    fn values() -> &'static [Self] {
        &[Self::Normal, Self::Italic, Self::Oblique]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
    Lighter,
    Bolder,
}

impl Key for FontWeight {
    fn value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
            Self::Lighter => "lighter",
            Self::Bolder => "bolder",
        }
    }
}

impl EnumKey for FontWeight {
    fn values() -> &'static [Self] {
        &[Self::Normal, Self::Bold, Self::Lighter, Self::Bolder]
    }
}

#[derive(Clone, Copy)]
enum FontProperty {
    Size,
    Family,
    Style,
    Weight,
    LineHeight,
}

impl Key for FontProperty {
    fn value(self) -> &'static str {
        match self {
            Self::Size => "size",
            Self::Family => "family",
            Self::Style => "style",
            Self::Weight => "weight",
            Self::LineHeight => "lineHeight",
        }
    }
}

/// Font descriptor, stored as a nested native object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontItem {
    pub size: f64,
    pub family: String,
    pub style: FontStyle,
    pub weight: FontWeight,
    pub line_height: f64,
}

impl Default for FontItem {
    fn default() -> Self {
        Self {
            size: 12.0,
            family: "'Helvetica Neue', 'Helvetica', 'Arial', sans-serif".to_owned(),
            style: FontStyle::Normal,
            weight: FontWeight::Normal,
            line_height: 1.2,
        }
    }
}

impl FontItem {
    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.size.is_finite() && self.size > 0.0 && self.line_height.is_finite()
    }

    /// Writes a fresh native object; the engine never sees a shared one.
    #[must_use]
    pub fn to_node(&self) -> NativeNode {
        let node = NativeNode::new();
        node.set(FontProperty::Size.value(), self.size);
        node.set(FontProperty::Family.value(), self.family.as_str());
        node.set(FontProperty::Style.value(), self.style.value());
        node.set(FontProperty::Weight.value(), self.weight.value());
        node.set(FontProperty::LineHeight.value(), self.line_height);
        node
    }

    /// Reads a font from a native object, filling missing fields from defaults.
    #[must_use]
    pub fn from_node(node: &NativeNode) -> Self {
        let defaults = Self::default();
        Self {
            size: node
                .get_f64(FontProperty::Size.value())
                .unwrap_or(defaults.size),
            family: node
                .get_string(FontProperty::Family.value())
                .unwrap_or(defaults.family),
            style: node
                .get_string(FontProperty::Style.value())
                .and_then(|value| FontStyle::from_value(&value))
                .unwrap_or(defaults.style),
            weight: node
                .get_string(FontProperty::Weight.value())
                .and_then(|value| FontWeight::from_value(&value))
                .unwrap_or(defaults.weight),
            line_height: node
                .get_f64(FontProperty::LineHeight.value())
                .unwrap_or(defaults.line_height),
        }
    }
}

#[derive(Clone, Copy)]
enum PaddingProperty {
    Top,
    Right,
    Bottom,
    Left,
}

impl Key for PaddingProperty {
    fn value(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

/// Four-sided padding, stored as a nested native object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PaddingItem {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl PaddingItem {
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .all(|side| side.is_finite() && *side >= 0.0)
    }

    #[must_use]
    pub fn to_node(&self) -> NativeNode {
        let node = NativeNode::new();
        node.set(PaddingProperty::Top.value(), self.top);
        node.set(PaddingProperty::Right.value(), self.right);
        node.set(PaddingProperty::Bottom.value(), self.bottom);
        node.set(PaddingProperty::Left.value(), self.left);
        node
    }

    #[must_use]
    pub fn from_node(node: &NativeNode) -> Self {
        let side = |property: PaddingProperty| node.get_f64(property.value()).unwrap_or(0.0);
        Self {
            top: side(PaddingProperty::Top),
            right: side(PaddingProperty::Right),
            bottom: side(PaddingProperty::Bottom),
            left: side(PaddingProperty::Left),
        }
    }
}
