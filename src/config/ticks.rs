use std::fmt;
use std::rc::Rc;

use crate::core::{AxisKind, Color, FontItem, Key, PaddingItem};
use crate::native::NativeNode;
use crate::scriptable::{ScaleContext, ScaleOwner, ScriptableOption, non_negative};

use super::defaults::{ChartDefaults, provider};
use super::tick_handlers::TickLabels;

#[derive(Debug, Clone, Copy)]
enum TickProperty {
    Color,
    Font,
    TextStrokeColor,
    TextStrokeWidth,
    BackdropColor,
    BackdropPadding,
    ShowLabelBackdrop,
    Display,
    Z,
}

impl Key for TickProperty {
    fn value(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Font => "font",
            Self::TextStrokeColor => "textStrokeColor",
            Self::TextStrokeWidth => "textStrokeWidth",
            Self::BackdropColor => "backdropColor",
            Self::BackdropPadding => "backdropPadding",
            Self::ShowLabelBackdrop => "showLabelBackdrop",
            Self::Display => "display",
            Self::Z => "z",
        }
    }
}

/// Tick options of one axis (`scales.<id>.ticks`).
pub struct Ticks {
    node: NativeNode,
    color: ScriptableOption<Color, ScaleContext>,
    font: ScriptableOption<FontItem, ScaleContext>,
    text_stroke_color: ScriptableOption<Color, ScaleContext>,
    text_stroke_width: ScriptableOption<f64, ScaleContext>,
    backdrop_color: ScriptableOption<Color, ScaleContext>,
    backdrop_padding: ScriptableOption<PaddingItem, ScaleContext>,
    show_label_backdrop: ScriptableOption<bool, ScaleContext>,
    labels: TickLabels,
}

impl Ticks {
    pub(crate) fn new(
        node: NativeNode,
        owner: &ScaleOwner,
        kind: AxisKind,
        defaults: &Rc<ChartDefaults>,
    ) -> Self {
        // radial scales draw label backdrops unless told otherwise
        let radial = kind == AxisKind::Radial;
        Self {
            color: ScriptableOption::new(
                node.clone(),
                TickProperty::Color,
                owner.clone(),
                provider(defaults, |d| d.ticks.color),
            ),
            font: ScriptableOption::with_checker(
                node.clone(),
                TickProperty::Font,
                owner.clone(),
                provider(defaults, |d| d.ticks.font.clone()),
                Rc::new(FontItem::is_valid),
            ),
            text_stroke_color: ScriptableOption::new(
                node.clone(),
                TickProperty::TextStrokeColor,
                owner.clone(),
                provider(defaults, |d| d.ticks.text_stroke_color),
            ),
            text_stroke_width: ScriptableOption::with_checker(
                node.clone(),
                TickProperty::TextStrokeWidth,
                owner.clone(),
                provider(defaults, |d| d.ticks.text_stroke_width),
                non_negative(),
            ),
            backdrop_color: ScriptableOption::new(
                node.clone(),
                TickProperty::BackdropColor,
                owner.clone(),
                provider(defaults, |d| d.ticks.backdrop_color),
            ),
            backdrop_padding: ScriptableOption::new(
                node.clone(),
                TickProperty::BackdropPadding,
                owner.clone(),
                provider(defaults, |d| d.ticks.backdrop_padding),
            ),
            show_label_backdrop: ScriptableOption::new(
                node.clone(),
                TickProperty::ShowLabelBackdrop,
                owner.clone(),
                provider(defaults, move |d| d.ticks.show_label_backdrop || radial),
            ),
            labels: TickLabels::for_data_type(node.clone(), owner.clone()),
            node,
        }
    }

    #[must_use]
    pub fn node(&self) -> &NativeNode {
        &self.node
    }

    #[must_use]
    pub fn color(&self) -> &ScriptableOption<Color, ScaleContext> {
        &self.color
    }

    #[must_use]
    pub fn font(&self) -> &ScriptableOption<FontItem, ScaleContext> {
        &self.font
    }

    #[must_use]
    pub fn text_stroke_color(&self) -> &ScriptableOption<Color, ScaleContext> {
        &self.text_stroke_color
    }

    #[must_use]
    pub fn text_stroke_width(&self) -> &ScriptableOption<f64, ScaleContext> {
        &self.text_stroke_width
    }

    #[must_use]
    pub fn backdrop_color(&self) -> &ScriptableOption<Color, ScaleContext> {
        &self.backdrop_color
    }

    #[must_use]
    pub fn backdrop_padding(&self) -> &ScriptableOption<PaddingItem, ScaleContext> {
        &self.backdrop_padding
    }

    #[must_use]
    pub fn show_label_backdrop(&self) -> &ScriptableOption<bool, ScaleContext> {
        &self.show_label_backdrop
    }

    /// Label resolver; its variant follows the axis data type.
    #[must_use]
    pub fn labels(&self) -> &TickLabels {
        &self.labels
    }

    pub fn set_display(&self, display: bool) {
        self.node.set(TickProperty::Display.value(), display);
    }

    #[must_use]
    pub fn is_display(&self) -> bool {
        self.node
            .get_bool(TickProperty::Display.value())
            .unwrap_or(true)
    }

    pub fn set_z(&self, z: i32) {
        self.node.set(TickProperty::Z.value(), f64::from(z));
    }

    #[must_use]
    pub fn z(&self) -> i32 {
        self.node
            .get_f64(TickProperty::Z.value())
            .map_or(0, |z| z as i32)
    }
}

impl fmt::Debug for Ticks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ticks")
            .field("color", &self.color)
            .field("font", &self.font)
            .field("labels", &self.labels)
            .finish()
    }
}
