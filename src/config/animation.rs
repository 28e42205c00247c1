use std::fmt;
use std::rc::Rc;

use crate::core::{ChartRef, Easing, Key};
use crate::native::NativeNode;
use crate::scriptable::{DatasetContext, ScriptableOption, non_negative};

use super::defaults::{ChartDefaults, provider};

#[derive(Debug, Clone, Copy)]
enum AnimationProperty {
    Duration,
    Delay,
    Easing,
    Loop,
}

impl Key for AnimationProperty {
    fn value(self) -> &'static str {
        match self {
            Self::Duration => "duration",
            Self::Delay => "delay",
            Self::Easing => "easing",
            Self::Loop => "loop",
        }
    }
}

/// Chart animation options (`options.animation`), resolved per dataset element.
///
/// Durations and delays are milliseconds and never negative: negative
/// constants are rejected, negative callback results fall back to defaults.
pub struct Animation {
    duration: ScriptableOption<f64, DatasetContext>,
    delay: ScriptableOption<f64, DatasetContext>,
    easing: ScriptableOption<Easing, DatasetContext>,
    looping: ScriptableOption<bool, DatasetContext>,
}

impl Animation {
    pub(crate) fn new(node: NativeNode, chart: &ChartRef, defaults: &Rc<ChartDefaults>) -> Self {
        Self {
            duration: ScriptableOption::with_checker(
                node.clone(),
                AnimationProperty::Duration,
                chart.clone(),
                provider(defaults, |d| d.animation.duration),
                non_negative(),
            ),
            delay: ScriptableOption::with_checker(
                node.clone(),
                AnimationProperty::Delay,
                chart.clone(),
                provider(defaults, |d| d.animation.delay),
                non_negative(),
            ),
            easing: ScriptableOption::new(
                node.clone(),
                AnimationProperty::Easing,
                chart.clone(),
                provider(defaults, |d| d.animation.easing),
            ),
            looping: ScriptableOption::new(
                node,
                AnimationProperty::Loop,
                chart.clone(),
                provider(defaults, |d| d.animation.looping),
            ),
        }
    }

    #[must_use]
    pub fn duration(&self) -> &ScriptableOption<f64, DatasetContext> {
        &self.duration
    }

    #[must_use]
    pub fn delay(&self) -> &ScriptableOption<f64, DatasetContext> {
        &self.delay
    }

    #[must_use]
    pub fn easing(&self) -> &ScriptableOption<Easing, DatasetContext> {
        &self.easing
    }

    #[must_use]
    pub fn looping(&self) -> &ScriptableOption<bool, DatasetContext> {
        &self.looping
    }
}

impl fmt::Debug for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animation")
            .field("duration", &self.duration)
            .field("delay", &self.delay)
            .field("easing", &self.easing)
            .field("loop", &self.looping)
            .finish()
    }
}
