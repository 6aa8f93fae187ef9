//! Viewport visibility state machine.
//!
//! A trigger is either latched (terminal once visible) or toggling (follows the
//! element in and out of the viewport). The variant is chosen from
//! [`VisibilityMode`] and fixed for the trigger's lifetime.

use crate::models::{AnimationPreferences, VisibilityMode};

/// Result of feeding one intersection sample to a trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Visibility after the sample.
    pub visible: bool,
    /// The observer can be released; no further samples matter.
    pub disconnect: bool,
}

/// Latches to visible on the first qualifying sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LatchedVisibility {
    triggered: bool,
}

/// Mirrors whether the element currently qualifies as visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TogglingVisibility {
    visible: bool,
}

/// Per-element visibility state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Visibility {
    Latched(LatchedVisibility),
    Toggling(TogglingVisibility),
}

impl Visibility {
    /// Initial (hidden) state for `mode`.
    pub fn new(mode: VisibilityMode) -> Self {
        match mode {
            VisibilityMode::Once => Self::Latched(LatchedVisibility::default()),
            VisibilityMode::Toggle => Self::Toggling(TogglingVisibility::default()),
        }
    }

    pub fn is_visible(&self) -> bool {
        match self {
            Self::Latched(s) => s.triggered,
            Self::Toggling(s) => s.visible,
        }
    }

    /// Latched triggers are terminal once they have fired.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Latched(LatchedVisibility { triggered: true }))
    }

    /// Feed an intersection sample.
    ///
    /// The element qualifies when it intersects and its ratio reaches
    /// `threshold`. A zero threshold therefore fires on any overlap.
    pub fn observe(&mut self, ratio: f64, is_intersecting: bool, threshold: f64) -> Transition {
        let qualifies = is_intersecting && ratio >= threshold;
        match self {
            Self::Latched(s) => {
                if qualifies {
                    s.triggered = true;
                }
                Transition {
                    visible: s.triggered,
                    disconnect: s.triggered,
                }
            }
            Self::Toggling(s) => {
                s.visible = qualifies;
                Transition {
                    visible: s.visible,
                    disconnect: false,
                }
            }
        }
    }
}

/// Whether a trigger should skip observation and report visible at once.
///
/// Content must never stay hidden when animations are off.
pub fn skips_observation(prefs: &AnimationPreferences) -> bool {
    !prefs.should_animate()
}
