use crate::config::reveal::DEFAULT_VIEWPORT_MARGIN;
use crate::models::AnimationConfig;

/// Whether a visibility trigger latches or follows the element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisibilityMode {
    /// Becomes visible once and stays visible; the observer is released.
    #[default]
    Once,
    /// Tracks the element entering and leaving the viewport.
    Toggle,
}

/// Observation settings for one visibility trigger.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityOptions {
    /// Intersection ratio in `[0, 1]` at which the element counts as visible.
    pub threshold: f64,
    /// Intersection root margin (CSS offset syntax).
    pub root_margin: String,
    pub mode: VisibilityMode,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: DEFAULT_VIEWPORT_MARGIN.to_string(),
            mode: VisibilityMode::Once,
        }
    }
}

impl VisibilityOptions {
    /// Options taken from a resolved animation config.
    pub fn from_config(config: &AnimationConfig, mode: VisibilityMode) -> Self {
        Self {
            threshold: config.visibility_threshold.clamp(0.0, 1.0),
            root_margin: config.viewport_margin.clone(),
            mode,
        }
    }
}
