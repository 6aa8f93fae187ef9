//! Animation timing types.

use serde::{Deserialize, Serialize};

/// Coarse content category used to select default animation timing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Text,
    Image,
    Interactive,
    Card,
    Button,
}

impl ContentType {
    /// Every content type, in table order.
    pub const ALL: [ContentType; 5] = [
        ContentType::Text,
        ContentType::Image,
        ContentType::Interactive,
        ContentType::Card,
        ContentType::Button,
    ];

    /// Stable lowercase tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Interactive => "interactive",
            Self::Card => "card",
            Self::Button => "button",
        }
    }
}

/// Easing curve applied to a reveal transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
    /// Slight overshoot, used for buttons and interactive elements.
    Spring,
}

impl Easing {
    /// CSS `transition-timing-function` value.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseIn => "cubic-bezier(0.4, 0, 1, 1)",
            Self::EaseOut => "cubic-bezier(0, 0, 0.2, 1)",
            Self::EaseInOut => "cubic-bezier(0.4, 0, 0.2, 1)",
            Self::Spring => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

/// Concrete timing contract for one reveal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
    /// Fraction of the element that must be visible, in `[0, 1]`.
    pub visibility_threshold: f64,
    /// Intersection root margin (CSS offset syntax).
    pub viewport_margin: String,
}

impl AnimationConfig {
    /// Returns a copy with every override field shadowing this config.
    ///
    /// Fields the override leaves unset keep their current value.
    pub fn merged(&self, overrides: &AnimationOverrides) -> Self {
        Self {
            duration_ms: overrides.duration_ms.unwrap_or(self.duration_ms),
            delay_ms: overrides.delay_ms.unwrap_or(self.delay_ms),
            easing: overrides.easing.unwrap_or(self.easing),
            visibility_threshold: overrides
                .visibility_threshold
                .unwrap_or(self.visibility_threshold)
                .clamp(0.0, 1.0),
            viewport_margin: overrides
                .viewport_margin
                .clone()
                .unwrap_or_else(|| self.viewport_margin.clone()),
        }
    }

    /// The same config with no duration and no delay.
    pub fn instant(&self) -> Self {
        Self {
            duration_ms: 0,
            delay_ms: 0,
            ..self.clone()
        }
    }
}

/// Per-call field overrides for an [`AnimationConfig`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport_margin: Option<String>,
}

impl AnimationOverrides {
    pub fn duration(mut self, ms: u32) -> Self {
        self.duration_ms = Some(ms);
        self
    }

    pub fn delay(mut self, ms: u32) -> Self {
        self.delay_ms = Some(ms);
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.visibility_threshold = Some(threshold);
        self
    }

    pub fn margin(mut self, margin: impl Into<String>) -> Self {
        self.viewport_margin = Some(margin.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Visual effect used when an element is revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RevealEffect {
    Fade,
    SlideUp,
    SlideLeft,
    Scale,
    Blur,
}

/// Hidden-state style for a (content type, effect) pair.
///
/// The visible state is always `opacity: 1; transform: none; filter: none`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectStyle {
    pub hidden_transform: &'static str,
    pub hidden_opacity: f64,
    pub hidden_filter: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> AnimationConfig {
        AnimationConfig {
            duration_ms: 500,
            delay_ms: 50,
            easing: Easing::EaseOut,
            visibility_threshold: 0.1,
            viewport_margin: "0px".to_string(),
        }
    }

    #[test]
    fn test_merge_shadows_only_given_fields() {
        let merged = base().merged(&AnimationOverrides::default().duration(900));
        assert_eq!(merged.duration_ms, 900);
        assert_eq!(merged.delay_ms, 50);
        assert_eq!(merged.easing, Easing::EaseOut);
        assert_eq!(merged.viewport_margin, "0px");
    }

    #[test]
    fn test_merge_clamps_threshold() {
        let merged = base().merged(&AnimationOverrides::default().threshold(1.7));
        assert_eq!(merged.visibility_threshold, 1.0);
        let merged = base().merged(&AnimationOverrides::default().threshold(-0.2));
        assert_eq!(merged.visibility_threshold, 0.0);
    }

    #[test]
    fn test_empty_override_is_identity() {
        assert!(AnimationOverrides::default().is_empty());
        assert_eq!(base().merged(&AnimationOverrides::default()), base());
    }

    #[test]
    fn test_instant_keeps_easing_and_threshold() {
        let instant = base().instant();
        assert_eq!(instant.duration_ms, 0);
        assert_eq!(instant.delay_ms, 0);
        assert_eq!(instant.visibility_threshold, 0.1);
    }

    #[test]
    fn test_serde_tags() {
        assert_eq!(serde_json::to_string(&Easing::EaseInOut).unwrap(), "\"ease-in-out\"");
        assert_eq!(serde_json::to_string(&ContentType::Card).unwrap(), "\"card\"");
        for ct in ContentType::ALL {
            assert_eq!(serde_json::to_string(&ct).unwrap(), format!("\"{}\"", ct.as_str()));
        }
    }
}
