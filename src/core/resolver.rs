//! Animation config resolution.
//!
//! Maps each [`ContentType`] to its default [`AnimationConfig`] and merges
//! per-call overrides field by field. Hidden-state styles are an enum-keyed
//! lookup over `(ContentType, RevealEffect)`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::reveal::*;
use crate::models::{
    AnimationConfig, AnimationOverrides, ContentType, Easing, EffectStyle, RevealEffect,
};

/// Built-in default for a content type.
pub fn builtin_default(content_type: ContentType) -> AnimationConfig {
    let (duration_ms, delay_ms, easing, visibility_threshold) = match content_type {
        ContentType::Text => (TEXT_DURATION_MS, TEXT_DELAY_MS, Easing::EaseOut, 0.1),
        ContentType::Image => (IMAGE_DURATION_MS, IMAGE_DELAY_MS, Easing::EaseInOut, 0.2),
        ContentType::Interactive => (
            INTERACTIVE_DURATION_MS,
            INTERACTIVE_DELAY_MS,
            Easing::Spring,
            0.3,
        ),
        ContentType::Card => (CARD_DURATION_MS, CARD_DELAY_MS, Easing::EaseOut, 0.15),
        ContentType::Button => (BUTTON_DURATION_MS, BUTTON_DELAY_MS, Easing::Spring, 0.1),
    };

    AnimationConfig {
        duration_ms,
        delay_ms,
        easing,
        visibility_threshold,
        viewport_margin: DEFAULT_VIEWPORT_MARGIN.to_string(),
    }
}

/// Resolve a content type against the built-in table.
///
/// Override fields win one by one; unset fields fall back to the type default.
pub fn resolve_animation_config(
    content_type: ContentType,
    overrides: Option<&AnimationOverrides>,
) -> AnimationConfig {
    ContentTypeTable::default().resolve(content_type, overrides)
}

/// Default config per content type.
///
/// Every type always has an entry; customisation only shadows fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<ContentType, AnimationConfig>",
    into = "BTreeMap<ContentType, AnimationConfig>"
)]
pub struct ContentTypeTable {
    entries: BTreeMap<ContentType, AnimationConfig>,
}

impl Default for ContentTypeTable {
    fn default() -> Self {
        Self {
            entries: ContentType::ALL
                .into_iter()
                .map(|ct| (ct, builtin_default(ct)))
                .collect(),
        }
    }
}

impl ContentTypeTable {
    /// Current default for `content_type`.
    pub fn get(&self, content_type: ContentType) -> AnimationConfig {
        self.entries
            .get(&content_type)
            .cloned()
            .unwrap_or_else(|| builtin_default(content_type))
    }

    /// Shadow fields of a type's default.
    pub fn customize(&mut self, content_type: ContentType, overrides: &AnimationOverrides) {
        let merged = self.get(content_type).merged(overrides);
        self.entries.insert(content_type, merged);
    }

    pub fn resolve(
        &self,
        content_type: ContentType,
        overrides: Option<&AnimationOverrides>,
    ) -> AnimationConfig {
        let base = self.get(content_type);
        match overrides {
            Some(o) => base.merged(o),
            None => base,
        }
    }

    /// First content type whose threshold lies outside `[0, 1]`.
    pub fn invalid_threshold(&self) -> Option<ContentType> {
        self.entries
            .iter()
            .find(|(_, c)| !(0.0..=1.0).contains(&c.visibility_threshold))
            .map(|(ct, _)| *ct)
    }
}

impl From<BTreeMap<ContentType, AnimationConfig>> for ContentTypeTable {
    /// Missing types are filled from the built-in table.
    fn from(mut entries: BTreeMap<ContentType, AnimationConfig>) -> Self {
        for ct in ContentType::ALL {
            entries.entry(ct).or_insert_with(|| builtin_default(ct));
        }
        Self { entries }
    }
}

impl From<ContentTypeTable> for BTreeMap<ContentType, AnimationConfig> {
    fn from(table: ContentTypeTable) -> Self {
        table.entries
    }
}

// ============================================================================
// Effect Styles
// ============================================================================

/// Effect used when a component does not ask for one.
pub fn default_effect(content_type: ContentType) -> RevealEffect {
    match content_type {
        ContentType::Text | ContentType::Card => RevealEffect::SlideUp,
        ContentType::Image | ContentType::Button => RevealEffect::Scale,
        ContentType::Interactive => RevealEffect::Fade,
    }
}

/// Hidden-state style for `(content_type, effect)`.
///
/// Larger surfaces (images, cards) travel further than text and buttons.
pub fn effect_style(content_type: ContentType, effect: RevealEffect) -> EffectStyle {
    use ContentType as C;
    use RevealEffect as E;

    let (hidden_transform, hidden_filter) = match (effect, content_type) {
        (E::Fade, _) => ("none", "none"),
        (E::SlideUp, C::Image | C::Card) => ("translateY(40px)", "none"),
        (E::SlideUp, _) => ("translateY(20px)", "none"),
        (E::SlideLeft, C::Image | C::Card) => ("translateX(40px)", "none"),
        (E::SlideLeft, _) => ("translateX(20px)", "none"),
        (E::Scale, C::Button | C::Interactive) => ("scale(0.9)", "none"),
        (E::Scale, _) => ("scale(0.95)", "none"),
        (E::Blur, C::Image) => ("scale(1.05)", "blur(12px)"),
        (E::Blur, _) => ("none", "blur(6px)"),
    };

    EffectStyle {
        hidden_transform,
        hidden_opacity: 0.0,
        hidden_filter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_overrides() {
        for ct in ContentType::ALL {
            let resolved = resolve_animation_config(ct, None);
            let default = builtin_default(ct);
            assert_eq!(resolved.duration_ms, default.duration_ms);
            assert_eq!(resolved.delay_ms, default.delay_ms);
            assert_eq!(resolved.easing, default.easing);
        }
    }

    #[test]
    fn test_override_is_field_level() {
        for ct in ContentType::ALL {
            let overrides = AnimationOverrides::default().duration(1234);
            let resolved = resolve_animation_config(ct, Some(&overrides));
            let default = builtin_default(ct);
            assert_eq!(resolved.duration_ms, 1234);
            assert_eq!(resolved.delay_ms, default.delay_ms);
            assert_eq!(resolved.easing, default.easing);
            assert_eq!(resolved.visibility_threshold, default.visibility_threshold);
            assert_eq!(resolved.viewport_margin, default.viewport_margin);
        }
    }

    #[test]
    fn test_customize_shadows_fields() {
        let mut table = ContentTypeTable::default();
        table.customize(ContentType::Card, &AnimationOverrides::default().delay(0));
        let card = table.get(ContentType::Card);
        assert_eq!(card.delay_ms, 0);
        assert_eq!(card.duration_ms, CARD_DURATION_MS);
        assert_eq!(table.get(ContentType::Text), builtin_default(ContentType::Text));
    }

    #[test]
    fn test_partial_table_fills_missing_types() {
        let json = r#"{"text":{"duration_ms":1,"delay_ms":2,"easing":"linear","visibility_threshold":0.5,"viewport_margin":"0px"}}"#;
        let table: ContentTypeTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.get(ContentType::Text).duration_ms, 1);
        assert_eq!(table.get(ContentType::Button), builtin_default(ContentType::Button));
    }

    #[test]
    fn test_invalid_threshold_detected() {
        let json = r#"{"image":{"duration_ms":1,"delay_ms":2,"easing":"linear","visibility_threshold":1.5,"viewport_margin":"0px"}}"#;
        let table: ContentTypeTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.invalid_threshold(), Some(ContentType::Image));
        assert_eq!(ContentTypeTable::default().invalid_threshold(), None);
    }

    #[test]
    fn test_effect_table() {
        let style = effect_style(ContentType::Card, RevealEffect::SlideUp);
        assert_eq!(style.hidden_transform, "translateY(40px)");
        assert_eq!(style.hidden_opacity, 0.0);
        let style = effect_style(ContentType::Text, RevealEffect::Fade);
        assert_eq!(style.hidden_transform, "none");
        assert_eq!(default_effect(ContentType::Button), RevealEffect::Scale);
    }
}
