//! Scroll-triggered reveal wrapper.

use leptos::html;
use leptos::prelude::*;

use super::context::use_motion;
use super::hooks::use_visibility;
use crate::core::{default_effect, effect_style};
use crate::models::{
    AnimationConfig, AnimationOverrides, ContentType, EffectStyle, RevealEffect, VisibilityMode,
    VisibilityOptions,
};

stylance::import_crate_style!(css, "src/components/motion/motion.module.css");

const VISIBLE_STYLE: &str = "opacity: 1; transform: none; filter: none;";

/// Inline style for a reveal wrapper.
///
/// `extra_delay_ms` is added on top of the config's own delay (cascades use
/// it for their stagger). Without animation the visible state is rendered
/// with no transition.
pub fn reveal_style(
    effect: &EffectStyle,
    config: &AnimationConfig,
    visible: bool,
    animate: bool,
    extra_delay_ms: u32,
) -> String {
    if !animate {
        return VISIBLE_STYLE.to_string();
    }

    let duration = config.duration_ms;
    let delay = config.delay_ms.saturating_add(extra_delay_ms);
    let easing = config.easing.as_css();
    let transition = format!(
        "transition: opacity {duration}ms {easing} {delay}ms, \
         transform {duration}ms {easing} {delay}ms, \
         filter {duration}ms {easing} {delay}ms;"
    );

    if visible {
        format!("{VISIBLE_STYLE} {transition}")
    } else {
        format!(
            "opacity: {}; transform: {}; filter: {}; {transition}",
            effect.hidden_opacity, effect.hidden_transform, effect.hidden_filter
        )
    }
}

/// Reveals its children when they scroll into view.
///
/// Timing comes from the motion context for `content_type`, shadowed by
/// `overrides`. The hidden state is picked from `effect` (or the content
/// type's default effect).
#[component]
pub fn Reveal(
    content_type: ContentType,
    #[prop(optional)] effect: Option<RevealEffect>,
    #[prop(optional)] overrides: AnimationOverrides,
    #[prop(optional)] mode: VisibilityMode,
    #[prop(optional)] extra_delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let motion = use_motion();
    let node = NodeRef::<html::Div>::new();

    let hidden = effect_style(
        content_type,
        effect.unwrap_or_else(|| default_effect(content_type)),
    );
    let overrides = (!overrides.is_empty()).then_some(overrides);

    let mount_config = motion.resolve_untracked(content_type, overrides.as_ref());
    let visible = use_visibility(node, VisibilityOptions::from_config(&mount_config, mode));

    let style = move || {
        let config = motion.resolve(content_type, overrides.as_ref());
        reveal_style(
            &hidden,
            &config,
            visible.get(),
            motion.should_animate(),
            extra_delay_ms,
        )
    };

    view! {
        <div
            node_ref=node
            class=format!("{} {}", css::reveal, class)
            data-content-type=content_type.as_str()
            data-visible=move || visible.get().to_string()
            style=style
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builtin_default;
    use crate::models::Easing;

    fn config() -> AnimationConfig {
        AnimationConfig {
            duration_ms: 600,
            delay_ms: 100,
            easing: Easing::EaseOut,
            visibility_threshold: 0.1,
            viewport_margin: "0px".to_string(),
        }
    }

    #[test]
    fn test_hidden_style_uses_effect() {
        let effect = effect_style(ContentType::Card, RevealEffect::SlideUp);
        let style = reveal_style(&effect, &config(), false, true, 0);
        assert!(style.starts_with("opacity: 0;"));
        assert!(style.contains("transform: translateY(40px)"));
        assert!(style.contains("600ms"));
    }

    #[test]
    fn test_visible_style_keeps_transition() {
        let effect = effect_style(ContentType::Text, RevealEffect::Fade);
        let style = reveal_style(&effect, &config(), true, true, 0);
        assert!(style.starts_with(VISIBLE_STYLE));
        assert!(style.contains("transition: opacity 600ms"));
    }

    #[test]
    fn test_extra_delay_added_to_config_delay() {
        let effect = effect_style(ContentType::Card, RevealEffect::Fade);
        let style = reveal_style(&effect, &config(), false, true, 250);
        assert!(style.contains("opacity 600ms cubic-bezier(0, 0, 0.2, 1) 350ms"));
    }

    #[test]
    fn test_no_animation_is_visible_without_transition() {
        let effect = effect_style(ContentType::Image, RevealEffect::Blur);
        let cfg = builtin_default(ContentType::Image);
        for visible in [false, true] {
            let style = reveal_style(&effect, &cfg, visible, false, 300);
            assert_eq!(style, VISIBLE_STYLE);
        }
    }
}
