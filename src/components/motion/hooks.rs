//! Viewport visibility hook.

use leptos::html;
use leptos::prelude::*;
use leptos_use::{UseIntersectionObserverOptions, use_intersection_observer_with_options};

use super::context::use_motion;
use crate::core::{Visibility, skips_observation};
use crate::models::{AnimationPreferences, VisibilityOptions};

/// Track whether `target` is in the viewport.
///
/// With animations off (disabled, or reduced motion) the element is
/// reported visible immediately and no observer is attached.
pub fn use_visibility(target: NodeRef<html::Div>, options: VisibilityOptions) -> Signal<bool> {
    let motion = use_motion();
    use_visibility_with(target, options, motion.preferences.into())
}

/// [`use_visibility`] against an explicit preferences signal.
pub fn use_visibility_with(
    target: NodeRef<html::Div>,
    options: VisibilityOptions,
    prefs: Signal<AnimationPreferences>,
) -> Signal<bool> {
    if prefs.with_untracked(skips_observation) {
        return Signal::stored(true);
    }

    let state = StoredValue::new(Visibility::new(options.mode));
    let visible = RwSignal::new(false);
    let threshold = options.threshold;

    use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            let Some(entry) = entries.last() else {
                return;
            };
            let Some(transition) = state.try_update_value(|s| {
                s.observe(entry.intersection_ratio(), entry.is_intersecting(), threshold)
            }) else {
                return;
            };
            if visible.try_get_untracked() != Some(transition.visible) {
                visible.try_set(transition.visible);
            }
            if transition.disconnect {
                log::debug!("visibility latched; releasing observer");
                observer.disconnect();
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![threshold])
            .root_margin(options.root_margin),
    );

    // Preferences can switch motion off after mount; content must not stay hidden.
    Signal::derive(move || prefs.with(skips_observation) || visible.get())
}
