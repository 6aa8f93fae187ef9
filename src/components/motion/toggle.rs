//! Motion on/off button.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::context::use_motion;
use crate::components::icons as ic;
use crate::models::PreferencesPatch;

stylance::import_crate_style!(css, "src/components/motion/motion.module.css");

/// Header button switching animations on and off.
///
/// A manual choice stops following the OS reduced-motion setting. The second
/// button shows or hides the debug panel.
#[component]
pub fn MotionToggle() -> impl IntoView {
    let motion = use_motion();

    let animating = Signal::derive(move || motion.preferences.with(|p| p.should_animate()));
    let toggle_title = Signal::derive(move || {
        if animating.get() {
            "Reduce motion"
        } else {
            "Enable motion"
        }
    });

    let on_toggle = move |_: leptos::ev::MouseEvent| {
        let reduce = animating.get_untracked();
        log::info!("motion {} by user", if reduce { "reduced" } else { "enabled" });
        motion.update(
            PreferencesPatch::default()
                .enabled(true)
                .reduced_motion(reduce)
                .respect_system(false),
        );
    };

    let on_debug = move |_: leptos::ev::MouseEvent| {
        let shown = motion.preferences.with_untracked(|p| p.debug_visible);
        motion.update(PreferencesPatch::default().debug_visible(!shown));
    };

    view! {
        <div class=css::toggleGroup>
            <button
                class=css::toggleButton
                on:click=on_toggle
                title=toggle_title
                aria-pressed=move || (!animating.get()).to_string()
            >
                {move || {
                    if animating.get() {
                        view! { <Icon icon=ic::MOTION_OFF /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::MOTION_ON /> }.into_any()
                    }
                }}
            </button>
            <button class=css::toggleButton on:click=on_debug title="Motion settings">
                <Icon icon=ic::DEBUG />
            </button>
        </div>
    }
}
