//! Staggered group of reveals.

use leptos::prelude::*;

use super::reveal::Reveal;
use crate::config::cascade::{DEFAULT_INCREMENT_MS, DEFAULT_MAX_DELAY_MS};
use crate::core::{assign_cascade_delays, default_effect};
use crate::models::{ContentType, RevealEffect, VisibilityMode};

stylance::import_crate_style!(css, "src/components/motion/motion.module.css");

/// Renders `items` as a cascade: each item is wrapped in a [`Reveal`] whose
/// delay is the content type's own delay plus the item's stagger.
#[component]
pub fn Cascade<T, V, F>(
    items: Vec<T>,
    render: F,
    #[prop(default = ContentType::Card)] content_type: ContentType,
    #[prop(default = DEFAULT_INCREMENT_MS)] increment_ms: u32,
    #[prop(default = DEFAULT_MAX_DELAY_MS)] max_delay_ms: u32,
    #[prop(optional)] effect: Option<RevealEffect>,
    #[prop(optional)] mode: VisibilityMode,
    #[prop(optional, into)] class: String,
) -> impl IntoView
where
    T: 'static,
    V: IntoView + 'static,
    F: Fn(T) -> V + 'static,
{
    let effect = effect.unwrap_or_else(|| default_effect(content_type));
    let delays = assign_cascade_delays(items.len(), increment_ms, max_delay_ms);

    let children = items
        .into_iter()
        .zip(delays)
        .map(|(item, delay)| {
            let content = render(item).into_any();
            view! {
                <Reveal
                    content_type=content_type
                    effect=effect
                    mode=mode
                    extra_delay_ms=delay
                >
                    {content}
                </Reveal>
            }
        })
        .collect_view();

    view! { <div class=format!("{} {}", css::cascade, class)>{children}</div> }
}
