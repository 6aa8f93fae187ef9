//! Motion settings panel.
//!
//! Shows live preferences and the resolved config of every content type, and
//! lets the user export, import or reset the stored configuration.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::context::{MotionContext, use_motion};
use crate::components::icons as ic;
use crate::models::{ContentType, PreferencesPatch};

stylance::import_crate_style!(css, "src/components/motion/motion.module.css");

/// Parse a millisecond override field. Empty clears the override.
fn parse_override(raw: &str) -> Result<Option<u32>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<u32>()
        .map(Some)
        .map_err(|_| format!("'{raw}' is not a whole number of milliseconds"))
}

/// Debug panel, rendered only while `debug_visible` is set.
#[component]
pub fn MotionDebug() -> impl IntoView {
    let motion = use_motion();
    let visible = Signal::derive(move || motion.preferences.with(|p| p.debug_visible));

    view! {
        <Show when=move || visible.get()>
            <DebugPanel motion=motion />
        </Show>
    }
}

#[component]
fn DebugPanel(motion: MotionContext) -> impl IntoView {
    let prefs = motion.preferences;
    let transfer = RwSignal::new(String::new());
    let message = RwSignal::new(None::<String>);

    let on_close = move |_: leptos::ev::MouseEvent| {
        motion.update(PreferencesPatch::default().debug_visible(false));
    };
    let on_export = move |_: leptos::ev::MouseEvent| {
        transfer.set(motion.export_config());
        message.set(None);
    };
    let on_import = move |_: leptos::ev::MouseEvent| {
        let raw = transfer.get_untracked();
        match motion.import_config(&raw) {
            Ok(()) => message.set(Some("Configuration imported".to_string())),
            Err(e) => {
                log::warn!("motion config import rejected: {e}");
                message.set(Some(e.to_string()));
            }
        }
    };
    let on_reset = move |_: leptos::ev::MouseEvent| {
        motion.reset_to_defaults();
        message.set(Some("Defaults restored".to_string()));
    };

    let on_duration = move |ev: leptos::ev::Event| match parse_override(&event_target_value(&ev)) {
        Ok(value) => motion.update(PreferencesPatch::default().global_duration(value)),
        Err(e) => message.set(Some(e)),
    };
    let on_delay = move |ev: leptos::ev::Event| match parse_override(&event_target_value(&ev)) {
        Ok(value) => motion.update(PreferencesPatch::default().global_delay(value)),
        Err(e) => message.set(Some(e)),
    };

    let rows = move || {
        ContentType::ALL
            .into_iter()
            .map(|ct| {
                let config = motion.resolve(ct, None);
                view! {
                    <tr>
                        <td>{ct.as_str()}</td>
                        <td>{format!("{}ms", config.duration_ms)}</td>
                        <td>{format!("{}ms", config.delay_ms)}</td>
                        <td>{format!("{:?}", config.easing)}</td>
                        <td>{format!("{:.2}", config.visibility_threshold)}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    let override_value =
        |v: Option<u32>| v.map(|ms| ms.to_string()).unwrap_or_default();

    view! {
        <aside class=css::debugPanel aria-label="Motion settings">
            <header class=css::debugHeader>
                <span>"Motion"</span>
                <button class=css::iconButton on:click=on_close title="Close">
                    <Icon icon=ic::CLOSE />
                </button>
            </header>

            <label class=css::debugRow>
                <input
                    type="checkbox"
                    prop:checked=move || prefs.with(|p| p.enabled)
                    on:change=move |ev| {
                        motion.update(PreferencesPatch::default().enabled(event_target_checked(&ev)))
                    }
                />
                "Animations enabled"
            </label>
            <label class=css::debugRow>
                <input
                    type="checkbox"
                    prop:checked=move || prefs.with(|p| p.reduced_motion)
                    on:change=move |ev| {
                        motion.update(
                            PreferencesPatch::default()
                                .reduced_motion(event_target_checked(&ev))
                                .respect_system(false),
                        )
                    }
                />
                "Reduced motion"
            </label>
            <label class=css::debugRow>
                <input
                    type="checkbox"
                    prop:checked=move || prefs.with(|p| p.respect_system_preferences)
                    on:change=move |ev| {
                        motion.update(
                            PreferencesPatch::default().respect_system(event_target_checked(&ev)),
                        )
                    }
                />
                "Follow system setting"
            </label>
            <label class=css::debugRow>
                "Duration override (ms)"
                <input
                    type="text"
                    inputmode="numeric"
                    prop:value=move || prefs.with(|p| override_value(p.global_duration_override))
                    on:change=on_duration
                />
            </label>
            <label class=css::debugRow>
                "Delay override (ms)"
                <input
                    type="text"
                    inputmode="numeric"
                    prop:value=move || prefs.with(|p| override_value(p.global_delay_override))
                    on:change=on_delay
                />
            </label>

            <table class=css::debugTable>
                <thead>
                    <tr>
                        <th>"type"</th>
                        <th>"duration"</th>
                        <th>"delay"</th>
                        <th>"easing"</th>
                        <th>"threshold"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>

            <textarea
                class=css::debugTransfer
                placeholder="Exported configuration appears here; paste one to import"
                prop:value=move || transfer.get()
                on:input=move |ev| transfer.set(event_target_value(&ev))
            />

            <div class=css::debugActions>
                <button class=css::iconButton on:click=on_export title="Export">
                    <Icon icon=ic::EXPORT />
                </button>
                <button class=css::iconButton on:click=on_import title="Import">
                    <Icon icon=ic::IMPORT />
                </button>
                <button class=css::iconButton on:click=on_reset title="Reset to defaults">
                    <Icon icon=ic::RESET />
                </button>
            </div>

            {move || message.get().map(|text| view! { <p class=css::debugMessage>{text}</p> })}
        </aside>
    }
}
