//! Browser-only checks, run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::any::Any;
use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use folio::MotionSettings;
use folio::app::motion_context;
use folio::components::motion::use_visibility_with;
use folio::config::REDUCED_MOTION_QUERY;
use folio::config::storage::{CONFIG_KEY, LEGACY_FLAG_KEY};
use folio::models::{AnimationPreferences, PreferencesPatch, VisibilityMode, VisibilityOptions};
use folio::utils::{AnimationFrameLoop, BrowserStorage, PreferenceStorage, dom};

wasm_bindgen_test_configure!(run_in_browser);

/// Time for a few frames and observer notifications to be delivered.
const SETTLE_MS: u32 = 200;

fn clear_storage() {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.remove_item(CONFIG_KEY);
        let _ = storage.remove_item(LEGACY_FLAG_KEY);
    }
}

fn attach_container() -> web_sys::HtmlElement {
    let container = document()
        .create_element("div")
        .unwrap()
        .unchecked_into::<web_sys::HtmlElement>();
    document().body().unwrap().append_child(&container).unwrap();
    container
}

/// Mount one observed element and return its visibility signal together with
/// the mount handle; dropping the handle unmounts.
fn mount_observed(
    container: &web_sys::HtmlElement,
    mode: VisibilityMode,
) -> (Signal<bool>, Box<dyn Any>) {
    let slot: Rc<Cell<Option<Signal<bool>>>> = Rc::default();
    let out = Rc::clone(&slot);
    let handle = mount_to(container.clone(), move || {
        let node = NodeRef::<html::Div>::new();
        let visible = use_visibility_with(
            node,
            VisibilityOptions {
                threshold: 0.0,
                root_margin: "0px".to_string(),
                mode,
            },
            Signal::stored(AnimationPreferences::default()),
        );
        out.set(Some(visible));
        view! { <div node_ref=node style="height: 40px;">"observed"</div> }
    });
    (slot.get().unwrap(), Box::new(handle))
}

#[wasm_bindgen_test]
fn browser_storage_reads_back_writes() {
    clear_storage();
    let storage = BrowserStorage;
    assert_eq!(storage.read(LEGACY_FLAG_KEY), None);
    storage.write(LEGACY_FLAG_KEY, "reduced").unwrap();
    assert_eq!(storage.read(LEGACY_FLAG_KEY).as_deref(), Some("reduced"));
    clear_storage();
}

#[wasm_bindgen_test]
fn preferences_survive_reload() {
    clear_storage();
    let mut settings = MotionSettings::load(BrowserStorage, false);
    settings.update(
        PreferencesPatch::default()
            .reduced_motion(true)
            .respect_system(false),
    );

    let reloaded = MotionSettings::load(BrowserStorage, false);
    assert!(reloaded.preferences().reduced_motion);
    assert!(!reloaded.should_animate());
    assert_eq!(BrowserStorage.read(LEGACY_FLAG_KEY).as_deref(), Some("reduced"));
    clear_storage();
}

#[wasm_bindgen_test]
fn startup_seed_follows_os_query() {
    clear_storage();
    let owner = Owner::new();
    owner.set();

    let os_reduced = dom::match_media(REDUCED_MOTION_QUERY).unwrap_or(false);
    let motion = motion_context();
    assert_eq!(motion.preferences.get_untracked().reduced_motion, os_reduced);
    assert_eq!(motion.should_animate(), !os_reduced);
    clear_storage();
}

#[wasm_bindgen_test]
fn frame_loop_start_stop() {
    let frames = AnimationFrameLoop::new(|_| {});
    frames.start();
    assert!(frames.is_running());
    frames.stop();
    assert!(!frames.is_running());
}

#[wasm_bindgen_test]
async fn dropped_frame_loop_never_fires_again() {
    let count = Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&count);
    let frames = AnimationFrameLoop::new(move |_| counter.set(counter.get() + 1));
    frames.start();

    TimeoutFuture::new(SETTLE_MS).await;
    assert!(count.get() > 0, "loop never ran");

    drop(frames);
    let at_drop = count.get();
    TimeoutFuture::new(SETTLE_MS).await;
    assert_eq!(count.get(), at_drop);
}

#[wasm_bindgen_test]
async fn once_trigger_stays_visible_after_leaving() {
    let container = attach_container();
    let (visible, handle) = mount_observed(&container, VisibilityMode::Once);

    TimeoutFuture::new(SETTLE_MS).await;
    assert!(visible.get_untracked());

    container
        .set_attribute("style", "position: absolute; top: -5000px;")
        .unwrap();
    TimeoutFuture::new(SETTLE_MS).await;
    assert!(visible.get_untracked());

    drop(handle);
    container.remove();
}

#[wasm_bindgen_test]
async fn toggle_trigger_hides_again_after_leaving() {
    let container = attach_container();
    let (visible, handle) = mount_observed(&container, VisibilityMode::Toggle);

    TimeoutFuture::new(SETTLE_MS).await;
    assert!(visible.get_untracked());

    container
        .set_attribute("style", "position: absolute; top: -5000px;")
        .unwrap();
    TimeoutFuture::new(SETTLE_MS).await;
    assert!(!visible.get_untracked());

    drop(handle);
    container.remove();
}
