//! Interactive icon cloud.
//!
//! A canvas of icons that slowly rotates, scatters away from the pointer and
//! can be dragged to spin. Layout and physics live in
//! [`crate::core::icon_cloud`]; this module owns the canvas, the frame loop
//! and the pointer wiring.

mod canvas;

pub use canvas::{CanvasSurface, IconAsset, ImageState, prepare_canvas};

use leptos::html;
use leptos::prelude::*;

use crate::components::motion::use_motion;
use crate::config::icon_cloud::DEFAULT_SIZE;
use crate::core::icon_cloud::{CloudState, render_cloud};
use crate::models::{Density, IconSource};
use crate::utils::{AnimationFrameLoop, dom};

stylance::import_crate_style!(css, "src/components/icon_cloud/icon_cloud.module.css");

/// Icon cloud drawn to a `size` x `size` canvas.
///
/// `icons` and `images` are concatenated; image URLs are labelled with their
/// file stem. Only as many icons as the size and density allow are shown.
/// Auto-rotation pauses while motion is reduced or disabled.
#[component]
pub fn IconCloud(
    #[prop(optional)] icons: Vec<IconSource>,
    #[prop(optional)] images: Vec<String>,
    #[prop(default = DEFAULT_SIZE)] size: u32,
    #[prop(optional)] density: Density,
    #[prop(default = true)] interactive: bool,
    #[prop(default = true)] auto_rotate: bool,
) -> impl IntoView {
    let motion = use_motion();

    let sources: Vec<IconSource> = icons
        .into_iter()
        .chain(images.into_iter().map(IconSource::image))
        .collect();
    if sources.is_empty() {
        log::debug!("icon cloud mounted without icons");
    }
    let labels: Vec<String> = sources.iter().map(|s| s.label().to_string()).collect();

    let state = StoredValue::new(CloudState::new(
        size,
        density,
        sources.len(),
        interactive,
        auto_rotate && motion.should_animate(),
    ));
    let assets = StoredValue::new_local(sources.iter().map(IconAsset::load).collect::<Vec<_>>());
    let frame_loop = StoredValue::new_local(None::<AnimationFrameLoop>);
    let canvas_ref = NodeRef::<html::Canvas>::new();

    let hovered = RwSignal::new(None::<usize>);
    let pointer = RwSignal::new((0.0_f64, 0.0_f64));

    // Start drawing once the canvas is attached.
    Effect::new(move |_| {
        let Some(element) = canvas_ref.get() else {
            return;
        };
        if frame_loop.with_value(|l| l.is_some()) {
            return;
        }
        let Some(ctx) = prepare_canvas(&element, size) else {
            log::warn!("2D canvas context unavailable; icon cloud not drawn");
            return;
        };

        let draw = move |now_ms: f64| {
            let advanced = state.try_update_value(|s| s.tick(now_ms)).unwrap_or(false);
            if !advanced {
                return;
            }
            assets.try_with_value(|assets| {
                state.try_with_value(|s| render_cloud(s, &mut CanvasSurface::new(&ctx, assets)))
            });
        };
        draw(dom::now_ms());

        let frames = AnimationFrameLoop::new(draw);
        frames.start();
        frame_loop.set_value(Some(frames));
    });

    // Motion preferences can change while mounted.
    Effect::new(move |_| {
        let animate = motion.should_animate();
        state.update_value(|s| s.auto_rotate = auto_rotate && animate);
    });

    on_cleanup(move || {
        if let Some(Some(frames)) = frame_loop.try_update_value(Option::take) {
            frames.stop();
        }
    });

    let position =
        |ev: &leptos::ev::PointerEvent| (f64::from(ev.offset_x()), f64::from(ev.offset_y()));

    let on_move = move |ev: leptos::ev::PointerEvent| {
        let (x, y) = position(&ev);
        let hit = state.try_update_value(|s| {
            s.pointer_move(x, y);
            s.hovered()
        });
        pointer.set((x, y));
        if hit.flatten() != hovered.get_untracked() {
            hovered.set(hit.flatten());
        }
    };
    let on_down = move |ev: leptos::ev::PointerEvent| {
        let (x, _) = position(&ev);
        state.update_value(|s| s.pointer_down(x));
    };
    let on_up = move |_: leptos::ev::PointerEvent| {
        state.update_value(|s| s.pointer_up());
    };
    let on_leave = move |_: leptos::ev::PointerEvent| {
        state.update_value(|s| s.pointer_leave());
        hovered.set(None);
    };

    let tooltip = move || {
        let label = hovered.get().and_then(|id| labels.get(id).cloned())?;
        let (x, y) = pointer.get();
        Some(view! {
            <div class=css::tooltip style=format!("left: {x}px; top: {y}px;") role="tooltip">
                {label}
            </div>
        })
    };

    let side = format!("width: {size}px; height: {size}px;");

    view! {
        <div class=css::cloud style=side.clone()>
            <canvas
                node_ref=canvas_ref
                class=css::canvas
                style=side.clone()
                data-interactive=interactive.to_string()
                on:pointermove=on_move
                on:pointerdown=on_down
                on:pointerup=on_up
                on:pointerleave=on_leave
            />
            {tooltip}
        </div>
    }
}
