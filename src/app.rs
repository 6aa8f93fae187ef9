//! Root application module.
//!
//! Builds the single [`MotionSettings`] store, wires the OS reduced-motion
//! signal into it, provides the [`MotionContext`] and renders the page.

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::components::{Cascade, IconCloud, MotionContext, MotionDebug, MotionToggle, Reveal};
use crate::config::{APP_NAME, APP_VERSION, REDUCED_MOTION_QUERY};
use crate::core::MotionSettings;
use crate::models::{AnimationOverrides, ContentType, Density, IconSource, RevealEffect};
use crate::utils::{BrowserStorage, MemoryStorage, dom};

stylance::import_crate_style!(css, "src/app.module.css");

/// Create the motion context for this page.
///
/// The OS reduced-motion setting is read synchronously so the first render
/// already honours it. Preferences persist to localStorage when it is
/// available and live in memory otherwise.
pub fn motion_context() -> MotionContext {
    let system_reduced_motion = dom::match_media(REDUCED_MOTION_QUERY).unwrap_or(false);
    let settings = if dom::local_storage().is_some() {
        MotionSettings::load(BrowserStorage, system_reduced_motion)
    } else {
        log::warn!("localStorage unavailable; motion preferences will not persist");
        MotionSettings::load(MemoryStorage::new(), system_reduced_motion)
    };
    log::info!(
        "motion enabled: {} (system reduced: {system_reduced_motion})",
        settings.should_animate()
    );
    MotionContext::new(settings)
}

/// Root application component.
///
/// This component:
/// - Creates and provides the global MotionContext
/// - Forwards later OS reduced-motion changes to it
/// - Renders the portfolio page
#[component]
pub fn App() -> impl IntoView {
    let motion = motion_context();
    provide_context(motion);

    let system_reduced = use_media_query(REDUCED_MOTION_QUERY);
    // The query signal starts out false until it settles; ignore it until it
    // agrees with a direct read.
    Effect::new(move |settled: Option<bool>| {
        let reduced = system_reduced.get();
        let settled = settled.unwrap_or(false)
            || Some(reduced) == dom::match_media(REDUCED_MOTION_QUERY);
        if settled {
            motion.set_system_reduced_motion(reduced);
        }
        settled
    });

    view! { <Portfolio /> }
}

// ============================================================================
// Page
// ============================================================================

#[derive(Clone, Debug)]
struct Project {
    title: &'static str,
    summary: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Terminal homepage",
        summary: "A shell-style personal site compiled to WebAssembly.",
    },
    Project {
        title: "Blog engine",
        summary: "Markdown posts with static rendering and feeds.",
    },
    Project {
        title: "Sensor dashboard",
        summary: "Live charts for a few home-built air quality sensors.",
    },
    Project {
        title: "Photo archive",
        summary: "Tagging and search over a decade of photos.",
    },
    Project {
        title: "CLI toolkit",
        summary: "Small command line utilities for daily chores.",
    },
];

fn skill_icons() -> Vec<IconSource> {
    [
        ("\u{1F980}", "Rust"),
        ("\u{1F310}", "WebAssembly"),
        ("\u{1F5C4}", "Databases"),
        ("\u{1F427}", "Linux"),
        ("\u{1F433}", "Containers"),
        ("\u{2699}", "Systems"),
        ("\u{1F4E1}", "Networking"),
        ("\u{1F512}", "Security"),
        ("\u{1F4CA}", "Data"),
        ("\u{1F3A8}", "Design"),
        ("\u{1F9EA}", "Testing"),
        ("\u{1F4DD}", "Writing"),
    ]
    .into_iter()
    .map(|(glyph, label)| IconSource::glyph(glyph, label))
    .collect()
}

/// Single-page portfolio exercising every motion component.
#[component]
fn Portfolio() -> impl IntoView {
    view! {
        <div class=css::page>
            <header class=css::header>
                <span class=css::brand>{APP_NAME}</span>
                <MotionToggle />
            </header>

            <main class=css::main>
                <section class=css::hero>
                    <Reveal content_type=ContentType::Text>
                        <h1>"Hi, I build things for the web."</h1>
                    </Reveal>
                    <Reveal
                        content_type=ContentType::Text
                        overrides=AnimationOverrides::default().delay(200)
                    >
                        <p>"Mostly Rust, mostly in the browser, sometimes on tiny machines."</p>
                    </Reveal>
                    <Reveal content_type=ContentType::Button>
                        <a class=css::cta href="#projects">"See projects"</a>
                    </Reveal>
                </section>

                <section id="projects" class=css::section>
                    <Reveal content_type=ContentType::Text effect=RevealEffect::SlideLeft>
                        <h2>"Projects"</h2>
                    </Reveal>
                    <Cascade
                        items=PROJECTS.to_vec()
                        render=|project: Project| view! {
                            <article class=css::card>
                                <h3>{project.title}</h3>
                                <p>{project.summary}</p>
                            </article>
                        }
                    />
                </section>

                <section class=css::section>
                    <Reveal content_type=ContentType::Text>
                        <h2>"Skills"</h2>
                    </Reveal>
                    <Reveal content_type=ContentType::Interactive>
                        <IconCloud icons=skill_icons() size=420 density=Density::Medium />
                    </Reveal>
                </section>
            </main>

            <footer class=css::footer>{format!("{APP_NAME} v{APP_VERSION}")}</footer>
            <MotionDebug />
        </div>
    }
}
