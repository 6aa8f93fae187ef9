//! Motion layer of a personal portfolio site.
//!
//! Scroll-triggered reveals, staggered cascades and an interactive icon
//! cloud, all governed by one set of user motion preferences that follows
//! the OS reduced-motion setting unless the user overrides it.
//!
//! - [`models`] - Plain data types
//! - [`core`] - DOM-free logic: config resolution, preferences, visibility, icon cloud
//! - [`components`] - Leptos components and hooks
//! - [`utils`] - Browser API helpers

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use app::App;
pub use crate::core::{MotionSettings, assign_cascade_delays, resolve_animation_config};
