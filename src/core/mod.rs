//! Core motion logic, independent of the DOM.
//!
//! This module provides:
//! - [`resolve_animation_config`] and the [`ContentTypeTable`] of per-type defaults
//! - [`MotionSettings`] - persisted, subscribable motion preferences
//! - [`assign_cascade_delays`] - staggered reveal delays
//! - [`Visibility`] - latched / toggling viewport visibility state machine
//! - [`icon_cloud`] - layout, physics and rendering of the icon cloud

mod cascade;
pub mod error;
pub mod icon_cloud;
mod resolver;
mod settings;
mod visibility;

pub use cascade::{assign_cascade_delays, cascade_delay};
pub use resolver::{
    builtin_default, default_effect, effect_style, resolve_animation_config, ContentTypeTable,
};
pub use settings::{MotionSettings, SubscriptionId};
pub use visibility::{skips_observation, LatchedVisibility, TogglingVisibility, Transition, Visibility};
