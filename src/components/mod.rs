//! UI components built with Leptos.
//!
//! - [`motion`] - Motion context, reveal wrappers, cascades and controls
//! - [`icon_cloud`] - Interactive canvas icon cloud
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icon_cloud;
pub mod icons;
pub mod motion;

pub use icon_cloud::IconCloud;
pub use motion::{
    Cascade, MotionContext, MotionDebug, MotionToggle, Reveal, use_motion, use_visibility,
};
