//! Motion layer components.
//!
//! - [`MotionContext`] - Reactive preferences provided at the root
//! - [`use_visibility`] - Viewport visibility signal for an element
//! - [`Reveal`] - Scroll-triggered reveal wrapper
//! - [`Cascade`] - Staggered group of reveals
//! - [`MotionToggle`], [`MotionDebug`] - User controls

mod cascade;
mod context;
mod debug;
mod hooks;
mod reveal;
mod toggle;

pub use cascade::Cascade;
pub use context::{MotionContext, use_motion};
pub use debug::MotionDebug;
pub use hooks::{use_visibility, use_visibility_with};
pub use reveal::{Reveal, reveal_style};
pub use toggle::MotionToggle;
