//! Data models and types for the motion layer.
//!
//! Contains domain types for:
//! - [`AnimationConfig`], [`AnimationOverrides`], [`ContentType`], [`Easing`] - Reveal timing
//! - [`RevealEffect`], [`EffectStyle`] - Hidden-state styles per content type
//! - [`AnimationPreferences`], [`PreferencesPatch`], [`MotionFlag`] - User motion preferences
//! - [`VisibilityMode`], [`VisibilityOptions`] - Viewport observation settings
//! - [`IconPosition`], [`IconSource`], [`Density`], [`CloudLayout`] - Icon cloud state

mod animation;
mod icon_cloud;
mod preferences;
mod visibility;

pub use animation::{
    AnimationConfig, AnimationOverrides, ContentType, Easing, EffectStyle, RevealEffect,
};
pub use icon_cloud::{CloudLayout, Density, IconPosition, IconSource};
pub use preferences::{AnimationPreferences, MotionFlag, PreferencesPatch};
pub use visibility::{VisibilityMode, VisibilityOptions};
