//! Interactive icon cloud.
//!
//! - [`layout`] - Grid, circle and spiral placement chosen by canvas size
//! - [`physics`] - Rotation, pointer repulsion and spring-like relaxation
//! - [`render`] - Frame drawing through the [`CloudSurface`] trait

mod layout;
mod physics;
mod render;

pub use layout::{compute_layout, icon_count, max_radius};
pub use physics::{push_strength, relax, CloudState};
pub use render::{render_cloud, CloudSurface, Shadow};
