//! Drawing an icon cloud onto an abstract surface.
//!
//! [`render_cloud`] decides what to draw and where; a [`CloudSurface`]
//! decides how. The browser implementation draws to a 2D canvas.

use super::layout::max_radius;
use super::physics::CloudState;
use crate::config::icon_cloud::DEPTH_AMPLITUDE;

/// Drop shadow under an icon disk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
}

/// Drawing primitives used by the cloud renderer.
pub trait CloudSurface {
    /// Clear the whole `size` x `size` surface.
    fn clear(&mut self, size: f64);
    /// Decorative dashed ring; `rotation` shifts the dash pattern.
    fn ring(&mut self, cx: f64, cy: f64, radius: f64, rotation: f64, alpha: f64);
    /// Soft radial glow behind an icon.
    fn glow(&mut self, x: f64, y: f64, radius: f64, intensity: f64);
    /// Translucent icon disk.
    fn disk(&mut self, x: f64, y: f64, radius: f64, opacity: f64, shadow: Shadow);
    /// Gradient border around a disk.
    fn border(&mut self, x: f64, y: f64, radius: f64, opacity: f64, emphasized: bool);
    /// Icon content for `slot`.
    fn icon(&mut self, slot: usize, x: f64, y: f64, radius: f64, opacity: f64);
}

const RING_FRACTIONS: [f64; 3] = [0.55, 0.8, 1.05];
const SHADOW_DISTANCE: f64 = 3.0;
const SHADOW_INDEX_PHASE: f64 = 0.7;
/// Scale change at full depth.
const DEPTH_SCALE: f64 = 0.1;

/// Draw one frame of `state`.
///
/// Icons are drawn back to front so nearer ones overlap farther ones.
pub fn render_cloud(state: &CloudState, surface: &mut impl CloudSurface) {
    let size = f64::from(state.size());
    let center = size / 2.0;
    let rotation = state.rotation();

    surface.clear(size);

    let outer = max_radius(state.size());
    for (k, fraction) in RING_FRACTIONS.iter().enumerate() {
        let direction = if k % 2 == 0 { 1.0 } else { -1.0 };
        let ring_rotation = rotation * direction * (1.0 + k as f64 * 0.5);
        let alpha = 0.15 - k as f64 * 0.04;
        surface.ring(center, center, outer * fraction, ring_rotation, alpha);
    }

    let mut order: Vec<_> = state.icons().iter().collect();
    order.sort_by(|a, b| a.current_z.total_cmp(&b.current_z));

    let base_radius = state.icon_radius();
    let hovered = state.hovered();
    for icon in order {
        let is_hovered = hovered == Some(icon.id);
        let depth = 1.0 + icon.current_z / DEPTH_AMPLITUDE * DEPTH_SCALE;
        let radius = base_radius * icon.scale * depth;
        let (x, y) = (icon.current_x, icon.current_y);

        let (glow_radius, glow_intensity) = if is_hovered {
            (radius * 2.2, 0.6)
        } else {
            (radius * 1.6, 0.25)
        };
        surface.glow(x, y, glow_radius, glow_intensity * icon.opacity);

        let phase = rotation + icon.id as f64 * SHADOW_INDEX_PHASE;
        let shadow = Shadow {
            offset_x: phase.cos() * SHADOW_DISTANCE,
            offset_y: phase.sin() * SHADOW_DISTANCE,
            blur: if is_hovered { 14.0 } else { 8.0 },
        };
        surface.disk(x, y, radius, icon.opacity, shadow);
        surface.border(x, y, radius, icon.opacity, is_hovered);
        surface.icon(icon.id, x, y, radius * 0.6, icon.opacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Density;

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear,
        Ring,
        Glow { radius: f64 },
        Disk { shadow: Shadow },
        Border { emphasized: bool },
        Icon { slot: usize },
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl CloudSurface for Recorder {
        fn clear(&mut self, _size: f64) {
            self.ops.push(Op::Clear);
        }
        fn ring(&mut self, _cx: f64, _cy: f64, _radius: f64, _rotation: f64, _alpha: f64) {
            self.ops.push(Op::Ring);
        }
        fn glow(&mut self, _x: f64, _y: f64, radius: f64, _intensity: f64) {
            self.ops.push(Op::Glow { radius });
        }
        fn disk(&mut self, _x: f64, _y: f64, _radius: f64, _opacity: f64, shadow: Shadow) {
            self.ops.push(Op::Disk { shadow });
        }
        fn border(&mut self, _x: f64, _y: f64, _radius: f64, _opacity: f64, emphasized: bool) {
            self.ops.push(Op::Border { emphasized });
        }
        fn icon(&mut self, slot: usize, _x: f64, _y: f64, _radius: f64, _opacity: f64) {
            self.ops.push(Op::Icon { slot });
        }
    }

    #[test]
    fn test_frame_structure() {
        let state = CloudState::new(200, Density::Low, 4, true, true);
        let mut surface = Recorder::default();
        render_cloud(&state, &mut surface);

        assert_eq!(surface.ops[0], Op::Clear);
        assert_eq!(surface.ops.iter().filter(|op| **op == Op::Ring).count(), 3);
        let icons: Vec<usize> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Icon { slot } => Some(*slot),
                _ => None,
            })
            .collect();
        // Flat grid: equal depth keeps layout order.
        assert_eq!(icons, vec![0, 1, 2, 3]);
        // glow, disk, border, icon per slot
        assert_eq!(surface.ops.len(), 1 + 3 + 4 * 4);
    }

    #[test]
    fn test_hovered_icon_emphasized() {
        let mut state = CloudState::new(200, Density::Low, 4, true, true);
        let target = state.icons()[2].clone();
        state.pointer_move(target.current_x, target.current_y);
        assert_eq!(state.hovered(), Some(2));

        let mut surface = Recorder::default();
        render_cloud(&state, &mut surface);

        let glows: Vec<f64> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Glow { radius } => Some(*radius),
                _ => None,
            })
            .collect();
        let emphasized: Vec<bool> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Border { emphasized } => Some(*emphasized),
                _ => None,
            })
            .collect();
        assert_eq!(emphasized, vec![false, false, true, false]);
        assert!(glows[2] > glows[0]);
    }

    #[test]
    fn test_shadow_depends_on_index_and_rotation() {
        let mut state = CloudState::new(200, Density::Low, 2, false, true);
        let mut first = Recorder::default();
        render_cloud(&state, &mut first);
        state.step();
        let mut second = Recorder::default();
        render_cloud(&state, &mut second);

        let shadows = |r: &Recorder| -> Vec<Shadow> {
            r.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Disk { shadow } => Some(*shadow),
                    _ => None,
                })
                .collect()
        };
        let a = shadows(&first);
        let b = shadows(&second);
        assert_ne!(a[0], a[1]);
        assert_ne!(a[0], b[0]);
    }

    #[test]
    fn test_back_to_front_order() {
        let state = CloudState::new(400, Density::Medium, 8, true, true);
        let mut surface = Recorder::default();
        render_cloud(&state, &mut surface);

        let depth: Vec<f64> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Icon { slot } => Some(state.icons()[*slot].current_z),
                _ => None,
            })
            .collect();
        assert!(depth.windows(2).all(|w| w[0] <= w[1]));
    }
}
