//! Per-frame cloud state: rotation, pointer repulsion and relaxation.

use super::layout::compute_layout;
use crate::config::icon_cloud as cfg;
use crate::models::{Density, IconPosition};

/// Push strength for an icon `distance` away from the pointer.
///
/// `1.0` at the pointer, falling linearly to `0.0` at the influence radius
/// and beyond.
pub fn push_strength(distance: f64, radius: f64) -> f64 {
    if radius <= 0.0 || distance >= radius {
        0.0
    } else {
        (radius - distance.max(0.0)) / radius
    }
}

/// One exponential relaxation step.
#[inline]
pub fn relax(current: f64, target: f64, rate: f64) -> f64 {
    current + (target - current) * rate
}

/// Mutable state of one icon cloud.
#[derive(Clone, Debug)]
pub struct CloudState {
    size: u32,
    icons: Vec<IconPosition>,
    rotation: f64,
    target_rotation: f64,
    hovered: Option<usize>,
    /// Last pointer x while dragging.
    drag_x: Option<f64>,
    last_frame_ms: Option<f64>,
    pub interactive: bool,
    pub auto_rotate: bool,
}

impl CloudState {
    pub fn new(
        size: u32,
        density: Density,
        available: usize,
        interactive: bool,
        auto_rotate: bool,
    ) -> Self {
        Self {
            size,
            icons: compute_layout(size, density, available),
            rotation: 0.0,
            target_rotation: 0.0,
            hovered: None,
            drag_x: None,
            last_frame_ms: None,
            interactive,
            auto_rotate,
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn icons(&self) -> &[IconPosition] {
        &self.icons
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn hovered_icon(&self) -> Option<&IconPosition> {
        self.hovered.and_then(|id| self.icons.iter().find(|p| p.id == id))
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_x.is_some()
    }

    /// Pointer influence radius (15% of the canvas side).
    pub fn influence_radius(&self) -> f64 {
        f64::from(self.size) * cfg::INFLUENCE_RATIO
    }

    /// Unscaled radius of an icon disk.
    pub fn icon_radius(&self) -> f64 {
        f64::from(self.size) * cfg::ICON_RADIUS_RATIO
    }

    pub fn pointer_down(&mut self, x: f64) {
        if self.interactive {
            self.drag_x = Some(x);
        }
    }

    pub fn pointer_up(&mut self) {
        self.drag_x = None;
    }

    /// Pointer moved to `(x, y)` in canvas coordinates.
    ///
    /// Icons within the influence radius of the pointer are re-targeted away
    /// from it; all others target their layout position.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if !self.interactive {
            return;
        }

        if let Some(last_x) = self.drag_x {
            self.target_rotation += (x - last_x) * cfg::DRAG_ROTATION_PER_PX;
            self.drag_x = Some(x);
        }

        let radius = self.influence_radius();
        let center = f64::from(self.size) / 2.0;
        for icon in &mut self.icons {
            let dx = icon.original_x - x;
            let dy = icon.original_y - y;
            let distance = dx.hypot(dy);
            let strength = push_strength(distance, radius);
            if strength <= 0.0 {
                icon.retarget_home();
                continue;
            }

            let (ux, uy) = push_direction(icon, dx, dy, distance, center);
            let offset = strength * radius * cfg::PUSH_DISTANCE_RATIO;
            icon.target_x = icon.original_x + ux * offset;
            icon.target_y = icon.original_y + uy * offset;
            icon.target_scale = 1.0 + strength * cfg::PUSH_SCALE_GAIN;
            icon.target_opacity = 1.0 - strength * cfg::PUSH_OPACITY_LOSS;
        }

        self.hovered = self.hit_test(x, y);
    }

    /// Pointer left the cloud: every icon heads home.
    pub fn pointer_leave(&mut self) {
        self.hovered = None;
        self.drag_x = None;
        for icon in &mut self.icons {
            icon.retarget_home();
        }
    }

    /// Advance one frame if at least one frame interval has passed.
    ///
    /// Returns whether the state changed (and should be redrawn).
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_frame_ms
            && now_ms - last < cfg::FRAME_INTERVAL_MS
        {
            return false;
        }
        self.last_frame_ms = Some(now_ms);
        self.step();
        true
    }

    /// One ungated frame of rotation and relaxation.
    pub fn step(&mut self) {
        if self.auto_rotate && !self.is_dragging() {
            self.target_rotation += cfg::AUTO_ROTATE_STEP;
        }
        self.rotation = relax(self.rotation, self.target_rotation, cfg::ROTATION_EASING);

        for icon in &mut self.icons {
            icon.current_x = relax(icon.current_x, icon.target_x, cfg::POSITION_RELAXATION);
            icon.current_y = relax(icon.current_y, icon.target_y, cfg::POSITION_RELAXATION);
            icon.scale = relax(icon.scale, icon.target_scale, cfg::SCALE_RELAXATION);
            icon.opacity = relax(icon.opacity, icon.target_opacity, cfg::OPACITY_RELAXATION);
        }
    }

    /// Nearest icon whose disk contains `(x, y)`.
    fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        let base = self.icon_radius();
        self.icons
            .iter()
            .map(|p| (p.id, (p.current_x - x).hypot(p.current_y - y), base * p.scale))
            .filter(|(_, d, r)| d <= r)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _, _)| id)
    }
}

/// Unit vector pointing away from the pointer.
///
/// An icon exactly under the pointer is pushed outward from the canvas
/// centre, or along an index-derived angle if it sits on the centre too.
fn push_direction(icon: &IconPosition, dx: f64, dy: f64, distance: f64, center: f64) -> (f64, f64) {
    if distance > f64::EPSILON {
        return (dx / distance, dy / distance);
    }
    let ox = icon.original_x - center;
    let oy = icon.original_y - center;
    let from_center = ox.hypot(oy);
    if from_center > f64::EPSILON {
        (ox / from_center, oy / from_center)
    } else {
        let angle = icon.id as f64 * cfg::SPIRAL_ANGLE_STEP;
        (angle.cos(), angle.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cloud() -> CloudState {
        CloudState::new(400, Density::Medium, 16, true, true)
    }

    #[test]
    fn test_push_strength_extremes() {
        assert_eq!(push_strength(0.0, 60.0), 1.0);
        assert_eq!(push_strength(60.0, 60.0), 0.0);
        assert_eq!(push_strength(90.0, 60.0), 0.0);
        assert!((push_strength(30.0, 60.0) - 0.5).abs() < 1e-12);
        assert_eq!(push_strength(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_icon_under_pointer_gets_full_push() {
        let mut state = cloud();
        let icon = state.icons()[0].clone();
        state.pointer_move(icon.original_x, icon.original_y);

        let pushed = &state.icons()[0];
        let displacement =
            (pushed.target_x - icon.original_x).hypot(pushed.target_y - icon.original_y);
        let expected = state.influence_radius() * cfg::PUSH_DISTANCE_RATIO;
        assert!((displacement - expected).abs() < 1e-9);
        assert!((pushed.target_scale - (1.0 + cfg::PUSH_SCALE_GAIN)).abs() < 1e-12);
        assert!((pushed.target_opacity - (1.0 - cfg::PUSH_OPACITY_LOSS)).abs() < 1e-12);
    }

    #[test]
    fn test_far_icons_keep_original_target() {
        let mut state = cloud();
        state.pointer_move(-1000.0, -1000.0);
        for icon in state.icons() {
            assert_eq!((icon.target_x, icon.target_y), (icon.original_x, icon.original_y));
            assert_eq!(icon.target_scale, 1.0);
        }
    }

    #[test]
    fn test_pointer_leave_resets_targets() {
        let mut state = cloud();
        let c = f64::from(state.size()) / 2.0;
        state.pointer_move(c, c - 112.0);
        assert!(state
            .icons()
            .iter()
            .any(|p| (p.target_x, p.target_y) != (p.original_x, p.original_y)));

        state.pointer_leave();
        for icon in state.icons() {
            assert_eq!(icon.original_x, icon.target_x);
            assert_eq!(icon.original_y, icon.target_y);
        }
        assert_eq!(state.hovered(), None);
    }

    #[test]
    fn test_relaxation_returns_home() {
        let mut state = cloud();
        let icon = state.icons()[3].clone();
        state.pointer_move(icon.original_x + 1.0, icon.original_y);
        for _ in 0..10 {
            state.step();
        }
        let moved = &state.icons()[3];
        assert!((moved.current_x - moved.original_x).abs() > 1.0);

        state.pointer_leave();
        for _ in 0..200 {
            state.step();
        }
        let settled = &state.icons()[3];
        assert!((settled.current_x - settled.original_x).abs() < 1e-6);
        assert!((settled.scale - 1.0).abs() < 1e-6);
        assert!((settled.opacity - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_tick_is_frame_gated() {
        let mut state = cloud();
        assert!(state.tick(1000.0));
        assert!(!state.tick(1010.0));
        assert!(state.tick(1016.0));
    }

    #[test]
    fn test_auto_rotation_advances_unless_dragging() {
        let mut state = cloud();
        state.step();
        assert!(state.rotation() > 0.0);

        let mut still = cloud();
        still.pointer_down(10.0);
        still.step();
        assert_eq!(still.rotation(), 0.0);
        still.pointer_up();
        still.step();
        assert!(still.rotation() > 0.0);
    }

    #[test]
    fn test_drag_rotates() {
        let mut state = CloudState::new(400, Density::Medium, 16, true, false);
        state.pointer_down(100.0);
        state.pointer_move(150.0, 0.0);
        state.step();
        assert!(state.rotation() > 0.0);
    }

    #[test]
    fn test_non_interactive_ignores_pointer() {
        let mut state = CloudState::new(400, Density::Medium, 16, false, true);
        let icon = state.icons()[0].clone();
        state.pointer_move(icon.original_x, icon.original_y);
        assert_eq!(state.icons()[0], icon);
        assert_eq!(state.hovered(), None);
    }

    #[test]
    fn test_hover_picks_icon_under_pointer() {
        let mut state = cloud();
        let icon = state.icons()[5].clone();
        state.pointer_move(icon.current_x, icon.current_y);
        assert_eq!(state.hovered(), Some(5));
        assert_eq!(state.hovered_icon().map(|p| p.id), Some(5));
    }
}
