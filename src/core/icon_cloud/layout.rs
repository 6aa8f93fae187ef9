//! Icon placement for the three cloud layouts.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::config::icon_cloud as cfg;
use crate::models::{CloudLayout, Density, IconPosition};

/// Number of icon slots shown for a canvas.
///
/// Bounded by the density budget, one slot per [`cfg::PIXELS_PER_ICON`] of
/// side, and the number of items actually supplied.
pub fn icon_count(size: u32, density: Density, available: usize) -> usize {
    let by_size = usize::try_from(size / cfg::PIXELS_PER_ICON).unwrap_or(usize::MAX);
    density.base_count().min(by_size).min(available)
}

/// Radius of the area icons are laid out in.
pub fn max_radius(size: u32) -> f64 {
    f64::from(size) * cfg::MAX_RADIUS_RATIO
}

/// Compute resting positions for every visible icon.
pub fn compute_layout(size: u32, density: Density, available: usize) -> Vec<IconPosition> {
    let count = icon_count(size, density, available);
    let layout = CloudLayout::for_size(size);
    let center = f64::from(size) / 2.0;
    let radius = max_radius(size);

    (0..count)
        .map(|i| {
            let (x, y, z) = match layout {
                CloudLayout::Grid => grid_slot(i, count, radius),
                CloudLayout::Circle => circle_slot(i, count, radius),
                CloudLayout::Spiral => spiral_slot(i, count, radius),
            };
            IconPosition::at(i, center + x, center + y, z)
        })
        .collect()
}

/// Square sub-grid centred inside the layout radius. Flat (no depth).
fn grid_slot(i: usize, count: usize, radius: f64) -> (f64, f64, f64) {
    let cols = (count as f64).sqrt().ceil().max(1.0) as usize;
    let rows = count.div_ceil(cols);
    let cell = 2.0 * radius / cols as f64;

    let col = (i % cols) as f64;
    let row = (i / cols) as f64;
    let grid_height = rows as f64 * cell;

    let x = -radius + cell * (col + 0.5);
    let y = -grid_height / 2.0 + cell * (row + 0.5);
    (x, y, 0.0)
}

/// Even angular spacing on one ring, starting at twelve o'clock.
fn circle_slot(i: usize, count: usize, radius: f64) -> (f64, f64, f64) {
    let ring = radius * cfg::CIRCLE_RING_RATIO;
    let angle = TAU * i as f64 / count as f64 - FRAC_PI_2;
    let z = (2.0 * angle).sin() * cfg::DEPTH_AMPLITUDE;
    (ring * angle.cos(), ring * angle.sin(), z)
}

/// Archimedean-style spiral: radius grows linearly with the index.
fn spiral_slot(i: usize, count: usize, radius: f64) -> (f64, f64, f64) {
    let angle = i as f64 * cfg::SPIRAL_ANGLE_STEP;
    let r = radius * i as f64 / count as f64;
    let z = (3.0 * angle).sin() * cfg::DEPTH_AMPLITUDE;
    (r * angle.cos(), r * angle.sin(), z)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance_from_center(p: &IconPosition, size: u32) -> f64 {
        let c = f64::from(size) / 2.0;
        (p.original_x - c).hypot(p.original_y - c)
    }

    #[test]
    fn test_grid_count_for_small_canvas() {
        for density in [Density::Low, Density::Medium, Density::High] {
            let icons = compute_layout(200, density, 100);
            assert_eq!(icons.len(), density.base_count().min(6));
        }
    }

    #[test]
    fn test_count_limited_by_items() {
        assert_eq!(icon_count(600, Density::High, 5), 5);
        assert_eq!(compute_layout(600, Density::High, 0).len(), 0);
    }

    #[test]
    fn test_count_limited_by_density() {
        assert_eq!(icon_count(1200, Density::Low, 100), 12);
        assert_eq!(icon_count(1200, Density::High, 100), 24);
    }

    #[test]
    fn test_spiral_radii_non_decreasing() {
        let icons = compute_layout(600, Density::High, 100);
        assert_eq!(icons.len(), 20);
        let radii: Vec<f64> = icons.iter().map(|p| distance_from_center(p, 600)).collect();
        assert!(radii.windows(2).all(|w| w[1] + 1e-9 >= w[0]), "{radii:?}");
    }

    #[test]
    fn test_circle_on_ring() {
        let size = 400;
        let icons = compute_layout(size, Density::Medium, 100);
        let ring = max_radius(size) * cfg::CIRCLE_RING_RATIO;
        for icon in &icons {
            assert!((distance_from_center(icon, size) - ring).abs() < 1e-9);
            assert!(icon.current_z.abs() <= cfg::DEPTH_AMPLITUDE);
        }
    }

    #[test]
    fn test_grid_inside_layout_radius() {
        let size = 250;
        let radius = max_radius(size);
        let c = f64::from(size) / 2.0;
        for icon in compute_layout(size, Density::High, 100) {
            assert!((icon.original_x - c).abs() <= radius);
            assert!((icon.original_y - c).abs() <= radius);
            assert_eq!(icon.current_z, 0.0);
        }
    }

    #[test]
    fn test_icons_start_at_rest() {
        for icon in compute_layout(450, Density::Medium, 100) {
            assert_eq!(icon.current_x, icon.original_x);
            assert_eq!(icon.target_y, icon.original_y);
            assert_eq!(icon.scale, 1.0);
        }
    }
}
