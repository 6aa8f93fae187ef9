//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! User-adjustable motion preferences live in localStorage (see
//! [`crate::core::MotionSettings`]); everything here is fixed at compile time.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the page header.
pub const APP_NAME: &str = "folio";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Persistence
// =============================================================================

/// localStorage keys for motion preferences.
///
/// Both keys are written on every preference mutation. The JSON blob is the
/// source of truth; the legacy flag only seeds `reduced_motion` when the blob
/// is missing or unreadable.
pub mod storage {
    /// Versioned JSON blob holding preferences and the content-type table.
    pub const CONFIG_KEY: &str = "folio.motion.config";
    /// Legacy two-value flag: `"reduced"` or `"normal"`.
    pub const LEGACY_FLAG_KEY: &str = "folio.motion";
    /// Current version of the JSON blob format.
    pub const CONFIG_VERSION: u32 = 1;
}

/// Media query matching the OS-level reduced-motion setting.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Reveal Defaults
// =============================================================================

/// Per content-type animation defaults (milliseconds).
pub mod reveal {
    pub const TEXT_DURATION_MS: u32 = 600;
    pub const TEXT_DELAY_MS: u32 = 0;

    pub const IMAGE_DURATION_MS: u32 = 800;
    pub const IMAGE_DELAY_MS: u32 = 100;

    pub const INTERACTIVE_DURATION_MS: u32 = 400;
    pub const INTERACTIVE_DELAY_MS: u32 = 0;

    pub const CARD_DURATION_MS: u32 = 700;
    pub const CARD_DELAY_MS: u32 = 150;

    pub const BUTTON_DURATION_MS: u32 = 300;
    pub const BUTTON_DELAY_MS: u32 = 0;

    /// Root margin shrinking the viewport bottom so reveals start slightly
    /// after the element scrolls in.
    pub const DEFAULT_VIEWPORT_MARGIN: &str = "0px 0px -50px 0px";
}

/// Cascade (stagger) defaults.
pub mod cascade {
    /// Delay added per item in a cascade.
    pub const DEFAULT_INCREMENT_MS: u32 = 100;
    /// Upper bound on any single item's cascade delay.
    pub const DEFAULT_MAX_DELAY_MS: u32 = 800;
}

// =============================================================================
// Icon Cloud
// =============================================================================

/// Icon cloud layout and physics tuning.
pub mod icon_cloud {
    /// Canvas side used when no size is given.
    pub const DEFAULT_SIZE: u32 = 400;

    /// Sizes below this use the grid layout.
    pub const GRID_MAX_SIZE: u32 = 300;
    /// Sizes below this (and at least `GRID_MAX_SIZE`) use the circle layout.
    pub const CIRCLE_MAX_SIZE: u32 = 500;

    /// One icon slot per this many pixels of canvas side.
    pub const PIXELS_PER_ICON: u32 = 30;

    /// Icon budget per density setting.
    pub const LOW_DENSITY_COUNT: usize = 12;
    pub const MEDIUM_DENSITY_COUNT: usize = 16;
    pub const HIGH_DENSITY_COUNT: usize = 24;

    /// Layout radius as a fraction of canvas side.
    pub const MAX_RADIUS_RATIO: f64 = 0.4;
    /// Circle ring radius as a fraction of the layout radius.
    pub const CIRCLE_RING_RATIO: f64 = 0.7;
    /// Angle step between consecutive spiral icons (radians).
    pub const SPIRAL_ANGLE_STEP: f64 = 0.5;
    /// Amplitude of the pseudo-3D depth wobble (pixels).
    pub const DEPTH_AMPLITUDE: f64 = 20.0;

    /// Icon disk radius as a fraction of canvas side.
    pub const ICON_RADIUS_RATIO: f64 = 0.045;

    /// Minimum time between rendered frames (~60fps).
    pub const FRAME_INTERVAL_MS: f64 = 16.0;
    /// Rotation target advance per frame while auto-rotating.
    pub const AUTO_ROTATE_STEP: f64 = 0.005;
    /// Exponential easing rate of the rotation toward its target.
    pub const ROTATION_EASING: f64 = 0.1;
    /// Rotation per pixel of horizontal drag.
    pub const DRAG_ROTATION_PER_PX: f64 = 0.01;

    /// Per-frame relaxation rates toward targets.
    pub const POSITION_RELAXATION: f64 = 0.15;
    pub const SCALE_RELAXATION: f64 = 0.2;
    pub const OPACITY_RELAXATION: f64 = 0.1;

    /// Pointer influence radius as a fraction of canvas side.
    pub const INFLUENCE_RATIO: f64 = 0.15;
    /// Displacement at full push strength, as a fraction of the influence radius.
    pub const PUSH_DISTANCE_RATIO: f64 = 0.6;
    /// Extra scale at full push strength.
    pub const PUSH_SCALE_GAIN: f64 = 0.3;
    /// Opacity lost at full push strength.
    pub const PUSH_OPACITY_LOSS: f64 = 0.4;

    /// Glyph drawn in place of an image icon that failed to load.
    pub const FALLBACK_GLYPH: &str = "\u{25C6}";
}
