//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBug as Debug, LuCirclePause as MotionOff, LuCirclePlay as MotionOn,
        LuDownload as Export, LuRotateCcw as Reset, LuUpload as Import, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowCounterclockwise as Reset, BsBug as Debug, BsDownload as Export,
        BsPauseCircle as MotionOff, BsPlayCircle as MotionOn, BsUpload as Import,
        BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(MOTION_ON, MotionOn);
themed_icon!(MOTION_OFF, MotionOff);
themed_icon!(DEBUG, Debug);
themed_icon!(EXPORT, Export);
themed_icon!(IMPORT, Import);
themed_icon!(RESET, Reset);
themed_icon!(CLOSE, Close);
