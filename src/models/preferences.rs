use serde::{Deserialize, Serialize};

/// User-facing motion preferences shared by every animated component.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Master switch for all reveal and cloud animations.
    pub enabled: bool,
    /// Minimize motion: reveals become instant.
    pub reduced_motion: bool,
    /// Replaces every resolved duration when set.
    pub global_duration_override: Option<u32>,
    /// Replaces every resolved delay when set.
    pub global_delay_override: Option<u32>,
    /// Follow the OS reduced-motion setting while true.
    pub respect_system_preferences: bool,
    /// Show the motion debug panel.
    pub debug_visible: bool,
}

impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            enabled: true,
            reduced_motion: false,
            global_duration_override: None,
            global_delay_override: None,
            respect_system_preferences: true,
            debug_visible: false,
        }
    }
}

impl AnimationPreferences {
    /// Defaults seeded with the OS reduced-motion value.
    pub fn seeded(system_reduced_motion: bool) -> Self {
        Self {
            reduced_motion: system_reduced_motion,
            ..Self::default()
        }
    }

    /// Whether animations should play at all.
    pub fn should_animate(&self) -> bool {
        self.enabled && !self.reduced_motion
    }

    /// Applies every field the patch sets.
    pub fn apply(&mut self, patch: &PreferencesPatch) {
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
        if let Some(reduced) = patch.reduced_motion {
            self.reduced_motion = reduced;
        }
        if let Some(duration) = patch.global_duration_override {
            self.global_duration_override = duration;
        }
        if let Some(delay) = patch.global_delay_override {
            self.global_delay_override = delay;
        }
        if let Some(respect) = patch.respect_system_preferences {
            self.respect_system_preferences = respect;
        }
        if let Some(debug) = patch.debug_visible {
            self.debug_visible = debug;
        }
    }

    /// Value written under the legacy flag key.
    pub fn legacy_flag(&self) -> MotionFlag {
        if self.should_animate() {
            MotionFlag::Normal
        } else {
            MotionFlag::Reduced
        }
    }
}

/// Partial update of [`AnimationPreferences`].
///
/// The global overrides are doubly optional: `Some(None)` clears the override.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreferencesPatch {
    pub enabled: Option<bool>,
    pub reduced_motion: Option<bool>,
    pub global_duration_override: Option<Option<u32>>,
    pub global_delay_override: Option<Option<u32>>,
    pub respect_system_preferences: Option<bool>,
    pub debug_visible: Option<bool>,
}

impl PreferencesPatch {
    pub fn enabled(mut self, value: bool) -> Self {
        self.enabled = Some(value);
        self
    }

    pub fn reduced_motion(mut self, value: bool) -> Self {
        self.reduced_motion = Some(value);
        self
    }

    pub fn global_duration(mut self, value: Option<u32>) -> Self {
        self.global_duration_override = Some(value);
        self
    }

    pub fn global_delay(mut self, value: Option<u32>) -> Self {
        self.global_delay_override = Some(value);
        self
    }

    pub fn respect_system(mut self, value: bool) -> Self {
        self.respect_system_preferences = Some(value);
        self
    }

    pub fn debug_visible(mut self, value: bool) -> Self {
        self.debug_visible = Some(value);
        self
    }
}

/// Legacy on/off motion flag kept for older readers of localStorage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionFlag {
    Reduced,
    Normal,
}

impl MotionFlag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reduced => "reduced",
            Self::Normal => "normal",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "reduced" => Some(Self::Reduced),
            "normal" => Some(Self::Normal),
            _ => None,
        }
    }
}
