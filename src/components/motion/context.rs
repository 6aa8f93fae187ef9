//! Reactive access to motion preferences.

use leptos::prelude::*;

use crate::core::MotionSettings;
use crate::core::error::ConfigImportError;
use crate::models::{
    AnimationConfig, AnimationOverrides, AnimationPreferences, ContentType, PreferencesPatch,
};

/// Motion preferences shared through Leptos context.
///
/// Wraps the single [`MotionSettings`] owned by the root composition and
/// mirrors every change into a signal, so components re-render when the user
/// or the OS changes a preference.
///
/// # Note
///
/// This struct is `Copy`: both fields are arena handles. The settings
/// themselves are not `Send` and live in local storage.
#[derive(Clone, Copy)]
pub struct MotionContext {
    /// Current preferences (read-only for consumers; mutate through methods).
    pub preferences: RwSignal<AnimationPreferences>,
    settings: StoredValue<MotionSettings, LocalStorage>,
}

impl MotionContext {
    /// Take ownership of `settings` and start mirroring its changes.
    pub fn new(mut settings: MotionSettings) -> Self {
        let preferences = RwSignal::new(settings.preferences());
        settings.subscribe(move |prefs| {
            preferences.try_set(prefs.clone());
        });
        Self {
            preferences,
            settings: StoredValue::new_local(settings),
        }
    }

    pub fn should_animate(&self) -> bool {
        self.preferences.with(|p| p.should_animate())
    }

    /// Effective config for one reveal. Tracks preference changes.
    pub fn resolve(
        &self,
        content_type: ContentType,
        overrides: Option<&AnimationOverrides>,
    ) -> AnimationConfig {
        self.preferences.track();
        self.resolve_untracked(content_type, overrides)
    }

    pub fn resolve_untracked(
        &self,
        content_type: ContentType,
        overrides: Option<&AnimationOverrides>,
    ) -> AnimationConfig {
        self.settings
            .with_value(|s| s.resolve(content_type, overrides))
    }

    pub fn update(&self, patch: PreferencesPatch) {
        self.settings.update_value(|s| s.update(patch));
    }

    pub fn reset_to_defaults(&self) {
        self.settings.update_value(|s| s.reset_to_defaults());
    }

    pub fn set_system_reduced_motion(&self, reduced: bool) {
        self.settings
            .update_value(|s| s.set_system_reduced_motion(reduced));
    }

    pub fn export_config(&self) -> String {
        self.settings.with_value(|s| s.export_config())
    }

    pub fn import_config(&self, raw: &str) -> Result<(), ConfigImportError> {
        let mut result = Ok(());
        self.settings
            .update_value(|s| result = s.import_config(raw));
        result
    }
}

/// Get the motion context provided at the root.
pub fn use_motion() -> MotionContext {
    use_context::<MotionContext>().expect("MotionContext must be provided at root")
}
