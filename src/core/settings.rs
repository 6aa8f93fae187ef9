//! Motion preferences store.
//!
//! [`MotionSettings`] owns the user's [`AnimationPreferences`] and the
//! customisable [`ContentTypeTable`]. The root composition constructs exactly
//! one and hands it down; consumers react to changes through
//! [`MotionSettings::subscribe`].
//!
//! # Persistence
//!
//! Every mutation writes two localStorage entries:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`CONFIG_KEY`] | versioned JSON: preferences + content-type table |
//! | [`LEGACY_FLAG_KEY`] | `"reduced"` or `"normal"` |
//!
//! Write failures are logged and otherwise ignored; the in-memory state stays
//! authoritative for the rest of the session.

use serde::{Deserialize, Serialize};

use super::error::ConfigImportError;
use super::resolver::ContentTypeTable;
use crate::config::storage::{CONFIG_KEY, CONFIG_VERSION, LEGACY_FLAG_KEY};
use crate::models::{
    AnimationConfig, AnimationOverrides, AnimationPreferences, ContentType, MotionFlag,
    PreferencesPatch,
};
use crate::utils::PreferenceStorage;

/// Handle returned by [`MotionSettings::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&AnimationPreferences)>;

/// Serialized form of the full configuration.
#[derive(Debug, Serialize, Deserialize)]
struct StoredConfig {
    version: u32,
    preferences: AnimationPreferences,
    #[serde(default)]
    content_types: ContentTypeTable,
}

/// Parse and validate an exported configuration.
fn parse_config(raw: &str) -> Result<StoredConfig, ConfigImportError> {
    let config: StoredConfig =
        serde_json::from_str(raw).map_err(|e| ConfigImportError::Parse(e.to_string()))?;

    if config.version != CONFIG_VERSION {
        return Err(ConfigImportError::UnsupportedVersion(config.version));
    }
    if let Some(ct) = config.content_types.invalid_threshold() {
        return Err(ConfigImportError::InvalidThreshold(ct.as_str()));
    }

    Ok(config)
}

/// Application-wide motion preferences.
pub struct MotionSettings {
    prefs: AnimationPreferences,
    table: ContentTypeTable,
    /// Last value reported by the OS reduced-motion query.
    system_reduced_motion: bool,
    storage: Box<dyn PreferenceStorage>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl MotionSettings {
    /// Restore settings from `storage`.
    ///
    /// The JSON blob wins when it parses. Otherwise defaults are seeded from
    /// the OS value, and a legacy flag, if present, counts as an explicit user
    /// choice that stops following the OS.
    pub fn load(storage: impl PreferenceStorage + 'static, system_reduced_motion: bool) -> Self {
        let stored = storage.read(CONFIG_KEY).and_then(|raw| match parse_config(&raw) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("ignoring stored motion config: {e}");
                None
            }
        });

        let (prefs, table) = match stored {
            Some(config) => {
                let mut prefs = config.preferences;
                if prefs.respect_system_preferences {
                    prefs.reduced_motion = system_reduced_motion;
                }
                (prefs, config.content_types)
            }
            None => {
                let mut prefs = AnimationPreferences::seeded(system_reduced_motion);
                if let Some(flag) = storage
                    .read(LEGACY_FLAG_KEY)
                    .and_then(|v| MotionFlag::parse(&v))
                {
                    prefs.reduced_motion = flag == MotionFlag::Reduced;
                    prefs.respect_system_preferences = false;
                }
                (prefs, ContentTypeTable::default())
            }
        };

        log::debug!(
            "motion settings loaded (enabled={}, reduced={})",
            prefs.enabled,
            prefs.reduced_motion
        );

        Self {
            prefs,
            table,
            system_reduced_motion,
            storage: Box::new(storage),
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Current preferences.
    pub fn preferences(&self) -> AnimationPreferences {
        self.prefs.clone()
    }

    /// Current content-type defaults.
    pub fn content_types(&self) -> &ContentTypeTable {
        &self.table
    }

    pub fn should_animate(&self) -> bool {
        self.prefs.should_animate()
    }

    /// Apply a partial update, persist it and notify subscribers.
    ///
    /// Switching `respect_system_preferences` on re-syncs `reduced_motion`
    /// with the OS; switching it off keeps the current value.
    pub fn update(&mut self, patch: PreferencesPatch) {
        let was_respecting = self.prefs.respect_system_preferences;
        self.prefs.apply(&patch);
        if !was_respecting && self.prefs.respect_system_preferences {
            self.prefs.reduced_motion = self.system_reduced_motion;
        }
        self.commit();
    }

    /// Restore default preferences and the built-in content-type table.
    pub fn reset_to_defaults(&mut self) {
        self.prefs = AnimationPreferences::seeded(self.system_reduced_motion);
        self.table = ContentTypeTable::default();
        self.commit();
    }

    /// The OS reduced-motion query changed.
    ///
    /// Ignored while the user has opted out of following the OS.
    pub fn set_system_reduced_motion(&mut self, reduced: bool) {
        self.system_reduced_motion = reduced;
        if self.prefs.respect_system_preferences && self.prefs.reduced_motion != reduced {
            self.prefs.reduced_motion = reduced;
            self.commit();
        }
    }

    /// Shadow fields of a content type's defaults.
    pub fn set_type_defaults(&mut self, content_type: ContentType, overrides: &AnimationOverrides) {
        self.table.customize(content_type, overrides);
        self.commit();
    }

    /// Effective config for one reveal.
    ///
    /// Table default, then per-call overrides, then global overrides. With
    /// motion off the result has no duration and no delay.
    pub fn resolve(
        &self,
        content_type: ContentType,
        overrides: Option<&AnimationOverrides>,
    ) -> AnimationConfig {
        let mut config = self.table.resolve(content_type, overrides);
        if let Some(duration) = self.prefs.global_duration_override {
            config.duration_ms = duration;
        }
        if let Some(delay) = self.prefs.global_delay_override {
            config.delay_ms = delay;
        }
        if self.should_animate() {
            config
        } else {
            config.instant()
        }
    }

    /// Register a listener called after every change.
    pub fn subscribe(&mut self, listener: impl Fn(&AnimationPreferences) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Serialize preferences and the content-type table.
    pub fn export_config(&self) -> String {
        let config = StoredConfig {
            version: CONFIG_VERSION,
            preferences: self.prefs.clone(),
            content_types: self.table.clone(),
        };
        match serde_json::to_string_pretty(&config) {
            Ok(json) => json,
            Err(e) => {
                log::error!("failed to export motion config: {e}");
                String::new()
            }
        }
    }

    /// Restore a configuration produced by [`export_config`](Self::export_config).
    ///
    /// Fails closed: on error nothing changes.
    pub fn import_config(&mut self, raw: &str) -> Result<(), ConfigImportError> {
        let config = parse_config(raw)?;
        self.prefs = config.preferences;
        if self.prefs.respect_system_preferences {
            self.prefs.reduced_motion = self.system_reduced_motion;
        }
        self.table = config.content_types;
        self.commit();
        Ok(())
    }

    fn commit(&self) {
        self.persist();
        for (_, listener) in &self.listeners {
            listener(&self.prefs);
        }
    }

    fn persist(&self) {
        let json = self.export_config();
        if let Err(e) = self.storage.write(CONFIG_KEY, &json) {
            log::warn!("motion preferences not persisted: {e}");
        }
        let flag = self.prefs.legacy_flag().as_str();
        if let Err(e) = self.storage.write(LEGACY_FLAG_KEY, flag) {
            log::warn!("legacy motion flag not persisted: {e}");
        }
    }
}

impl std::fmt::Debug for MotionSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MotionSettings")
            .field("prefs", &self.prefs)
            .field("system_reduced_motion", &self.system_reduced_motion)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
