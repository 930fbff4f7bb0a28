// SettingsManager Service
// Handles preferences persistence and system preference reconciliation

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use std::thread;
use std::time::Duration;

use notify::{RecursiveMode, Watcher};
use serde_json::Value;
use tauri::Emitter;

use crate::models::{Settings, SystemPreferences};
use crate::services::events::EVENT_SETTINGS_CHANGED;

const SETTINGS_FILE: &str = "settings.json";

/// Manages the preferences record: one settings.json under the app
/// data directory plus an in-memory cache. Every mutation is a full
/// read-modify-persist cycle; there is no batching and no retry.
#[derive(Clone)]
pub struct SettingsManager {
    settings_path: PathBuf,
    cache: Arc<RwLock<Option<Settings>>>,
}

impl SettingsManager {
    /// Create a new SettingsManager rooted at the given app data directory
    pub fn new(app_data_dir: PathBuf) -> Self {
        Self {
            settings_path: app_data_dir.join(SETTINGS_FILE),
            cache: Arc::new(RwLock::new(None)),
        }
    }

    /// Load the preferences record. Pure read: a missing, unreadable
    /// or corrupted file falls back to the defaults with a warning,
    /// and nothing is written back here.
    pub fn load(&self) -> Settings {
        if let Ok(cache) = self.cache.read() {
            if let Some(ref settings) = *cache {
                return settings.clone();
            }
        }

        let settings = self.read_from_disk();

        if let Ok(mut cache) = self.cache.write() {
            *cache = Some(settings.clone());
        }

        settings
    }

    fn read_from_disk(&self) -> Settings {
        if !self.settings_path.exists() {
            return Settings::default();
        }

        let content = match std::fs::read_to_string(&self.settings_path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Failed to read settings, using defaults: {e}");
                return Settings::default();
            }
        };

        match parse_stored_settings(&content) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}, using defaults");
                Settings::default()
            }
        }
    }

    /// Save the record to disk as pretty-printed JSON. The cache is
    /// only updated once the write succeeded.
    pub fn save(&self, settings: &Settings) -> Result<(), String> {
        if let Some(parent) = self.settings_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create settings directory: {e}"))?;
        }

        let content = serde_json::to_string_pretty(settings)
            .map_err(|e| format!("Failed to serialize settings: {e}"))?;

        std::fs::write(&self.settings_path, content)
            .map_err(|e| format!("Failed to write settings: {e}"))?;

        if let Ok(mut cache) = self.cache.write() {
            *cache = Some(settings.clone());
        }

        Ok(())
    }

    /// Change exactly one key of the record. The key must exist in
    /// the default record and the value must deserialize into it.
    /// Nothing is persisted here; the caller applies the record,
    /// then saves, in that order.
    pub fn update_value(&self, key: &str, value: Value) -> Result<Settings, String> {
        let current = self.load();

        let mut record = serde_json::to_value(&current)
            .map_err(|e| format!("Failed to serialize settings: {e}"))?;

        let map = record
            .as_object_mut()
            .ok_or_else(|| "Settings record is not a JSON object".to_string())?;

        if !map.contains_key(key) {
            return Err(format!("Unknown setting '{key}'"));
        }
        map.insert(key.to_string(), value);

        let updated: Settings = serde_json::from_value(record)
            .map_err(|e| format!("Invalid value for setting '{key}': {e}"))?;

        if let Ok(mut cache) = self.cache.write() {
            *cache = Some(updated.clone());
        }

        Ok(updated)
    }

    /// Replace the record with a fresh copy of the defaults and
    /// persist it. The in-memory record is reset even when the write
    /// fails, so a later `load` returns defaults either way.
    pub fn reset(&self) -> Result<Settings, String> {
        let defaults = Settings::default();

        if let Ok(mut cache) = self.cache.write() {
            *cache = Some(defaults.clone());
        }

        self.save(&defaults)?;
        Ok(defaults)
    }

    /// Write the current record to `path` as a 2-space-indented JSON
    /// document. The indentation is a compatibility contract with the
    /// web export format. No state change.
    pub fn export(&self, path: &Path) -> Result<(), String> {
        let settings = self.load();

        let content = serde_json::to_string_pretty(&settings)
            .map_err(|e| format!("Failed to serialize settings: {e}"))?;

        std::fs::write(path, content).map_err(|e| format!("Failed to export settings: {e}"))
    }

    /// One-way reduced-motion upgrade: when the system asks for
    /// reduced motion and the stored flag is off, turn it on and
    /// persist. The flag is never downgraded automatically, so
    /// repeated initialization is idempotent. An active `auto` theme
    /// is left alone; it resolves at apply time.
    ///
    /// Returns the active record and whether it was upgraded. The
    /// upgrade holds in memory even when the write fails.
    pub fn reconcile_system_preferences(
        &self,
        system: &SystemPreferences,
    ) -> Result<(Settings, bool), String> {
        let mut settings = self.load();

        if !system.prefers_reduced_motion || settings.reduced_motion {
            return Ok((settings, false));
        }

        settings.reduced_motion = true;
        if let Ok(mut cache) = self.cache.write() {
            *cache = Some(settings.clone());
        }

        self.save(&settings)?;
        Ok((settings, true))
    }

    /// Watch the settings file for edits made outside the app
    /// (including deletion, the "external storage clear" case) and
    /// rebroadcast the freshly loaded record to the webview.
    pub fn start_watcher<R: tauri::Runtime>(&self, app_handle: tauri::AppHandle<R>) {
        let settings_dir = match self.settings_path.parent() {
            Some(dir) => dir.to_path_buf(),
            None => return,
        };
        let manager = self.clone();

        thread::spawn(move || {
            let (tx, rx) = std::sync::mpsc::channel();
            let mut watcher = match notify::recommended_watcher(tx) {
                Ok(watcher) => watcher,
                Err(error) => {
                    log::warn!("Settings watcher failed to start: {error}");
                    return;
                }
            };

            if let Err(error) = watcher.watch(&settings_dir, RecursiveMode::NonRecursive) {
                log::warn!("Failed to watch settings directory: {error}");
                return;
            }

            let mut last_update = std::time::Instant::now();
            for event in rx {
                if event.is_err() {
                    continue;
                }

                // Debounce: editors fire several events per write
                let now = std::time::Instant::now();
                if now.duration_since(last_update) < Duration::from_secs(1) {
                    continue;
                }
                last_update = now;

                let reloaded = manager.read_from_disk();
                let cached = manager.cache.read().ok().and_then(|cache| cache.clone());
                if cached.as_ref() == Some(&reloaded) {
                    continue;
                }

                if let Ok(mut cache) = manager.cache.write() {
                    *cache = Some(reloaded.clone());
                }
                let _ = app_handle.emit(EVENT_SETTINGS_CHANGED, reloaded);
            }
        });
    }
}

/// Merge the stored record over the defaults: stored keys win, keys
/// missing from the store keep their default, and unrecognized stored
/// keys are dropped during deserialization.
fn parse_stored_settings(content: &str) -> Result<Settings, String> {
    let mut stored: Value =
        serde_json::from_str(content).map_err(|e| format!("Failed to parse settings: {e}"))?;

    let defaults = serde_json::to_value(Settings::default())
        .map_err(|e| format!("Failed to build default settings: {e}"))?;

    fill_missing_settings(&mut stored, &defaults);

    serde_json::from_value(stored).map_err(|e| format!("Failed to parse settings: {e}"))
}

fn fill_missing_settings(target: &mut Value, defaults: &Value) {
    if let (Value::Object(target_map), Value::Object(defaults_map)) = (target, defaults) {
        for (key, default_value) in defaults_map {
            target_map
                .entry(key.clone())
                .or_insert_with(|| default_value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ImageQuality, ThemeChoice};
    use serde_json::json;
    use tempfile::tempdir;

    fn write_settings(dir: &Path, content: &str) {
        std::fs::write(dir.join(SETTINGS_FILE), content).unwrap();
    }

    #[test]
    fn test_load_without_file_returns_defaults() {
        let temp = tempdir().unwrap();
        let manager = SettingsManager::new(temp.path().to_path_buf());

        assert_eq!(manager.load(), Settings::default());
    }

    #[test]
    fn test_load_merges_stored_over_defaults() {
        let temp = tempdir().unwrap();
        write_settings(temp.path(), r#"{ "theme": "dark", "projectsPerPage": 6 }"#);

        let manager = SettingsManager::new(temp.path().to_path_buf());
        let settings = manager.load();

        assert_eq!(settings.theme, ThemeChoice::Dark);
        assert_eq!(settings.projects_per_page, 6);
        // Keys absent from the store keep their defaults
        assert_eq!(settings.accent, "blue");
        assert!(settings.lazy_loading);
    }

    #[test]
    fn test_load_ignores_unknown_keys() {
        let temp = tempdir().unwrap();
        write_settings(
            temp.path(),
            r#"{ "theme": "dark", "legacySidebar": true, "fontScale": 1.5 }"#,
        );

        let manager = SettingsManager::new(temp.path().to_path_buf());
        let settings = manager.load();

        assert_eq!(settings.theme, ThemeChoice::Dark);
        assert_eq!(
            serde_json::to_value(&settings).unwrap(),
            serde_json::to_value(Settings {
                theme: ThemeChoice::Dark,
                ..Settings::default()
            })
            .unwrap()
        );
    }

    #[test]
    fn test_load_with_corrupted_json_falls_back() {
        let temp = tempdir().unwrap();
        write_settings(temp.path(), "{ this is not json");

        let manager = SettingsManager::new(temp.path().to_path_buf());
        assert_eq!(manager.load(), Settings::default());
    }

    #[test]
    fn test_load_with_mistyped_value_falls_back() {
        let temp = tempdir().unwrap();
        write_settings(temp.path(), r#"{ "projectsPerPage": "plenty" }"#);

        let manager = SettingsManager::new(temp.path().to_path_buf());
        assert_eq!(manager.load(), Settings::default());
    }

    #[test]
    fn test_update_value_changes_exactly_one_key() {
        let temp = tempdir().unwrap();
        let manager = SettingsManager::new(temp.path().to_path_buf());

        let updated = manager.update_value("imageQuality", json!("low")).unwrap();

        assert_eq!(updated.image_quality, ImageQuality::Low);
        assert_eq!(
            Settings {
                image_quality: ImageQuality::Low,
                ..Settings::default()
            },
            updated
        );
    }

    #[test]
    fn test_update_then_save_round_trips() {
        let temp = tempdir().unwrap();
        let manager = SettingsManager::new(temp.path().to_path_buf());

        let updated = manager.update_value("highContrast", json!(true)).unwrap();
        manager.save(&updated).unwrap();

        // A fresh manager sees the persisted record
        let reloaded = SettingsManager::new(temp.path().to_path_buf()).load();
        assert!(reloaded.high_contrast);
        assert_eq!(reloaded, updated);
    }

    #[test]
    fn test_update_value_rejects_unknown_key() {
        let temp = tempdir().unwrap();
        let manager = SettingsManager::new(temp.path().to_path_buf());

        let result = manager.update_value("fontScale", json!(2));
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unknown setting"));
    }

    #[test]
    fn test_update_value_rejects_mistyped_value() {
        let temp = tempdir().unwrap();
        let manager = SettingsManager::new(temp.path().to_path_buf());

        assert!(manager.update_value("projectsPerPage", json!("plenty")).is_err());
        // The record is untouched after a rejected update
        assert_eq!(manager.load(), Settings::default());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let temp = tempdir().unwrap();
        let manager = SettingsManager::new(temp.path().to_path_buf());

        let updated = manager.update_value("theme", json!("dark")).unwrap();
        manager.save(&updated).unwrap();

        manager.reset().unwrap();

        assert_eq!(manager.load(), Settings::default());
        let reloaded = SettingsManager::new(temp.path().to_path_buf()).load();
        assert_eq!(reloaded, Settings::default());
    }

    #[test]
    fn test_export_uses_two_space_indentation() {
        let temp = tempdir().unwrap();
        let manager = SettingsManager::new(temp.path().to_path_buf());
        let export_path = temp.path().join("portfolio-settings.json");

        manager.export(&export_path).unwrap();

        let content = std::fs::read_to_string(&export_path).unwrap();
        assert!(content.starts_with("{\n  \""));
        let exported: Settings = serde_json::from_str(&content).unwrap();
        assert_eq!(exported, Settings::default());
    }

    #[test]
    fn test_reduced_motion_upgrade_is_one_way() {
        let temp = tempdir().unwrap();
        let manager = SettingsManager::new(temp.path().to_path_buf());
        let system = SystemPreferences {
            prefers_dark_scheme: false,
            prefers_reduced_motion: true,
        };

        let (settings, changed) = manager.reconcile_system_preferences(&system).unwrap();
        assert!(changed);
        assert!(settings.reduced_motion);

        // Persisted, and idempotent across restarts
        let fresh = SettingsManager::new(temp.path().to_path_buf());
        let (settings, changed) = fresh.reconcile_system_preferences(&system).unwrap();
        assert!(!changed);
        assert!(settings.reduced_motion);

        // Never downgraded when the system preference goes away
        let relaxed = SystemPreferences::default();
        let (settings, changed) = fresh.reconcile_system_preferences(&relaxed).unwrap();
        assert!(!changed);
        assert!(settings.reduced_motion);
    }
}
