// Settings Commands
// Tauri command handlers for the preferences panel

use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;
use tauri::State;

use crate::models::{DocumentState, Settings, SystemPreferences};
use crate::services::{appearance, Notifier, SettingsManager};

/// Returned by reset so the panel can re-bind its controls in one
/// round trip.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetResponse {
    pub settings: Settings,
    pub document: DocumentState,
}

/// Load, reconcile against system preferences, project. Runs when
/// the page boots; repeated initialization is idempotent.
#[tauri::command]
pub fn initialize_settings(
    system: SystemPreferences,
    settings_manager: State<SettingsManager>,
    notifier: State<Notifier>,
) -> DocumentState {
    let settings = match settings_manager.reconcile_system_preferences(&system) {
        Ok((settings, upgraded)) => {
            if upgraded {
                log::info!("Reduced motion enabled to match system preference");
                notifier.success("Settings saved successfully!");
            }
            settings
        }
        Err(e) => {
            log::error!("{e}");
            notifier.error("Failed to save settings");
            // The upgrade still holds in memory
            settings_manager.load()
        }
    };

    appearance::project_document(&settings, &system)
}

/// Current record, for binding the settings controls.
#[tauri::command]
pub fn get_settings(settings_manager: State<SettingsManager>) -> Settings {
    settings_manager.load()
}

/// One bound control changed: update exactly that key, apply, then
/// persist, synchronously in that order. The projection is computed
/// before the write so a failed save still leaves the page
/// consistent with the in-memory record.
#[tauri::command]
pub fn update_setting(
    key: String,
    value: Value,
    system: SystemPreferences,
    settings_manager: State<SettingsManager>,
    notifier: State<Notifier>,
) -> Result<DocumentState, String> {
    let settings = settings_manager.update_value(&key, value)?;
    let document = appearance::project_document(&settings, &system);

    match settings_manager.save(&settings) {
        Ok(()) => notifier.success("Settings saved successfully!"),
        Err(e) => {
            log::error!("{e}");
            notifier.error("Failed to save settings");
        }
    }

    Ok(document)
}

/// Pure re-projection of the current record, used when the system
/// color scheme flips while the stored theme is `auto`.
#[tauri::command]
pub fn apply_settings(
    system: SystemPreferences,
    settings_manager: State<SettingsManager>,
) -> DocumentState {
    appearance::project_document(&settings_manager.load(), &system)
}

/// Back to defaults: replace, re-apply, persist, notify.
#[tauri::command]
pub fn reset_settings(
    system: SystemPreferences,
    settings_manager: State<SettingsManager>,
    notifier: State<Notifier>,
) -> ResetResponse {
    let settings = match settings_manager.reset() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{e}");
            notifier.error("Failed to save settings");
            // Cache already holds the defaults
            settings_manager.load()
        }
    };

    notifier.info("Settings reset to default");

    let document = appearance::project_document(&settings, &system);
    ResetResponse { settings, document }
}

/// Write the current record to a user-chosen path as 2-space-indented
/// JSON, the same artifact the web version downloaded.
#[tauri::command]
pub fn export_settings(
    export_path: String,
    settings_manager: State<SettingsManager>,
    notifier: State<Notifier>,
) -> Result<(), String> {
    let path = PathBuf::from(export_path);
    settings_manager.export(&path)?;
    notifier.success("Settings exported successfully");
    Ok(())
}
