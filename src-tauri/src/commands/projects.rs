// Project Commands
// Tauri command handlers for the project grid

use tauri::State;

use crate::models::{FilterOutcome, ProjectView};
use crate::services::{ProjectLibrary, SettingsManager};

/// Project cards in presentation form, dates formatted per the
/// current date format setting.
#[tauri::command]
pub fn list_projects(
    library: State<ProjectLibrary>,
    settings_manager: State<SettingsManager>,
) -> Vec<ProjectView> {
    library.views(&settings_manager.load())
}

#[tauri::command]
pub fn filter_projects(
    category: String,
    search: String,
    library: State<ProjectLibrary>,
) -> FilterOutcome {
    library.filter(&category, &search)
}
