// System Commands
// Tauri command handlers for shell integration

use tauri_plugin_shell::ShellExt;

/// Open a project link in the system browser. Only web URLs may
/// leave the webview.
#[tauri::command]
pub fn open_external(url: String, app_handle: tauri::AppHandle) -> Result<(), String> {
    if !url.starts_with("https://") && !url.starts_with("http://") {
        return Err(format!("Refusing to open non-http URL: {url}"));
    }

    app_handle
        .shell()
        .open(&url, None)
        .map_err(|e| format!("Failed to open URL: {e}"))
}

#[tauri::command]
pub fn app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
