// Portfolio - Tauri Backend
// Personal Portfolio Desktop Application

mod commands;
mod models;
mod services;

use std::sync::Arc;

use tauri::Manager;
use tauri_plugin_log::{Target, TargetKind};

use services::{Notifier, ProjectLibrary, SettingsManager, TauriEventSink};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .plugin(tauri_plugin_fs::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            let mut targets = vec![
                Target::new(TargetKind::LogDir {
                    file_name: Some("portfolio".to_string()),
                }),
                Target::new(TargetKind::Webview),
            ];
            if cfg!(debug_assertions) {
                targets.push(Target::new(TargetKind::Stdout));
            }
            app.handle().plugin(
                tauri_plugin_log::Builder::default()
                    .level(log::LevelFilter::Info)
                    .targets(targets)
                    .build(),
            )?;

            let app_data_dir = app.path().app_data_dir().expect("Failed to get app data dir");
            std::fs::create_dir_all(&app_data_dir).ok();

            let settings_manager = SettingsManager::new(app_data_dir.clone());
            settings_manager.start_watcher(app.handle().clone());

            let notifier = Notifier::new(Arc::new(TauriEventSink::new(app.handle().clone())));

            app.manage(settings_manager);
            app.manage(ProjectLibrary::new(app_data_dir.clone()));
            app.manage(notifier);

            log::info!("Portfolio initialized. Data dir: {:?}", app_data_dir);

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::initialize_settings,
            commands::get_settings,
            commands::update_setting,
            commands::apply_settings,
            commands::reset_settings,
            commands::export_settings,
            commands::list_projects,
            commands::filter_projects,
            commands::open_external,
            commands::app_version,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
