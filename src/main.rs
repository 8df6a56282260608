#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod commands;
mod db;
mod models;
mod services;
mod utils;

use anyhow::anyhow;
use tauri::Manager;

use crate::services::history::HistoryClient;
use crate::services::state::AppState;
use crate::services::webhook::WebhookClient;

fn main() {
    tracing_subscriber::fmt::init();

    tauri::Builder::default()
        .setup(|app| {
            let app_data_dir = app
                .path()
                .app_data_dir()
                .map_err(|e| anyhow!("App data dir: {}", e))?;
            std::fs::create_dir_all(&app_data_dir)?;

            let db = db::Database::new(app_data_dir.join("spesen.sqlite"))?;
            let state = AppState::new(db, WebhookClient::new(), HistoryClient::new());
            app.manage(state);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::identity::get_identity,
            commands::identity::save_identity,
            commands::identity::dismiss_notice,
            commands::expenses::pick_receipt_file,
            commands::expenses::submit_expense,
            commands::history::get_expense_history,
            commands::history::refresh_history,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
