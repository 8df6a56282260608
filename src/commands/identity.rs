use serde::{Deserialize, Serialize};
use std::time::Duration;
use tauri::{AppHandle, Emitter, Manager, State};

use crate::models::{Identity, Notice};
use crate::services::history;
use crate::services::state::AppState;

const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Deserialize)]
pub struct IdentityPayload {
    pub full_name: String,
    pub employee_id: String,
}

#[derive(Serialize)]
pub struct SaveIdentityResponse {
    pub identity: Identity,
    pub notice: Notice,
}

#[tauri::command]
pub async fn get_identity(state: State<'_, AppState>) -> Result<Option<Identity>, String> {
    Ok(state.current_identity())
}

#[tauri::command]
pub async fn save_identity(
    payload: IdentityPayload,
    state: State<'_, AppState>,
    app: AppHandle,
) -> Result<SaveIdentityResponse, String> {
    let identity = state
        .save_identity(&payload.full_name, &payload.employee_id)
        .map_err(|e| e.to_string())?;

    let notice = state.notices.publish("Daten gespeichert.");
    schedule_notice_expiry(&app, notice.id.clone());

    // A freshly saved identity unlocks the history pane right away.
    let app_handle = app.clone();
    tauri::async_runtime::spawn(async move {
        let state = app_handle.state::<AppState>();
        match history::refresh(state.inner()).await {
            Ok(view) => {
                let _ = app_handle.emit("history-updated", view);
            }
            Err(err) => tracing::error!("history refresh failed: {}", err),
        }
    });

    Ok(SaveIdentityResponse { identity, notice })
}

#[tauri::command]
pub async fn dismiss_notice(id: String, state: State<'_, AppState>) -> Result<bool, String> {
    Ok(state.notices.expire(&id))
}

fn schedule_notice_expiry(app: &AppHandle, notice_id: String) {
    let app_handle = app.clone();
    tauri::async_runtime::spawn(async move {
        tokio::time::sleep(NOTICE_TTL).await;
        let state = app_handle.state::<AppState>();
        // Only the notice this timer was created for may be cleared.
        if state.notices.expire(&notice_id) {
            let _ = app_handle.emit("notice-cleared", notice_id);
        }
    });
}
