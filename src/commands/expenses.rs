use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tauri::{AppHandle, Emitter, Manager, State};

use crate::services::history;
use crate::services::state::AppState;
use crate::services::validation::{self, ValidationError};
use crate::services::webhook::{self, ReceiptFile};

/// Grace period before refreshing: the workflow writes the record
/// asynchronously, so an immediate fetch would usually miss it. This is
/// a heuristic, not a guarantee.
const POST_SUBMIT_REFRESH_DELAY: Duration = Duration::from_secs(1);

#[derive(Deserialize)]
pub struct SubmitExpensePayload {
    pub comment: String,
    pub file_path: Option<String>,
}

#[tauri::command]
pub async fn pick_receipt_file() -> Result<Option<String>, String> {
    let selection = rfd::FileDialog::new()
        .add_filter("Bilder", &validation::ALLOWED_EXTENSIONS)
        .pick_file()
        .map(|path| path.to_string_lossy().to_string());
    Ok(selection)
}

#[tauri::command]
pub async fn submit_expense(
    payload: SubmitExpensePayload,
    state: State<'_, AppState>,
    app: AppHandle,
) -> Result<String, String> {
    let identity = state.current_identity();
    validation::validate_submission(
        identity.as_ref(),
        &payload.comment,
        payload.file_path.as_deref(),
    )
    .map_err(|e| e.to_string())?;
    let identity = identity.ok_or_else(|| ValidationError::IdentityRequired.to_string())?;

    let file = match payload.file_path.as_deref() {
        Some(path) => Some(load_receipt(path).await.map_err(|e| e.to_string())?),
        None => None,
    };

    let reply = state
        .webhook
        .submit(&identity, payload.comment.trim(), file)
        .await
        .map_err(|e| e.to_string())?;
    let message = webhook::success_message(&reply);

    let app_handle = app.clone();
    tauri::async_runtime::spawn(async move {
        tokio::time::sleep(POST_SUBMIT_REFRESH_DELAY).await;
        let state = app_handle.state::<AppState>();
        match history::refresh(state.inner()).await {
            Ok(view) => {
                let _ = app_handle.emit("history-updated", view);
            }
            Err(err) => tracing::error!("history refresh failed: {}", err),
        }
    });

    Ok(message)
}

async fn load_receipt(path: &str) -> Result<ReceiptFile> {
    let mime_type = validation::mime_for_path(path)
        .ok_or_else(|| anyhow!("Dateiformat nicht unterstützt: {}", path))?;
    let bytes = tokio::fs::read(path).await?;
    let file_name = Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("receipt")
        .to_string();
    Ok(ReceiptFile {
        file_name,
        mime_type,
        bytes,
    })
}
