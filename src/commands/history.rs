use tauri::State;

use crate::models::HistoryView;
use crate::services::history;
use crate::services::state::AppState;

#[tauri::command]
pub async fn get_expense_history(state: State<'_, AppState>) -> Result<HistoryView, String> {
    state.history_view().map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn refresh_history(state: State<'_, AppState>) -> Result<HistoryView, String> {
    history::refresh(state.inner()).await.map_err(|e| e.to_string())
}
