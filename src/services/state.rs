use anyhow::{anyhow, Result};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::db::Database;
use crate::models::{ExpenseRecord, HistoryView, Identity};
use crate::services::history::{self, HistoryClient, HistoryState};
use crate::services::identity;
use crate::services::notice::NoticeBoard;
use crate::services::webhook::WebhookClient;

pub struct AppState {
    pub db: Arc<Mutex<Database>>,
    identity: Mutex<Option<Identity>>,
    history: Mutex<HistoryState>,
    history_seq: AtomicU64,
    pub notices: NoticeBoard,
    pub webhook: WebhookClient,
    pub store: HistoryClient,
}

impl AppState {
    pub fn new(db: Database, webhook: WebhookClient, store: HistoryClient) -> Self {
        let saved = identity::load(&db);
        AppState {
            db: Arc::new(Mutex::new(db)),
            identity: Mutex::new(saved),
            history: Mutex::new(HistoryState::default()),
            history_seq: AtomicU64::new(0),
            notices: NoticeBoard::new(),
            webhook,
            store,
        }
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.identity.lock().ok().and_then(|guard| guard.clone())
    }

    pub fn save_identity(&self, full_name: &str, employee_id: &str) -> Result<Identity> {
        let saved = {
            let db = self.db.lock().map_err(|_| anyhow!("DB lock"))?;
            identity::save(&db, full_name, employee_id)?
        };
        let mut guard = self.identity.lock().map_err(|_| anyhow!("Identity lock"))?;
        *guard = Some(saved.clone());
        Ok(saved)
    }

    /// Marks the start of a history fetch and hands out its sequence number.
    pub fn begin_history_fetch(&self) -> Result<u64> {
        let mut history = self.history.lock().map_err(|_| anyhow!("History lock"))?;
        history.loading = true;
        Ok(self.history_seq.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Applies a fetch outcome. A response that is not the latest issued
    /// fetch is dropped entirely; the later request wins. Success replaces
    /// the list wholesale, failure keeps the previous list and sets the
    /// localized error message.
    pub fn apply_history(
        &self,
        seq: u64,
        result: Result<Vec<ExpenseRecord>>,
    ) -> Result<HistoryView> {
        let mut history = self.history.lock().map_err(|_| anyhow!("History lock"))?;
        if seq == self.history_seq.load(Ordering::SeqCst) {
            match result {
                Ok(expenses) => {
                    history.expenses = expenses;
                    history.error = None;
                }
                Err(err) => {
                    tracing::warn!("history fetch failed: {}", err);
                    history.error = Some(history::FETCH_ERROR_MESSAGE.to_string());
                }
            }
            history.loading = false;
        }
        Ok(history::build_view(&history))
    }

    pub fn history_view(&self) -> Result<HistoryView> {
        let history = self.history.lock().map_err(|_| anyhow!("History lock"))?;
        Ok(history::build_view(&history))
    }
}
