use anyhow::{anyhow, Result};

use crate::models::{ExpenseRecord, ExpenseView, HistoryView};
use crate::services::state::AppState;
use crate::services::stats;
use crate::utils;

const STORE_URL: &str = "https://spesen-data.supabase.co";
const STORE_ANON_KEY: &str = "sb_publishable_spesen_readonly";

pub const FETCH_ERROR_MESSAGE: &str = "Verlauf konnte nicht geladen werden.";

/// Read-only client for the hosted expense store.
pub struct HistoryClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HistoryClient {
    pub fn new() -> Self {
        Self::with_base(STORE_URL, STORE_ANON_KEY)
    }

    pub fn with_base(base_url: &str, api_key: &str) -> Self {
        HistoryClient {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// All expenses of one employee, newest first.
    pub async fn fetch_expenses(&self, employee_id: &str) -> Result<Vec<ExpenseRecord>> {
        let url = format!("{}/rest/v1/expenses", self.base_url);
        let employee_filter = format!("eq.{}", employee_id);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("select", "*"),
                ("employee_id", employee_filter.as_str()),
                ("order", "created_at.desc"),
            ])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("HTTP-Fehler {}", status.as_u16()));
        }

        Ok(response.json().await?)
    }
}

impl Default for HistoryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default)]
pub struct HistoryState {
    pub expenses: Vec<ExpenseRecord>,
    pub error: Option<String>,
    pub loading: bool,
}

/// Fetches the expense list for the saved identity and applies the result
/// under the request sequence discipline: only the response to the latest
/// issued fetch touches the shared list. Without a saved identity this is
/// a no-op that just returns the current view.
pub async fn refresh(state: &AppState) -> Result<HistoryView> {
    let Some(identity) = state.current_identity() else {
        return state.history_view();
    };

    let seq = state.begin_history_fetch()?;
    let result = state.store.fetch_expenses(&identity.employee_id).await;
    state.apply_history(seq, result)
}

pub fn build_view(history: &HistoryState) -> HistoryView {
    let stats = stats::aggregate(&history.expenses);
    let total_display = utils::format_amount(Some(stats.total), None);
    HistoryView {
        expenses: history.expenses.iter().map(to_view).collect(),
        stats,
        total_display,
        loading: history.loading,
        error: history.error.clone(),
    }
}

fn to_view(record: &ExpenseRecord) -> ExpenseView {
    ExpenseView {
        id: record.id.clone(),
        merchant: record.merchant.clone(),
        category: record.category.clone(),
        comment: record.comment.clone(),
        receipt_url: record.receipt_url.clone(),
        status_reason: record.status_reason.clone(),
        date_display: utils::format_date(
            record.expense_date.as_deref().unwrap_or(&record.created_at),
        ),
        amount_display: utils::format_amount(record.amount, record.currency.as_deref()),
        status_display: utils::status_label(&record.status),
    }
}
