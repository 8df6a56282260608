use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(rename = "employeeId")]
    pub employee_id: String,
}

/// One row of the remote expense store. Created by the workflow service,
/// read-only from this app's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: String,
    pub employee_id: String,
    pub receipt_url: Option<String>,
    pub merchant: Option<String>,
    pub expense_date: Option<String>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub status: String,
    pub status_reason: Option<String>,
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// Structured reply from the workflow webhook. Both fields are optional;
/// a reply body that is not JSON at all is treated as an empty reply.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkflowReply {
    pub status: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseStats {
    pub total: f64,
    pub approved: u32,
    pub rejected: u32,
    pub pending_review: u32,
    pub by_category: Vec<CategoryTotal>,
}

/// Display-ready projection of an ExpenseRecord.
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseView {
    pub id: String,
    pub merchant: Option<String>,
    pub category: Option<String>,
    pub comment: Option<String>,
    pub receipt_url: Option<String>,
    pub status_reason: Option<String>,
    pub date_display: String,
    pub amount_display: String,
    pub status_display: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryView {
    pub expenses: Vec<ExpenseView>,
    pub stats: ExpenseStats,
    pub total_display: String,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub id: String,
    pub message: String,
}
