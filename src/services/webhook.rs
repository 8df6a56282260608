use anyhow::{anyhow, Result};
use reqwest::multipart::{Form, Part};

use crate::models::{Identity, WorkflowReply};

const SUBMIT_ENDPOINT: &str = "https://workflows.spesen.app/webhook/expense-intake";

pub struct ReceiptFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

pub struct WebhookClient {
    client: reqwest::Client,
    endpoint: String,
}

impl WebhookClient {
    pub fn new() -> Self {
        Self::with_endpoint(SUBMIT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: &str) -> Self {
        WebhookClient {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
        }
    }

    /// Sends one submission as multipart form data. The receipt bytes are
    /// forwarded opaquely with their original filename and declared type;
    /// classification happens on the workflow side.
    pub async fn submit(
        &self,
        identity: &Identity,
        comment: &str,
        file: Option<ReceiptFile>,
    ) -> Result<WorkflowReply> {
        let mut form = Form::new()
            .text("full_name", identity.full_name.clone())
            .text("employee_id", identity.employee_id.clone())
            .text("comment", comment.to_string());

        if let Some(file) = file {
            let part = Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(file.mime_type)?;
            form = form.part("receipt_file", part);
        }

        let response = self.client.post(&self.endpoint).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("HTTP-Fehler {}", status.as_u16()));
        }

        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.contains("json"))
            .unwrap_or(false);
        if !is_json {
            return Ok(WorkflowReply::default());
        }

        let body = response.bytes().await?;
        match serde_json::from_slice::<WorkflowReply>(&body) {
            Ok(reply) => Ok(reply),
            Err(err) => {
                // A 2xx with an unreadable body still counts as accepted.
                tracing::warn!("workflow reply is not structured: {}", err);
                Ok(WorkflowReply::default())
            }
        }
    }
}

impl Default for WebhookClient {
    fn default() -> Self {
        Self::new()
    }
}

pub fn success_message(reply: &WorkflowReply) -> String {
    match (&reply.status, &reply.reason) {
        (Some(status), Some(reason)) => {
            format!("Beleg übermittelt – Status: {} ({})", status, reason)
        }
        (Some(status), None) => format!("Beleg übermittelt – Status: {}", status),
        _ => "Beleg übermittelt – Verarbeitung läuft.".to_string(),
    }
}
