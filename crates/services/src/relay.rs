//! Background relay: fetch a remote PDF and forward it to the processing
//! server.
//!
//! Requests travel over an `mpsc` queue and each carries a one-shot
//! responder, so every request is answered exactly once.

use reqwest::Client;
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};

use mentor_core::model::{is_http_url, is_pdf_url};

use crate::config::ServerConfig;
use crate::error::RelayError;

/// Name given to the downloaded file when re-posted to the server.
const RELAY_FILE_NAME: &str = "online.pdf";

#[derive(Clone)]
pub struct RelayService {
    client: Client,
    config: ServerConfig,
}

impl RelayService {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Download a PDF from `url` and forward it to `/process_pdf`.
    ///
    /// The URL is vetted before any network call: it must be `http(s)` and
    /// must look like a PDF link (`.pdf` suffix or `.pdf?`).
    ///
    /// # Errors
    ///
    /// Returns `RelayError::InvalidUrl` or `RelayError::NotPdf` without
    /// fetching, `RelayError::Http` for non-2xx responses,
    /// `RelayError::Server` for an `error` field in the server's reply, and
    /// `RelayError::Transport` for network or decode failures.
    pub async fn download_pdf_from_url(&self, url: &str) -> Result<Value, RelayError> {
        if !is_http_url(url) {
            return Err(RelayError::InvalidUrl);
        }
        if !is_pdf_url(url) {
            return Err(RelayError::NotPdf);
        }

        tracing::debug!(%url, "downloading remote pdf");
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/pdf")
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(RelayError::Http(response.status()));
        }
        let bytes = response.bytes().await?;

        let part = Part::bytes(bytes.to_vec())
            .file_name(RELAY_FILE_NAME)
            .mime_str("application/pdf")?;
        let form = Form::new().part("pdf", part);

        let response = self
            .client
            .post(self.config.endpoint("/process_pdf"))
            .multipart(form)
            .send()
            .await?;
        let status = response.status();
        let body: Value = response.json().await?;

        if let Some(message) = body.get("error").and_then(Value::as_str) {
            return Err(RelayError::Server(message.to_string()));
        }
        if !status.is_success() {
            return Err(RelayError::Http(status));
        }
        Ok(body)
    }
}

//
// ─── REQUEST / RESPONSE CHANNEL ────────────────────────────────────────────────
//

/// Wire-shaped relay outcome: `{success, data?|error?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayReply {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RelayReply {
    #[must_use]
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    #[must_use]
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

impl From<Result<Value, RelayError>> for RelayReply {
    fn from(result: Result<Value, RelayError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(err) => Self::err(err.to_string()),
        }
    }
}

/// One queued download request with its single completion signal.
#[derive(Debug)]
pub struct RelayRequest {
    pub url: String,
    pub respond_to: oneshot::Sender<RelayReply>,
}

/// Cloneable sender half used by callers to reach the relay task.
#[derive(Clone)]
pub struct RelayHandle {
    tx: mpsc::Sender<RelayRequest>,
}

impl RelayHandle {
    /// Request a download and wait for its reply.
    pub async fn download_pdf(&self, url: impl Into<String>) -> RelayReply {
        let (respond_to, reply) = oneshot::channel();
        let request = RelayRequest {
            url: url.into(),
            respond_to,
        };
        if self.tx.send(request).await.is_err() {
            return RelayReply::err("le relais n'est plus disponible");
        }
        reply
            .await
            .unwrap_or_else(|_| RelayReply::err("le relais n'a pas répondu"))
    }
}

/// Spawn the relay task and hand back its request channel.
///
/// Must be called from within a tokio runtime. The task exits once every
/// handle is dropped.
#[must_use]
pub fn spawn_relay(service: RelayService) -> RelayHandle {
    let (tx, mut rx) = mpsc::channel::<RelayRequest>(16);
    tokio::spawn(async move {
        while let Some(request) = rx.recv().await {
            let reply = match service.download_pdf_from_url(&request.url).await {
                Ok(data) => RelayReply::ok(data),
                Err(err) => {
                    tracing::warn!(url = %request.url, error = %err, "relay download failed");
                    RelayReply::err(err.to_string())
                }
            };
            // The caller may have gone away; dropping the reply is fine.
            let _ = request.respond_to.send(reply);
        }
    });
    RelayHandle { tx }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_serializes_with_only_the_populated_side() {
        let ok = RelayReply::ok(serde_json::json!({"text_length": 42}));
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            serde_json::json!({"success": true, "data": {"text_length": 42}})
        );

        let err = RelayReply::err("Erreur HTTP: 404");
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            serde_json::json!({"success": false, "error": "Erreur HTTP: 404"})
        );
    }
}
