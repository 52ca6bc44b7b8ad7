//! The REST client. One method per backend endpoint, request and
//! response shapes kept bit-exact with the backend contract.

use std::collections::BTreeMap;

use reqwest::Response;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::model::{AlertPage, ChatHistory, ChatReply, CommandInfo, LogSummary};
use crate::transport::TransportConfig;

/// HTTP client for the log-analysis backend.
///
/// Stateless beyond the connection pool: every call is a single
/// request/response cycle with no retries and no caching.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// Build a client from a base URL and transport settings.
    pub fn new(base: Url, transport: &TransportConfig) -> Result<Self, Error> {
        Ok(Self {
            http: transport.build_client()?,
            base,
        })
    }

    /// Wrap an existing `reqwest::Client` (used by tests).
    pub fn from_reqwest(base: &str, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            http,
            base: base.parse()?,
        })
    }

    /// The backend base URL.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    // ── Log summaries ───────────────────────────────────────────────

    /// `GET /api/logs/summaries?limit=N` -- most recent summaries,
    /// returned as a bare JSON array.
    pub async fn list_summaries(&self, limit: u32) -> Result<Vec<LogSummary>, Error> {
        let url = self.base.join("/api/logs/summaries")?;
        let resp = self
            .http
            .get(url)
            .query(&[("limit", limit)])
            .send()
            .await?;
        decode(resp).await
    }

    /// `POST /api/logs/summarize` with `{"hours": h}`.
    ///
    /// Only the status matters to callers: 2xx means a summary was
    /// generated. The backend answers 404 when the window holds no logs.
    pub async fn generate_summary(&self, hours: u32) -> Result<(), Error> {
        let url = self.base.join("/api/logs/summarize")?;
        let resp = self
            .http
            .post(url)
            .json(&json!({ "hours": hours }))
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Status {
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            })
        }
    }

    // ── Alerts ──────────────────────────────────────────────────────

    /// `GET /api/alerts?limit=N[&severity=X]` -- most recent alerts,
    /// optionally filtered by severity.
    pub async fn list_alerts(
        &self,
        limit: u32,
        severity: Option<&str>,
    ) -> Result<AlertPage, Error> {
        let url = self.base.join("/api/alerts")?;
        let mut req = self.http.get(url).query(&[("limit", limit)]);
        if let Some(severity) = severity {
            req = req.query(&[("severity", severity)]);
        }
        decode(req.send().await?).await
    }

    // ── Chat ────────────────────────────────────────────────────────

    /// `GET /api/chat/history?limit=N` -- stored exchanges, newest-first.
    /// The client does not reorder; that is the transcript's job.
    pub async fn chat_history(&self, limit: u32) -> Result<ChatHistory, Error> {
        let url = self.base.join("/api/chat/history")?;
        let resp = self
            .http
            .get(url)
            .query(&[("limit", limit)])
            .send()
            .await?;
        decode(resp).await
    }

    /// `POST /api/chat/message` with `{"message": s}`.
    pub async fn send_chat(&self, message: &str) -> Result<ChatReply, Error> {
        let url = self.base.join("/api/chat/message")?;
        let resp = self
            .http
            .post(url)
            .json(&json!({ "message": message }))
            .send()
            .await?;
        decode(resp).await
    }

    /// `GET /api/chat/commands` -- the ChatOps command palette.
    pub async fn list_commands(&self) -> Result<BTreeMap<String, CommandInfo>, Error> {
        let url = self.base.join("/api/chat/commands")?;
        decode(self.http.get(url).send().await?).await
    }
}

/// Check the status, then decode the body, keeping the raw text around
/// for diagnostics on either failure.
async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, Error> {
    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        debug!(status = status.as_u16(), "backend returned error status");
        return Err(Error::Status {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|e| Error::Decode {
        message: e.to_string(),
        body,
    })
}
