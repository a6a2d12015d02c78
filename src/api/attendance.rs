//! Client for the remote attendance log.
//!
//! The remote log is independent of the local session: a failed call is
//! reported to the caller, never rolled back into local state.

use super::{MAX_RETRY_COUNT, RETRY_DELAY};
use crate::libs::config::ApiConfig;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

const ATTENDANCE_URL: &str = "api/attendance";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
    Leave,
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "Present"),
            AttendanceStatus::Absent => write!(f, "Absent"),
            AttendanceStatus::Leave => write!(f, "Leave"),
        }
    }
}

/// One entry of the server-side attendance log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub date: String,
    #[serde(default)]
    pub punch_in: String,
    #[serde(default)]
    pub punch_out: String,
    #[serde(default)]
    pub status: AttendanceStatus,
}

pub struct AttendanceApi {
    client: Client,
    config: ApiConfig,
    retry_delay: Duration,
}

impl AttendanceApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(config.timeout_secs.max(1))).build()?;
        Ok(Self {
            client,
            config: config.clone(),
            retry_delay: RETRY_DELAY,
        })
    }

    /// Overrides the pause between attempts.
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    fn url(&self) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), ATTENDANCE_URL)
    }

    /// Fetches every record of the remote log.
    pub async fn list(&self) -> Result<Vec<AttendanceRecord>> {
        let res = self.send_with_retry(|| self.client.get(self.url())).await?;
        Ok(res.json::<Vec<AttendanceRecord>>().await?)
    }

    /// Appends a record and returns it as stored by the server.
    pub async fn create(&self, record: &AttendanceRecord) -> Result<AttendanceRecord> {
        let res = self.send_with_retry(|| self.client.post(self.url()).json(record)).await?;
        Ok(res.json::<AttendanceRecord>().await?)
    }

    /// Sends a request, retrying transport failures and server errors.
    async fn send_with_retry<F>(&self, build: F) -> Result<Response>
    where
        F: Fn() -> RequestBuilder,
    {
        let mut attempt = 1;
        loop {
            let outcome = build().send().await;
            let retryable = match &outcome {
                Ok(res) => res.status().is_server_error(),
                Err(e) => e.is_connect() || e.is_timeout(),
            };

            if retryable && attempt < MAX_RETRY_COUNT {
                tracing::warn!(attempt, "attendance API request failed, retrying");
                tokio::time::sleep(self.retry_delay).await;
                attempt += 1;
                continue;
            }

            let res = outcome?;
            return match res.status() {
                status if status.is_success() => Ok(res),
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(msg_error_anyhow!(Message::ApiAuthFailed)),
                status => Err(msg_error_anyhow!(Message::ApiRequestFailed(status.to_string()))),
            };
        }
    }
}

/// Filters records the way the attendance list does: case-insensitive name
/// search and a date prefix. Blank criteria match everything; non-blank ones
/// are matched as typed, surrounding spaces included.
pub fn filter_records<'a>(records: &'a [AttendanceRecord], search: &str, date: &str) -> Vec<&'a AttendanceRecord> {
    let needle = search.to_lowercase();
    let by_name = !search.trim().is_empty();
    let by_date = !date.trim().is_empty();

    records
        .iter()
        .filter(|r| !by_name || r.name.to_lowercase().contains(&needle))
        .filter(|r| !by_date || r.date.starts_with(date))
        .collect()
}
