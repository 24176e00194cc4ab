//! Schedule REST client
//!
//! reqwest transport used by the terminal front end. Response status codes
//! are not inspected: the backend answers errors with JSON bodies and the
//! controller interprets those.

use async_trait::async_trait;
use reqwest::Client;

use super::controller::ScheduleApi;
use super::error::{ScheduleError, ScheduleResult};
use super::types::{add_response_from_json, items_from_json, AddRequest, AddResponse, ScheduleItem};
use crate::config::ServerConfig;

/// HTTP client for the schedule backend
pub struct HttpScheduleApi {
    client: Client,
    base_url: String,
}

impl HttpScheduleApi {
    /// Create a client for the configured server
    pub fn new(config: &ServerConfig) -> ScheduleResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ScheduleError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl ScheduleApi for HttpScheduleApi {
    async fn list(&self) -> ScheduleResult<Vec<ScheduleItem>> {
        let body = self.client.get(self.url("/jadwal")).send().await?.text().await?;
        items_from_json(&body)
    }

    async fn add(&self, text: &str) -> ScheduleResult<AddResponse> {
        let body = self
            .client
            .post(self.url("/add"))
            .json(&AddRequest { text })
            .send()
            .await?
            .text()
            .await?;
        add_response_from_json(&body)
    }

    async fn delete(&self, id: i64) -> ScheduleResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/delete/{}", id)))
            .send()
            .await?;
        tracing::debug!(id, status = response.status().as_u16(), "Delete completed");
        Ok(())
    }
}
