//! HTTP API Client
//!
//! gloo-net transport for the schedule controller.

use async_trait::async_trait;
use gloo_net::http::Request;
use jadwal::schedule::{
    add_response_from_json, items_from_json, AddRequest, AddResponse, ScheduleApi, ScheduleError,
    ScheduleItem, ScheduleResult,
};

/// Local storage key that overrides the API base URL
const API_URL_KEY: &str = "jadwal_api_url";

/// Get the API base URL from local storage, or the page's own origin
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_default();
    normalize_base(&url)
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn transport(e: gloo_net::Error) -> ScheduleError {
    ScheduleError::Transport(e.to_string())
}

/// Talks to the backend that served the page
pub struct GlooScheduleApi {
    base: String,
}

impl GlooScheduleApi {
    pub fn new() -> Self {
        Self {
            base: get_api_base(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

#[async_trait(?Send)]
impl ScheduleApi for GlooScheduleApi {
    async fn list(&self) -> ScheduleResult<Vec<ScheduleItem>> {
        let response = Request::get(&self.url("/jadwal"))
            .send()
            .await
            .map_err(transport)?;
        let body = response.text().await.map_err(transport)?;
        items_from_json(&body)
    }

    async fn add(&self, text: &str) -> ScheduleResult<AddResponse> {
        let response = Request::post(&self.url("/add"))
            .json(&AddRequest { text })
            .map_err(|e| ScheduleError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(transport)?;
        let body = response.text().await.map_err(transport)?;
        add_response_from_json(&body)
    }

    async fn delete(&self, id: i64) -> ScheduleResult<()> {
        Request::delete(&self.url(&format!("/delete/{}", id)))
            .send()
            .await
            .map_err(transport)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(""), "");
        assert_eq!(normalize_base(" http://10.0.0.2:5000/ "), "http://10.0.0.2:5000");
    }

    #[test]
    fn test_relative_urls_by_default() {
        let api = GlooScheduleApi {
            base: normalize_base(""),
        };
        assert_eq!(api.url("/delete/5"), "/delete/5");
    }
}
