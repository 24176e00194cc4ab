//! Schedule data model
//!
//! Wire types for the `/jadwal` and `/add` endpoints, plus the render model
//! the controller hands to a view.

use serde::{Deserialize, Serialize};

use super::error::ScheduleResult;

/// Title shown when the list is empty
pub const PLACEHOLDER_TITLE: &str = "Belum ada jadwal";

/// Hint shown under the placeholder title
pub const PLACEHOLDER_HINT: &str = "Coba input jadwal dulu.";

/// Status value the server uses for a successful `/add`
pub const STATUS_SUCCESS: &str = "success";

/// A single schedule entry as stored by the server
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub id: i64,
    /// Title
    pub judul: String,
    /// Date, usually `YYYY-MM-DD`
    pub tanggal: String,
    /// Time, usually `HH:MM`
    pub jam: String,
}

impl ScheduleItem {
    /// "date • time" line shown under the title
    pub fn subtitle(&self) -> String {
        format!("{} • {}", self.tanggal, self.jam)
    }
}

/// Body of `POST /add`
#[derive(Debug, Serialize)]
pub struct AddRequest<'a> {
    pub text: &'a str,
}

/// Body returned by `POST /add`
#[derive(Debug, Clone, Deserialize)]
pub struct AddResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    /// Entries the server extracted from the free text
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl AddResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// Number of entries the server reports it created
    pub fn created_count(&self) -> usize {
        match &self.data {
            Some(serde_json::Value::Array(entries)) => entries.len(),
            _ => 0,
        }
    }
}

/// Parse a `/jadwal` body.
///
/// Anything that is not a JSON array (including the `{"status": "error"}`
/// object sent to logged-out clients) means "no items".
pub fn items_from_json(body: &str) -> ScheduleResult<Vec<ScheduleItem>> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    match value {
        serde_json::Value::Array(_) => Ok(serde_json::from_value(value)?),
        _ => Ok(Vec::new()),
    }
}

/// Parse a `/add` body
pub fn add_response_from_json(body: &str) -> ScheduleResult<AddResponse> {
    Ok(serde_json::from_str(body)?)
}

/// One rendered row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowView {
    /// Id carried by the row's delete control
    pub id: i64,
    pub title: String,
    pub subtitle: String,
}

impl From<&ScheduleItem> for RowView {
    fn from(item: &ScheduleItem) -> Self {
        Self {
            id: item.id,
            title: item.judul.clone(),
            subtitle: item.subtitle(),
        }
    }
}

/// What the list container should show
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListView {
    /// Single "no schedule yet" item
    Placeholder,
    /// One row per item, in server order
    Rows(Vec<RowView>),
}

impl ListView {
    pub fn from_items(items: &[ScheduleItem]) -> Self {
        if items.is_empty() {
            ListView::Placeholder
        } else {
            ListView::Rows(items.iter().map(RowView::from).collect())
        }
    }

    /// Number of items in the container, counting the placeholder
    pub fn len(&self) -> usize {
        match self {
            ListView::Placeholder => 1,
            ListView::Rows(rows) => rows.len(),
        }
    }
}
