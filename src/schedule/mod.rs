//! Schedule list
//!
//! Client side of the `/jadwal` backend: the wire model, the controller that
//! loads/adds/deletes entries, and HTML rendering for exports.
//!
//! ## Architecture
//!
//! - **ScheduleApi**: transport seam (reqwest natively, gloo-net in the browser)
//! - **ScheduleView**: the page or terminal the list is rendered into
//! - **ScheduleController**: the three user operations on top of both

mod controller;
mod error;
#[cfg(feature = "native")]
mod http;
mod markup;
mod types;

pub use controller::{
    FxTrigger, ScheduleApi, ScheduleController, ScheduleView, SubmitOutcome, EMPTY_INPUT_ALERT,
};
pub use error::{ScheduleError, ScheduleResult};
#[cfg(feature = "native")]
pub use http::HttpScheduleApi;
pub use markup::{escape_html, render_list_html};
pub use types::{
    add_response_from_json, items_from_json, AddRequest, AddResponse, ListView, RowView,
    ScheduleItem, PLACEHOLDER_HINT, PLACEHOLDER_TITLE, STATUS_SUCCESS,
};
