//! Schedule List Controller
//!
//! Load, submit and delete, each a single linear request → parse →
//! render/alert sequence with no retries. The transport and the page are
//! reached through the [`ScheduleApi`] and [`ScheduleView`] seams so the
//! same controller drives the browser client, the CLI and the tests.

use async_trait::async_trait;

use super::error::ScheduleResult;
use super::types::{AddResponse, ListView, ScheduleItem};

/// Alert shown when the user submits empty input
pub const EMPTY_INPUT_ALERT: &str = "Tulis jadwal dulu 😭";

/// Transport to the schedule backend
#[async_trait(?Send)]
pub trait ScheduleApi {
    /// `GET /jadwal`
    async fn list(&self) -> ScheduleResult<Vec<ScheduleItem>>;

    /// `POST /add` with `{ text }`
    async fn add(&self, text: &str) -> ScheduleResult<AddResponse>;

    /// `DELETE /delete/{id}`; the response body is ignored
    async fn delete(&self, id: i64) -> ScheduleResult<()>;
}

/// The page the controller renders into
pub trait ScheduleView {
    /// Whether this page has a list container at all
    fn has_list(&self) -> bool;

    /// Replace the container contents
    fn render(&self, list: ListView);

    /// Current free-text input, untrimmed
    fn input_text(&self) -> String;

    fn clear_input(&self);

    /// Blocking notification
    fn alert(&self, message: &str);
}

/// Fired at the end of every load
pub trait FxTrigger {
    fn trigger(&self);
}

impl<F: Fn()> FxTrigger for F {
    fn trigger(&self) {
        self()
    }
}

/// Result of a submit action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Server accepted the text; input cleared and list reloaded
    Added,
    /// Nothing to send; user was alerted
    EmptyInput,
    /// Server reported a non-success status with this message
    Rejected(String),
}

pub struct ScheduleController<A, V, F> {
    api: A,
    view: V,
    fx: F,
}

impl<A, V, F> ScheduleController<A, V, F>
where
    A: ScheduleApi,
    V: ScheduleView,
    F: FxTrigger,
{
    pub fn new(api: A, view: V, fx: F) -> Self {
        Self { api, view, fx }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Fetch and render the list, then trigger the spark field.
    ///
    /// The trigger fires on every path, including transport failure.
    pub async fn load(&self) -> ScheduleResult<()> {
        if !self.view.has_list() {
            tracing::debug!("No list container on this page, skipping fetch");
            self.fx.trigger();
            return Ok(());
        }

        let result = self.api.list().await.map(|items| {
            tracing::debug!(count = items.len(), "Loaded schedule");
            self.view.render(ListView::from_items(&items));
        });

        self.fx.trigger();
        result
    }

    /// Send the current input to the server.
    pub async fn submit(&self) -> ScheduleResult<SubmitOutcome> {
        let input = self.view.input_text();
        let text = input.trim();

        if text.is_empty() {
            self.view.alert(EMPTY_INPUT_ALERT);
            return Ok(SubmitOutcome::EmptyInput);
        }

        let response = self.api.add(text).await?;

        if response.is_success() {
            tracing::info!(created = response.created_count(), "Schedule entry added");
            self.view.clear_input();
            self.load().await?;
            Ok(SubmitOutcome::Added)
        } else {
            let message = response
                .message
                .unwrap_or_else(|| format!("status {}", response.status));
            tracing::warn!(status = %response.status, message = %message, "Add rejected");
            self.view.alert(&format!("Error: {}", message));
            Ok(SubmitOutcome::Rejected(message))
        }
    }

    /// Delete an entry, then reload no matter what the delete returned.
    ///
    /// A failed delete is reported after the reload.
    pub async fn remove(&self, id: i64) -> ScheduleResult<()> {
        let deleted = self.api.delete(id).await;
        if let Err(e) = &deleted {
            tracing::warn!(id, error = %e, "Delete request failed");
        }

        self.load().await?;
        deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ScheduleError;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeApi {
        items: RefCell<Vec<ScheduleItem>>,
        add_body: RefCell<Option<String>>,
        fail_list: Cell<bool>,
        fail_delete: Cell<bool>,
        calls: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl ScheduleApi for FakeApi {
        async fn list(&self) -> ScheduleResult<Vec<ScheduleItem>> {
            self.calls.borrow_mut().push("GET /jadwal".to_string());
            if self.fail_list.get() {
                return Err(ScheduleError::Transport("connection refused".to_string()));
            }
            Ok(self.items.borrow().clone())
        }

        async fn add(&self, text: &str) -> ScheduleResult<AddResponse> {
            self.calls.borrow_mut().push(format!("POST /add {}", text));
            let body = self
                .add_body
                .borrow()
                .clone()
                .unwrap_or_else(|| r#"{"status":"success"}"#.to_string());
            crate::schedule::add_response_from_json(&body)
        }

        async fn delete(&self, id: i64) -> ScheduleResult<()> {
            self.calls.borrow_mut().push(format!("DELETE /delete/{}", id));
            if self.fail_delete.get() {
                return Err(ScheduleError::Transport("reset".to_string()));
            }
            self.items.borrow_mut().retain(|item| item.id != id);
            Ok(())
        }
    }

    struct FakeView {
        has_list: bool,
        input: RefCell<String>,
        rendered: RefCell<Vec<ListView>>,
        alerts: RefCell<Vec<String>>,
    }

    impl FakeView {
        fn new(has_list: bool) -> Self {
            Self {
                has_list,
                input: RefCell::new(String::new()),
                rendered: RefCell::new(Vec::new()),
                alerts: RefCell::new(Vec::new()),
            }
        }
    }

    impl ScheduleView for FakeView {
        fn has_list(&self) -> bool {
            self.has_list
        }

        fn render(&self, list: ListView) {
            self.rendered.borrow_mut().push(list);
        }

        fn input_text(&self) -> String {
            self.input.borrow().clone()
        }

        fn clear_input(&self) {
            self.input.borrow_mut().clear();
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    fn meeting() -> ScheduleItem {
        ScheduleItem {
            id: 1,
            judul: "Meeting".to_string(),
            tanggal: "2024-01-01".to_string(),
            jam: "10:00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_load_empty_renders_placeholder() {
        let fx = Cell::new(0);
        let trigger = || fx.set(fx.get() + 1);
        let controller = ScheduleController::new(FakeApi::default(), FakeView::new(true), trigger);

        controller.load().await.unwrap();

        assert_eq!(*controller.view().rendered.borrow(), vec![ListView::Placeholder]);
        assert_eq!(fx.get(), 1);
    }

    #[tokio::test]
    async fn test_load_renders_rows() {
        let fx = Cell::new(0);
        let trigger = || fx.set(fx.get() + 1);
        let api = FakeApi::default();
        api.items.borrow_mut().push(meeting());
        let controller = ScheduleController::new(api, FakeView::new(true), trigger);

        controller.load().await.unwrap();

        let rendered = controller.view().rendered.borrow();
        let ListView::Rows(rows) = &rendered[0] else {
            panic!("expected rows, got {:?}", rendered[0]);
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Meeting");
        assert_eq!(rows[0].subtitle, "2024-01-01 • 10:00");
        assert_eq!(rows[0].id, 1);
        assert_eq!(fx.get(), 1);
    }

    #[tokio::test]
    async fn test_load_without_container_skips_fetch() {
        let fx = Cell::new(0);
        let trigger = || fx.set(fx.get() + 1);
        let controller = ScheduleController::new(FakeApi::default(), FakeView::new(false), trigger);

        controller.load().await.unwrap();

        assert!(controller.api().calls.borrow().is_empty());
        assert!(controller.view().rendered.borrow().is_empty());
        assert_eq!(fx.get(), 1);
    }

    #[tokio::test]
    async fn test_load_failure_still_triggers_fx() {
        let fx = Cell::new(0);
        let trigger = || fx.set(fx.get() + 1);
        let api = FakeApi::default();
        api.fail_list.set(true);
        let controller = ScheduleController::new(api, FakeView::new(true), trigger);

        let err = controller.load().await.unwrap_err();

        assert!(matches!(err, ScheduleError::Transport(_)));
        assert!(controller.view().rendered.borrow().is_empty());
        assert_eq!(fx.get(), 1);
    }

    #[tokio::test]
    async fn test_submit_blank_sends_nothing() {
        let controller = ScheduleController::new(FakeApi::default(), FakeView::new(true), || {});
        *controller.view().input.borrow_mut() = "   \t ".to_string();

        let outcome = controller.submit().await.unwrap();

        assert_eq!(outcome, SubmitOutcome::EmptyInput);
        assert!(controller.api().calls.borrow().is_empty());
        assert_eq!(*controller.view().alerts.borrow(), vec![EMPTY_INPUT_ALERT]);
    }

    #[tokio::test]
    async fn test_submit_success_clears_and_reloads() {
        let controller = ScheduleController::new(FakeApi::default(), FakeView::new(true), || {});
        *controller.view().input.borrow_mut() = "  rapat besok jam 9  ".to_string();

        let outcome = controller.submit().await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Added);
        assert_eq!(
            *controller.api().calls.borrow(),
            vec!["POST /add rapat besok jam 9", "GET /jadwal"]
        );
        assert!(controller.view().input.borrow().is_empty());
        assert!(controller.view().alerts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_submit_rejected_alerts_server_message() {
        let api = FakeApi::default();
        *api.add_body.borrow_mut() =
            Some(r#"{"status":"error","message":"Teks kosong"}"#.to_string());
        let controller = ScheduleController::new(api, FakeView::new(true), || {});
        *controller.view().input.borrow_mut() = "something".to_string();

        let outcome = controller.submit().await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Rejected("Teks kosong".to_string()));
        assert_eq!(*controller.view().alerts.borrow(), vec!["Error: Teks kosong"]);
        assert_eq!(*controller.api().calls.borrow(), vec!["POST /add something"]);
        assert_eq!(*controller.view().input.borrow(), "something");
    }

    #[tokio::test]
    async fn test_remove_deletes_then_reloads_once() {
        let api = FakeApi::default();
        api.items.borrow_mut().push(ScheduleItem { id: 5, ..meeting() });
        let controller = ScheduleController::new(api, FakeView::new(true), || {});

        controller.remove(5).await.unwrap();

        assert_eq!(
            *controller.api().calls.borrow(),
            vec!["DELETE /delete/5", "GET /jadwal"]
        );
        assert_eq!(*controller.view().rendered.borrow(), vec![ListView::Placeholder]);
    }

    #[tokio::test]
    async fn test_remove_reloads_even_when_delete_fails() {
        let api = FakeApi::default();
        api.fail_delete.set(true);
        let controller = ScheduleController::new(api, FakeView::new(true), || {});

        let err = controller.remove(5).await.unwrap_err();

        assert!(matches!(err, ScheduleError::Transport(_)));
        assert_eq!(
            *controller.api().calls.borrow(),
            vec!["DELETE /delete/5", "GET /jadwal"]
        );
    }
}
