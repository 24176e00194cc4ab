//! DOM-backed schedule view

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};

use jadwal::schedule::{ListView, ScheduleView};

pub const LIST_ID: &str = "jadwalList";
pub const INPUT_ID: &str = "inputText";
pub const SUBMIT_ID: &str = "kirimBtn";

/// The list container, if this page has one
pub fn list_container() -> Option<HtmlElement> {
    document()
        .get_element_by_id(LIST_ID)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn input_element() -> Option<HtmlInputElement> {
    document()
        .get_element_by_id(INPUT_ID)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
}

/// Renders into the signal behind `#jadwalList` and reads `#inputText`
#[derive(Clone, Copy)]
pub struct DomView {
    list: RwSignal<Option<ListView>>,
}

impl DomView {
    pub fn new(list: RwSignal<Option<ListView>>) -> Self {
        Self { list }
    }
}

impl ScheduleView for DomView {
    fn has_list(&self) -> bool {
        list_container().is_some()
    }

    fn render(&self, list: ListView) {
        self.list.set(Some(list));
    }

    fn input_text(&self) -> String {
        input_element().map(|input| input.value()).unwrap_or_default()
    }

    fn clear_input(&self) {
        if let Some(input) = input_element() {
            input.set_value("");
        }
    }

    fn alert(&self, message: &str) {
        let _ = window().alert_with_message(message);
    }
}
