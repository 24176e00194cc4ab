//! Page boot sequence
//!
//! Mirrors a page load: mount the list if the page has one, bind submit,
//! then run one load, which starts the spark field when it finishes.

use leptos::*;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use jadwal::schedule::{ListView, ScheduleController, ScheduleError, SubmitOutcome};
use jadwal::FxConfig;

use super::view::{input_element, list_container, DomView, SUBMIT_ID};
use crate::api::GlooScheduleApi;
use crate::components::ScheduleList;
use crate::fx::FxHost;

type Controller = ScheduleController<GlooScheduleApi, DomView, FxHost>;

pub fn boot() {
    let list = create_rw_signal(None::<ListView>);
    let controller: Rc<Controller> = Rc::new(ScheduleController::new(
        GlooScheduleApi::new(),
        DomView::new(list),
        FxHost::new(FxConfig::default()),
    ));

    if let Some(container) = list_container() {
        let for_delete = Rc::clone(&controller);
        let on_delete = Callback::new(move |id: i64| {
            let controller = Rc::clone(&for_delete);
            spawn_local(async move {
                if let Err(e) = controller.remove(id).await {
                    report("delete", &e);
                }
            });
        });

        mount_to(container, move || view! { <ScheduleList list=list on_delete=on_delete /> });
        bind_submit(&controller);
    }

    spawn_local(async move {
        if let Err(e) = controller.load().await {
            report("load", &e);
        }
    });
}

/// `#kirimBtn` click and Enter in `#inputText` both submit
fn bind_submit(controller: &Rc<Controller>) {
    if let Some(button) = document().get_element_by_id(SUBMIT_ID) {
        let controller = Rc::clone(controller);
        let on_click = Closure::wrap(Box::new(move |_: web_sys::Event| {
            submit(Rc::clone(&controller));
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }

    if let Some(input) = input_element() {
        let controller = Rc::clone(controller);
        let on_key = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                event.prevent_default();
                submit(Rc::clone(&controller));
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        let _ = input.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
        on_key.forget();
    }
}

fn submit(controller: Rc<Controller>) {
    spawn_local(async move {
        match controller.submit().await {
            Ok(SubmitOutcome::Added) => {
                web_sys::console::log_1(&"Schedule entry added".into());
            }
            Ok(_) => {}
            Err(e) => report("submit", &e),
        }
    });
}

/// Transport failures have no user-visible recovery; they go to the console
fn report(operation: &str, error: &ScheduleError) {
    web_sys::console::error_1(&format!("Schedule {} failed: {}", operation, error).into());
}
