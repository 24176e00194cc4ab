//! Spark field host
//!
//! Owns the page's single renderer and wires it to the browser: viewport
//! sizing on resize, the burst timer, and a free-running animation frame
//! loop. Everything runs on the UI thread and shares the renderer through
//! `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use jadwal::schedule::FxTrigger;
use jadwal::{FxConfig, SparkRenderer};

use super::canvas::CanvasSurface;

pub const CANVAS_ID: &str = "fx";

type SharedRenderer = Rc<RefCell<SparkRenderer<SmallRng>>>;

#[derive(Clone)]
pub struct FxHost {
    renderer: SharedRenderer,
}

impl FxHost {
    pub fn new(config: FxConfig) -> Self {
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        Self {
            renderer: Rc::new(RefCell::new(SparkRenderer::new(
                config,
                SmallRng::seed_from_u64(seed),
            ))),
        }
    }

    /// Start the field on `#fx`. No-op after the first successful start.
    pub fn start(&self) {
        if self.renderer.borrow().is_running() {
            return;
        }

        let Some(canvas) = document()
            .get_element_by_id(CANVAS_ID)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            web_sys::console::error_1(&"Spark canvas #fx not found".into());
            return;
        };
        let Some(surface) = CanvasSurface::for_canvas(&canvas) else {
            web_sys::console::error_1(&"Spark canvas has no 2d context".into());
            return;
        };

        let (width, height) = fit_to_viewport(&canvas);
        if !self.renderer.borrow_mut().start(width, height) {
            return;
        }

        self.watch_resize(canvas);
        self.schedule_bursts();
        self.run_frames(surface);
    }

    fn watch_resize(&self, canvas: HtmlCanvasElement) {
        let renderer = Rc::clone(&self.renderer);
        let on_resize = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let (width, height) = fit_to_viewport(&canvas);
            renderer.borrow_mut().on_resize(width, height);
        }) as Box<dyn FnMut(web_sys::Event)>);

        let _ = window().add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        on_resize.forget();
    }

    fn schedule_bursts(&self) {
        let interval_ms = self.renderer.borrow().field().config().spawn_interval_ms;
        let renderer = Rc::clone(&self.renderer);

        gloo_timers::callback::Interval::new(interval_ms, move || {
            renderer.borrow_mut().on_spawn_timer();
        })
        .forget();
    }

    fn run_frames(&self, mut surface: CanvasSurface) {
        let renderer = Rc::clone(&self.renderer);
        let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);

        *holder.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
            renderer.borrow_mut().frame(&mut surface);
            if let Some(cb) = holder_for_cb.borrow().as_ref() {
                request_frame(cb);
            }
        }) as Box<dyn FnMut(f64)>));

        if let Some(cb) = holder.borrow().as_ref() {
            request_frame(cb);
        }
    }
}

impl FxTrigger for FxHost {
    fn trigger(&self) {
        self.start();
    }
}

fn request_frame(cb: &Closure<dyn FnMut(f64)>) {
    if let Err(e) = window().request_animation_frame(cb.as_ref().unchecked_ref()) {
        web_sys::console::error_1(&e);
    }
}

/// Match the canvas to the viewport and return its new size
fn fit_to_viewport(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let window = window();
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);

    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    (width, height)
}
