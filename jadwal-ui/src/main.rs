//! Jadwal Page Client
//!
//! Schedule list and spark field for the jadwal page, built with Leptos
//! (WASM).
//!
//! # Architecture
//!
//! The page markup is served by the backend; this bundle attaches to it.
//! The schedule list is mounted into `#jadwalList` (absent on the login
//! page, where only the spark field runs), submit is bound to `#kirimBtn`
//! and Enter on `#inputText`, and sparks are drawn on the `#fx` canvas.

mod api;
mod components;
mod fx;
mod page;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    page::boot();
}
