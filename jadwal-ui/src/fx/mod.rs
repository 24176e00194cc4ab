//! Spark field in the browser

mod canvas;
mod host;

pub use host::FxHost;
