//! # Jadwal
//!
//! Client for a personal schedule ("jadwal") list, with a decorative spark
//! field overlaid on the page.
//!
//! ## Modules
//!
//! - [`schedule`]: list/add/delete against the `/jadwal` backend
//! - [`fx`]: spark particle field and its start-once renderer
//! - [`config`]: TOML configuration with environment overrides
//!
//! The core compiles for `wasm32-unknown-unknown` with
//! `default-features = false`; the `native` feature adds the reqwest
//! transport and the `jadwal` CLI.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jadwal::config::ServerConfig;
//! use jadwal::schedule::{HttpScheduleApi, ScheduleApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpScheduleApi::new(&ServerConfig::default())?;
//!
//!     for item in api.list().await? {
//!         println!("{} ({} • {})", item.judul, item.tanggal, item.jam);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod fx;
pub mod schedule;

// Re-export top-level types for convenience
pub use schedule::{
    escape_html, render_list_html, FxTrigger, ListView, RowView, ScheduleApi, ScheduleController,
    ScheduleError, ScheduleItem, ScheduleResult, ScheduleView, SubmitOutcome,
};

pub use fx::{FxConfig, Particle, ParticleField, SparkRenderer, Surface};

pub use config::{Config, ConfigError, LoggingConfig, ServerConfig};
