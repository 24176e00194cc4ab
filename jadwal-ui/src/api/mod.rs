//! Schedule backend access

mod client;

pub use client::GlooScheduleApi;
