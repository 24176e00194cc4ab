//! Page wiring
//!
//! Attaches the schedule controller and the spark field to the server
//! rendered page.

mod boot;
mod view;

pub use boot::boot;
