//! Ocula Demo Application
//!
//! An eframe shell hosting a small widget tree so the inspector has
//! something to point at.

mod app;
mod demo;

pub use app::OculaApp;
pub use demo::DemoIds;
