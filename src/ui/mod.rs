//! Terminal console for one entity screen.
//!
//! `runtime.rs` owns the loop: draw, wait for an [`events::AppEvent`], feed it
//! to [`app::App`]. Rendering is split by surface (`grid_view`,
//! `flow_dialog`, `column_picker`) and reads only resolved frames.

pub mod app;
pub mod column_picker;
pub mod events;
pub mod flow_dialog;
pub mod grid_view;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
