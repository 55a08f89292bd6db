//! Reusable list-management engine for admin screens: a data grid (search,
//! sort, pagination, column visibility, responsive toolbar) and the
//! confirm → process → succeed mutation flow, plus a terminal console that
//! drives both over a JSON fixture.

pub mod config;
pub mod console;
pub mod flow;
pub mod grid;
pub mod logging;
pub mod ui;
