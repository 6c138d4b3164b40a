//! labcalc TUI - Terminal interface for labcalc
//!
//! A thin client over `labcalc-core`: key presses become `NavEvent`s, the
//! core's render façade produces a `Screen`, and this crate draws it.
//!
//! # Architecture
//!
//! - **Keymap**: physical keys to navigation events, per stage
//! - **Theme**: immutable colour palette for each emphasis
//! - **View**: lays a `Screen` out on a ratatui frame
//! - **App**: event loop tying the above to a `Navigator`

pub mod app;
pub mod keymap;
pub mod theme;
pub mod view;

pub use app::App;
