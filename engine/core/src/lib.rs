//! labcalc Core - Headless Calculator Navigation
//!
//! This crate holds everything labcalc does except drawing: the calculator
//! catalog, the input fields of the calculator being filled in, the stage
//! machine that moves the user from domain to result, and the façade that
//! turns the current stage into text.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Surfaces                             │
//! │        terminal UI  ·  tests  ·  scripted/headless           │
//! └───────────────┬──────────────────────────────▲───────────────┘
//!                 │ NavEvent (up)                │ Screen / String (down)
//! ┌───────────────▼──────────────────────────────┴───────────────┐
//! │                       LABCALC CORE                           │
//! │  ┌─────────────┐   ┌─────────────┐   ┌────────────────────┐  │
//! │  │  Navigator  │──▶│  FieldSet   │   │      Renderer      │  │
//! │  │ (stages)    │   │ (focus ring)│   │  (render façade)   │  │
//! │  └──────┬──────┘   └─────────────┘   └────────────────────┘  │
//! │         │ lookup / evaluate                                  │
//! │  ┌──────▼──────────────────────────────────────────────────┐ │
//! │  │          Registry  (domains → calculators → formula)    │ │
//! │  └─────────────────────────────────────────────────────────┘ │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`Registry`]: immutable catalog addressed by [`DomainId`] / [`CalculatorId`]
//! - [`FieldSet`]: the fields being filled in and the focus ring over them
//! - [`Navigator`]: owns the [`SessionState`] and applies [`NavEvent`]s
//! - [`Renderer`]: pure projection of the navigator into a [`Screen`]
//! - [`CalcError`]: every failure, user-facing or not
//!
//! # Quick Start
//!
//! ```
//! use labcalc_core::{NavEvent, Navigator, Registry, Renderer, Stage};
//!
//! let mut nav = Navigator::new(Registry::builtin().unwrap());
//! nav.handle_event(NavEvent::Confirm).unwrap(); // Math
//! nav.handle_event(NavEvent::MoveDown).unwrap(); // Decimal to Percent
//! nav.handle_event(NavEvent::Confirm).unwrap();
//! for event in NavEvent::typed("0.42") {
//!     nav.handle_event(event).unwrap();
//! }
//! nav.handle_event(NavEvent::FocusForward).unwrap();
//! assert_eq!(nav.handle_event(NavEvent::Confirm).unwrap(), Stage::Result);
//!
//! let text = Renderer::default().render(&nav);
//! assert!(text.contains("Percent: 42.00%"));
//! ```
//!
//! # No Terminal Dependencies
//!
//! Nothing here draws, reads keys or touches the filesystem. Surfaces own
//! all I/O.

#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod events;
pub mod fields;
pub mod formulas;
pub mod navigator;
pub mod registry;
pub mod render;

// Re-exports for convenience
pub use config::{ConfigError, LabcalcConfig};
pub use error::CalcError;
pub use events::NavEvent;
pub use fields::{Field, FieldSet, TextEdit, DEFAULT_CHAR_LIMIT};
pub use navigator::{Navigator, SessionState, Stage};
pub use registry::{
    ArgValue, Calculator, CalculatorId, CalculatorKey, Domain, DomainId, FieldKind, FieldSpec,
    Formula, Measurement, Registry, RegistryBuilder,
};
pub use render::{Emphasis, HintFn, RenderStyle, Renderer, Screen, ScreenLine};
