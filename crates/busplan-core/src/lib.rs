//! # busplan-core: Fleet Assignment Data Model
//!
//! Shared types for assigning buses to routes across the daily operating
//! shifts.
//!
//! ## Core Data Structures
//!
//! - [`Route`] - route identifier with per-shift demand and trip factors
//! - [`Shift`] - one of the [`SHIFT_COUNT`] operating periods
//! - [`BusType`] / [`Fleet`] - bus capacities, fleet caps and trip costs
//! - [`BusplanError`] - error type shared by the loader, config and CLI
//! - [`Diagnostics`] - warnings and errors found while checking route data
//!
//! ## Quick Start
//!
//! ```rust
//! use busplan_core::{Fleet, Route, Shift};
//!
//! let route = Route::new("1", [60.0, 120.0, 90.0, 30.0], [1.0, 2.0, 1.0, 1.0]);
//! let fleet = Fleet::default();
//!
//! let shift = Shift::new(1).unwrap();
//! let seats = fleet.types()[0].seats_for_trips(route.trips(shift));
//! assert!(seats >= route.demand(shift) / 2.0);
//! ```

pub mod diagnostics;
pub mod error;
pub mod fleet;
pub mod route;

pub use diagnostics::{DiagnosticIssue, Diagnostics, Severity};
pub use error::{BusplanError, BusplanResult};
pub use fleet::{BusType, Fleet};
pub use route::{Route, RouteId, Shift, SHIFT_COUNT};
