//! Application layer managing page state and transitions.
//!
//! This module coordinates between the domain layer and presentation layer:
//! it owns the catalog page state and applies the completions of remote
//! operations dispatched by the infrastructure layer.

pub mod state;

pub use state::*;
