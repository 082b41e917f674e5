//! Infrastructure layer providing external service integrations.
//!
//! This module contains the REST implementation of the product store and
//! the worker thread that executes store requests off the UI loop.

pub mod remote;
pub mod worker;

pub use remote::*;
pub use worker::*;
