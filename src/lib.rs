//! PRODCAT - Terminal Product Catalog Library
//!
//! A terminal-based product catalog manager over a remote document store,
//! built in Rust.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
