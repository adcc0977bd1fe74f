//! Shared types and models for the Plant Care Assistant
//!
//! This crate contains types shared between the backend, frontend (via WASM),
//! and other components of the system.

pub mod models;
pub mod scheduler;
pub mod types;
pub mod validation;

pub use models::*;
pub use scheduler::*;
pub use types::*;
pub use validation::*;
