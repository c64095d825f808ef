//! Shared types and models for the Crop Advisor service
//!
//! This crate contains the domain types shared between the backend and any
//! future front-end component. It is free of I/O.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
