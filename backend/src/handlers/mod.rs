//! HTTP handlers for the Crop Advisor service

pub mod health;
pub mod location;
pub mod recommendation;
pub mod weather;

pub use health::*;
pub use location::*;
pub use recommendation::*;
pub use weather::*;
