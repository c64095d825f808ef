//! Domain models for the Crop Advisor service

mod location;
mod recommendation;
mod weather;

pub use location::*;
pub use recommendation::*;
pub use weather::*;
