//! Business logic services for the Crop Advisor service

pub mod location;
pub mod recommendation;
pub mod weather;

pub use location::LocationStore;
pub use recommendation::RecommendationService;
pub use weather::WeatherService;
