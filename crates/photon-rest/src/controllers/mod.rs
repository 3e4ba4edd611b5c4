//! REST API controllers.

pub mod health_controller;
pub mod photo_controller;

pub use health_controller::*;
