//! # Photon Config
//!
//! Configuration management for Photon.
//! Supports layered configuration from files, a `.env` file and
//! environment variables, validated before the server starts.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
