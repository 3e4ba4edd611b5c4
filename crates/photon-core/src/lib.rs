//! # Photon Core
//!
//! Core types and error definitions for Photon.
//! This crate provides the photo record and the error taxonomy shared by
//! the service, REST and server layers.

pub mod error;
pub mod photo;
pub mod result;

pub use error::*;
pub use photo::*;
pub use result::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
