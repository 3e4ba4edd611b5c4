//! Result type aliases for Photon.

use crate::PhotonError;

/// A specialized `Result` type for Photon operations.
pub type PhotonResult<T> = Result<T, PhotonError>;
