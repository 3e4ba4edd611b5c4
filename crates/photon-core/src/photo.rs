//! Photo record served by the collection endpoints.

use serde::{Deserialize, Serialize};

/// One item of the upstream photo collection.
///
/// Field names on the wire follow the upstream JSON (`albumId`, `thumbnailUrl`).
/// Collections keep the order the upstream returned them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Identifier of the album the photo belongs to.
    pub album_id: i64,
    /// Unique photo identifier.
    pub id: i64,
    /// Photo title.
    pub title: String,
    /// Full-size image URL.
    pub url: String,
    /// Thumbnail image URL.
    pub thumbnail_url: String,
}

impl Photo {
    /// Creates a new photo record.
    #[must_use]
    pub fn new(
        album_id: i64,
        id: i64,
        title: impl Into<String>,
        url: impl Into<String>,
        thumbnail_url: impl Into<String>,
    ) -> Self {
        Self {
            album_id,
            id,
            title: title.into(),
            url: url.into(),
            thumbnail_url: thumbnail_url.into(),
        }
    }
}
