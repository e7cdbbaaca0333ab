//! Query-string parsing for the movie listing.
//!
//! Ids arrive as optional strings; an absent or empty value means "not
//! set", anything else must be a positive integer.

use cinema_core::error::CoreError;
use cinema_core::types::DbId;
use serde::Deserialize;

/// Query parameters for `GET /movies/`.
#[derive(Debug, Default, Deserialize)]
pub struct MovieListParams {
    pub director_id: Option<String>,
    pub genre_id: Option<String>,
}

impl MovieListParams {
    /// Parse both ids, returning `(director_id, genre_id)`.
    pub fn parse_ids(&self) -> Result<(Option<DbId>, Option<DbId>), CoreError> {
        Ok((
            parse_optional_id("director_id", self.director_id.as_deref())?,
            parse_optional_id("genre_id", self.genre_id.as_deref())?,
        ))
    }
}

/// Parse one optional id parameter.
pub fn parse_optional_id(name: &str, raw: Option<&str>) -> Result<Option<DbId>, CoreError> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => match value.parse::<DbId>() {
            Ok(id) if id > 0 => Ok(Some(id)),
            _ => Err(CoreError::Validation(format!(
                "{name} must be a positive integer, got '{value}'"
            ))),
        },
    }
}
