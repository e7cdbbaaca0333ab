//! Filter resolution for the movie listing.
//!
//! The handler hands over already-parsed optional ids; this module decides
//! which predicate applies. The first matching rule wins:
//!
//! 1. both ids        -> director AND genre
//! 2. genre id only   -> genre
//! 3. director id only -> director
//! 4. neither         -> every movie
//!
//! Every filtered variant is ordered by release year ascending.

use crate::types::DbId;

/// Predicate applied to the `movies` listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieFilter {
    All,
    ByGenre(DbId),
    ByDirector(DbId),
    ByDirectorAndGenre { director_id: DbId, genre_id: DbId },
}

impl MovieFilter {
    /// Pick the filter for the given optional director and genre ids.
    pub fn resolve(director_id: Option<DbId>, genre_id: Option<DbId>) -> Self {
        match (director_id, genre_id) {
            (Some(director_id), Some(genre_id)) => Self::ByDirectorAndGenre {
                director_id,
                genre_id,
            },
            (None, Some(genre_id)) => Self::ByGenre(genre_id),
            (Some(director_id), None) => Self::ByDirector(director_id),
            (None, None) => Self::All,
        }
    }

    /// Whether results are ordered by year. The unfiltered listing keeps
    /// the store's id order instead.
    pub fn orders_by_year(&self) -> bool {
        !matches!(self, Self::All)
    }

    pub fn director_id(&self) -> Option<DbId> {
        match *self {
            Self::ByDirector(id) => Some(id),
            Self::ByDirectorAndGenre { director_id, .. } => Some(director_id),
            _ => None,
        }
    }

    pub fn genre_id(&self) -> Option<DbId> {
        match *self {
            Self::ByGenre(id) => Some(id),
            Self::ByDirectorAndGenre { genre_id, .. } => Some(genre_id),
            _ => None,
        }
    }
}
