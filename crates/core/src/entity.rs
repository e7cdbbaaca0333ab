//! Descriptors for the name-only catalog entities.
//!
//! Directors and genres share one shape (`id` plus a single `name` column),
//! so repositories, serializers and handlers are written once over an
//! [`EntityDescriptor`] instead of once per entity.

use crate::types::DbId;

/// Entity label used when a movie lookup misses.
pub const MOVIE: &str = "movie";

/// Maximum accepted length (in characters) of a director or genre name.
pub const NAME_MAX_LEN: usize = 255;

/// Static description of a name-only entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityDescriptor {
    /// Lowercase label, also the URL segment (`"director"`).
    pub entity: &'static str,
    /// Backing table.
    pub table: &'static str,
    /// Wire key carrying the name, on input and output (`"director_name"`).
    pub name_field: &'static str,
}

pub const DIRECTOR: EntityDescriptor = EntityDescriptor {
    entity: "director",
    table: "directors",
    name_field: "director_name",
};

pub const GENRE: EntityDescriptor = EntityDescriptor {
    entity: "genre",
    table: "genres",
    name_field: "genre_name",
};

impl EntityDescriptor {
    /// Path of a single resource, e.g. `/director/7`.
    pub fn location(&self, id: DbId) -> String {
        format!("/{}/{id}", self.entity)
    }
}
