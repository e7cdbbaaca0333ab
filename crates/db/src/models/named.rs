//! Rows and wire type shared by directors and genres.

use cinema_core::entity::EntityDescriptor;
use cinema_core::types::{DbId, Timestamp};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use sqlx::FromRow;

/// A row from `directors` or `genres`; both tables have the same columns.
#[derive(Debug, Clone, FromRow)]
pub struct NamedRow {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl NamedRow {
    /// Wire view keyed by the descriptor's name field.
    pub fn into_view(self, descriptor: EntityDescriptor) -> NamedView {
        NamedView {
            descriptor,
            id: self.id,
            name: self.name,
        }
    }
}

/// Serializes as `{"id": .., "<entity>_name": ..}`.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedView {
    pub descriptor: EntityDescriptor,
    pub id: DbId,
    pub name: String,
}

impl Serialize for NamedView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry(self.descriptor.name_field, &self.name)?;
        map.end()
    }
}
