//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. The pool is the only store
//! handle; repositories keep no state between calls.

pub mod movie_repo;
pub mod named_entity_repo;

pub use movie_repo::MovieRepo;
pub use named_entity_repo::NamedEntityRepo;
