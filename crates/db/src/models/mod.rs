//! Row models and their wire representations.
//!
//! Each submodule contains:
//! - `FromRow` structs matching what the repository queries select
//! - The `Serialize` wire type the API returns, built from those rows
//!
//! Row structs are never serialized directly, so audit columns and raw
//! foreign keys stay off the wire.

pub mod movie;
pub mod named;
