//! Domain logic for the movie catalog.
//!
//! Nothing in this crate touches the database or HTTP; the `cinema-db` and
//! `cinema-api` crates build on the types and rules defined here.

pub mod entity;
pub mod error;
pub mod filter;
pub mod payload;
pub mod types;
