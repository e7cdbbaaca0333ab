pub mod movie;
pub mod named;
