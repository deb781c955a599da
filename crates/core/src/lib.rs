//! Domain primitives shared by the database and API crates.
//!
//! Nothing in here performs IO, so it can be unit-tested without a database.

pub mod error;
pub mod search;
pub mod types;
