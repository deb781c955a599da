//! Request handlers for the movie catalog.
//!
//! Every handler opens one session from the pool, threads it through the
//! repository calls it needs, and commits before responding. Errors
//! propagate with `?`; dropping the uncommitted session rolls back.

pub mod movies;
pub mod stars;
