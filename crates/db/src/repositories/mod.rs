//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept the request session (`&mut PgConnection`) as the first argument.

pub mod casting_repo;
pub mod movie_repo;
pub mod star_repo;
pub mod stats_repo;

pub use casting_repo::CastingRepo;
pub use movie_repo::MovieRepo;
pub use star_repo::StarRepo;
pub use stats_repo::StatsRepo;
