/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Release years are stored as SMALLINT.
pub type Year = i16;

/// Running time in minutes, stored as SMALLINT.
pub type Minutes = i16;
