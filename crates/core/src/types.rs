/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Reservation times are restaurant wall-clock times and carry no zone.
pub type WallClock = chrono::NaiveDateTime;
