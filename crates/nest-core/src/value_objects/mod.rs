//! Value objects - immutable types that represent domain concepts

mod listing;
mod snowflake;
mod write_result;

pub use listing::{QueryListing, DEFAULT_RECENT_LIMIT};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError, WorkerIdOutOfRange, MAX_WORKER_ID};
pub use write_result::{DeleteResult, InsertOneResult, UpdateResult};
