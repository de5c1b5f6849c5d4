//! Snowflake - 64-bit time-ordered document identifier
//!
//! Layout:
//! - Bits 63-22: milliseconds since [`Snowflake::EPOCH`]
//! - Bits 21-12: worker ID (0-1023)
//! - Bits 11-0:  per-millisecond sequence (0-4095)
//!
//! Because the timestamp occupies the high bits, ordering by id is ordering by
//! insertion time. Stores rely on this for "newest first" tie-breaking.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

const SEQUENCE_BITS: u32 = 12;
const WORKER_BITS: u32 = 10;
const SEQUENCE_MASK: i64 = (1 << SEQUENCE_BITS) - 1;

/// Highest worker id that fits the id layout
pub const MAX_WORKER_ID: u16 = (1 << WORKER_BITS) - 1;

/// Identifier assigned to every stored query and recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(i64);

impl Snowflake {
    /// Custom epoch: 2024-01-01 00:00:00 UTC (milliseconds)
    pub const EPOCH: i64 = 1_704_067_200_000;

    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Milliseconds since the Unix epoch at which this id was minted
    pub fn timestamp(&self) -> i64 {
        (self.0 >> (WORKER_BITS + SEQUENCE_BITS)) + Self::EPOCH
    }

    pub fn worker_id(&self) -> u16 {
        // masked to WORKER_BITS, so the value always fits
        u16::try_from((self.0 >> SEQUENCE_BITS) & i64::from(MAX_WORKER_ID)).unwrap_or(MAX_WORKER_ID)
    }

    pub fn sequence(&self) -> i64 {
        self.0 & SEQUENCE_MASK
    }

    /// Parse the decimal string form used in URLs and JSON; zero and negatives are rejected
    pub fn parse(s: &str) -> Result<Self, SnowflakeParseError> {
        match s.trim().parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(SnowflakeParseError::InvalidFormat),
        }
    }

    /// Assemble an id from a generator clock reading
    ///
    /// `clock` holds `(millis since EPOCH) << SEQUENCE_BITS | sequence`.
    fn compose(clock: i64, worker_id: u16) -> Self {
        let millis = clock >> SEQUENCE_BITS;
        let sequence = clock & SEQUENCE_MASK;
        Self((millis << (WORKER_BITS + SEQUENCE_BITS)) | (i64::from(worker_id) << SEQUENCE_BITS) | sequence)
    }
}

/// Error when parsing a Snowflake from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SnowflakeParseError {
    #[error("invalid document id format")]
    InvalidFormat,
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Snowflake {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Snowflake> for i64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

impl FromStr for Snowflake {
    type Err = SnowflakeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Serialized as a string: JavaScript clients cannot hold 64-bit integers exactly
impl Serialize for Snowflake {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Number(i64),
            Text(String),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Number(id) => Ok(Self(id)),
            Wire::Text(text) => text
                .trim()
                .parse()
                .map(Self)
                .map_err(|_| serde::de::Error::custom("invalid document id string")),
        }
    }
}

/// Worker id outside `0..=MAX_WORKER_ID`
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("worker id {0} exceeds 1023")]
pub struct WorkerIdOutOfRange(pub u16);

/// Lock-free id generator, shared by every store adapter in the process
///
/// The last issued `(millis, sequence)` pair is packed into one atomic. Each
/// call advances it to the wall clock or, when the clock has not moved past
/// it, to the next sequence number. A full sequence carries into the next
/// millisecond. Neither case waits, so a clock that steps backwards only
/// means ids run slightly ahead of wall time until it catches up.
///
/// `Default` is worker 0.
#[derive(Default)]
pub struct SnowflakeGenerator {
    worker_id: u16,
    clock: AtomicI64,
}

impl SnowflakeGenerator {
    /// # Errors
    /// Returns [`WorkerIdOutOfRange`] if `worker_id` exceeds [`MAX_WORKER_ID`]
    pub fn new(worker_id: u16) -> Result<Self, WorkerIdOutOfRange> {
        if worker_id > MAX_WORKER_ID {
            return Err(WorkerIdOutOfRange(worker_id));
        }
        Ok(Self {
            worker_id,
            clock: AtomicI64::new(0),
        })
    }

    /// Mint the next id; strictly increasing within this generator
    pub fn generate(&self) -> Snowflake {
        let wall = Self::wall_clock();
        let mut current = self.clock.load(Ordering::Acquire);
        loop {
            let next = wall.max(current + 1);
            match self
                .clock
                .compare_exchange_weak(current, next, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return Snowflake::compose(next, self.worker_id),
                Err(actual) => current = actual,
            }
        }
    }

    pub fn worker_id(&self) -> u16 {
        self.worker_id
    }

    /// Current time as a clock reading with a zero sequence
    fn wall_clock() -> i64 {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .ok()
            .and_then(|d| i64::try_from(d.as_millis()).ok())
            .unwrap_or(Snowflake::EPOCH);
        (millis - Snowflake::EPOCH).max(0) << SEQUENCE_BITS
    }
}
