// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The [`DateTime`] type, a count of 100 nanosecond intervals since
//! 1601-01-01 00:00:00 UTC (Part 6, 5.2.2.5).
//!
//! `0` and `i64::MAX`-equivalent values are sentinels for "the earliest
//! representable time" and "the latest representable time" respectively
//! rather than being clamped on encode.

use std::{
    cmp::Ordering,
    io::{Read, Write},
};

use chrono::{DateTime as ChronoDateTime, Duration, TimeZone, Utc};

use crate::{
    encoding::{BinaryDecodable, BinaryEncodable, EncodingResult},
    read_i64, write_i64, Context,
};

/// Number of 100ns intervals between the Windows epoch (1601-01-01) and the
/// Unix epoch (1970-01-01).
const EPOCH_OFFSET: i64 = 116_444_736_000_000_000;

/// The largest tick value the wire format can carry before it is treated as
/// the "end of time" sentinel.
const MAX_TICKS: i64 = i64::MAX;

/// A `chrono::DateTime<Utc>`, the representation used when converting a
/// [`DateTime`] to and from a [`crate::Variant`].
pub type DateTimeUtc = ChronoDateTime<Utc>;

/// An OPC UA timestamp.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, crate::UaNullable)]
pub struct DateTime {
    ticks: i64,
}

impl From<DateTimeUtc> for DateTime {
    fn from(dt: DateTimeUtc) -> Self {
        DateTime::from_chrono(dt)
    }
}

impl Default for DateTime {
    fn default() -> Self {
        DateTime::null()
    }
}

impl std::fmt::Debug for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.as_chrono() {
            Some(dt) => write!(f, "{}", dt.to_rfc3339()),
            None => write!(f, "DateTime(ticks={})", self.ticks),
        }
    }
}

impl DateTime {
    /// The null / minimum date time value.
    pub fn null() -> Self {
        DateTime { ticks: 0 }
    }

    /// The current time.
    pub fn now() -> Self {
        Self::from_chrono(Utc::now())
    }

    /// Construct from raw 100ns ticks since the OPC UA epoch (1601-01-01).
    pub fn from_ticks(ticks: i64) -> Self {
        DateTime { ticks }
    }

    /// Raw 100ns ticks since the OPC UA epoch (1601-01-01).
    pub fn ticks(&self) -> i64 {
        self.ticks
    }

    /// Construct from a `chrono::DateTime<Utc>`.
    pub fn from_chrono(dt: ChronoDateTime<Utc>) -> Self {
        let unix_ticks = dt.timestamp() * 10_000_000 + i64::from(dt.timestamp_subsec_nanos()) / 100;
        DateTime {
            ticks: unix_ticks.saturating_add(EPOCH_OFFSET),
        }
    }

    /// Convert to a `chrono::DateTime<Utc>`, if representable.
    pub fn as_chrono(&self) -> Option<ChronoDateTime<Utc>> {
        let unix_ticks = self.ticks.checked_sub(EPOCH_OFFSET)?;
        let secs = unix_ticks.div_euclid(10_000_000);
        let subsec_ticks = unix_ticks.rem_euclid(10_000_000);
        Utc.timestamp_opt(secs, (subsec_ticks * 100) as u32).single()
    }

    /// Returns `true` if this is the null / minimum sentinel value.
    pub fn is_null(&self) -> bool {
        self.ticks <= 0
    }

    /// Returns `true` if this is the "end of time" sentinel value.
    pub fn is_max(&self) -> bool {
        self.ticks == MAX_TICKS
    }

    /// The "end of time" sentinel, used by some services to mean "never expires".
    pub fn max_value() -> Self {
        DateTime { ticks: MAX_TICKS }
    }

    /// Duration since another, saturating at zero rather than going negative.
    pub fn duration_since(&self, other: DateTime) -> Duration {
        Duration::microseconds((self.ticks.saturating_sub(other.ticks)) / 10)
    }

    /// Add a duration, saturating rather than overflowing.
    pub fn checked_add(&self, duration: Duration) -> Option<DateTime> {
        duration
            .num_microseconds()
            .and_then(|us| us.checked_mul(10))
            .and_then(|ticks| self.ticks.checked_add(ticks))
            .map(|ticks| DateTime { ticks })
    }
}

impl PartialOrd<i64> for DateTime {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        self.ticks.partial_cmp(other)
    }
}

impl From<ChronoDateTime<Utc>> for DateTime {
    fn from(value: ChronoDateTime<Utc>) -> Self {
        DateTime::from_chrono(value)
    }
}

impl BinaryEncodable for DateTime {
    fn byte_len(&self, _ctx: &Context<'_>) -> usize {
        8
    }

    fn encode<S: Write + ?Sized>(&self, stream: &mut S, _ctx: &Context<'_>) -> EncodingResult<()> {
        // Ticks before the epoch are encoded as 0 per Part 6, 5.2.2.5.
        write_i64(stream, self.ticks.max(0))
    }
}

impl BinaryDecodable for DateTime {
    fn decode<S: Read + ?Sized>(stream: &mut S, _ctx: &Context<'_>) -> EncodingResult<Self> {
        Ok(DateTime {
            ticks: read_i64(stream)?,
        })
    }
}
