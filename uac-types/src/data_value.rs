// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The [`DataValue`] type: a `Variant` value together with a status code and
//! source/server timestamps (Part 4, 7.7). This is what flows through reads,
//! writes and monitored item notifications.

use std::io::{Read, Write};

use bitflags::bitflags;

use crate::{
    date_time::DateTime,
    encoding::{BinaryDecodable, BinaryEncodable, EncodingResult},
    status_code::StatusCode,
    write_u16, write_u8, Context, Variant,
};

bitflags! {
    /// Mask for the fields present in an encoded `DataValue`.
    #[derive(Copy, Clone, Debug, PartialEq, Default)]
    pub struct DataValueMask: u8 {
        /// The `value` field is present.
        const HAS_VALUE = 0x01;
        /// The `status` field is present.
        const HAS_STATUS = 0x02;
        /// The `source_timestamp` field is present.
        const HAS_SOURCE_TIMESTAMP = 0x04;
        /// The `server_timestamp` field is present.
        const HAS_SERVER_TIMESTAMP = 0x08;
        /// The `source_picoseconds` field is present.
        const HAS_SOURCE_PICOSECONDS = 0x10;
        /// The `server_picoseconds` field is present.
        const HAS_SERVER_PICOSECONDS = 0x20;
    }
}

/// A value, its quality and the timestamps describing when it was produced
/// and when the server picked it up.
#[derive(Debug, Clone, PartialEq, Default, crate::UaNullable)]
pub struct DataValue {
    /// The value itself.
    pub value: Option<Variant>,
    /// The quality of the value.
    pub status: Option<StatusCode>,
    /// The time the value was produced by the source, e.g. a device.
    pub source_timestamp: Option<DateTime>,
    /// Sub-100ns precision for `source_timestamp`, 0-9999.
    pub source_picoseconds: Option<u16>,
    /// The time the server obtained the value from the source.
    pub server_timestamp: Option<DateTime>,
    /// Sub-100ns precision for `server_timestamp`, 0-9999.
    pub server_picoseconds: Option<u16>,
}

impl DataValue {
    /// Create a data value wrapping a good value, stamped with the current time.
    pub fn new_now(value: impl Into<Variant>) -> Self {
        let now = DateTime::now();
        DataValue {
            value: Some(value.into()),
            status: Some(StatusCode::Good),
            source_timestamp: Some(now),
            server_timestamp: Some(now),
            ..Default::default()
        }
    }

    /// Create a data value carrying only a bad status code and no value.
    pub fn new_status(status: StatusCode) -> Self {
        DataValue {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Returns `true` if the status is good or absent (absent defaults to good).
    pub fn is_valid(&self) -> bool {
        self.status.map(|s| s.is_good()).unwrap_or(true)
    }

    fn encoding_mask(&self) -> DataValueMask {
        let mut mask = DataValueMask::empty();
        if self.value.is_some() {
            mask |= DataValueMask::HAS_VALUE;
        }
        if self.status.is_some() {
            mask |= DataValueMask::HAS_STATUS;
        }
        if self.source_timestamp.is_some() {
            mask |= DataValueMask::HAS_SOURCE_TIMESTAMP;
        }
        if self.server_timestamp.is_some() {
            mask |= DataValueMask::HAS_SERVER_TIMESTAMP;
        }
        if self.source_picoseconds.is_some() {
            mask |= DataValueMask::HAS_SOURCE_PICOSECONDS;
        }
        if self.server_picoseconds.is_some() {
            mask |= DataValueMask::HAS_SERVER_PICOSECONDS;
        }
        mask
    }
}

impl BinaryEncodable for DataValue {
    fn byte_len(&self, ctx: &Context<'_>) -> usize {
        let mut size = 1;
        if let Some(v) = &self.value {
            size += v.byte_len(ctx);
        }
        if let Some(v) = &self.status {
            size += v.byte_len(ctx);
        }
        if let Some(v) = &self.source_timestamp {
            size += v.byte_len(ctx);
        }
        if let Some(_) = &self.source_picoseconds {
            size += 2;
        }
        if let Some(v) = &self.server_timestamp {
            size += v.byte_len(ctx);
        }
        if let Some(_) = &self.server_picoseconds {
            size += 2;
        }
        size
    }

    fn encode<S: Write + ?Sized>(&self, stream: &mut S, ctx: &Context<'_>) -> EncodingResult<()> {
        write_u8(stream, self.encoding_mask().bits())?;
        if let Some(v) = &self.value {
            v.encode(stream, ctx)?;
        }
        if let Some(v) = &self.status {
            v.encode(stream, ctx)?;
        }
        if let Some(v) = &self.source_timestamp {
            v.encode(stream, ctx)?;
        }
        if let Some(v) = &self.source_picoseconds {
            write_u16(stream, *v)?;
        }
        if let Some(v) = &self.server_timestamp {
            v.encode(stream, ctx)?;
        }
        if let Some(v) = &self.server_picoseconds {
            write_u16(stream, *v)?;
        }
        Ok(())
    }
}

impl BinaryDecodable for DataValue {
    fn decode<S: Read + ?Sized>(stream: &mut S, ctx: &Context<'_>) -> EncodingResult<Self> {
        let mask = DataValueMask::from_bits_truncate(u8::decode(stream, ctx)?);
        let mut dv = DataValue::default();
        if mask.contains(DataValueMask::HAS_VALUE) {
            dv.value = Some(Variant::decode(stream, ctx)?);
        }
        if mask.contains(DataValueMask::HAS_STATUS) {
            dv.status = Some(StatusCode::decode(stream, ctx)?);
        }
        if mask.contains(DataValueMask::HAS_SOURCE_TIMESTAMP) {
            dv.source_timestamp = Some(DateTime::decode(stream, ctx)?);
        }
        if mask.contains(DataValueMask::HAS_SOURCE_PICOSECONDS) {
            dv.source_picoseconds = Some(u16::decode(stream, ctx)?);
        }
        if mask.contains(DataValueMask::HAS_SERVER_TIMESTAMP) {
            dv.server_timestamp = Some(DateTime::decode(stream, ctx)?);
        }
        if mask.contains(DataValueMask::HAS_SERVER_PICOSECONDS) {
            dv.server_picoseconds = Some(u16::decode(stream, ctx)?);
        }
        Ok(dv)
    }
}
