// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The [`NumericRange`] type, used to request a subset of an array or string
//! value (Part 4, 7.22). On the wire it is just the `IndexRange` string, e.g.
//! `"1:2"` or `"0:1,4:5"`; this type is the parsed, validated form of it.

use std::{
    fmt,
    io::{Read, Write},
    str::FromStr,
};

use crate::{
    encoding::{BinaryDecodable, BinaryEncodable, EncodingResult, Error},
    string::UAString,
    Context,
};

/// A parsed `IndexRange` value.
///
/// `Default` is implemented in `impls.rs` alongside the other hand-written
/// defaults for generated-style enums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericRange {
    /// No range was specified, meaning the whole value.
    None,
    /// A single index into an array.
    Index(u32),
    /// An inclusive range `start:end`.
    Range(u32, u32),
    /// Multiple ranges / indices, comma separated.
    MultipleRanges(Vec<NumericRange>),
}

impl crate::UaNullable for NumericRange {
    fn is_ua_null(&self) -> bool {
        matches!(self, NumericRange::None)
    }
}

impl fmt::Display for NumericRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericRange::None => Ok(()),
            NumericRange::Index(i) => write!(f, "{i}"),
            NumericRange::Range(s, e) => write!(f, "{s}:{e}"),
            NumericRange::MultipleRanges(ranges) => {
                let parts: Vec<_> = ranges.iter().map(|r| r.to_string()).collect();
                write!(f, "{}", parts.join(","))
            }
        }
    }
}

impl FromStr for NumericRange {
    type Err = crate::StatusCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(NumericRange::None);
        }
        if s.contains(',') {
            let parts = s
                .split(',')
                .map(Self::parse_single)
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(NumericRange::MultipleRanges(parts));
        }
        Self::parse_single(s)
    }
}

impl NumericRange {
    fn parse_single(s: &str) -> Result<NumericRange, crate::StatusCode> {
        if let Some((start, end)) = s.split_once(':') {
            let start: u32 = start.parse().map_err(|_| crate::StatusCode::BadIndexRangeInvalid)?;
            let end: u32 = end.parse().map_err(|_| crate::StatusCode::BadIndexRangeInvalid)?;
            if end <= start {
                return Err(crate::StatusCode::BadIndexRangeInvalid);
            }
            Ok(NumericRange::Range(start, end))
        } else {
            let idx: u32 = s.parse().map_err(|_| crate::StatusCode::BadIndexRangeInvalid)?;
            Ok(NumericRange::Index(idx))
        }
    }
}

impl BinaryEncodable for NumericRange {
    fn byte_len(&self, ctx: &Context<'_>) -> usize {
        UAString::from(self.to_string()).byte_len(ctx)
    }

    fn encode<S: Write + ?Sized>(&self, stream: &mut S, ctx: &Context<'_>) -> EncodingResult<()> {
        UAString::from(self.to_string()).encode(stream, ctx)
    }
}

impl BinaryDecodable for NumericRange {
    fn decode<S: Read + ?Sized>(stream: &mut S, ctx: &Context<'_>) -> EncodingResult<Self> {
        let s = UAString::decode(stream, ctx)?;
        match s.value() {
            Some(s) => NumericRange::from_str(s).map_err(|e| Error::decoding(e.to_string())),
            None => Ok(NumericRange::None),
        }
    }
}
