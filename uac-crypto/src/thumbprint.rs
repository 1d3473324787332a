// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! SHA-1 thumbprint of an X.509 certificate.

use uac_types::byte_string::ByteString;

/// SHA-1 thumbprint of a DER-encoded certificate, used to identify it without
/// carrying the whole certificate around (OPC UA Part 6, 6.7.4).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbprint(Vec<u8>);

impl Thumbprint {
    /// Size, in bytes, of a SHA-1 thumbprint.
    pub const THUMBPRINT_SIZE: usize = 20;

    pub(crate) fn new(value: Vec<u8>) -> Self {
        Self(value)
    }

    /// The raw thumbprint bytes.
    pub fn value(&self) -> &[u8] {
        &self.0
    }

    /// The thumbprint as a `ByteString`, as transmitted in security headers.
    pub fn as_byte_string(&self) -> ByteString {
        ByteString::from(&self.0)
    }
}
