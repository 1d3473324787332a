// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang
#[allow(unused)]
mod opcua {
    pub use crate as types;
}
#[opcua::types::ua_encodable]
/// A cryptographic signature over some data, used to prove possession of a private key
/// (Part 4, 7.32).
/// https://reference.opcfoundation.org/v105/Core/docs/Part4/7.32/
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignatureData {
    /// URI identifying the algorithm used to produce the signature.
    pub algorithm: opcua::types::string::UAString,
    /// The signature bytes.
    pub signature: opcua::types::byte_string::ByteString,
}
