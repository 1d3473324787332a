// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Wire-level limits and well-known URIs shared across the codec and the
//! secure channel layer.

/// Maximum recursion depth while decoding nested structures, to guard
/// against stack overflow from malicious or corrupt messages.
pub const MAX_DECODING_DEPTH: u64 = 100;

/// Default maximum size, in bytes, of a single chunked message.
pub const MAX_MESSAGE_SIZE: usize = 16 * 1024 * 1024;

/// Default maximum number of chunks a single message may be split into.
pub const MAX_CHUNK_COUNT: usize = 5_000;

/// Default maximum length, in bytes, of a decoded `UAString`.
pub const MAX_STRING_LENGTH: usize = 128 * 1024 * 1024;

/// Default maximum length, in bytes, of a decoded `ByteString`.
pub const MAX_BYTE_STRING_LENGTH: usize = 128 * 1024 * 1024;

/// Default maximum element count of a decoded array.
pub const MAX_ARRAY_LENGTH: usize = 1_000_000;

/// URI identifying the `None` security policy, i.e. no signing or encryption.
pub const SECURITY_POLICY_NONE_URI: &str = "http://opcfoundation.org/UA/SecurityPolicy#None";
