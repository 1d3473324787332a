// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Low level transport plumbing: message chunking, the secure channel state
//! needed to sign/encrypt/decrypt chunks, and the chunker that stitches chunks
//! into full messages and back.

pub mod buffer;
pub mod chunker;
pub mod message_chunk;
pub mod message_chunk_info;
pub mod secure_channel;
pub mod security_header;
pub mod tcp_codec;
pub mod tcp_types;
pub mod url;
