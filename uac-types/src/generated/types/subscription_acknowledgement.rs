// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang
#[allow(unused)]
mod opcua {
    pub use crate as types;
}
#[opcua::types::ua_encodable]
/// Acknowledges receipt of a notification message, so the server may discard
/// its retransmission queue entry. Sent as part of a `Publish` request.
/// https://reference.opcfoundation.org/v105/Core/docs/Part4/5.13.2/
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubscriptionAcknowledgement {
    /// Subscription the acknowledged notification belongs to.
    pub subscription_id: u32,
    /// Sequence number of the acknowledged notification message.
    pub sequence_number: u32,
}
