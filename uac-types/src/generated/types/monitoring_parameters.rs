// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang
#[allow(unused)]
mod opcua {
    pub use crate as types;
}
#[opcua::types::ua_encodable]
/// Parameters controlling how a monitored item samples and reports (Part 4, 7.22).
/// https://reference.opcfoundation.org/v105/Core/docs/Part4/7.22/
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MonitoringParameters {
    /// Client-assigned handle returned in notifications for this item.
    pub client_handle: u32,
    /// Requested interval, in milliseconds, between samples.
    pub sampling_interval: f64,
    /// Filter restricting which changes are reported, e.g. a `DataChangeFilter`.
    pub filter: opcua::types::ExtensionObject,
    /// Size of the item's reporting queue.
    pub queue_size: u32,
    /// Whether to discard the oldest or newest value when the queue is full.
    pub discard_oldest: bool,
}
