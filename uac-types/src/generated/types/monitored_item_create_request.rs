// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang
#[allow(unused)]
mod opcua {
    pub use crate as types;
}
#[opcua::types::ua_encodable]
/// Requests creation of a single monitored item within a `CreateMonitoredItems` call
/// (Part 4, 5.12.2).
/// https://reference.opcfoundation.org/v105/Core/docs/Part4/5.12.2/
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MonitoredItemCreateRequest {
    /// Node attribute to monitor.
    pub item_to_monitor: super::read_value_id::ReadValueId,
    /// Whether the item should sample, report, or be disabled.
    pub monitoring_mode: super::enums::MonitoringMode,
    /// Requested sampling interval, queue size, and filter.
    pub requested_parameters: super::monitoring_parameters::MonitoringParameters,
}
