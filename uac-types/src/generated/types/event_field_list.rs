// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang
#[allow(unused)]
mod opcua {
    pub use crate as types;
}
#[opcua::types::ua_encodable]
/// The field values for a single event occurrence, positionally matching the
/// `select_clauses` of the `EventFilter` that produced them.
/// https://reference.opcfoundation.org/v105/Core/docs/Part4/7.21.3/
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventFieldList {
    /// Client handle of the monitored item that produced this event.
    pub client_handle: u32,
    /// The selected field values, in the order requested by the filter.
    pub event_fields: Option<Vec<opcua::types::Variant>>,
}
