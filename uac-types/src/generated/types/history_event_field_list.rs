// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang
#[allow(unused)]
mod opcua {
    pub use crate as types;
}
#[opcua::types::ua_encodable]
/// The field values for a single historical event occurrence.
/// https://reference.opcfoundation.org/v105/Core/docs/Part11/6.4.3/
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoryEventFieldList {
    /// The selected field values, in the order requested by the filter.
    pub event_fields: Option<Vec<opcua::types::Variant>>,
}
