// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang
#[allow(unused)]
mod opcua {
    pub use crate as types;
}
#[opcua::types::ua_encodable]
/// Identifies a node attribute to read, or to monitor (Part 4, 7.29).
/// https://reference.opcfoundation.org/v105/Core/docs/Part4/7.29/
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReadValueId {
    /// Node to read or monitor.
    pub node_id: opcua::types::node_id::NodeId,
    /// Id of the attribute to read or monitor.
    pub attribute_id: u32,
    /// Subset of an array or string value to return, or empty for the whole value.
    pub index_range: opcua::types::string::UAString,
    /// Requested data encoding, if the attribute supports more than one.
    pub data_encoding: opcua::types::qualified_name::QualifiedName,
}
