// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang
#[allow(unused)]
mod opcua {
    pub use crate as types;
}
#[opcua::types::ua_encodable]
/// A single node attribute value to write (Part 4, 5.10.4).
/// https://reference.opcfoundation.org/v105/Core/docs/Part4/5.10.4/
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WriteValue {
    /// Node to write.
    pub node_id: opcua::types::node_id::NodeId,
    /// Id of the attribute to write.
    pub attribute_id: u32,
    /// Subset of an array or string value to write, or empty for the whole value.
    pub index_range: opcua::types::string::UAString,
    /// The value to write, with optional status and timestamps.
    pub value: opcua::types::data_value::DataValue,
}
