// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang
#[allow(unused)]
mod opcua {
    pub use crate as types;
}
#[opcua::types::ua_encodable]
/// Requests invocation of a single method within a `Call` request (Part 4, 5.11.2).
/// https://reference.opcfoundation.org/v105/Core/docs/Part4/5.11.2/
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CallMethodRequest {
    /// Object or object type the method is a component of.
    pub object_id: opcua::types::node_id::NodeId,
    /// Method to invoke.
    pub method_id: opcua::types::node_id::NodeId,
    /// Input argument values, in the order declared by the method's `InputArguments` property.
    pub input_arguments: Option<Vec<opcua::types::Variant>>,
}
