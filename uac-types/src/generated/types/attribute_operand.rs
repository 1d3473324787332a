// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang
#[allow(unused)]
mod opcua {
    pub use crate as types;
}
#[opcua::types::ua_encodable]
/// A filter operand that resolves to an attribute of a node reached via a browse path
/// relative to a given node.
/// https://reference.opcfoundation.org/v105/Core/docs/Part4/7.4.4.4/
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributeOperand {
    /// Starting node for the relative browse path.
    pub node_id: opcua::types::node_id::NodeId,
    /// Alias that can be used by other operands to refer to this one.
    pub alias: opcua::types::string::UAString,
    /// Relative path from `node_id` to the target node.
    pub browse_path: opcua::types::RelativePath,
    /// Attribute to read off the target node.
    pub attribute_id: u32,
    /// Index range into the attribute's value, if it is an array.
    pub index_range: opcua::types::NumericRange,
}
impl opcua::types::MessageInfo for AttributeOperand {
    fn type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::AttributeOperand_Encoding_DefaultBinary
    }
    fn json_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::AttributeOperand_Encoding_DefaultJson
    }
    fn xml_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::AttributeOperand_Encoding_DefaultXml
    }
    fn data_type_id(&self) -> opcua::types::DataTypeId {
        opcua::types::DataTypeId::AttributeOperand
    }
}
