// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang
#[allow(unused)]
mod opcua {
    pub use crate as types;
}
#[opcua::types::ua_encodable]
/// A filter operand that resolves to an attribute reached via a browse path of
/// qualified names from a given type definition, without needing the address
/// space to resolve intermediate nodes (Part 4, 7.4.4.5).
/// https://reference.opcfoundation.org/v105/Core/docs/Part4/7.4.4.5/
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimpleAttributeOperand {
    /// Type definition the browse path is relative to, typically an event type.
    pub type_definition_id: opcua::types::node_id::NodeId,
    /// The browse path, as a sequence of qualified names.
    pub browse_path: Option<Vec<opcua::types::qualified_name::QualifiedName>>,
    /// Attribute to read off the resolved node, usually `Value`.
    pub attribute_id: u32,
    /// Index range into the attribute's value, if it is an array.
    pub index_range: opcua::types::NumericRange,
}
impl opcua::types::MessageInfo for SimpleAttributeOperand {
    fn type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::SimpleAttributeOperand_Encoding_DefaultBinary
    }
    fn json_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::SimpleAttributeOperand_Encoding_DefaultJson
    }
    fn xml_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::SimpleAttributeOperand_Encoding_DefaultXml
    }
    fn data_type_id(&self) -> opcua::types::DataTypeId {
        opcua::types::DataTypeId::SimpleAttributeOperand
    }
}
