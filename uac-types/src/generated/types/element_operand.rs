// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang
#[allow(unused)]
mod opcua {
    pub use crate as types;
}
#[opcua::types::ua_encodable]
/// A filter operand that refers to another element of the same content filter by index.
/// https://reference.opcfoundation.org/v105/Core/docs/Part4/7.4.4.2/
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementOperand {
    /// Index of the referenced `ContentFilterElement` within the same filter.
    pub index: u32,
}
impl opcua::types::MessageInfo for ElementOperand {
    fn type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::ElementOperand_Encoding_DefaultBinary
    }
    fn json_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::ElementOperand_Encoding_DefaultJson
    }
    fn xml_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::ElementOperand_Encoding_DefaultXml
    }
    fn data_type_id(&self) -> opcua::types::DataTypeId {
        opcua::types::DataTypeId::ElementOperand
    }
}
