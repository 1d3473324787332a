// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang
#[allow(unused)]
mod opcua {
    pub use crate as types;
}
#[opcua::types::ua_encodable]
/// A filter operand holding a literal value.
/// https://reference.opcfoundation.org/v105/Core/docs/Part4/7.4.4.3/
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LiteralOperand {
    /// The literal value.
    pub value: opcua::types::Variant,
}
impl opcua::types::MessageInfo for LiteralOperand {
    fn type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::LiteralOperand_Encoding_DefaultBinary
    }
    fn json_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::LiteralOperand_Encoding_DefaultJson
    }
    fn xml_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::LiteralOperand_Encoding_DefaultXml
    }
    fn data_type_id(&self) -> opcua::types::DataTypeId {
        opcua::types::DataTypeId::LiteralOperand
    }
}
