// This file was autogenerated from schemas/1.05/Opc.Ua.NodeSet2.Services.xml by async-opcua-codegen
//
// DO NOT EDIT THIS FILE

// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang
#[allow(unused)]
mod opcua {
    pub use crate as types;
}
#[opcua::types::ua_encodable]
/// Describes the values of an enumerated data type (Part 3, 8.40).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnumDefinition {
    pub fields: Option<Vec<super::enum_field::EnumField>>,
}
impl opcua::types::MessageInfo for EnumDefinition {
    fn type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::EnumDefinition_Encoding_DefaultBinary
    }
    fn json_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::EnumDefinition_Encoding_DefaultJson
    }
    fn xml_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::EnumDefinition_Encoding_DefaultXml
    }
    fn data_type_id(&self) -> opcua::types::DataTypeId {
        opcua::types::DataTypeId::EnumDefinition
    }
}
