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
///https://reference.opcfoundation.org/v105/Core/docs/Part4/5.8.2/#5.8.2.2
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BrowseResult {
    pub status_code: opcua::types::status_code::StatusCode,
    pub continuation_point: opcua::types::byte_string::ByteString,
    pub references: Option<Vec<super::reference_description::ReferenceDescription>>,
}
impl opcua::types::MessageInfo for BrowseResult {
    fn type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::BrowseResult_Encoding_DefaultBinary
    }
    fn json_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::BrowseResult_Encoding_DefaultJson
    }
    fn xml_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::BrowseResult_Encoding_DefaultXml
    }
    fn data_type_id(&self) -> opcua::types::DataTypeId {
        opcua::types::DataTypeId::BrowseResult
    }
}

