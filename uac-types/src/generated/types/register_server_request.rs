// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang
#[allow(unused)]
mod opcua {
    pub use crate as types;
}

#[opcua::types::ua_encodable]
///https://reference.opcfoundation.org/v105/Core/docs/Part4/5.4.5/#5.4.5.2
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegisterServerRequest {
    pub request_header: opcua::types::request_header::RequestHeader,
    pub server: super::registered_server::RegisteredServer,
}
impl opcua::types::MessageInfo for RegisterServerRequest {
    fn type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::RegisterServerRequest_Encoding_DefaultBinary
    }
    fn json_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::RegisterServerRequest_Encoding_DefaultJson
    }
    fn xml_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::RegisterServerRequest_Encoding_DefaultXml
    }
    fn data_type_id(&self) -> opcua::types::DataTypeId {
        opcua::types::DataTypeId::RegisterServerRequest
    }
}
