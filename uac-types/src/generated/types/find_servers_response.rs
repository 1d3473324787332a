// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang
#[allow(unused)]
mod opcua {
    pub use crate as types;
}

#[opcua::types::ua_encodable]
///https://reference.opcfoundation.org/v105/Core/docs/Part4/5.4.2/#5.4.2.2
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FindServersResponse {
    pub response_header: opcua::types::response_header::ResponseHeader,
    pub servers: Option<Vec<super::application_description::ApplicationDescription>>,
}
impl opcua::types::MessageInfo for FindServersResponse {
    fn type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::FindServersResponse_Encoding_DefaultBinary
    }
    fn json_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::FindServersResponse_Encoding_DefaultJson
    }
    fn xml_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::FindServersResponse_Encoding_DefaultXml
    }
    fn data_type_id(&self) -> opcua::types::DataTypeId {
        opcua::types::DataTypeId::FindServersResponse
    }
}
