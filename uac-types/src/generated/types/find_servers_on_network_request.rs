// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang
#[allow(unused)]
mod opcua {
    pub use crate as types;
}

#[opcua::types::ua_encodable]
///https://reference.opcfoundation.org/v105/Core/docs/Part4/5.5.3/#5.5.3.2
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FindServersOnNetworkRequest {
    pub request_header: opcua::types::request_header::RequestHeader,
    pub starting_record_id: u32,
    pub max_records_to_return: u32,
    pub server_capability_filter: Option<Vec<opcua::types::string::UAString>>,
}
impl opcua::types::MessageInfo for FindServersOnNetworkRequest {
    fn type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::FindServersOnNetworkRequest_Encoding_DefaultBinary
    }
    fn json_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::FindServersOnNetworkRequest_Encoding_DefaultJson
    }
    fn xml_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::FindServersOnNetworkRequest_Encoding_DefaultXml
    }
    fn data_type_id(&self) -> opcua::types::DataTypeId {
        opcua::types::DataTypeId::FindServersOnNetworkRequest
    }
}
