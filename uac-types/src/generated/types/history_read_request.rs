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
///https://reference.opcfoundation.org/v105/Core/docs/Part4/5.10.3/#5.10.3.2
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoryReadRequest {
    pub request_header: opcua::types::request_header::RequestHeader,
    pub history_read_details: opcua::types::ExtensionObject,
    pub timestamps_to_return: super::enums::TimestampsToReturn,
    pub release_continuation_points: bool,
    pub nodes_to_read: Option<Vec<super::history_read_value_id::HistoryReadValueId>>,
}
impl opcua::types::MessageInfo for HistoryReadRequest {
    fn type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::HistoryReadRequest_Encoding_DefaultBinary
    }
    fn json_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::HistoryReadRequest_Encoding_DefaultJson
    }
    fn xml_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::HistoryReadRequest_Encoding_DefaultXml
    }
    fn data_type_id(&self) -> opcua::types::DataTypeId {
        opcua::types::DataTypeId::HistoryReadRequest
    }
}

