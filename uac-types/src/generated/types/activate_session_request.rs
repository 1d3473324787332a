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
///https://reference.opcfoundation.org/v105/Core/docs/Part4/5.6.3/#5.6.3.2
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActivateSessionRequest {
    pub request_header: opcua::types::request_header::RequestHeader,
    pub client_signature: super::signature_data::SignatureData,
    pub client_software_certificates: Option<Vec<super::signed_software_certificate::SignedSoftwareCertificate>>,
    pub locale_ids: Option<Vec<opcua::types::string::UAString>>,
    pub user_identity_token: opcua::types::ExtensionObject,
    pub user_token_signature: super::signature_data::SignatureData,
}
impl opcua::types::MessageInfo for ActivateSessionRequest {
    fn type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::ActivateSessionRequest_Encoding_DefaultBinary
    }
    fn json_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::ActivateSessionRequest_Encoding_DefaultJson
    }
    fn xml_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::ActivateSessionRequest_Encoding_DefaultXml
    }
    fn data_type_id(&self) -> opcua::types::DataTypeId {
        opcua::types::DataTypeId::ActivateSessionRequest
    }
}

