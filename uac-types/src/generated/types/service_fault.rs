// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang
#[allow(unused)]
mod opcua {
    pub use crate as types;
}
#[opcua::types::ua_encodable]
/// Response sent in place of a service's normal response when the service fails outright
/// (Part 4, 7.34).
/// https://reference.opcfoundation.org/v105/Core/docs/Part4/7.34/
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServiceFault {
    /// Common response header, carrying the overall `service_result` status code.
    pub response_header: opcua::types::response_header::ResponseHeader,
}
impl opcua::types::MessageInfo for ServiceFault {
    fn type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::ServiceFault_Encoding_DefaultBinary
    }
    fn json_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::ServiceFault_Encoding_DefaultJson
    }
    fn xml_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::ServiceFault_Encoding_DefaultXml
    }
    fn data_type_id(&self) -> opcua::types::DataTypeId {
        opcua::types::DataTypeId::ServiceFault
    }
}
