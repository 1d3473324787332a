// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang
#[allow(unused)]
mod opcua {
    pub use crate as types;
}
#[opcua::types::ua_encodable]
/// Describes the engineering unit of an analog value, e.g. degrees Celsius (Part 8, 5.6.3).
/// https://reference.opcfoundation.org/v105/Core/docs/Part8/5.6.3/
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EUInformation {
    /// Namespace of the unit identifier, e.g. a UNECE code list URI.
    pub namespace_uri: opcua::types::string::UAString,
    /// Identifier of the unit within `namespace_uri`.
    pub unit_id: i32,
    /// Human readable symbol for the unit, e.g. "°C".
    pub display_name: opcua::types::localized_text::LocalizedText,
    /// Human readable description of the unit.
    pub description: opcua::types::localized_text::LocalizedText,
}
impl opcua::types::MessageInfo for EUInformation {
    fn type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::EUInformation_Encoding_DefaultBinary
    }
    fn json_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::EUInformation_Encoding_DefaultJson
    }
    fn xml_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::EUInformation_Encoding_DefaultXml
    }
    fn data_type_id(&self) -> opcua::types::DataTypeId {
        opcua::types::DataTypeId::EUInformation
    }
}
