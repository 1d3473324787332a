// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang
#[allow(unused)]
mod opcua {
    pub use crate as types;
}
#[opcua::types::ua_encodable]
/// Filter applied to a monitored item with `DataChangeTrigger` semantics (Part 4, 7.17.2).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataChangeFilter {
    /// Which kind of change triggers a notification.
    pub trigger: super::enums::DataChangeTrigger,
    /// Raw wire value of the deadband type, validated against `DeadbandType` when parsed.
    pub deadband_type: u32,
    /// Deadband value, interpreted according to `deadband_type`.
    pub deadband_value: f64,
}
impl opcua::types::MessageInfo for DataChangeFilter {
    fn type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::DataChangeFilter_Encoding_DefaultBinary
    }
    fn json_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::DataChangeFilter_Encoding_DefaultJson
    }
    fn xml_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::DataChangeFilter_Encoding_DefaultXml
    }
    fn data_type_id(&self) -> opcua::types::DataTypeId {
        opcua::types::DataTypeId::DataChangeFilter
    }
}
