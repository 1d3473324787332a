// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang
#[allow(unused)]
mod opcua {
    pub use crate as types;
}
#[opcua::types::ua_encodable]
/// A single clause of a [`ContentFilter`], an operator applied to a list of operands.
/// https://reference.opcfoundation.org/v105/Core/docs/Part4/7.4.4/
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentFilterElement {
    /// The operator to apply.
    pub filter_operator: super::enums::FilterOperator,
    /// Operands for the operator, encoded as extension objects since they may be
    /// any of the four operand kinds.
    pub filter_operands: Option<Vec<opcua::types::ExtensionObject>>,
}
impl opcua::types::MessageInfo for ContentFilterElement {
    fn type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::ContentFilterElement_Encoding_DefaultBinary
    }
    fn json_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::ContentFilterElement_Encoding_DefaultJson
    }
    fn xml_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::ContentFilterElement_Encoding_DefaultXml
    }
    fn data_type_id(&self) -> opcua::types::DataTypeId {
        opcua::types::DataTypeId::ContentFilterElement
    }
}

#[opcua::types::ua_encodable]
/// A filter used to select which events or data changes are relevant, built out
/// of a flat list of [`ContentFilterElement`]s that may reference each other by index.
/// https://reference.opcfoundation.org/v105/Core/docs/Part4/7.4.4/
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentFilter {
    /// The elements making up the filter.
    pub elements: Option<Vec<ContentFilterElement>>,
}
impl opcua::types::MessageInfo for ContentFilter {
    fn type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::ContentFilter_Encoding_DefaultBinary
    }
    fn json_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::ContentFilter_Encoding_DefaultJson
    }
    fn xml_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::ContentFilter_Encoding_DefaultXml
    }
    fn data_type_id(&self) -> opcua::types::DataTypeId {
        opcua::types::DataTypeId::ContentFilter
    }
}
