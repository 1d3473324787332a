// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang

#![warn(missing_docs)]

//! Core data model for OPC UA: the built-in types, binary encoding, the node id
//! registries of the core (namespace 0) nodeset, and the generated message types
//! used to talk to a server.

pub mod argument;
pub mod array;
pub mod attribute;
pub mod byte_string;
pub mod constants;
pub mod custom;
pub mod data_change;
pub mod data_type_definition;
pub mod data_types;
pub mod data_value;
pub mod date_time;
pub mod diagnostic_info;
pub mod encoding;
pub mod errors;
pub mod event_field;
pub mod expanded_node_id;
pub mod extension_object;
pub mod generated;
pub mod guid;
pub mod ids;
pub mod impls;
#[cfg(feature = "json")]
pub mod json;
pub mod localized_text;
pub mod namespaces;
pub mod node_id;
pub mod numeric_range;
pub mod operand;
pub mod profiles;
pub mod qualified_name;
pub mod relative_path;
pub mod request_header;
pub mod response_header;
pub mod status_code;
pub mod string;
pub mod type_loader;
pub mod ua_enum;
pub mod variant;
#[cfg(feature = "xml")]
pub mod xml;

#[cfg(test)]
mod tests;

pub use argument::Argument;
pub use array::Array;
pub use attribute::{AttributeId, AttributeIdError};
pub use byte_string::ByteString;
pub use data_types::{
    ApplicationInstanceCertificate, AudioDataType, ContinuationPoint, Counter, Duration, Index,
    IntegerId, LocaleId, SessionAuthenticationToken, UriString, UtcTime, VersionTime,
};
pub use data_type_definition::DataTypeDefinition;
pub use data_value::DataValue;
pub use date_time::{DateTime, DateTimeUtc};
pub use diagnostic_info::DiagnosticInfo;
pub use encoding::{
    byte_len_array, process_decode_io_result, process_encode_io_result, read_bytes, read_f32,
    read_f64, read_i16, read_i32, read_i64, read_u16, read_u32, read_u64, read_u8, skip_bytes,
    write_bytes, write_f32, write_f64, write_i16, write_i32, write_i64, write_u16, write_u32,
    write_u64, write_u8, BinaryDecodable, BinaryEncodable, DataEncoding, DecodingOptions,
    DepthGauge, DepthLock, Error, EncodingResult, SimpleBinaryDecodable, SimpleBinaryEncodable,
    UaNullable,
};
pub use errors::OpcUaError;
pub use event_field::{EventField, PlaceholderEventField};
pub use expanded_node_id::ExpandedNodeId;
pub use extension_object::{DynEncodable, ExtensionObject, ExtensionObjectError};
pub use generated::{types::*, GeneratedTypeLoader};
pub use guid::Guid;
pub use ids::{
    DataTypeId, MethodId, ObjectId, ObjectTypeId, ReferenceTypeId, VariableId, VariableTypeId,
};
pub use impls::{ExpandedMessageInfo, MessageInfo};
pub use localized_text::LocalizedText;
pub use namespaces::{NamespaceMap, NodeSetNamespaceMapper, UninitializedIndex};
pub use node_id::{Identifier, NodeId, NodeIdError};
pub use numeric_range::NumericRange;
pub use operand::{ContentFilterBuilder, Operand, OperandType};
pub use qualified_name::QualifiedName;
pub use relative_path::{RelativePath, RelativePathElement, RelativePathError};
pub use request_header::RequestHeader;
pub use response_header::{AsRequestHandle, ResponseHeader};
pub use status_code::StatusCode;
pub use string::UAString;
pub use type_loader::{
    binary_decode_to_enc, Context, ContextOwned, StaticTypeLoader, TypeLoader,
    TypeLoaderCollection, TypeLoaderInstance, TypeLoaderPriority,
};
pub use ua_enum::UaEnum;
pub use variant::{IntoVariant, TryFromVariant, Variant, VariantType, VariantScalarTypeId, XmlElement};

pub use uac_macros::{
    derive_binary_decodable as BinaryDecodable, derive_binary_encodable as BinaryEncodable,
    derive_ua_enum as UaEnum, derive_ua_nullable as UaNullable, ua_encodable,
};
