// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Identifiers for the scalar types a [`Variant`](super::Variant) can hold
//! (Part 6, Table 14, the `BuiltInType` enumeration).

use std::convert::TryFrom;

/// Identifies one of the built-in scalar types a `Variant` may carry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum VariantScalarTypeId {
    /// No value / null.
    #[default]
    Empty = 0,
    /// Boolean.
    Boolean = 1,
    /// Signed byte.
    SByte = 2,
    /// Unsigned byte.
    Byte = 3,
    /// Signed 16-bit int.
    Int16 = 4,
    /// Unsigned 16-bit int.
    UInt16 = 5,
    /// Signed 32-bit int.
    Int32 = 6,
    /// Unsigned 32-bit int.
    UInt32 = 7,
    /// Signed 64-bit int.
    Int64 = 8,
    /// Unsigned 64-bit int.
    UInt64 = 9,
    /// Float.
    Float = 10,
    /// Double.
    Double = 11,
    /// String.
    String = 12,
    /// DateTime.
    DateTime = 13,
    /// Guid.
    Guid = 14,
    /// ByteString.
    ByteString = 15,
    /// XmlElement.
    XmlElement = 16,
    /// NodeId.
    NodeId = 17,
    /// ExpandedNodeId.
    ExpandedNodeId = 18,
    /// StatusCode.
    StatusCode = 19,
    /// QualifiedName.
    QualifiedName = 20,
    /// LocalizedText.
    LocalizedText = 21,
    /// ExtensionObject.
    ExtensionObject = 22,
    /// DataValue.
    DataValue = 23,
    /// A nested Variant.
    Variant = 24,
    /// DiagnosticInfo.
    DiagnosticInfo = 25,
}

/// Error returned when a raw builtin type ID does not correspond to a known scalar type.
#[derive(Debug, Clone, Copy)]
pub struct UnknownVariantScalarTypeId(pub u8);

impl TryFrom<u8> for VariantScalarTypeId {
    type Error = UnknownVariantScalarTypeId;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::Empty,
            1 => Self::Boolean,
            2 => Self::SByte,
            3 => Self::Byte,
            4 => Self::Int16,
            5 => Self::UInt16,
            6 => Self::Int32,
            7 => Self::UInt32,
            8 => Self::Int64,
            9 => Self::UInt64,
            10 => Self::Float,
            11 => Self::Double,
            12 => Self::String,
            13 => Self::DateTime,
            14 => Self::Guid,
            15 => Self::ByteString,
            16 => Self::XmlElement,
            17 => Self::NodeId,
            18 => Self::ExpandedNodeId,
            19 => Self::StatusCode,
            20 => Self::QualifiedName,
            21 => Self::LocalizedText,
            22 => Self::ExtensionObject,
            23 => Self::DataValue,
            24 => Self::Variant,
            25 => Self::DiagnosticInfo,
            other => return Err(UnknownVariantScalarTypeId(other)),
        })
    }
}

impl From<VariantScalarTypeId> for u8 {
    fn from(value: VariantScalarTypeId) -> Self {
        value as u8
    }
}

/// Either an empty variant, a scalar type, or an array of a scalar type
/// with an optional number of matrix dimensions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VariantTypeId<'a> {
    /// No value.
    Empty,
    /// A single scalar value.
    Scalar(VariantScalarTypeId),
    /// An array of scalar values, with an optional borrowed slice of dimensions.
    Array(VariantScalarTypeId, Option<&'a [u32]>),
}

impl<'a> From<VariantScalarTypeId> for VariantTypeId<'a> {
    fn from(value: VariantScalarTypeId) -> Self {
        VariantTypeId::Scalar(value)
    }
}

impl<'a> From<VariantTypeId<'a>> for VariantScalarTypeId {
    fn from(value: VariantTypeId<'a>) -> Self {
        match value {
            VariantTypeId::Empty => VariantScalarTypeId::Empty,
            VariantTypeId::Scalar(s) | VariantTypeId::Array(s, _) => s,
        }
    }
}
