// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The abstract `DataTypeDefinition`, describing the shape of a structured or
//! enumerated data type (Part 3, 8.38). Encoded on the wire as an `ExtensionObject`
//! holding either a `StructureDefinition` or an `EnumDefinition`.

use crate::{EnumDefinition, StructureDefinition};

#[derive(Debug, Clone, PartialEq)]
/// Definition of a structured or enumerated data type.
pub enum DataTypeDefinition {
    /// The data type is a structure, described field by field.
    Structure(StructureDefinition),
    /// The data type is an enumeration, described value by value.
    Enum(EnumDefinition),
}

impl From<StructureDefinition> for DataTypeDefinition {
    fn from(v: StructureDefinition) -> Self {
        Self::Structure(v)
    }
}

impl From<EnumDefinition> for DataTypeDefinition {
    fn from(v: EnumDefinition) -> Self {
        Self::Enum(v)
    }
}
