// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The [`Array`] type backing `Variant::Array`, an array of a single scalar
//! type together with optional matrix dimensions (Part 6, 5.2.2.13).

use crate::{status_code::StatusCode, Variant, VariantScalarTypeId};

/// A homogeneous array of values, optionally shaped into a matrix via
/// `array_dimensions`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Array {
    /// The scalar type of every element.
    pub value_type: VariantScalarTypeId,
    /// The flattened, row-major values.
    pub values: Vec<Variant>,
    /// Dimensions of the array if it represents a matrix. The product of the
    /// dimensions must equal `values.len()`.
    pub array_dimensions: Option<Vec<u32>>,
}

impl Array {
    /// Create a new single-dimension array, validating that every value
    /// matches `value_type`.
    pub fn new(value_type: VariantScalarTypeId, values: Vec<Variant>) -> Result<Self, StatusCode> {
        Self::new_multi(value_type, values, None)
    }

    /// Create a new array with explicit matrix dimensions.
    pub fn new_multi(
        value_type: VariantScalarTypeId,
        values: Vec<Variant>,
        array_dimensions: Option<Vec<u32>>,
    ) -> Result<Self, StatusCode> {
        if let Some(dims) = &array_dimensions {
            let product: usize = dims.iter().map(|d| *d as usize).product();
            if product != values.len() {
                return Err(StatusCode::BadIndexRangeInvalid);
            }
        }
        Ok(Array {
            value_type,
            values,
            array_dimensions,
        })
    }

    /// Returns `true` if this array has matrix dimensions set.
    pub fn is_matrix(&self) -> bool {
        self.array_dimensions
            .as_ref()
            .is_some_and(|d| d.len() > 1)
    }
}

impl FromIterator<Variant> for Array {
    fn from_iter<T: IntoIterator<Item = Variant>>(iter: T) -> Self {
        let values: Vec<Variant> = iter.into_iter().collect();
        let value_type = values
            .first()
            .map(|v| v.type_id().into())
            .unwrap_or(VariantScalarTypeId::Empty);
        Array {
            value_type,
            values,
            array_dimensions: None,
        }
    }
}
