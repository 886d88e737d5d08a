// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Host array model and the codec that turns it into plain buffers.
//!
//! The search core only ever sees [`Vector`]s and `&[f32]`. Whatever the host
//! environment uses to represent arrays is described by [`RawArray`] and goes
//! through an [`ArrayCodec`] on the way in and on the way out.

pub mod json;

use crate::error::{KnnError, Result};
use crate::types::vector::Vector;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementType {
    Float4,
    Float8,
    Int4,
    Int8,
    Bool,
    Text,
}

impl ElementType {
    pub fn name(&self) -> &'static str {
        match self {
            ElementType::Float4 => "float4",
            ElementType::Float8 => "float8",
            ElementType::Int4 => "int4",
            ElementType::Int8 => "int8",
            ElementType::Bool => "bool",
            ElementType::Text => "text",
        }
    }
}

/// A single array slot as the host stores it.
#[derive(Clone, Debug, PartialEq)]
pub enum Datum {
    Null,
    Float4(f32),
    Float8(f64),
    Int4(i32),
    Int8(i64),
    Bool(bool),
    Text(String),
}

impl Datum {
    /// `None` for `Null`, which carries no type of its own.
    pub fn element_type(&self) -> Option<ElementType> {
        match self {
            Datum::Null => None,
            Datum::Float4(_) => Some(ElementType::Float4),
            Datum::Float8(_) => Some(ElementType::Float8),
            Datum::Int4(_) => Some(ElementType::Int4),
            Datum::Int8(_) => Some(ElementType::Int8),
            Datum::Bool(_) => Some(ElementType::Bool),
            Datum::Text(_) => Some(ElementType::Text),
        }
    }
}

/// Host-side array: shape, declared element type, and row-major elements.
#[derive(Clone, Debug, PartialEq)]
pub struct RawArray {
    pub dims: Vec<usize>,
    pub element_type: ElementType,
    pub elements: Vec<Datum>,
}

impl RawArray {
    pub fn new(dims: Vec<usize>, element_type: ElementType, elements: Vec<Datum>) -> Self {
        Self { dims, element_type, elements }
    }

    /// 1-D `float4` array without nulls.
    pub fn float4(values: &[f32]) -> Self {
        Self::new(
            vec![values.len()],
            ElementType::Float4,
            values.iter().map(|v| Datum::Float4(*v)).collect(),
        )
    }

    /// 1-D `float4` array where `None` becomes a NULL slot.
    pub fn float4_nullable(values: &[Option<f32>]) -> Self {
        Self::new(
            vec![values.len()],
            ElementType::Float4,
            values
                .iter()
                .map(|v| v.map_or(Datum::Null, Datum::Float4))
                .collect(),
        )
    }

    /// 1-D `int4` array.
    pub fn int4(values: &[i32]) -> Self {
        Self::new(
            vec![values.len()],
            ElementType::Int4,
            values.iter().map(|v| Datum::Int4(*v)).collect(),
        )
    }

    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Conversion between host arrays and the core's buffers.
pub trait ArrayCodec {
    /// Validate a host array and copy it out as a vector. Must not touch the source.
    fn decode_vector(&self, array: &RawArray) -> Result<Vector>;

    /// Build the host array returned to the caller.
    fn encode_ids(&self, ids: &[i32]) -> RawArray;
}

/// Accepts exactly one-dimensional, NULL-free `float4` arrays.
#[derive(Clone, Copy, Debug, Default)]
pub struct Float4Codec;

impl ArrayCodec for Float4Codec {
    fn decode_vector(&self, array: &RawArray) -> Result<Vector> {
        if array.ndim() != 1 {
            return Err(KnnError::Shape { ndim: array.ndim() });
        }

        if array.element_type != ElementType::Float4 {
            return Err(KnnError::Type {
                expected: ElementType::Float4.name(),
                found: array.element_type.name(),
            });
        }

        if array.dims[0] != array.elements.len() {
            return Err(KnnError::LengthMismatch {
                what: "array element count".to_string(),
                expected: array.dims[0],
                found: array.elements.len(),
            });
        }

        let mut out = Vec::with_capacity(array.elements.len());
        for (i, datum) in array.elements.iter().enumerate() {
            match datum {
                Datum::Float4(v) => out.push(*v),
                Datum::Null => {
                    return Err(KnnError::NullElement {
                        what: format!("array element {}", i),
                    })
                }
                other => {
                    // Declared float4 but holding something else.
                    return Err(KnnError::Type {
                        expected: ElementType::Float4.name(),
                        found: other.element_type().map_or("null", |t| t.name()),
                    });
                }
            }
        }

        Ok(Vector::new(out))
    }

    fn encode_ids(&self, ids: &[i32]) -> RawArray {
        RawArray::int4(ids)
    }
}
