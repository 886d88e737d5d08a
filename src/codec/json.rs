// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! JSON bridge for [`RawArray`].
//!
//! JSON plays the host role for the CLI and the JSON-lines row source:
//! nested arrays become extra dimensions, `null` becomes a NULL slot,
//! numbers become `float4`. The declared element type is taken from the
//! first non-null leaf.

use serde_json::Value;

use super::{Datum, ElementType, RawArray};
use crate::error::{KnnError, Result};

impl RawArray {
    /// Builds an array whose shape is read from the first element at each
    /// level. Ragged nesting, where a sibling differs in length or depth, is
    /// a [`KnnError::Shape`] carrying the deepest nesting found.
    pub fn from_json(value: &Value) -> Result<Self> {
        let mut dims = Vec::new();
        let mut cursor = value;
        while let Value::Array(items) = cursor {
            dims.push(items.len());
            match items.first() {
                Some(first) => cursor = first,
                None => break,
            }
        }

        let mut elements = Vec::new();
        if !flatten(value, &dims, &mut elements) {
            return Err(KnnError::Shape { ndim: depth(value) });
        }

        let element_type = elements
            .iter()
            .find_map(Datum::element_type)
            .unwrap_or(ElementType::Float4);

        Ok(RawArray::new(dims, element_type, elements))
    }

    pub fn to_json(&self) -> Value {
        if self.dims.is_empty() {
            return self.elements.first().map_or(Value::Null, datum_to_json);
        }
        nest(&self.dims, &self.elements)
    }
}

/// Pushes the leaves of `value` in row-major order. Returns false as soon as
/// `value` stops matching `dims`.
fn flatten(value: &Value, dims: &[usize], out: &mut Vec<Datum>) -> bool {
    match (value, dims) {
        (Value::Array(items), [len, rest @ ..]) => {
            items.len() == *len && items.iter().all(|item| flatten(item, rest, out))
        }
        (Value::Array(_), []) | (_, [_, ..]) => false,
        (Value::Null, []) => {
            out.push(Datum::Null);
            true
        }
        (Value::Bool(b), []) => {
            out.push(Datum::Bool(*b));
            true
        }
        (Value::Number(n), []) => {
            out.push(Datum::Float4(n.as_f64().unwrap_or(f64::NAN) as f32));
            true
        }
        (Value::String(s), []) => {
            out.push(Datum::Text(s.clone()));
            true
        }
        (Value::Object(_), []) => {
            out.push(Datum::Text(value.to_string()));
            true
        }
    }
}

fn depth(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.iter().map(depth).max().unwrap_or(0),
        _ => 0,
    }
}

fn nest(dims: &[usize], elements: &[Datum]) -> Value {
    match dims {
        [] | [_] => Value::Array(elements.iter().map(datum_to_json).collect()),
        [outer, rest @ ..] => {
            let stride: usize = rest.iter().product();
            if stride == 0 {
                return Value::Array(vec![Value::Array(Vec::new()); *outer]);
            }
            Value::Array(
                elements
                    .chunks(stride)
                    .take(*outer)
                    .map(|chunk| nest(rest, chunk))
                    .collect(),
            )
        }
    }
}

fn datum_to_json(datum: &Datum) -> Value {
    match datum {
        Datum::Null => Value::Null,
        Datum::Float4(v) => serde_json::Number::from_f64(f64::from(*v)).map_or(Value::Null, Value::Number),
        Datum::Float8(v) => serde_json::Number::from_f64(*v).map_or(Value::Null, Value::Number),
        Datum::Int4(v) => Value::from(*v),
        Datum::Int8(v) => Value::from(*v),
        Datum::Bool(b) => Value::Bool(*b),
        Datum::Text(s) => Value::String(s.clone()),
    }
}
