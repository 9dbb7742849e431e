//! The closed set of wire-encodable values.
//!
//! Every type the codec knows how to serialize appears here as an explicit
//! variant; there is no runtime reflection and no fallback path. Aggregates
//! declare their ordered field list and per-field inclusion/optionality up
//! front, and decoding is driven by a [`Shape`] mirroring the value
//! structure.

use crate::model::asset::Asset;
use crate::model::crypto::{PublicKey, Signature};
use crate::model::name::Name;
use crate::model::time::{BlockTimestamp, Tstamp};

/// A wire-encodable value.
///
/// Scalar variants map to the fixed domain encodings; `Array`, `List`, `Map`
/// and `Struct` compose them structurally to arbitrary nesting.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// One byte, 0 or 1.
    Bool(bool),
    Uint8(u8),
    Int8(i8),
    /// 2-byte little-endian.
    Uint16(u16),
    Int16(i16),
    /// 4-byte little-endian.
    Uint32(u32),
    Int32(i32),
    /// 8-byte little-endian.
    Uint64(u64),
    Int64(i64),
    /// Variable-width unsigned (LEB128).
    Varuint32(u32),
    /// Varint byte length + UTF-8 bytes.
    String(String),
    /// Varint byte length + raw bytes.
    Bytes(Vec<u8>),
    /// Raw 32 bytes. An empty value encodes as 32 zero bytes; this is the
    /// only type the codec zero-pads.
    Checksum256(Vec<u8>),
    /// 8-byte little-endian packed identifier.
    Name(Name),
    PublicKey(PublicKey),
    Signature(Signature),
    Asset(Asset),
    Tstamp(Tstamp),
    BlockTimestamp(BlockTimestamp),
    /// Fixed-arity sequence: elements in order, no count prefix.
    Array(Vec<Value>),
    /// Variable sequence: varint count, then elements in order.
    List(Vec<Value>),
    /// Associative entries: varint count, then pairs in list order. The
    /// format defines no canonical ordering for more than one entry.
    Map(Vec<(Value, Value)>),
    /// Aggregate with declared field order and per-field metadata.
    Struct(StructValue),
}

/// An aggregate value: named fields in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct StructValue {
    /// Aggregate name, used in error reporting only.
    pub name: &'static str,
    pub fields: Vec<FieldValue>,
}

/// One field of an aggregate value.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
    pub name: &'static str,
    pub meta: FieldMeta,
    /// None for an excluded field, or an absent optional one.
    pub value: Option<Value>,
}

/// Per-field serialization metadata, declared at aggregate construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldMeta {
    /// Skipped entirely on the wire.
    pub excluded: bool,
    /// Preceded by a presence boolean; written only when present.
    pub optional: bool,
}

impl FieldValue {
    pub fn required(name: &'static str, value: Value) -> FieldValue {
        FieldValue {
            name,
            meta: FieldMeta::default(),
            value: Some(value),
        }
    }

    pub fn optional(name: &'static str, value: Option<Value>) -> FieldValue {
        FieldValue {
            name,
            meta: FieldMeta { excluded: false, optional: true },
            value,
        }
    }

    pub fn excluded(name: &'static str) -> FieldValue {
        FieldValue {
            name,
            meta: FieldMeta { excluded: true, optional: false },
            value: None,
        }
    }
}

/// The declared shape a byte stream decodes into.
///
/// Shapes mirror [`Value`] one-for-one: scalar shapes carry no payload,
/// structural shapes carry their element shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Bool,
    Uint8,
    Int8,
    Uint16,
    Int16,
    Uint32,
    Int32,
    Uint64,
    Int64,
    Varuint32,
    String,
    Bytes,
    Checksum256,
    Name,
    PublicKey,
    Signature,
    Asset,
    Tstamp,
    BlockTimestamp,
    /// Fixed-arity sequence of `len` elements.
    Array { elem: Box<Shape>, len: usize },
    List(Box<Shape>),
    Map { key: Box<Shape>, value: Box<Shape> },
    Struct(StructShape),
}

/// The declared shape of an aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct StructShape {
    pub name: &'static str,
    pub fields: Vec<FieldShape>,
}

/// One declared field of an aggregate shape.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldShape {
    pub name: &'static str,
    pub meta: FieldMeta,
    pub shape: Shape,
}

impl FieldShape {
    pub fn required(name: &'static str, shape: Shape) -> FieldShape {
        FieldShape {
            name,
            meta: FieldMeta::default(),
            shape,
        }
    }

    pub fn optional(name: &'static str, shape: Shape) -> FieldShape {
        FieldShape {
            name,
            meta: FieldMeta { excluded: false, optional: true },
            shape,
        }
    }

    pub fn excluded(name: &'static str, shape: Shape) -> FieldShape {
        FieldShape {
            name,
            meta: FieldMeta { excluded: true, optional: false },
            shape,
        }
    }
}
