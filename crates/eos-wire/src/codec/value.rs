//! Generic value encoding/decoding.
//!
//! [`encode_value`] walks a [`Value`] and appends its wire form to a writer;
//! [`decode_value`] walks a [`Shape`] and rebuilds the matching value from a
//! reader. The two walks mirror each other variant for variant, so there is
//! exactly one place each domain encoding lives.

use crate::codec::primitives::{Reader, Writer};
use crate::error::{DecodeError, EncodeError};
use crate::limits::MAX_SEQUENCE_ITEMS;
use crate::model::asset::{Asset, Symbol, MAX_TICKER_LEN};
use crate::model::crypto::{
    Curve, PublicKey, Signature, PUBLIC_KEY_CONTENT_LEN, SIGNATURE_CONTENT_LEN,
};
use crate::model::name::Name;
use crate::model::time::{BlockTimestamp, Tstamp};
use crate::model::value::{
    FieldShape, FieldValue, Shape, StructShape, StructValue, Value,
};

/// Width of a checksum256 on the wire.
const CHECKSUM256_LEN: usize = 32;

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes a value into its binary wire form.
pub fn encode_value(writer: &mut Writer, value: &Value) -> Result<(), EncodeError> {
    match value {
        Value::Bool(v) => writer.write_bool(*v),
        Value::Uint8(v) => writer.write_byte(*v),
        Value::Int8(v) => writer.write_byte(*v as u8),
        Value::Uint16(v) => writer.write_u16(*v),
        Value::Int16(v) => writer.write_i16(*v),
        Value::Uint32(v) => writer.write_u32(*v),
        Value::Int32(v) => writer.write_i32(*v),
        Value::Uint64(v) => writer.write_u64(*v),
        Value::Int64(v) => writer.write_i64(*v),
        Value::Varuint32(v) => writer.write_varint(*v as u64),
        Value::String(s) => writer.write_string(s),
        Value::Bytes(b) => writer.write_bytes_prefixed(b),
        Value::Checksum256(b) => encode_checksum256(writer, b)?,
        Value::Name(name) => writer.write_u64(name.0),
        Value::PublicKey(key) => encode_public_key(writer, key)?,
        Value::Signature(sig) => encode_signature(writer, sig)?,
        Value::Asset(asset) => encode_asset(writer, asset)?,
        Value::Tstamp(ts) => writer.write_u64(ts.nanos),
        Value::BlockTimestamp(ts) => writer.write_u32(ts.secs),
        Value::Array(items) => {
            for item in items {
                encode_value(writer, item)?;
            }
        }
        Value::List(items) => {
            writer.write_varint(items.len() as u64);
            for item in items {
                encode_value(writer, item)?;
            }
        }
        Value::Map(entries) => {
            writer.write_varint(entries.len() as u64);
            for (key, val) in entries {
                encode_value(writer, key)?;
                encode_value(writer, val)?;
            }
        }
        Value::Struct(strukt) => encode_struct(writer, strukt)?,
    }
    Ok(())
}

fn encode_struct(writer: &mut Writer, strukt: &StructValue) -> Result<(), EncodeError> {
    for field in &strukt.fields {
        encode_field(writer, strukt.name, field)?;
    }
    Ok(())
}

fn encode_field(
    writer: &mut Writer,
    strukt: &'static str,
    field: &FieldValue,
) -> Result<(), EncodeError> {
    if field.meta.excluded {
        return Ok(());
    }
    if field.meta.optional {
        match &field.value {
            Some(value) => {
                writer.write_bool(true);
                encode_value(writer, value)?;
            }
            None => writer.write_bool(false),
        }
        return Ok(());
    }
    match &field.value {
        Some(value) => encode_value(writer, value),
        None => Err(EncodeError::MissingField {
            strukt,
            field: field.name,
        }),
    }
}

/// Checksums are the one type the codec pads: an empty value stands for the
/// all-zero digest.
fn encode_checksum256(writer: &mut Writer, bytes: &[u8]) -> Result<(), EncodeError> {
    if bytes.is_empty() {
        writer.write_bytes(&[0u8; CHECKSUM256_LEN]);
        return Ok(());
    }
    if bytes.len() != CHECKSUM256_LEN {
        return Err(EncodeError::FixedWidthMismatch {
            what: "checksum256",
            expected: CHECKSUM256_LEN,
            actual: bytes.len(),
        });
    }
    writer.write_bytes(bytes);
    Ok(())
}

fn encode_public_key(writer: &mut Writer, key: &PublicKey) -> Result<(), EncodeError> {
    if key.content.len() != PUBLIC_KEY_CONTENT_LEN {
        return Err(EncodeError::FixedWidthMismatch {
            what: "public key",
            expected: PUBLIC_KEY_CONTENT_LEN,
            actual: key.content.len(),
        });
    }
    writer.write_byte(key.curve as u8);
    writer.write_bytes(&key.content);
    Ok(())
}

fn encode_signature(writer: &mut Writer, sig: &Signature) -> Result<(), EncodeError> {
    if sig.content.len() != SIGNATURE_CONTENT_LEN {
        return Err(EncodeError::FixedWidthMismatch {
            what: "signature",
            expected: SIGNATURE_CONTENT_LEN,
            actual: sig.content.len(),
        });
    }
    writer.write_byte(sig.curve as u8);
    writer.write_bytes(&sig.content);
    Ok(())
}

fn encode_asset(writer: &mut Writer, asset: &Asset) -> Result<(), EncodeError> {
    writer.write_i64(asset.amount);
    writer.write_byte(asset.symbol.precision);
    let code = asset.symbol.code.as_bytes();
    if code.len() > MAX_TICKER_LEN {
        return Err(EncodeError::FixedWidthMismatch {
            what: "asset ticker",
            expected: MAX_TICKER_LEN,
            actual: code.len(),
        });
    }
    writer.write_bytes(code);
    // NUL-pad the ticker to its fixed 7-byte slot.
    for _ in code.len()..MAX_TICKER_LEN {
        writer.write_byte(0);
    }
    Ok(())
}

// =============================================================================
// DECODING
// =============================================================================

/// Decodes a value of the given shape from a reader.
pub fn decode_value(reader: &mut Reader, shape: &Shape) -> Result<Value, DecodeError> {
    let value = match shape {
        Shape::Bool => Value::Bool(reader.read_bool("bool")?),
        Shape::Uint8 => Value::Uint8(reader.read_byte("uint8")?),
        Shape::Int8 => Value::Int8(reader.read_byte("int8")? as i8),
        Shape::Uint16 => Value::Uint16(reader.read_u16("uint16")?),
        Shape::Int16 => Value::Int16(reader.read_i16("int16")?),
        Shape::Uint32 => Value::Uint32(reader.read_u32("uint32")?),
        Shape::Int32 => Value::Int32(reader.read_i32("int32")?),
        Shape::Uint64 => Value::Uint64(reader.read_u64("uint64")?),
        Shape::Int64 => Value::Int64(reader.read_i64("int64")?),
        Shape::Varuint32 => Value::Varuint32(reader.read_varuint32("varuint32")?),
        Shape::String => Value::String(reader.read_string("string")?),
        Shape::Bytes => Value::Bytes(reader.read_bytes_prefixed("bytes")?),
        Shape::Checksum256 => {
            Value::Checksum256(reader.read_bytes(CHECKSUM256_LEN, "checksum256")?.to_vec())
        }
        Shape::Name => Value::Name(Name(reader.read_u64("name")?)),
        Shape::PublicKey => Value::PublicKey(decode_public_key(reader)?),
        Shape::Signature => Value::Signature(decode_signature(reader)?),
        Shape::Asset => Value::Asset(decode_asset(reader)?),
        Shape::Tstamp => Value::Tstamp(Tstamp::from_nanos(reader.read_u64("tstamp")?)),
        Shape::BlockTimestamp => {
            Value::BlockTimestamp(BlockTimestamp::from_secs(reader.read_u32("block timestamp")?))
        }
        Shape::Array { elem, len } => {
            let mut items = Vec::with_capacity(*len);
            for _ in 0..*len {
                items.push(decode_value(reader, elem)?);
            }
            Value::Array(items)
        }
        Shape::List(elem) => {
            let count = read_sequence_count(reader, "list")?;
            let mut items = Vec::with_capacity(count.min(1024));
            for _ in 0..count {
                items.push(decode_value(reader, elem)?);
            }
            Value::List(items)
        }
        Shape::Map { key, value } => {
            let count = read_sequence_count(reader, "map")?;
            let mut entries = Vec::with_capacity(count.min(1024));
            for _ in 0..count {
                let k = decode_value(reader, key)?;
                let v = decode_value(reader, value)?;
                entries.push((k, v));
            }
            Value::Map(entries)
        }
        Shape::Struct(shape) => Value::Struct(decode_struct(reader, shape)?),
    };
    Ok(value)
}

fn read_sequence_count(reader: &mut Reader, field: &'static str) -> Result<usize, DecodeError> {
    let count = reader.read_varint(field)? as usize;
    if count > MAX_SEQUENCE_ITEMS {
        return Err(DecodeError::LengthExceedsLimit {
            field,
            len: count,
            max: MAX_SEQUENCE_ITEMS,
        });
    }
    Ok(count)
}

fn decode_struct(reader: &mut Reader, shape: &StructShape) -> Result<StructValue, DecodeError> {
    let mut fields = Vec::with_capacity(shape.fields.len());
    for field in &shape.fields {
        fields.push(decode_field(reader, field)?);
    }
    Ok(StructValue {
        name: shape.name,
        fields,
    })
}

fn decode_field(reader: &mut Reader, field: &FieldShape) -> Result<FieldValue, DecodeError> {
    if field.meta.excluded {
        return Ok(FieldValue {
            name: field.name,
            meta: field.meta,
            value: None,
        });
    }
    if field.meta.optional && !reader.read_bool(field.name)? {
        return Ok(FieldValue {
            name: field.name,
            meta: field.meta,
            value: None,
        });
    }
    let value = decode_value(reader, &field.shape)?;
    Ok(FieldValue {
        name: field.name,
        meta: field.meta,
        value: Some(value),
    })
}

fn decode_public_key(reader: &mut Reader) -> Result<PublicKey, DecodeError> {
    let curve = Curve::from_u8(reader.read_byte("public key curve")?)?;
    let content = reader
        .read_bytes(PUBLIC_KEY_CONTENT_LEN, "public key content")?
        .to_vec();
    Ok(PublicKey { curve, content })
}

fn decode_signature(reader: &mut Reader) -> Result<Signature, DecodeError> {
    let curve = Curve::from_u8(reader.read_byte("signature curve")?)?;
    let content = reader
        .read_bytes(SIGNATURE_CONTENT_LEN, "signature content")?
        .to_vec();
    Ok(Signature { curve, content })
}

fn decode_asset(reader: &mut Reader) -> Result<Asset, DecodeError> {
    let amount = reader.read_i64("asset amount")?;
    let precision = reader.read_byte("asset precision")?;
    let ticker = reader.read_bytes(MAX_TICKER_LEN, "asset ticker")?;
    let end = ticker.iter().position(|&b| b == 0).unwrap_or(MAX_TICKER_LEN);
    let code = std::str::from_utf8(&ticker[..end])
        .map_err(|_| DecodeError::InvalidUtf8 {
            field: "asset ticker",
        })?
        .to_string();
    Ok(Asset {
        amount,
        symbol: Symbol { precision, code },
    })
}
