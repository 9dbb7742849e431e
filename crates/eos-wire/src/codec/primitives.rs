//! Primitive encoding/decoding for the EOS wire format.
//!
//! Implements varints (unsigned LEB128), fixed-width little-endian integers,
//! and length-prefixed strings/byte arrays. Everything else in the codec
//! composes these.

use crate::error::DecodeError;
use crate::limits::{MAX_BYTES_LEN, MAX_STRING_LEN, MAX_VARINT_BYTES};

// =============================================================================
// DECODING
// =============================================================================

/// Reader for decoding binary data.
///
/// Wraps a byte slice and a monotonically advancing cursor. Every read
/// checks bounds before consuming anything, so a failed read never leaves a
/// partially-consumed value behind; after an error the cursor position is
/// unspecified and the reader should be discarded.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the current position in the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of remaining bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns true if all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Reads a single byte.
    #[inline]
    pub fn read_byte(&mut self, field: &'static str) -> Result<u8, DecodeError> {
        if self.pos >= self.data.len() {
            return Err(DecodeError::InsufficientData {
                field,
                required: 1,
                remaining: 0,
            });
        }
        let byte = self.data[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    /// Reads exactly n bytes.
    #[inline]
    pub fn read_bytes(&mut self, n: usize, field: &'static str) -> Result<&'a [u8], DecodeError> {
        if self.pos + n > self.data.len() {
            return Err(DecodeError::InsufficientData {
                field,
                required: n,
                remaining: self.remaining(),
            });
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Reads a boolean byte, rejecting anything but 0x00/0x01.
    pub fn read_bool(&mut self, field: &'static str) -> Result<bool, DecodeError> {
        match self.read_byte(field)? {
            0x00 => Ok(false),
            0x01 => Ok(true),
            value => Err(DecodeError::InvalidBool { value }),
        }
    }

    /// Reads a little-endian u16.
    #[inline]
    pub fn read_u16(&mut self, field: &'static str) -> Result<u16, DecodeError> {
        let bytes = self.read_bytes(2, field)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Reads a little-endian i16.
    pub fn read_i16(&mut self, field: &'static str) -> Result<i16, DecodeError> {
        Ok(self.read_u16(field)? as i16)
    }

    /// Reads a little-endian u32.
    #[inline]
    pub fn read_u32(&mut self, field: &'static str) -> Result<u32, DecodeError> {
        let bytes = self.read_bytes(4, field)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Reads a little-endian i32.
    pub fn read_i32(&mut self, field: &'static str) -> Result<i32, DecodeError> {
        Ok(self.read_u32(field)? as i32)
    }

    /// Reads a little-endian u64.
    #[inline]
    pub fn read_u64(&mut self, field: &'static str) -> Result<u64, DecodeError> {
        let bytes = self.read_bytes(8, field)?;
        // read_bytes guarantees exactly 8 bytes.
        Ok(u64::from_le_bytes(bytes.try_into().unwrap()))
    }

    /// Reads a little-endian i64.
    pub fn read_i64(&mut self, field: &'static str) -> Result<i64, DecodeError> {
        Ok(self.read_u64(field)? as i64)
    }

    /// Reads an unsigned varint (LEB128).
    #[inline]
    pub fn read_varint(&mut self, field: &'static str) -> Result<u64, DecodeError> {
        let mut result: u64 = 0;
        let mut shift = 0;

        for i in 0..MAX_VARINT_BYTES {
            let byte = self.read_byte(field)?;
            let value = (byte & 0x7F) as u64;

            // Check for overflow into bits beyond u64
            if shift >= 64 || (shift == 63 && value > 1) {
                return Err(DecodeError::VarintOverflow);
            }

            result |= value << shift;

            if byte & 0x80 == 0 {
                return Ok(result);
            }
            shift += 7;

            if i == MAX_VARINT_BYTES - 1 {
                return Err(DecodeError::VarintTooLong);
            }
        }

        Err(DecodeError::VarintTooLong)
    }

    /// Reads a varint that must fit in a u32.
    pub fn read_varuint32(&mut self, field: &'static str) -> Result<u32, DecodeError> {
        let value = self.read_varint(field)?;
        u32::try_from(value).map_err(|_| DecodeError::VarintOverflow)
    }

    /// Reads a length-prefixed UTF-8 string.
    #[inline]
    pub fn read_string(&mut self, field: &'static str) -> Result<String, DecodeError> {
        let len = self.read_varint(field)? as usize;
        if len > MAX_STRING_LEN {
            return Err(DecodeError::LengthExceedsLimit {
                field,
                len,
                max: MAX_STRING_LEN,
            });
        }
        let bytes = self.read_bytes(len, field)?;
        std::str::from_utf8(bytes)
            .map(|s| s.to_string())
            .map_err(|_| DecodeError::InvalidUtf8 { field })
    }

    /// Reads a length-prefixed byte array.
    pub fn read_bytes_prefixed(&mut self, field: &'static str) -> Result<Vec<u8>, DecodeError> {
        let len = self.read_varint(field)? as usize;
        if len > MAX_BYTES_LEN {
            return Err(DecodeError::LengthExceedsLimit {
                field,
                len,
                max: MAX_BYTES_LEN,
            });
        }
        let bytes = self.read_bytes(len, field)?;
        Ok(bytes.to_vec())
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writer for encoding binary data.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates a new writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates a new writer with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Returns a reference to the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if no bytes have been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Writes a single byte.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Writes raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes a boolean as one byte (0 or 1).
    pub fn write_bool(&mut self, value: bool) {
        self.buf.push(value as u8);
    }

    /// Writes a little-endian u16.
    pub fn write_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a little-endian i16.
    pub fn write_i16(&mut self, value: i16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a little-endian u32.
    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a little-endian i32.
    pub fn write_i32(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a little-endian u64.
    pub fn write_u64(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a little-endian i64.
    pub fn write_i64(&mut self, value: i64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes an unsigned varint (LEB128).
    #[inline]
    pub fn write_varint(&mut self, mut value: u64) {
        // Stack buffer batches the writes; 10 bytes covers a full u64.
        let mut buf = [0u8; MAX_VARINT_BYTES];
        let mut len = 0;
        loop {
            let mut byte = (value & 0x7F) as u8;
            value >>= 7;
            if value != 0 {
                byte |= 0x80;
            }
            buf[len] = byte;
            len += 1;
            if value == 0 {
                break;
            }
        }
        self.buf.extend_from_slice(&buf[..len]);
    }

    /// Writes a length-prefixed UTF-8 string.
    pub fn write_string(&mut self, s: &str) {
        self.write_varint(s.len() as u64);
        self.buf.extend_from_slice(s.as_bytes());
    }

    /// Writes a length-prefixed byte array.
    pub fn write_bytes_prefixed(&mut self, bytes: &[u8]) {
        self.write_varint(bytes.len() as u64);
        self.buf.extend_from_slice(bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_varint_fixtures() {
        let cases: [(u64, &[u8]); 5] = [
            (0, &[0x00]),
            (1, &[0x01]),
            (127, &[0x7F]),
            (128, &[0x80, 0x01]),
            (999, &[0xE7, 0x07]),
        ];
        for (value, bytes) in cases {
            let mut writer = Writer::new();
            writer.write_varint(value);
            assert_eq!(writer.as_bytes(), bytes, "failed for {}", value);

            let mut reader = Reader::new(bytes);
            assert_eq!(reader.read_varint("test").unwrap(), value);
        }
    }

    #[test]
    fn test_varint_roundtrip() {
        let test_values = [0u64, 1, 127, 128, 255, 256, 16383, 16384, u64::MAX];

        for v in test_values {
            let mut writer = Writer::new();
            writer.write_varint(v);

            let mut reader = Reader::new(writer.as_bytes());
            let decoded = reader.read_varint("test").unwrap();
            assert_eq!(v, decoded, "failed for {}", v);
        }
    }

    #[test]
    fn test_varint_too_long() {
        // 11 continuation bytes should fail
        let data = [0x80u8; 11];
        let mut reader = Reader::new(&data);
        let result = reader.read_varint("test");
        assert!(matches!(result, Err(DecodeError::VarintTooLong)));
    }

    #[test]
    fn test_varuint32_overflow() {
        let mut writer = Writer::new();
        writer.write_varint(u32::MAX as u64 + 1);
        let mut reader = Reader::new(writer.as_bytes());
        assert_eq!(
            reader.read_varuint32("test"),
            Err(DecodeError::VarintOverflow)
        );
    }

    #[test]
    fn test_fixed_width_roundtrip() {
        let mut writer = Writer::new();
        writer.write_u16(99);
        writer.write_i16(-75);
        writer.write_u32(999);
        writer.write_i32(-999);
        writer.write_u64(87);
        writer.write_i64(-87);

        let mut reader = Reader::new(writer.as_bytes());
        assert_eq!(reader.read_u16("a").unwrap(), 99);
        assert_eq!(reader.read_i16("b").unwrap(), -75);
        assert_eq!(reader.read_u32("c").unwrap(), 999);
        assert_eq!(reader.read_i32("d").unwrap(), -999);
        assert_eq!(reader.read_u64("e").unwrap(), 87);
        assert_eq!(reader.read_i64("f").unwrap(), -87);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_little_endian_layout() {
        let mut writer = Writer::new();
        writer.write_u32(0x0102_0304);
        assert_eq!(writer.as_bytes(), &[0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_string_roundtrip() {
        let test_strings = ["", "abc", "hello world", "unicode: \u{1F600}"];

        for s in test_strings {
            let mut writer = Writer::new();
            writer.write_string(s);

            let mut reader = Reader::new(writer.as_bytes());
            let decoded = reader.read_string("test").unwrap();
            assert_eq!(s, decoded);
        }
    }

    #[test]
    fn test_bool_strictness() {
        let mut reader = Reader::new(&[0x02]);
        assert_eq!(
            reader.read_bool("flag"),
            Err(DecodeError::InvalidBool { value: 2 })
        );
    }

    #[test]
    fn test_insufficient_data_reported_before_read() {
        let data = [0u8; 5];
        let mut reader = Reader::new(&data);
        let err = reader.read_bytes(10, "digest").unwrap_err();
        assert_eq!(
            err,
            DecodeError::InsufficientData {
                field: "digest",
                required: 10,
                remaining: 5,
            }
        );
        // Nothing was consumed by the failed read.
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_insufficient_data_messages() {
        let err = Reader::new(&[]).read_byte("byte").unwrap_err();
        assert_eq!(err.to_string(), "byte: required 1 bytes, remaining 0");

        let err = Reader::new(&[]).read_u16("uint16").unwrap_err();
        assert_eq!(err.to_string(), "uint16: required 2 bytes, remaining 0");

        let err = Reader::new(&[]).read_u32("uint32").unwrap_err();
        assert_eq!(err.to_string(), "uint32: required 4 bytes, remaining 0");

        let err = Reader::new(&[]).read_u64("uint64").unwrap_err();
        assert_eq!(err.to_string(), "uint64: required 8 bytes, remaining 0");

        let err = Reader::new(&[]).read_bytes(32, "sha256").unwrap_err();
        assert_eq!(err.to_string(), "sha256: required 32 bytes, remaining 0");
    }

    #[test]
    fn test_bytes_prefixed_missing_data() {
        let mut writer = Writer::new();
        writer.write_varint(10);

        let mut reader = Reader::new(writer.as_bytes());
        let err = reader.read_bytes_prefixed("payload").unwrap_err();
        assert_eq!(
            err,
            DecodeError::InsufficientData {
                field: "payload",
                required: 10,
                remaining: 0,
            }
        );
    }

    proptest! {
        #[test]
        fn prop_varint_roundtrip(v in any::<u64>()) {
            let mut writer = Writer::new();
            writer.write_varint(v);
            let mut reader = Reader::new(writer.as_bytes());
            prop_assert_eq!(reader.read_varint("test").unwrap(), v);
            prop_assert!(reader.is_empty());
        }

        #[test]
        fn prop_bytes_prefixed_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..256)) {
            let mut writer = Writer::new();
            writer.write_bytes_prefixed(&data);
            let mut reader = Reader::new(writer.as_bytes());
            prop_assert_eq!(reader.read_bytes_prefixed("test").unwrap(), data);
        }
    }
}
