//! Security limits for decoding untrusted input.
//!
//! Every length read off the wire is checked against these caps before the
//! corresponding allocation, so malformed input cannot force unbounded memory
//! use.

/// Maximum bytes in a varint (10 bytes covers a full u64).
pub const MAX_VARINT_BYTES: usize = 10;

/// Maximum length of a decoded string (1 MiB).
pub const MAX_STRING_LEN: usize = 1 << 20;

/// Maximum length of a decoded byte array (16 MiB).
pub const MAX_BYTES_LEN: usize = 1 << 24;

/// Maximum element count for decoded sequences and maps.
pub const MAX_SEQUENCE_ITEMS: usize = 1 << 20;

/// Maximum number of actions or context-free data blobs per transaction.
pub const MAX_TRANSACTION_ITEMS: usize = 1 << 12;
