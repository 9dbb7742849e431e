//! eos-wire: Binary wire codec for EOS-style blockchain messages.
//!
//! This crate packs and unpacks the binary forms an EOS node expects: packed
//! 64-bit names, assets, curve-tagged keys and signatures, actions, full
//! transactions, and the framed P2P envelope around them.
//!
//! # Overview
//!
//! The codec is byte-exact and reflection-free:
//! - **Closed value set**: everything encodable is a [`Value`] variant;
//!   decoding is driven by a caller-supplied [`Shape`]
//! - **Little-endian fixed widths, LEB128 varints**: the two primitive
//!   encodings everything else composes
//! - **Explicit registries**: action payload structure is declared per
//!   (contract, action) pair in an [`ActionRegistry`] value, never global
//!
//! # Quick Start
//!
//! ```rust
//! use eos_wire::{Action, ActionData, Transaction, TransactionHeader};
//! use eos_wire::codec::{encode_transaction, Writer};
//!
//! let mut tx = Transaction {
//!     header: TransactionHeader {
//!         expiration: 1_521_680_461,
//!         ..Default::default()
//!     },
//!     actions: vec![Action::new(
//!         "eosio".parse().unwrap(),
//!         "transfer".parse().unwrap(),
//!         "eosio".parse().unwrap(),
//!         "active".parse().unwrap(),
//!         ActionData::default(),
//!     )],
//!     ..Default::default()
//! };
//!
//! // Anti-replay fields derive from a recent block id
//! let block_id = [0u8; 32];
//! tx.set_ref_block(&block_id);
//!
//! let mut writer = Writer::new();
//! encode_transaction(&mut writer, &tx).unwrap();
//! assert!(!writer.is_empty());
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types (Name, Asset, PublicKey, Action, Transaction)
//! - [`codec`]: Binary encoding/decoding
//! - [`registry`]: Action payload shape registration
//! - [`error`]: Error types
//! - [`limits`]: Security limits for decoding
//!
//! # Security
//!
//! The decoder is designed to safely handle untrusted input:
//! - All length prefixes are checked against limits before allocation
//! - Varints are bounded to prevent overflow
//! - Every read is bounds-checked and reports the field it was reading

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod registry;

// Re-export commonly used types at crate root
pub use codec::{
    decode_action, decode_action_with_registry, decode_envelope, decode_transaction,
    decode_transaction_with_registry, decode_value, encode_action, encode_envelope,
    encode_transaction, encode_value, transaction_id, Reader, Writer,
};
pub use error::{DecodeError, EncodeError, ParseError};
pub use model::{
    AccountName, Action, ActionData, ActionName, Asset, BlockTimestamp, Curve, FieldMeta,
    FieldShape, FieldValue, Name, P2PMessageEnvelope, PermissionLevel, PermissionName, PublicKey,
    Shape, Signature, StructShape, StructValue, Symbol, Transaction, TransactionHeader, Tstamp,
    Value,
};
pub use registry::ActionRegistry;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
