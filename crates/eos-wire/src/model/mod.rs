//! Data model types for the EOS wire format.
//!
//! This module contains the in-memory representations the codec serializes:
//! - Packed identifiers (names)
//! - Assets and symbols
//! - Curve-tagged keys and signatures
//! - Timestamps
//! - The closed generic value set and its shapes
//! - Actions and transactions

pub mod action;
pub mod asset;
pub mod crypto;
pub mod name;
pub mod time;
pub mod transaction;
pub mod value;

pub use action::{Action, ActionData, PermissionLevel};
pub use asset::{Asset, Symbol, MAX_PRECISION, MAX_TICKER_LEN};
pub use crypto::{
    Curve, PublicKey, Signature, PUBLIC_KEY_CONTENT_LEN, SIGNATURE_CONTENT_LEN,
};
pub use name::{
    string_to_u64, u64_to_string, AccountName, ActionName, Name, PermissionName, ScopeName,
    TableName, MAX_NAME_LEN,
};
pub use time::{BlockTimestamp, Tstamp, BLOCK_TIMESTAMP_EPOCH};
pub use transaction::{P2PMessageEnvelope, Transaction, TransactionHeader};
pub use value::{FieldMeta, FieldShape, FieldValue, Shape, StructShape, StructValue, Value};
