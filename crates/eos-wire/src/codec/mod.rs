//! Binary codec for the EOS wire format.
//!
//! Layered bottom-up: [`primitives`] holds the reader/writer pair and the
//! raw integer/varint/string encodings, [`value`] dispatches over the generic
//! value set, [`action`] and [`transaction`] build the domain messages on
//! top.

pub mod action;
pub mod primitives;
pub mod transaction;
pub mod value;

pub use action::{decode_action, decode_action_with_registry, encode_action, encode_action_data};
pub use primitives::{Reader, Writer};
pub use transaction::{
    decode_envelope, decode_transaction, decode_transaction_with_registry, encode_envelope,
    encode_transaction, transaction_id,
};
pub use value::{decode_value, encode_value};
