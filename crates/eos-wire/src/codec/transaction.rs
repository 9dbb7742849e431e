//! Transaction and P2P envelope encoding/decoding.

use sha2::{Digest, Sha256};

use crate::codec::action::{decode_action, decode_action_with_registry, encode_action};
use crate::codec::primitives::{Reader, Writer};
use crate::error::{DecodeError, EncodeError};
use crate::limits::{MAX_BYTES_LEN, MAX_TRANSACTION_ITEMS};
use crate::model::action::Action;
use crate::model::transaction::{P2PMessageEnvelope, Transaction, TransactionHeader};
use crate::registry::ActionRegistry;

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes a transaction into its binary wire form.
///
/// Wire layout: the scalar header (expiration, region and the two anti-replay
/// reference fields as fixed-width little-endian, then the three resource
/// fields as varints), followed by three counted sequences: context-free
/// actions, actions, context-free data blobs.
pub fn encode_transaction(writer: &mut Writer, tx: &Transaction) -> Result<(), EncodeError> {
    writer.write_u32(tx.header.expiration);
    writer.write_u16(tx.header.region);
    writer.write_u16(tx.header.ref_block_num);
    writer.write_u32(tx.header.ref_block_prefix);
    writer.write_varint(tx.header.max_net_usage_words as u64);
    writer.write_varint(tx.header.max_kcpu_usage as u64);
    writer.write_varint(tx.header.delay_sec as u64);

    encode_actions(writer, &tx.context_free_actions)?;
    encode_actions(writer, &tx.actions)?;

    writer.write_varint(tx.context_free_data.len() as u64);
    for blob in &tx.context_free_data {
        writer.write_bytes_prefixed(blob);
    }
    Ok(())
}

fn encode_actions(writer: &mut Writer, actions: &[Action]) -> Result<(), EncodeError> {
    writer.write_varint(actions.len() as u64);
    for action in actions {
        encode_action(writer, action)?;
    }
    Ok(())
}

/// Computes the transaction id: the SHA-256 digest of the packed form.
pub fn transaction_id(tx: &Transaction) -> Result<[u8; 32], EncodeError> {
    let mut writer = Writer::new();
    encode_transaction(&mut writer, tx)?;
    Ok(Sha256::digest(writer.as_bytes()).into())
}

/// Frames a P2P message: 4-byte little-endian length covering the type tag
/// and the payload, then the tag, then the payload.
pub fn encode_envelope(writer: &mut Writer, envelope: &P2PMessageEnvelope) -> Result<(), EncodeError> {
    if envelope.payload.len() >= MAX_BYTES_LEN {
        return Err(EncodeError::LengthExceedsLimit {
            field: "p2p payload",
            len: envelope.payload.len(),
            max: MAX_BYTES_LEN,
        });
    }
    writer.write_u32(envelope.payload.len() as u32 + 1);
    writer.write_byte(envelope.msg_type);
    writer.write_bytes(&envelope.payload);
    Ok(())
}

// =============================================================================
// DECODING
// =============================================================================

/// Decodes a transaction, leaving action payloads as opaque bytes.
pub fn decode_transaction(reader: &mut Reader) -> Result<Transaction, DecodeError> {
    decode_transaction_inner(reader, None)
}

/// Decodes a transaction, resolving action payloads through the registry.
pub fn decode_transaction_with_registry(
    reader: &mut Reader,
    registry: &ActionRegistry,
) -> Result<Transaction, DecodeError> {
    decode_transaction_inner(reader, Some(registry))
}

fn decode_transaction_inner(
    reader: &mut Reader,
    registry: Option<&ActionRegistry>,
) -> Result<Transaction, DecodeError> {
    let header = TransactionHeader {
        expiration: reader.read_u32("expiration")?,
        region: reader.read_u16("region")?,
        ref_block_num: reader.read_u16("ref block num")?,
        ref_block_prefix: reader.read_u32("ref block prefix")?,
        max_net_usage_words: reader.read_varuint32("max net usage words")?,
        max_kcpu_usage: reader.read_varuint32("max kcpu usage")?,
        delay_sec: reader.read_varuint32("delay sec")?,
    };

    let context_free_actions = decode_actions(reader, "context free actions", registry)?;
    let actions = decode_actions(reader, "actions", registry)?;

    let blob_count = read_item_count(reader, "context free data")?;
    let mut context_free_data = Vec::with_capacity(blob_count);
    for _ in 0..blob_count {
        context_free_data.push(reader.read_bytes_prefixed("context free data")?);
    }

    Ok(Transaction {
        header,
        context_free_actions,
        actions,
        context_free_data,
    })
}

fn decode_actions(
    reader: &mut Reader,
    field: &'static str,
    registry: Option<&ActionRegistry>,
) -> Result<Vec<Action>, DecodeError> {
    let count = read_item_count(reader, field)?;
    let mut actions = Vec::with_capacity(count);
    for _ in 0..count {
        let action = match registry {
            Some(registry) => decode_action_with_registry(reader, registry)?,
            None => decode_action(reader)?,
        };
        actions.push(action);
    }
    Ok(actions)
}

fn read_item_count(reader: &mut Reader, field: &'static str) -> Result<usize, DecodeError> {
    let count = reader.read_varint(field)? as usize;
    if count > MAX_TRANSACTION_ITEMS {
        return Err(DecodeError::LengthExceedsLimit {
            field,
            len: count,
            max: MAX_TRANSACTION_ITEMS,
        });
    }
    Ok(count)
}

/// Unframes a P2P message.
pub fn decode_envelope(reader: &mut Reader) -> Result<P2PMessageEnvelope, DecodeError> {
    let length = reader.read_u32("p2p message length")? as usize;
    if length == 0 {
        return Err(DecodeError::InsufficientData {
            field: "p2p message type",
            required: 1,
            remaining: 0,
        });
    }
    if length > MAX_BYTES_LEN {
        return Err(DecodeError::LengthExceedsLimit {
            field: "p2p message length",
            len: length,
            max: MAX_BYTES_LEN,
        });
    }
    let msg_type = reader.read_byte("p2p message type")?;
    let payload = reader.read_bytes(length - 1, "p2p payload")?.to_vec();
    Ok(P2PMessageEnvelope { msg_type, payload })
}
