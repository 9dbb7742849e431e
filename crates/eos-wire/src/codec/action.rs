//! Action encoding/decoding.
//!
//! An action's wire form is two packed names, the authorization list, and a
//! length-prefixed opaque payload. Structured payloads are flattened by a
//! nested encode pass right here, so by the time the action hits the wire its
//! payload is always plain bytes.

use crate::codec::primitives::{Reader, Writer};
use crate::codec::value::{decode_value, encode_value};
use crate::error::{DecodeError, EncodeError};
use crate::limits::MAX_TRANSACTION_ITEMS;
use crate::model::action::{Action, ActionData, PermissionLevel};
use crate::model::name::Name;
use crate::registry::ActionRegistry;

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes an action, flattening a structured payload if it carries one.
pub fn encode_action(writer: &mut Writer, action: &Action) -> Result<(), EncodeError> {
    writer.write_u64(action.account.0);
    writer.write_u64(action.name.0);
    writer.write_varint(action.authorization.len() as u64);
    for auth in &action.authorization {
        writer.write_u64(auth.actor.0);
        writer.write_u64(auth.permission.0);
    }
    let payload = encode_action_data(&action.data)?;
    writer.write_bytes_prefixed(&payload);
    Ok(())
}

/// Serializes an action payload to its raw bytes.
pub fn encode_action_data(data: &ActionData) -> Result<Vec<u8>, EncodeError> {
    match data {
        ActionData::Hex(s) => {
            hex::decode(s).map_err(|e| EncodeError::InvalidHexPayload(e.to_string()))
        }
        ActionData::Bytes(bytes) => Ok(bytes.clone()),
        ActionData::Value(value) => {
            let mut writer = Writer::new();
            encode_value(&mut writer, value)?;
            Ok(writer.into_bytes())
        }
    }
}

// =============================================================================
// DECODING
// =============================================================================

/// Decodes an action, leaving the payload as opaque bytes.
pub fn decode_action(reader: &mut Reader) -> Result<Action, DecodeError> {
    let account = Name(reader.read_u64("action account")?);
    let name = Name(reader.read_u64("action name")?);

    let auth_count = reader.read_varint("authorization count")? as usize;
    if auth_count > MAX_TRANSACTION_ITEMS {
        return Err(DecodeError::LengthExceedsLimit {
            field: "authorization count",
            len: auth_count,
            max: MAX_TRANSACTION_ITEMS,
        });
    }
    let mut authorization = Vec::with_capacity(auth_count);
    for _ in 0..auth_count {
        authorization.push(PermissionLevel {
            actor: Name(reader.read_u64("authorization actor")?),
            permission: Name(reader.read_u64("authorization permission")?),
        });
    }

    let payload = reader.read_bytes_prefixed("action data")?;
    Ok(Action {
        account,
        name,
        authorization,
        data: ActionData::Bytes(payload),
    })
}

/// Decodes an action, resolving the payload into a structured value when the
/// registry knows its shape. Unregistered payloads stay opaque bytes.
pub fn decode_action_with_registry(
    reader: &mut Reader,
    registry: &ActionRegistry,
) -> Result<Action, DecodeError> {
    let mut action = decode_action(reader)?;
    if let Some(shape) = registry.lookup(action.account, action.name) {
        if let ActionData::Bytes(bytes) = &action.data {
            let mut payload_reader = Reader::new(bytes);
            let value = decode_value(&mut payload_reader, shape)?;
            action.data = ActionData::Value(value);
        }
    }
    Ok(action)
}
