//! Action types: a single contract invocation with its authorizations and
//! payload.

use crate::model::name::{AccountName, ActionName, PermissionName};
use crate::model::value::Value;

/// An authorization entry: which actor signs under which permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PermissionLevel {
    pub actor: AccountName,
    pub permission: PermissionName,
}

/// An action payload.
///
/// Payloads arrive in one of three forms and the codec accepts all of them
/// transparently: hex text or raw bytes when the caller already serialized
/// the call arguments, or a structured value serialized by a nested encode
/// pass at action-encode time.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionData {
    /// Pre-serialized payload as hex text.
    Hex(String),
    /// Pre-serialized payload bytes.
    Bytes(Vec<u8>),
    /// Structured payload, encoded lazily.
    Value(Value),
}

impl Default for ActionData {
    fn default() -> ActionData {
        ActionData::Bytes(Vec::new())
    }
}

/// A single contract invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    /// The contract account the action targets.
    pub account: AccountName,
    /// The action identifier on that contract.
    pub name: ActionName,
    pub authorization: Vec<PermissionLevel>,
    pub data: ActionData,
}

impl Action {
    /// Creates an action with a single authorization entry.
    pub fn new(
        account: AccountName,
        name: ActionName,
        actor: AccountName,
        permission: PermissionName,
        data: ActionData,
    ) -> Action {
        Action {
            account,
            name,
            authorization: vec![PermissionLevel { actor, permission }],
            data,
        }
    }
}
