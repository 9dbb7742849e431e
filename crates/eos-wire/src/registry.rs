//! Registry mapping (contract, action) pairs to payload shapes.
//!
//! Decoding an action payload needs to know its structure; the registry is
//! where callers declare it. It is a plain value with no global state: build
//! one, register the contracts you care about, and pass it to
//! [`decode_action_with_registry`](crate::codec::action::decode_action_with_registry)
//! or [`decode_transaction_with_registry`](crate::codec::transaction::decode_transaction_with_registry).

use rustc_hash::FxHashMap;

use crate::model::name::{AccountName, ActionName};
use crate::model::value::Shape;

/// Maps (contract account, action name) to the payload shape.
#[derive(Debug, Clone, Default)]
pub struct ActionRegistry {
    shapes: FxHashMap<(AccountName, ActionName), Shape>,
}

impl ActionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the payload shape for an action. Replaces any previous
    /// registration for the same pair.
    pub fn register(&mut self, account: AccountName, action: ActionName, shape: Shape) {
        self.shapes.insert((account, action), shape);
    }

    /// Looks up the payload shape for an action.
    pub fn lookup(&self, account: AccountName, action: ActionName) -> Option<&Shape> {
        self.shapes.get(&(account, action))
    }

    /// Number of registered actions.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = ActionRegistry::new();
        assert!(registry.is_empty());

        let account: AccountName = "eosio.token".parse().unwrap();
        let action: ActionName = "transfer".parse().unwrap();
        registry.register(account, action, Shape::Bytes);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup(account, action), Some(&Shape::Bytes));

        // Re-registering replaces.
        registry.register(account, action, Shape::String);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup(account, action), Some(&Shape::String));

        let other: ActionName = "issue".parse().unwrap();
        assert_eq!(registry.lookup(account, other), None);
    }
}
