//! Transaction and P2P envelope types.

use crate::model::action::Action;

/// Scalar header fields of a transaction, in wire order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransactionHeader {
    /// Expiration as Unix seconds; 4 bytes on the wire.
    pub expiration: u32,
    pub region: u16,
    /// Anti-replay: low 16 bits of a recent block number, big-endian slice of
    /// its id. See [`Transaction::set_ref_block`].
    pub ref_block_num: u16,
    /// Anti-replay: 32 bits lifted from the middle of the same block id.
    pub ref_block_prefix: u32,
    /// Varint on the wire.
    pub max_net_usage_words: u32,
    /// Varint on the wire.
    pub max_kcpu_usage: u32,
    /// Varint on the wire.
    pub delay_sec: u32,
}

/// An ordered bundle of actions plus header metadata: the unit that is
/// signed and broadcast.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transaction {
    pub header: TransactionHeader,
    pub context_free_actions: Vec<Action>,
    pub actions: Vec<Action>,
    pub context_free_data: Vec<Vec<u8>>,
}

impl Transaction {
    /// Derives the anti-replay reference fields from a 32-byte block id.
    ///
    /// `ref_block_num` is the big-endian u16 at bytes 2..4 of the id;
    /// `ref_block_prefix` is the little-endian u32 at bytes 8..12.
    pub fn set_ref_block(&mut self, block_id: &[u8]) {
        self.header.ref_block_num = u16::from_be_bytes([block_id[2], block_id[3]]);
        self.header.ref_block_prefix =
            u32::from_le_bytes([block_id[8], block_id[9], block_id[10], block_id[11]]);
    }
}

/// A framed point-to-point message: one type tag byte plus an opaque payload
/// that may itself be a nested encode pass over a structured message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct P2PMessageEnvelope {
    pub msg_type: u8,
    pub payload: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_ref_block() {
        let block_id =
            hex::decode("0012cf6247be7e2050090bd83b473369b705ba1d280cd55d3aef79998c784b9b")
                .unwrap();
        let mut tx = Transaction::default();
        tx.set_ref_block(&block_id);
        assert_eq!(tx.header.ref_block_num, 0xcf62); // 53090
        assert_eq!(tx.header.ref_block_prefix, 0xd80b0950);
    }
}
