//! Timestamp types.

/// Seconds between the Unix epoch and 2000-01-01T00:00:00Z, the block
/// timestamp epoch.
pub const BLOCK_TIMESTAMP_EPOCH: i64 = 946_684_800;

/// A nanosecond-resolution instant. Wire form: 8-byte LE unsigned nanosecond
/// count since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Tstamp {
    pub nanos: u64,
}

impl Tstamp {
    pub fn from_nanos(nanos: u64) -> Tstamp {
        Tstamp { nanos }
    }

    pub fn from_unix_secs(secs: u64) -> Tstamp {
        Tstamp {
            nanos: secs * 1_000_000_000,
        }
    }
}

/// A second-resolution instant relative to the block timestamp epoch. Wire
/// form: 4-byte LE unsigned seconds since 2000-01-01T00:00:00Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct BlockTimestamp {
    pub secs: u32,
}

impl BlockTimestamp {
    pub fn from_secs(secs: u32) -> BlockTimestamp {
        BlockTimestamp { secs }
    }

    /// Converts a Unix timestamp, or None outside the representable range.
    pub fn from_unix(unix_secs: i64) -> Option<BlockTimestamp> {
        let rel = unix_secs.checked_sub(BLOCK_TIMESTAMP_EPOCH)?;
        u32::try_from(rel).ok().map(|secs| BlockTimestamp { secs })
    }

    pub fn to_unix(self) -> i64 {
        self.secs as i64 + BLOCK_TIMESTAMP_EPOCH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_timestamp_epoch_conversion() {
        let at_epoch = BlockTimestamp::from_unix(BLOCK_TIMESTAMP_EPOCH).unwrap();
        assert_eq!(at_epoch.secs, 0);
        assert_eq!(at_epoch.to_unix(), BLOCK_TIMESTAMP_EPOCH);

        // 2018-03-22T01:01:01Z
        let ts = BlockTimestamp::from_unix(1_521_680_461).unwrap();
        assert_eq!(ts.secs, 574_995_661);
        assert_eq!(ts.to_unix(), 1_521_680_461);

        // Before the 2000 epoch is not representable.
        assert!(BlockTimestamp::from_unix(0).is_none());
    }

    #[test]
    fn test_tstamp_from_secs() {
        assert_eq!(Tstamp::from_unix_secs(1).nanos, 1_000_000_000);
    }
}
