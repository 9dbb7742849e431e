//! Packed 64-bit identifiers for accounts, actions, permissions, tables and
//! scopes.
//!
//! A name is at most 13 characters over the alphabet `.12345a-z`. Each of the
//! first 12 characters packs 5 bits into bits 63..4, most-significant
//! character first; a 13th character contributes only its low 4 bits into
//! bits 3..0. Characters beyond the 13th are silently ignored, matching the
//! on-chain `string_to_name`.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Symbol alphabet in code order: `.` is 0, `1`-`5` are 1..5, `a`-`z` are 6..31.
const NAME_CHARS: &[u8; 32] = b".12345abcdefghijklmnopqrstuvwxyz";

/// Maximum characters a name can carry; anything longer is truncated.
pub const MAX_NAME_LEN: usize = 13;

/// A 64-bit packed identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Name(pub u64);

/// An account identifier.
pub type AccountName = Name;
/// An action identifier.
pub type ActionName = Name;
/// A permission identifier.
pub type PermissionName = Name;
/// A table identifier.
pub type TableName = Name;
/// A scope identifier.
pub type ScopeName = Name;

impl Name {
    /// Packs a name string into its 64-bit form.
    ///
    /// Characters past index 12 are ignored without error; any character
    /// within the packed range that falls outside the alphabet is rejected.
    pub fn new(s: &str) -> Result<Name, ParseError> {
        Ok(Name(string_to_u64(s)?))
    }

    /// Returns the packed integer.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl FromStr for Name {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Name, ParseError> {
        Name::new(s)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&u64_to_string(self.0))
    }
}

/// Returns the 5-bit symbol code for a name character, or None if the
/// character is outside the alphabet.
fn symbol_code(c: u8) -> Option<u64> {
    match c {
        b'.' => Some(0),
        b'1'..=b'5' => Some((c - b'1') as u64 + 1),
        b'a'..=b'z' => Some((c - b'a') as u64 + 6),
        _ => None,
    }
}

/// Packs a name string into a u64.
pub fn string_to_u64(s: &str) -> Result<u64, ParseError> {
    let bytes = s.as_bytes();
    let mut value: u64 = 0;

    for i in 0..MAX_NAME_LEN {
        let code = if i < bytes.len() {
            symbol_code(bytes[i]).ok_or(ParseError::InvalidNameChar {
                ch: bytes[i] as char,
                index: i,
            })?
        } else {
            0
        };

        if i < 12 {
            value |= (code & 0x1F) << (64 - 5 * (i + 1));
        } else {
            // 13th character: only the low 4 bits fit.
            value |= code & 0x0F;
        }
    }

    Ok(value)
}

/// Unpacks a u64 into its name string, stripping trailing `.` symbols.
pub fn u64_to_string(value: u64) -> String {
    let mut out = [b'.'; MAX_NAME_LEN];
    let mut tmp = value;

    for i in 0..MAX_NAME_LEN {
        let mask = if i == 0 { 0x0F } else { 0x1F };
        out[MAX_NAME_LEN - 1 - i] = NAME_CHARS[(tmp & mask) as usize];
        tmp >>= if i == 0 { 4 } else { 5 };
    }

    let trimmed = out.iter().rposition(|&c| c != b'.').map_or(0, |p| p + 1);
    // Alphabet bytes are always valid ASCII.
    String::from_utf8_lossy(&out[..trimmed]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Fixtures taken from the on-chain name packing.
    const VECTORS: &[(&str, u64)] = &[
        ("eosio", 0x5530ea0000000000),
        ("eosio.system", 0x5530ea031ec65520),
        ("eosio.token", 0x5530ea033482a600),
        ("tbcox2.3", 0xc9d14e8803000000),
        ("tbcox2.", 0xc9d14e8800000000),
        ("quantity", 0xb68d3cbb3e000000),
        ("genesis.1", 0x62a6ac3b00080000),
        ("genesis.z", 0x62a6ac3b00f80000),
        ("genesis.zzzz", 0x62a6ac3b00fffff0),
        ("transfer", 0xcdcd3c2d57000000),
        ("active", 0x3232eda800000000),
        ("owner", 0xa726ab8000000000),
        ("bob", 0x3d0e000000000000),
    ];

    #[test]
    fn test_string_to_u64_vectors() {
        for (s, v) in VECTORS {
            assert_eq!(string_to_u64(s).unwrap(), *v, "failed for {}", s);
        }
    }

    #[test]
    fn test_u64_to_string_vectors() {
        for (s, v) in VECTORS {
            // Trailing dots encode as zero symbols and are stripped on the
            // way back.
            assert_eq!(u64_to_string(*v), s.trim_end_matches('.'), "failed for {:#x}", v);
        }
    }

    #[test]
    fn test_roundtrip() {
        for s in ["", "a", "z", "12345", "a.b.c", "zzzzzzzzzzzz", "abcdefghijkl"] {
            let packed = string_to_u64(s).unwrap();
            assert_eq!(u64_to_string(packed), s, "failed for {:?}", s);
        }
    }

    #[test]
    fn test_truncation_beyond_13_chars() {
        // Characters past index 12 are ignored, not an error.
        let long = string_to_u64("aaaaaaaaaaaaaaaaaaa").unwrap();
        let short = string_to_u64("aaaaaaaaaaaaa").unwrap();
        assert_eq!(long, short);

        // Even invalid characters past the cutoff are ignored.
        let with_junk = string_to_u64("aaaaaaaaaaaaa!!!").unwrap();
        assert_eq!(with_junk, short);
    }

    #[test]
    fn test_invalid_char() {
        let err = string_to_u64("Alice").unwrap_err();
        assert_eq!(err, ParseError::InvalidNameChar { ch: 'A', index: 0 });

        let err = string_to_u64("ab6c").unwrap_err();
        assert_eq!(err, ParseError::InvalidNameChar { ch: '6', index: 2 });
    }

    #[test]
    fn test_13th_char_low_bits_only() {
        // The 13th symbol only keeps its low 4 bits: 'z' (31) collides with
        // 'j' (15) in that slot.
        let z = string_to_u64("aaaaaaaaaaaaz").unwrap();
        let j = string_to_u64("aaaaaaaaaaaaj").unwrap();
        assert_eq!(z, j);
    }

    #[test]
    fn test_display_and_fromstr() {
        let name: Name = "eosio".parse().unwrap();
        assert_eq!(name.0, 0x5530ea0000000000);
        assert_eq!(name.to_string(), "eosio");
    }

    proptest! {
        #[test]
        fn prop_name_roundtrip(s in "([a-z1-5.]{0,11}[a-z1-5])?") {
            // Names of up to 12 characters without a trailing dot round-trip
            // exactly; a 13th character would be clipped to 4 bits.
            let packed = string_to_u64(&s).unwrap();
            prop_assert_eq!(u64_to_string(packed), s);
        }
    }
}
