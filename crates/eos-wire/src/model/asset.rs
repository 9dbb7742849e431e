//! Asset and symbol types.
//!
//! An asset is a signed fixed-point quantity: the on-wire amount is the
//! decimal value scaled by `10^precision`. `600.0000 EOS` is amount 6000000
//! with precision 4.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Maximum decimal precision a symbol can declare.
pub const MAX_PRECISION: u8 = 18;

/// Maximum ticker length in characters (and on-wire bytes).
pub const MAX_TICKER_LEN: usize = 7;

/// A currency symbol: decimal precision plus a short uppercase ticker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub precision: u8,
    pub code: String,
}

impl Symbol {
    /// Creates a symbol, validating the ticker (1-7 uppercase ASCII) and
    /// precision (0-18).
    pub fn new(precision: u8, code: &str) -> Result<Symbol, ParseError> {
        if code.is_empty()
            || code.len() > MAX_TICKER_LEN
            || !code.bytes().all(|b| b.is_ascii_uppercase())
        {
            return Err(ParseError::InvalidTicker(code.to_string()));
        }
        if precision > MAX_PRECISION {
            return Err(ParseError::PrecisionTooLarge {
                precision: precision as usize,
                max: MAX_PRECISION as usize,
            });
        }
        Ok(Symbol {
            precision,
            code: code.to_string(),
        })
    }

    /// The EOS symbol, precision 4.
    pub fn eos() -> Symbol {
        Symbol {
            precision: 4,
            code: "EOS".to_string(),
        }
    }
}

/// A signed fixed-point quantity tagged with its symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Asset {
    /// Decimal value scaled by `10^precision`.
    pub amount: i64,
    pub symbol: Symbol,
}

impl Asset {
    /// Creates an EOS asset from a raw scaled amount (`10000` is `1.0000 EOS`).
    pub fn eos(amount: i64) -> Asset {
        Asset {
            amount,
            symbol: Symbol::eos(),
        }
    }

    /// Parses an EOS quantity, scaling the fraction to precision 4.
    ///
    /// `"1000.1"` and `"1000.1 EOS"` both parse to amount 10001000. More than
    /// four fractional digits is an error rather than a silent rounding.
    pub fn eos_from_str(input: &str) -> Result<Asset, ParseError> {
        let magnitude = input.strip_suffix(" EOS").unwrap_or(input);
        let (amount, precision) = parse_magnitude(magnitude)?;
        if precision > 4 {
            return Err(ParseError::PrecisionTooLarge {
                precision: precision as usize,
                max: 4,
            });
        }
        let scale = 10i64.pow(4 - precision as u32);
        let amount = amount
            .checked_mul(scale)
            .ok_or_else(|| ParseError::AmountOverflow(input.to_string()))?;
        Ok(Asset::eos(amount))
    }
}

impl FromStr for Asset {
    type Err = ParseError;

    /// Parses `"<magnitude>[ <ticker>]"`.
    ///
    /// With a ticker, the precision is the count of fractional digits:
    /// `"1000.1 CURRENT"` is amount 10001 at precision 1. Without one, the
    /// quantity is taken as EOS at precision 4.
    fn from_str(input: &str) -> Result<Asset, ParseError> {
        match input.split_once(' ') {
            None => Asset::eos_from_str(input),
            Some((magnitude, ticker)) => {
                let (amount, precision) = parse_magnitude(magnitude)?;
                Ok(Asset {
                    amount,
                    symbol: Symbol::new(precision, ticker)?,
                })
            }
        }
    }
}

/// Parses a decimal magnitude into (unscaled amount, fractional digit count).
///
/// The amount is the digit string with the decimal point removed: `"1000.25"`
/// yields (100025, 2).
fn parse_magnitude(s: &str) -> Result<(i64, u8), ParseError> {
    if s.is_empty() {
        return Err(ParseError::MissingAmount(s.to_string()));
    }

    let (digits, precision) = match s.split_once('.') {
        None => (s.to_string(), 0usize),
        Some((int, frac)) => {
            if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseError::InvalidAmount(s.to_string()));
            }
            (format!("{}{}", int, frac), frac.len())
        }
    };
    if precision > MAX_PRECISION as usize {
        return Err(ParseError::PrecisionTooLarge {
            precision,
            max: MAX_PRECISION as usize,
        });
    }

    let amount: i64 = digits
        .parse()
        .map_err(|_| ParseError::InvalidAmount(s.to_string()))?;
    Ok((amount, precision as u8))
}

impl fmt::Display for Asset {
    /// Exact inverse of parsing: the decimal point sits `precision` digits
    /// from the right and is omitted entirely at precision 0.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = self.symbol.precision as usize;
        let negative = self.amount < 0;
        let mut digits = self.amount.unsigned_abs().to_string();

        if precision == 0 {
            if negative {
                digits.insert(0, '-');
            }
            return write!(f, "{} {}", digits, self.symbol.code);
        }

        // Pad so there is at least one digit left of the point.
        while digits.len() < precision + 1 {
            digits.insert(0, '0');
        }
        let point = digits.len() - precision;
        write!(
            f,
            "{}{}.{} {}",
            if negative { "-" } else { "" },
            &digits[..point],
            &digits[point..],
            self.symbol.code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_ticker() {
        let cases = [
            ("1000.0000 EOS", 10000000, "EOS", 4),
            ("1000 CUR", 1000, "CUR", 0),
            ("1000.1 CURRENT", 10001, "CURRENT", 1),
        ];
        for (input, amount, code, precision) in cases {
            let asset: Asset = input.parse().unwrap();
            assert_eq!(asset.amount, amount, "amount for {:?}", input);
            assert_eq!(asset.symbol.code, code);
            assert_eq!(asset.symbol.precision, precision);
        }
    }

    #[test]
    fn test_parse_eos() {
        let cases = [
            ("1000.0000 EOS", 10000000),
            ("1000", 10000000),
            ("1000 EOS", 10000000),
            ("1000.1 EOS", 10001000),
            ("1000.1", 10001000),
            ("1000.01", 10000100),
            ("1000.001", 10000010),
            ("1.0001", 10001),
            ("0.1", 1000),
        ];
        for (input, amount) in cases {
            let asset = Asset::eos_from_str(input).unwrap();
            assert_eq!(asset.amount, amount, "amount for {:?}", input);
            assert_eq!(asset.symbol, Symbol::eos());
        }
    }

    #[test]
    fn test_parse_eos_too_precise() {
        assert!(Asset::eos_from_str("10.00001").is_err());
    }

    #[test]
    fn test_parse_bad_ticker() {
        assert!("10 eos".parse::<Asset>().is_err());
        assert!("10 TOOLONGXX".parse::<Asset>().is_err());
    }

    #[test]
    fn test_parse_bad_amount() {
        assert!("10.x EOS".parse::<Asset>().is_err());
        assert!("ten EOS".parse::<Asset>().is_err());
        assert!("10. EOS".parse::<Asset>().is_err());
    }

    #[test]
    fn test_display() {
        let cases = [
            (Asset { amount: 6000000, symbol: Symbol::new(4, "EOS").unwrap() }, "600.0000 EOS"),
            (Asset { amount: 10, symbol: Symbol::new(5, "SYS").unwrap() }, "0.00010 SYS"),
            (Asset { amount: 6000, symbol: Symbol::new(0, "MAMA").unwrap() }, "6000 MAMA"),
            (Asset { amount: -15000, symbol: Symbol::new(4, "EOS").unwrap() }, "-1.5000 EOS"),
        ];
        for (asset, expected) in cases {
            assert_eq!(asset.to_string(), expected);
        }
    }

    #[test]
    fn test_display_parse_roundtrip() {
        for input in ["600.0000 EOS", "0.00010 SYS", "6000 MAMA", "-1.5000 EOS"] {
            let asset: Asset = input.parse().unwrap();
            assert_eq!(asset.to_string(), input);
        }
    }
}
