//! Conversion between digit strings in bases 2 through 36 and [`BigUint`].
//!
//! Digits are `0-9` followed by `a-z` (case-insensitive), so base 36 uses the
//! full alphanumeric alphabet. Values are magnitudes only; there is no sign.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::RadixError;

/// Smallest supported radix.
pub const MIN_RADIX: u32 = 2;
/// Largest supported radix, one digit per alphanumeric character.
pub const MAX_RADIX: u32 = 36;

fn check_radix(radix: u32) -> Result<(), RadixError> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(RadixError::UnsupportedRadix(radix))
    }
}

/// Decode `digits` written in `radix` into an exact non-negative integer.
///
/// Leading zeros are skipped and an empty string decodes to zero.
///
/// # Examples
///
/// ```
/// use math::radix::decode;
/// use num_bigint::BigUint;
/// assert_eq!(decode("111", 2).unwrap(), BigUint::from(7u32));
/// assert_eq!(decode("Zz", 36).unwrap(), BigUint::from(1295u32));
/// ```
pub fn decode(digits: &str, radix: u32) -> Result<BigUint, RadixError> {
    check_radix(radix)?;

    let mut value = BigUint::zero();
    for ch in digits.trim_start_matches('0').chars() {
        let digit = ch
            .to_digit(radix)
            .ok_or(RadixError::InvalidDigit { digit: ch, radix })?;
        value *= radix;
        value += digit;
    }

    Ok(value)
}

/// Encode `value` in `radix` using lowercase digits. Zero encodes as `"0"`.
pub fn encode(value: &BigUint, radix: u32) -> Result<String, RadixError> {
    check_radix(radix)?;
    Ok(value.to_str_radix(radix))
}
