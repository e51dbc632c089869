//! CPF (Brazilian national identity number) checksum validation.
//!
//! A CPF is 11 digits; the last two are check digits computed from weighted
//! sums of the preceding digits. Validation is a pure function over the
//! digit string - no side effects, no lookups.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CpfError {
    #[error("CPF must contain exactly 11 digits")]
    Length,

    #[error("CPF with all digits identical is not valid")]
    RepeatedDigits,

    #[error("CPF check digits do not match")]
    Checksum,
}

/// Strip formatting ("529.982.247-25" -> "52998224725")
pub fn normalize(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Weighted-sum check digit. The first digit of `digits` is multiplied by
/// `first_weight`, the next by `first_weight - 1`, down to weight 2.
/// A remainder of 10 or 11 counts as 0.
fn check_digit(digits: &[u8], first_weight: u32) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (first_weight - i as u32))
        .sum();

    let remainder = (sum * 10) % 11;
    if remainder >= 10 { 0 } else { remainder as u8 }
}

/// Validate a CPF in any common formatting. Accepts "000.000.000-00" and
/// bare digit strings alike; anything that does not normalize to 11 digits
/// fails with `CpfError::Length`.
pub fn validate(input: &str) -> Result<(), CpfError> {
    let digits: Vec<u8> = normalize(input).bytes().map(|b| b - b'0').collect();

    if digits.len() != 11 {
        return Err(CpfError::Length);
    }

    if digits.iter().all(|&d| d == digits[0]) {
        return Err(CpfError::RepeatedDigits);
    }

    if check_digit(&digits[..9], 10) != digits[9] {
        return Err(CpfError::Checksum);
    }

    if check_digit(&digits[..10], 11) != digits[10] {
        return Err(CpfError::Checksum);
    }

    Ok(())
}
