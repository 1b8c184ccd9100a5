// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Denominations of the native value unit.
//!
//! All amounts are carried in wei, the smallest denomination. Ether amounts
//! only appear at the edges: configuration files, CLI arguments and
//! human-readable output.

use crate::error::{Error, Result};

/// An amount of the native value unit, in wei.
pub type Wei = u128;

/// One gwei, in wei.
pub const GWEI: Wei = 1_000_000_000;

/// One ether, in wei.
pub const ETHER: Wei = 1_000_000_000_000_000_000;

const ETHER_DECIMALS: usize = 18;

/// Parses a decimal ether amount such as `"0.01"` or `"10000"` into wei.
///
/// # Errors
///
/// Returns [`Error::InvalidAmount`] if the string is not a non-negative
/// decimal number, has more than 18 fractional digits, or overflows.
pub fn parse_ether(amount: &str) -> Result<Wei> {
    let invalid = || Error::InvalidAmount(amount.to_string());

    let (whole, fraction) = match amount.trim().split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (amount.trim(), ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if fraction.len() > ETHER_DECIMALS {
        return Err(invalid());
    }
    if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let whole: Wei = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid())?
    };
    let fraction: Wei = if fraction.is_empty() {
        0
    } else {
        let padded = format!("{fraction:0<ETHER_DECIMALS$}");
        padded.parse().map_err(|_| invalid())?
    };

    whole
        .checked_mul(ETHER)
        .and_then(|wei| wei.checked_add(fraction))
        .ok_or_else(invalid)
}

/// Parses an amount with an optional unit suffix.
///
/// Plain numbers and the `eth`/`ether` suffixes are read as ether, `gwei` and
/// `wei` as the respective denomination, e.g. `"0.01"`, `"100wei"`,
/// `"2 gwei"`.
///
/// # Errors
///
/// Returns [`Error::InvalidAmount`] if the amount cannot be parsed.
pub fn parse_amount(amount: &str) -> Result<Wei> {
    let trimmed = amount.trim();
    let lower = trimmed.to_ascii_lowercase();

    if let Some(value) = lower.strip_suffix("gwei") {
        return parse_integer(value, amount)?
            .checked_mul(GWEI)
            .ok_or_else(|| Error::InvalidAmount(amount.to_string()));
    }
    if let Some(value) = lower.strip_suffix("wei") {
        return parse_integer(value, amount);
    }

    let ether = lower
        .strip_suffix("ether")
        .or_else(|| lower.strip_suffix("eth"))
        .unwrap_or(&lower);
    parse_ether(ether.trim()).map_err(|_| Error::InvalidAmount(amount.to_string()))
}

fn parse_integer(value: &str, original: &str) -> Result<Wei> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidAmount(original.to_string()))
}

/// Formats a wei amount as a decimal ether string without trailing zeros.
#[must_use]
pub fn format_ether(wei: Wei) -> String {
    let whole = wei / ETHER;
    let fraction = wei % ETHER;

    if fraction == 0 {
        return whole.to_string();
    }

    let fraction = format!("{fraction:0>ETHER_DECIMALS$}");
    format!("{whole}.{}", fraction.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fractional_ether() {
        assert_eq!(parse_ether("0.01").expect("valid"), 10_000_000_000_000_000);
        assert_eq!(parse_ether("0.001").expect("valid"), 1_000_000_000_000_000);
        assert_eq!(parse_ether(".5").expect("valid"), ETHER / 2);
        assert_eq!(parse_ether("10000").expect("valid"), 10_000 * ETHER);
    }

    #[test]
    fn rejects_malformed_ether() {
        assert!(parse_ether("").is_err());
        assert!(parse_ether(".").is_err());
        assert!(parse_ether("-1").is_err());
        assert!(parse_ether("1.2.3").is_err());
        assert!(parse_ether("0.0000000000000000001").is_err());
    }

    #[test]
    fn parses_suffixed_amounts() {
        assert_eq!(parse_amount("100wei").expect("valid"), 100);
        assert_eq!(parse_amount("2 gwei").expect("valid"), 2 * GWEI);
        assert_eq!(parse_amount("0.01eth").expect("valid"), ETHER / 100);
        assert_eq!(parse_amount("1 Ether").expect("valid"), ETHER);
        assert_eq!(parse_amount("3").expect("valid"), 3 * ETHER);

        let err = parse_amount("lots").expect_err("amount should be invalid");
        assert!(err.to_string().contains("lots"));
    }

    #[test]
    fn formats_trimmed_ether() {
        assert_eq!(format_ether(0), "0");
        assert_eq!(format_ether(ETHER / 100), "0.01");
        assert_eq!(format_ether(100), "0.0000000000000001");
        assert_eq!(format_ether(10_000 * ETHER), "10000");
    }
}
