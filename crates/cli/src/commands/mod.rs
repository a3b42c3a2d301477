// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod logs;
pub mod show;

use std::time::Duration;

/// Parse a duration argument like "30s", "15m", "2h", or "1d".
pub(crate) fn parse_duration(raw: &str) -> Result<Duration, String> {
    let raw = raw.trim();
    let (value, unit) = raw.split_at(raw.len().saturating_sub(1));
    let value: u64 = value.parse().map_err(|_| format!("invalid duration: {raw}"))?;
    let secs = match unit {
        "s" => value,
        "m" => value * 60,
        "h" => value * 3600,
        "d" => value * 86400,
        _ => return Err(format!("invalid duration unit in {raw} (use s/m/h/d)")),
    };
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        seconds = { "30s", 30 },
        minutes = { "15m", 900 },
        hours = { "2h", 7200 },
        days = { "1d", 86400 },
    )]
    fn parses(raw: &str, secs: u64) {
        assert_eq!(parse_duration(raw).unwrap(), Duration::from_secs(secs));
    }

    #[parameterized(
        empty = { "" },
        no_unit = { "15" },
        bad_unit = { "15x" },
        not_a_number = { "xxm" },
    )]
    fn rejects(raw: &str) {
        assert!(parse_duration(raw).is_err());
    }
}
