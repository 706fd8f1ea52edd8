//! Configuration constants and settings

/// Marker placed in front of a shortened path
pub const ELLIPSIS: char = '…';

// Width used for path columns in status listings
pub const DEFAULT_MAX_LEN: usize = 30;

pub const MAX_LEN_ENV_VAR: &str = "ABBREV_MAX_LEN";

// UI Constants
pub const NEGATIVE_MAX_LEN_WARNING: &str = "⚠️  Negative --max-len treated as 0";

/// Determines the maximum path length from CLI args and the environment
///
/// Priority order:
/// 1. --max-len N flag → N
/// 2. ABBREV_MAX_LEN env var → N
/// 3. Default → 30
///
/// The returned flag is true when the env var was set but could not be parsed.
pub fn resolve_max_len(flag: Option<i64>) -> (i64, bool) {
    if let Some(n) = flag {
        return (n, false);
    }

    match std::env::var(MAX_LEN_ENV_VAR) {
        Ok(value) => match value.trim().parse::<i64>() {
            Ok(n) => (n, false),
            Err(_) => (DEFAULT_MAX_LEN as i64, true),
        },
        Err(_) => (DEFAULT_MAX_LEN as i64, false),
    }
}

/// Clamps a signed length to zero, reporting whether clamping happened
pub fn clamp_max_len(value: i64) -> (usize, bool) {
    if value < 0 {
        return (0, true);
    }
    (usize::try_from(value).unwrap_or(usize::MAX), false)
}
