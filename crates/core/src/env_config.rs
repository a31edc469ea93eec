//! Environment variable parsing with warn-level logging for invalid values.

use std::fmt::Display;
use std::str::FromStr;

/// Parse an environment variable with a default fallback.
///
/// Unset variables fall back silently. Set-but-unparseable values fall back
/// with a warning so a typo in deployment config is visible in the logs.
pub fn env_parse_with_default<T: FromStr + Display>(var: &str, default: T) -> T {
    let Ok(raw) = std::env::var(var) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            tracing::warn!(var, value = %raw, default = %default, "invalid env var value, using default");
            default
        },
    }
}

/// Like [`env_parse_with_default`] but also rejects zero.
pub fn env_positive_usize(var: &str, default: usize) -> usize {
    match env_parse_with_default(var, default) {
        0 => {
            tracing::warn!(var, default, "env var must be positive, using default");
            default
        },
        n => n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test owns a distinct variable name so parallel runs don't collide.
    fn set(var: &str, value: &str) {
        // SAFETY: variable names are unique per test; no other thread reads them.
        unsafe { std::env::set_var(var, value) };
    }

    fn unset(var: &str) {
        // SAFETY: see `set`.
        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn parses_valid_value() {
        let var = "CONTACTBOOK_TEST_ENV_VALID_41871";
        set(var, " 25 ");
        assert_eq!(env_parse_with_default(var, 10usize), 25);
        unset(var);
    }

    #[test]
    fn garbage_falls_back() {
        let var = "CONTACTBOOK_TEST_ENV_GARBAGE_41872";
        set(var, "ten");
        assert_eq!(env_parse_with_default(var, 10usize), 10);
        unset(var);
    }

    #[test]
    fn missing_falls_back() {
        let var = "CONTACTBOOK_TEST_ENV_MISSING_41873";
        unset(var);
        assert_eq!(env_parse_with_default(var, 7u32), 7);
    }

    #[test]
    fn zero_is_not_positive() {
        let var = "CONTACTBOOK_TEST_ENV_ZERO_41874";
        set(var, "0");
        assert_eq!(env_positive_usize(var, 10), 10);
        set(var, "3");
        assert_eq!(env_positive_usize(var, 10), 3);
        unset(var);
    }
}
