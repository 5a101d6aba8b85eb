//! Request validation run before any endpoint is contacted.

use crate::error::InputError;

/// Upper bound on items per fetch.
pub const MAX_FETCH_COUNT: usize = 100;

const MAX_USERNAME_LEN: usize = 15;

/// Validate a requested item count, returning it as `usize`.
///
/// # Errors
///
/// Returns [`InputError::InvalidCount`] for zero, negative, or oversized counts.
pub fn validate_count(count: i64) -> Result<usize, InputError> {
    usize::try_from(count)
        .ok()
        .filter(|&n| (1..=MAX_FETCH_COUNT).contains(&n))
        .ok_or(InputError::InvalidCount {
            count,
            max: MAX_FETCH_COUNT,
        })
}

/// Validate a username, stripping one leading `@`.
///
/// # Errors
///
/// Returns [`InputError::InvalidUsername`] unless the handle is 1–15 ASCII
/// letters, digits, or underscores.
pub fn validate_username(username: &str) -> Result<&str, InputError> {
    let trimmed = username.trim();
    let handle = trimmed.strip_prefix('@').unwrap_or(trimmed);

    let reject = |reason: &'static str| InputError::InvalidUsername {
        username: username.to_string(),
        reason,
    };

    if handle.is_empty() {
        return Err(reject("username is empty"));
    }
    if handle.len() > MAX_USERNAME_LEN {
        return Err(reject("username is longer than 15 characters"));
    }
    if !handle
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(reject("only letters, digits and underscores are allowed"));
    }

    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_accepts_valid_range() {
        assert_eq!(validate_count(1), Ok(1));
        assert_eq!(validate_count(5), Ok(5));
        assert_eq!(validate_count(100), Ok(100));
    }

    #[test]
    fn count_rejects_zero_negative_and_oversized() {
        for count in [0, -1, i64::MIN, 101] {
            assert_eq!(
                validate_count(count),
                Err(InputError::InvalidCount { count, max: 100 })
            );
        }
    }

    #[test]
    fn username_strips_at_sign() {
        assert_eq!(validate_username("@alice"), Ok("alice"));
        assert_eq!(validate_username("  bob_99 "), Ok("bob_99"));
    }

    #[test]
    fn username_rejects_malformed_handles() {
        for bad in ["", "@", "has space", "slash/path", "sixteen_chars_xx", "ünïcode"] {
            assert!(
                matches!(validate_username(bad), Err(InputError::InvalidUsername { .. })),
                "expected rejection for {bad:?}"
            );
        }
    }
}
