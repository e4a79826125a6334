//! Short code generation and validation utilities.
//!
//! Codes are 6-8 character alphanumeric strings. Generated codes are always
//! 6 characters; custom codes may use the full range.

use crate::error::AppError;
use rand::Rng;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Length of auto-generated codes.
pub const CODE_LENGTH: usize = 6;

/// The 62-character code alphabet.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Compiled pattern for code syntax, shared by custom-code validation and the
/// redirect route guard.
static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,8}$").unwrap());

/// Generates a random 6-character alphanumeric code.
///
/// Characters are drawn uniformly from the 62-character alphabet using the
/// thread-local ChaCha12 generator, giving a ~5.6e10 keyspace. Generation is
/// pure: the store is never consulted; collisions are resolved by the
/// allocator's atomic insert loop.
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CODE_ALPHABET.len());
            CODE_ALPHABET[idx] as char
        })
        .collect()
}

/// Returns true if `code` is syntactically a short code.
pub fn is_valid_code(code: &str) -> bool {
    CODE_PATTERN.is_match(code)
}

/// Validates a caller-provided custom code.
///
/// # Errors
///
/// Returns [`AppError::Validation`] unless the code is 6-8 alphanumeric
/// characters.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if !is_valid_code(code) {
        return Err(AppError::bad_request(
            "Code must be 6-8 alphanumeric characters",
            json!({ "code": code }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code();
        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_is_alphanumeric() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generated_codes_pass_validation() {
        for _ in 0..100 {
            assert!(is_valid_code(&generate_code()));
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code());
        }

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_validate_minimum_length() {
        assert!(validate_custom_code("abc123").is_ok());
    }

    #[test]
    fn test_validate_maximum_length() {
        assert!(validate_custom_code("abcd1234").is_ok());
    }

    #[test]
    fn test_validate_mixed_case() {
        assert!(validate_custom_code("AbC123xY").is_ok());
    }

    #[test]
    fn test_validate_too_short() {
        let result = validate_custom_code("abc12");
        assert!(result.is_err());

        let err = result.unwrap_err();
        assert!(err.to_string().contains("6-8 alphanumeric"));
    }

    #[test]
    fn test_validate_too_long() {
        assert!(validate_custom_code("abcd12345").is_err());
    }

    #[test]
    fn test_validate_rejects_hyphen() {
        assert!(validate_custom_code("abc-123").is_err());
    }

    #[test]
    fn test_validate_rejects_underscore() {
        assert!(validate_custom_code("abc_123").is_err());
    }

    #[test]
    fn test_validate_rejects_spaces() {
        assert!(validate_custom_code("abc 123").is_err());
    }

    #[test]
    fn test_validate_rejects_unicode() {
        assert!(validate_custom_code("abcd12é").is_err());
    }

    #[test]
    fn test_validate_empty_string() {
        assert!(validate_custom_code("").is_err());
    }
}
