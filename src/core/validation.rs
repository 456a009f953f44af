//! Input validation for lockbox operations.

use crate::error::{Result, ValidationError};

/// Validate a secret key name before it is stored.
///
/// Any non-empty string is allowed except ones that cannot be carried as an
/// environment variable name or an export line:
/// - NUL bytes
/// - `=` (separates name from value in the environment block)
/// - newlines
/// - `.` and `..`, which URL paths collapse as dot segments, so the remote
///   protocol could never address them
///
/// # Errors
///
/// Returns `ValidationError` if the key is rejected.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(ValidationError::EmptyKey.into());
    }

    if key == "." || key == ".." {
        return Err(ValidationError::InvalidKey {
            key: key.to_string(),
            reason: "dot segments cannot be addressed remotely".to_string(),
        }
        .into());
    }

    for (i, ch) in key.chars().enumerate() {
        let reason = match ch {
            '\0' => "contains a NUL byte",
            '=' => "contains '='",
            '\n' | '\r' => "contains a line break",
            _ => continue,
        };
        return Err(ValidationError::InvalidKey {
            key: key.escape_default().to_string(),
            reason: format!("{} at position {}", reason, i + 1),
        }
        .into());
    }

    Ok(())
}

/// Whether `key` is a portable shell variable name: `[A-Za-z_][A-Za-z0-9_]*`.
///
/// Keys failing this are still exported, but `eval` will reject the line.
pub fn is_shell_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
