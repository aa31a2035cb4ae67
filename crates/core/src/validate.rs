// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::error::ValidationError;

/// Longest accepted item text, in characters.
pub const MAX_TEXT_LENGTH: usize = 200;

/// Trim `text` and check it can be stored as item text.
pub fn validate_text(text: &str) -> Result<String, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    let len = trimmed.chars().count();
    if len > MAX_TEXT_LENGTH {
        return Err(ValidationError::TooLong {
            actual: len,
            max: MAX_TEXT_LENGTH,
        });
    }
    Ok(trimmed.to_string())
}

/// Like [`validate_text`], but also rejects text equal to `current`.
pub fn validate_rename(current: &str, text: &str) -> Result<String, ValidationError> {
    let trimmed = validate_text(text)?;
    if trimmed == current {
        return Err(ValidationError::Unchanged);
    }
    Ok(trimmed)
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
