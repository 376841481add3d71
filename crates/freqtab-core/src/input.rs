//! Input validation at the text boundary.
//!
//! The tabulators take `&str` and accept anything, including the empty
//! string. The only inputs that are rejected are the ones that never
//! become a `&str` in the first place: bytes that are not UTF-8, or a
//! request that carries no text at all.

use crate::error::{FreqTabError, Result};

/// Interpret raw bytes as text.
///
/// # Examples
///
/// ```
/// use freqtab_core::input::text_from_bytes;
///
/// assert_eq!(text_from_bytes(b"hello").unwrap(), "hello");
/// assert!(text_from_bytes(&[0xff, 0xfe]).is_err());
/// ```
pub fn text_from_bytes(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| {
        FreqTabError::InvalidInput(format!(
            "Text is not valid UTF-8 (invalid byte at offset {})",
            e.valid_up_to()
        ))
    })
}

/// Require that a text value was supplied.
///
/// An empty string is a valid text and is returned as is.
pub fn require_text(text: Option<&str>) -> Result<&str> {
    text.ok_or_else(|| FreqTabError::InvalidInput("No text supplied".to_string()))
}
