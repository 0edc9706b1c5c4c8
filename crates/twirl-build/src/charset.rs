//! Charset label resolution for template sources.
//!
//! Labels are resolved through `encoding_rs`, which accepts the WHATWG
//! encoding labels ("UTF-8", "utf8", "ISO-8859-1", ...). Resolution happens
//! before any file I/O so a misconfigured charset fails the task immediately.

use encoding_rs::Encoding;

/// Error resolving a configured charset label.
#[derive(Debug, thiserror::Error)]
pub enum CharsetError {
    #[error("unknown source charset '{label}'")]
    UnknownLabel { label: String },
}

/// Resolve a charset label to its encoding.
pub fn resolve(label: &str) -> Result<&'static Encoding, CharsetError> {
    Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| CharsetError::UnknownLabel {
        label: label.to_string(),
    })
}
