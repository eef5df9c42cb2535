//! Error contract for value construction.
//!
//! A failure carries the offending field name and an [`ErrorKind`] token. Human-readable
//! text is resolved by a [`MessageProvider`] at render time, never by the core.

use crate::domain::ports::MessageProvider;
use thiserror::Error;

/// Error kind - classification of construction failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required field is missing or empty.
    ValueNull,
    /// A field is present but has an unsupported shape.
    ///
    /// The typed constructors make shape errors a compile-time matter, so the core
    /// never produces this kind; it stays in the taxonomy for message providers and
    /// for untyped boundary layers built on top of this crate.
    FormatInvalid,
}

impl ErrorKind {
    /// Stable message key used to look the kind up in a message table.
    pub fn key(self) -> &'static str {
        match self {
            ErrorKind::ValueNull => "value_null",
            ErrorKind::FormatInvalid => "format_invalid",
        }
    }
}

/// Construction failure: `(field, kind)`.
///
/// `Display` prints the untranslated `field: key` pair; use [`MetagraphError::render`]
/// for provider-backed text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {}", .kind.key())]
pub struct MetagraphError {
    field: &'static str,
    kind: ErrorKind,
}

impl MetagraphError {
    pub fn new(field: &'static str, kind: ErrorKind) -> Self {
        Self { field, kind }
    }

    pub fn value_null(field: &'static str) -> Self {
        Self::new(field, ErrorKind::ValueNull)
    }

    pub fn format_invalid(field: &'static str) -> Self {
        Self::new(field, ErrorKind::FormatInvalid)
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Render with the provider's text, falling back to the message key.
    pub fn render(&self, provider: &dyn MessageProvider) -> String {
        let text = provider.message(self.kind).unwrap_or(self.kind.key());
        format!("{}: {}", self.field, text)
    }
}

/// Result type for value construction.
pub type Result<T> = std::result::Result<T, MetagraphError>;
