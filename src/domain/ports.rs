use crate::domain::error::ErrorKind;

/// Message resource port (implemented by adapters).
///
/// Resolves an error kind to human-readable text. The core never renders text
/// itself; it only hands its `ErrorKind` to whichever provider the caller supplies.
pub trait MessageProvider: Send + Sync {
    /// Text for `kind`, or `None` when the provider has no entry for it.
    fn message(&self, kind: ErrorKind) -> Option<&str>;
}
