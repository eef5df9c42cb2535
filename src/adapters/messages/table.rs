use crate::domain::error::ErrorKind;
use crate::domain::ports::MessageProvider;

/// Read-only message table keyed by [`ErrorKind::key`].
///
/// Lives for the whole process and is only borrowed at render time.
#[derive(Debug)]
pub struct StaticMessages {
    entries: &'static [(&'static str, &'static str)],
}

/// English messages.
pub static DEFAULT_MESSAGES: StaticMessages = StaticMessages::new(&[
    ("value_null", "Value cannot be null or empty"),
    ("format_invalid", "Invalid format"),
]);

impl StaticMessages {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Lookup by raw message key.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, text)| *text)
    }
}

impl Default for StaticMessages {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGES.entries)
    }
}

impl MessageProvider for StaticMessages {
    fn message(&self, kind: ErrorKind) -> Option<&str> {
        self.get(kind.key())
    }
}
