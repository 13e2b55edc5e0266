use crate::{ClipboardProvider, Error, non_empty};

/// A clipboard that lives inside the process.
///
/// Useful for tests and headless runs where no system clipboard exists.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    /// Create an empty clipboard.
    #[must_use]
    pub const fn new() -> Self {
        Self { text: None }
    }

    /// Create a clipboard that already holds `text`.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn get_text(&mut self) -> Result<Option<String>, Error> {
        Ok(self.text.clone().and_then(non_empty))
    }

    fn set_text(&mut self, text: &str) -> Result<(), Error> {
        self.text = Some(text.to_owned());
        Ok(())
    }
}
