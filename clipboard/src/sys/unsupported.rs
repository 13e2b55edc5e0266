use crate::{ClipboardProvider, Error};

/// System clipboard placeholder; every operation fails with [`Error::Unsupported`].
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// Create the placeholder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ClipboardProvider for SystemClipboard {
    fn get_text(&mut self) -> Result<Option<String>, Error> {
        Err(Error::Unsupported)
    }

    fn set_text(&mut self, _text: &str) -> Result<(), Error> {
        Err(Error::Unsupported)
    }
}
