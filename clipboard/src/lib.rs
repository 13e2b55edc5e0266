//! Text clipboard access.
//!
//! This crate exposes the system clipboard through the [`ClipboardProvider`] trait so
//! callers can swap the real backend for an in-process one.

#![warn(missing_docs)]

mod memory;
mod sys;

pub use memory::MemoryClipboard;
pub use sys::SystemClipboard;

/// Errors returned by clipboard operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No clipboard could be reached (e.g. no display server).
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// An error occurred in the underlying platform implementation.
    #[error("Platform error: {0}")]
    Platform(String),

    /// There is no clipboard backend for this platform.
    #[error("Unsupported platform")]
    Unsupported,
}

/// Read and write text on a clipboard.
pub trait ClipboardProvider {
    /// Get text from the clipboard.
    ///
    /// Returns `Ok(None)` when the clipboard holds no text. An empty string counts as no text.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the backend fails for any reason other than missing content.
    fn get_text(&mut self) -> Result<Option<String>, Error>;

    /// Set text to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the backend rejects the write.
    fn set_text(&mut self, text: &str) -> Result<(), Error>;
}

impl<P: ClipboardProvider + ?Sized> ClipboardProvider for &mut P {
    fn get_text(&mut self) -> Result<Option<String>, Error> {
        (**self).get_text()
    }

    fn set_text(&mut self, text: &str) -> Result<(), Error> {
        (**self).set_text(text)
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}
