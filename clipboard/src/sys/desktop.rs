use crate::{ClipboardProvider, Error, non_empty};
use arboard::Clipboard;

/// The system clipboard, backed by `arboard`.
///
/// The connection is opened on first use and then kept, since on X11 the owning
/// process must stay connected to serve what it wrote.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("connected", &self.inner.is_some())
            .finish()
    }
}

impl SystemClipboard {
    /// Create a clipboard handle without connecting yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { inner: None }
    }

    fn connection(&mut self) -> Result<&mut Clipboard, Error> {
        if self.inner.is_none() {
            let clipboard = Clipboard::new().map_err(|e| Error::Unavailable(e.to_string()))?;
            log::debug!("connected to system clipboard");
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| Error::Unavailable("no connection".into()))
    }
}

impl ClipboardProvider for SystemClipboard {
    fn get_text(&mut self) -> Result<Option<String>, Error> {
        match self.connection()?.get_text() {
            Ok(text) => Ok(non_empty(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(Error::Platform(e.to_string())),
        }
    }

    fn set_text(&mut self, text: &str) -> Result<(), Error> {
        self.connection()?
            .set_text(text)
            .map_err(|e| Error::Platform(e.to_string()))
    }
}
