//! Reactions to session events.

use clipkit_clipboard::ClipboardProvider;

use crate::event::{Action, Key, KeyEvent, SessionEvent};
use crate::host::Viewport;
use crate::report::Reporter;
use crate::state::SessionState;

/// Text written to the clipboard by Ctrl+C.
pub const CLIPBOARD_TEXT: &str = "Hello GLFW World!";

/// Owns the session state and reacts to events delivered by a window host.
#[derive(Debug)]
pub struct Session<C, R> {
    state: SessionState,
    clipboard: C,
    reporter: R,
}

impl<C: ClipboardProvider, R: Reporter> Session<C, R> {
    /// Create an open session.
    pub const fn new(clipboard: C, reporter: R) -> Self {
        Self {
            state: SessionState::new(),
            clipboard,
            reporter,
        }
    }

    /// Whether the session has been closed.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.state.is_closed()
    }

    /// Current session state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// The clipboard this session reads and writes.
    pub const fn clipboard(&mut self) -> &mut C {
        &mut self.clipboard
    }

    /// The reporter this session writes to.
    pub const fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Pass a library-internal error to the error hook.
    pub fn report_error(&mut self, description: &str) {
        self.reporter.error(description);
    }

    /// React to one event.
    pub fn handle_event(&mut self, event: SessionEvent, viewport: &mut impl Viewport) {
        match event {
            SessionEvent::Key(key) => self.on_key(key),
            SessionEvent::Resize { width, height } => viewport.set_viewport(width, height),
            SessionEvent::CloseRequest => {
                log::debug!("close requested");
                self.state.close();
            }
        }
    }

    fn on_key(&mut self, event: KeyEvent) {
        if event.action != Action::Press {
            return;
        }

        match event.key {
            Key::Escape => {
                log::debug!("escape pressed");
                self.state.close();
            }
            Key::V if event.ctrl() => self.paste(),
            Key::C if event.ctrl() => self.copy(),
            _ => {}
        }
    }

    fn paste(&mut self) {
        let text = self.clipboard.get_text().unwrap_or_else(|e| {
            self.reporter.error(&e.to_string());
            None
        });

        match text {
            Some(text) => self
                .reporter
                .message(&format!("Clipboard contains \"{text}\"")),
            None => self.reporter.message("Clipboard does not contain a string"),
        }
    }

    fn copy(&mut self) {
        if let Err(e) = self.clipboard.set_text(CLIPBOARD_TEXT) {
            self.reporter.error(&e.to_string());
        }
        self.reporter
            .message(&format!("Setting clipboard to \"{CLIPBOARD_TEXT}\""));
    }
}
