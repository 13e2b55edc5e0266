//! # clipkit-session
//!
//! An interactive window session that exercises the clipboard from key presses.
//!
//! A [`WindowHost`] delivers [`SessionEvent`]s to a [`Session`], which owns the
//! closed flag, the clipboard and the output [`Reporter`]. [`run`] drives the
//! loop: draw, present, block for events, dispatch, repeat until closed.
//!
//! ## Keys
//!
//! - **Escape**: close the session.
//! - **Ctrl+C**: write `Hello GLFW World!` to the clipboard.
//! - **Ctrl+V**: print whatever text the clipboard holds.
//!
//! Only key presses count; releases and repeats are ignored.
//!
//! ## Platform Specifics
//!
//! [`DesktopHost`] and [`run_desktop`] are available on Windows, Linux and macOS.
//! The host logic and the loop itself are platform independent and can be driven
//! by any [`WindowHost`] implementation.

#![warn(missing_docs)]

mod config;
mod event;
mod handler;
mod host;
mod report;
mod scene;
mod state;
mod sys;

#[cfg(test)]
mod testing;

pub use config::{SessionConfig, WindowConfig};
pub use event::{Action, Key, KeyEvent, Modifiers, SessionEvent};
pub use handler::{CLIPBOARD_TEXT, Session};
pub use host::{HostError, Viewport, WindowHost, run};
pub use report::{Reporter, StdReporter, error_line};
pub use scene::{Color, Projection, Rect, Scene};
pub use state::SessionState;

#[cfg(any(target_os = "windows", target_os = "linux", target_os = "macos"))]
pub use sys::desktop::DesktopHost;

/// Fatal errors that stop a session before its loop starts.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The windowing system could not be initialized.
    #[error("Failed to initialize GLFW: {0}")]
    Init(String),

    /// The window could not be created.
    #[error("Failed to open GLFW window: {0}")]
    CreateWindow(String),

    /// No rendering context could be bound to the window.
    #[error("Failed to create rendering context: {0}")]
    Context(String),
}

/// Open a desktop window and run the clipboard session until it is closed.
///
/// # Errors
///
/// Returns an [`Error`] if the windowing system, window or rendering context
/// cannot be set up. Once the loop starts, nothing is fatal.
#[cfg(any(target_os = "windows", target_os = "linux", target_os = "macos"))]
pub fn run_desktop(config: &SessionConfig) -> Result<(), Error> {
    let host = DesktopHost::open(config)?;
    let mut session = Session::new(clipkit_clipboard::SystemClipboard::new(), StdReporter);
    run(host, &mut session, &config.scene);
    Ok(())
}
