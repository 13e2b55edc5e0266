//! The windowing abstraction and the loop that drives it.

use clipkit_clipboard::ClipboardProvider;

use crate::event::SessionEvent;
use crate::handler::Session;
use crate::report::Reporter;
use crate::scene::{Projection, Scene};

/// Non-fatal error raised by a window host while drawing or presenting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{context}: {description}")]
pub struct HostError {
    context: &'static str,
    description: String,
}

impl HostError {
    /// Create an error for the given operation.
    pub fn new(context: &'static str, description: impl Into<String>) -> Self {
        Self {
            context,
            description: description.into(),
        }
    }

    /// The operation that failed.
    #[must_use]
    pub const fn context(&self) -> &'static str {
        self.context
    }
}

/// Something whose drawable area can follow the window size.
pub trait Viewport {
    /// Resize the drawable area to `width` x `height` pixels.
    fn set_viewport(&mut self, width: u32, height: u32);
}

/// A window with a current rendering context.
///
/// Dropping the host releases the window as well, but [`run`] always finishes
/// through [`terminate`](Self::terminate).
pub trait WindowHost: Viewport {
    /// Install the projection used by every subsequent draw.
    fn set_projection(&mut self, projection: Projection);

    /// Clear the frame and draw the scene.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] when the frame could not be drawn.
    fn draw(&mut self, scene: &Scene) -> Result<(), HostError>;

    /// Present the drawn frame.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] when the frame could not be presented.
    fn present(&mut self) -> Result<(), HostError>;

    /// Block until at least one event arrives, then return everything pending.
    fn wait_events(&mut self) -> Vec<SessionEvent>;

    /// Destroy the window and release the windowing subsystem.
    fn terminate(self);
}

/// Run a session on `host` until it closes, then tear the host down.
///
/// The projection is installed once. Each iteration draws, presents, blocks for
/// events and dispatches all of them before the closed flag is checked again.
/// Host errors go to the reporter's error hook and never stop the loop.
pub fn run<H, C, R>(mut host: H, session: &mut Session<C, R>, scene: &Scene)
where
    H: WindowHost,
    C: ClipboardProvider,
    R: Reporter,
{
    host.set_projection(scene.projection);

    while !session.is_closed() {
        if let Err(e) = host.draw(scene).and_then(|()| host.present()) {
            log::warn!("frame skipped: {e}");
            session.report_error(&e.to_string());
        }

        let events = host.wait_events();
        log::trace!("dispatching {} event(s)", events.len());
        for event in events {
            session.handle_event(event, &mut host);
        }
    }

    log::info!("session closed, terminating window host");
    host.terminate();
}
