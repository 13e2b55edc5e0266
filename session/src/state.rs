/// Termination state of a session.
///
/// Once [`close`](Self::close) is called the session stays closed for the rest of the
/// process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    closed: bool,
}

impl SessionState {
    /// A fresh, open session.
    #[must_use]
    pub const fn new() -> Self {
        Self { closed: false }
    }

    /// Mark the session closed.
    pub const fn close(&mut self) {
        self.closed = true;
    }

    /// Whether the session has been closed.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }
}
