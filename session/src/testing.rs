//! Test doubles for the session and the run loop.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use clipkit_clipboard::{ClipboardProvider, Error as ClipboardError};

use crate::event::SessionEvent;
use crate::host::{HostError, Viewport, WindowHost};
use crate::report::{Reporter, error_line};
use crate::scene::{Projection, Scene};

#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub messages: Vec<String>,
    pub errors: Vec<String>,
}

impl Reporter for RecordingReporter {
    fn message(&mut self, line: &str) {
        self.messages.push(line.to_owned());
    }

    fn error(&mut self, description: &str) {
        self.errors.push(error_line(description));
    }
}

#[derive(Debug, Default)]
pub struct RecordingViewport {
    pub sizes: Vec<(u32, u32)>,
}

impl Viewport for RecordingViewport {
    fn set_viewport(&mut self, width: u32, height: u32) {
        self.sizes.push((width, height));
    }
}

#[derive(Debug)]
pub struct FailingClipboard;

impl ClipboardProvider for FailingClipboard {
    fn get_text(&mut self) -> Result<Option<String>, ClipboardError> {
        Err(ClipboardError::Platform("read refused".into()))
    }

    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Platform("write refused".into()))
    }
}

/// Calls observed by a [`FakeHost`], in order.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    SetProjection(Projection),
    Draw,
    Present,
    Wait,
    Viewport(u32, u32),
    Terminate,
}

/// A window host that replays scripted event batches and records every call.
///
/// When the script runs out it reports a close request so loops always finish.
#[derive(Debug)]
pub struct FakeHost {
    batches: VecDeque<Vec<SessionEvent>>,
    calls: Rc<RefCell<Vec<HostCall>>>,
    fail_draw: bool,
}

impl FakeHost {
    pub fn new(batches: impl IntoIterator<Item = Vec<SessionEvent>>) -> Self {
        Self {
            batches: batches.into_iter().collect(),
            calls: Rc::default(),
            fail_draw: false,
        }
    }

    pub fn failing_draw(mut self) -> Self {
        self.fail_draw = true;
        self
    }

    pub fn calls(&self) -> Rc<RefCell<Vec<HostCall>>> {
        Rc::clone(&self.calls)
    }
}

impl Viewport for FakeHost {
    fn set_viewport(&mut self, width: u32, height: u32) {
        self.calls.borrow_mut().push(HostCall::Viewport(width, height));
    }
}

impl WindowHost for FakeHost {
    fn set_projection(&mut self, projection: Projection) {
        self.calls.borrow_mut().push(HostCall::SetProjection(projection));
    }

    fn draw(&mut self, _scene: &Scene) -> Result<(), HostError> {
        self.calls.borrow_mut().push(HostCall::Draw);
        if self.fail_draw {
            return Err(HostError::new("surface", "lost"));
        }
        Ok(())
    }

    fn present(&mut self) -> Result<(), HostError> {
        self.calls.borrow_mut().push(HostCall::Present);
        Ok(())
    }

    fn wait_events(&mut self) -> Vec<SessionEvent> {
        self.calls.borrow_mut().push(HostCall::Wait);
        self.batches
            .pop_front()
            .unwrap_or_else(|| vec![SessionEvent::CloseRequest])
    }

    fn terminate(self) {
        self.calls.borrow_mut().push(HostCall::Terminate);
    }
}
