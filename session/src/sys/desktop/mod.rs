//! Desktop window host built on winit and wgpu.
//!
//! The winit event loop is driven with `pump_app_events`, so the session keeps
//! control of the loop: a pump with no timeout blocks until events arrive, then
//! hands back everything collected while dispatching.

mod renderer;

use std::sync::Arc;
use std::time::Duration;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::Error;
use crate::config::SessionConfig;
use crate::event::{Action, Key, KeyEvent, Modifiers, SessionEvent};
use crate::host::{HostError, Viewport, WindowHost};
use crate::scene::{Projection, Scene};

use renderer::Renderer;

const STARTUP_PUMPS: usize = 64;
const STARTUP_PUMP_TIMEOUT: Duration = Duration::from_millis(10);

/// Collects winit callbacks into session events.
#[derive(Debug)]
struct Collector {
    attributes: Option<WindowAttributes>,
    window: Option<Arc<Window>>,
    create_error: Option<String>,
    modifiers: Modifiers,
    events: Vec<SessionEvent>,
}

impl Collector {
    fn new(attributes: WindowAttributes) -> Self {
        Self {
            attributes: Some(attributes),
            window: None,
            create_error: None,
            modifiers: Modifiers::empty(),
            events: Vec::new(),
        }
    }
}

impl ApplicationHandler for Collector {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(attributes) = self.attributes.take() else {
            return;
        };

        match event_loop.create_window(attributes) {
            Ok(window) => {
                log::info!("window created: {:?}", window.id());
                self.window = Some(Arc::new(window));
            }
            Err(e) => self.create_error = Some(e.to_string()),
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.events.push(SessionEvent::CloseRequest),
            WindowEvent::Resized(size) => self.events.push(SessionEvent::Resize {
                width: size.width,
                height: size.height,
            }),
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = translate_modifiers(modifiers.state());
            }
            WindowEvent::KeyboardInput {
                event,
                is_synthetic: false,
                ..
            } => self.events.push(SessionEvent::Key(KeyEvent {
                key: translate_key(event.physical_key),
                action: translate_action(event.state, event.repeat),
                modifiers: self.modifiers,
            })),
            _ => {}
        }
    }
}

fn translate_key(key: PhysicalKey) -> Key {
    match key {
        PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
        PhysicalKey::Code(KeyCode::KeyC) => Key::C,
        PhysicalKey::Code(KeyCode::KeyV) => Key::V,
        _ => Key::Other,
    }
}

const fn translate_action(state: ElementState, repeat: bool) -> Action {
    match (state, repeat) {
        (ElementState::Released, _) => Action::Release,
        (ElementState::Pressed, true) => Action::Repeat,
        (ElementState::Pressed, false) => Action::Press,
    }
}

fn translate_modifiers(state: ModifiersState) -> Modifiers {
    let mut modifiers = Modifiers::empty();
    modifiers.set(Modifiers::SHIFT, state.shift_key());
    modifiers.set(Modifiers::CONTROL, state.control_key());
    modifiers.set(Modifiers::ALT, state.alt_key());
    modifiers.set(Modifiers::SUPER, state.super_key());
    modifiers
}

/// A real window with a wgpu surface, driven by a pumped winit event loop.
#[derive(Debug)]
pub struct DesktopHost {
    renderer: Renderer,
    collector: Collector,
    window: Arc<Window>,
    event_loop: EventLoop<()>,
}

impl DesktopHost {
    /// Initialize the windowing system, open the window and bind a rendering context.
    ///
    /// # Errors
    ///
    /// - [`Error::Init`] if the event loop cannot be created.
    /// - [`Error::CreateWindow`] if the window cannot be opened.
    /// - [`Error::Context`] if no GPU surface, adapter or device is available.
    ///
    /// Anything acquired before the failure is released before returning.
    pub fn open(config: &SessionConfig) -> Result<Self, Error> {
        let mut event_loop = EventLoop::new().map_err(|e| Error::Init(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let attributes = Window::default_attributes()
            .with_title(config.window.title.clone())
            .with_inner_size(LogicalSize::new(config.window.width, config.window.height));
        let mut collector = Collector::new(attributes);

        let window = Self::await_window(&mut event_loop, &mut collector)?;
        let renderer = pollster::block_on(Renderer::new(Arc::clone(&window), config.vsync()))?;

        Ok(Self {
            renderer,
            collector,
            window,
            event_loop,
        })
    }

    fn await_window(
        event_loop: &mut EventLoop<()>,
        collector: &mut Collector,
    ) -> Result<Arc<Window>, Error> {
        for _ in 0..STARTUP_PUMPS {
            let status = event_loop.pump_app_events(Some(STARTUP_PUMP_TIMEOUT), collector);
            if let Some(window) = &collector.window {
                return Ok(Arc::clone(window));
            }
            if let Some(e) = collector.create_error.take() {
                return Err(Error::CreateWindow(e));
            }
            if let PumpStatus::Exit(code) = status {
                return Err(Error::CreateWindow(format!(
                    "event loop exited with status {code}"
                )));
            }
        }
        Err(Error::CreateWindow("event loop never became ready".into()))
    }

    /// The underlying winit window.
    #[must_use]
    pub const fn window(&self) -> &Arc<Window> {
        &self.window
    }
}

impl Viewport for DesktopHost {
    fn set_viewport(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
    }
}

impl WindowHost for DesktopHost {
    fn set_projection(&mut self, projection: Projection) {
        self.renderer.set_projection(projection);
    }

    fn draw(&mut self, scene: &Scene) -> Result<(), HostError> {
        self.renderer.draw(scene)
    }

    fn present(&mut self) -> Result<(), HostError> {
        self.window.pre_present_notify();
        self.renderer.present()
    }

    fn wait_events(&mut self) -> Vec<SessionEvent> {
        if let PumpStatus::Exit(code) = self.event_loop.pump_app_events(None, &mut self.collector) {
            log::info!("event loop exited with status {code}");
            self.collector.events.push(SessionEvent::CloseRequest);
        }
        std::mem::take(&mut self.collector.events)
    }

    fn terminate(self) {
        let Self {
            renderer,
            collector,
            window,
            event_loop,
        } = self;
        drop(renderer);
        drop(collector);
        drop(window);
        drop(event_loop);
        log::info!("window host terminated");
    }
}
