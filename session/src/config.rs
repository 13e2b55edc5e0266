use crate::scene::Scene;

/// Window creation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    /// Width of the drawable area, in logical pixels.
    pub width: u32,
    /// Height of the drawable area, in logical pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
            title: "Clipboard Test".into(),
        }
    }
}

/// Everything needed to open and run a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// The window to open.
    pub window: WindowConfig,
    /// Display refreshes to wait before presenting a frame; `0` disables vsync.
    pub swap_interval: u32,
    /// What each frame shows.
    pub scene: Scene,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            swap_interval: 1,
            scene: Scene::default(),
        }
    }
}

impl SessionConfig {
    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Set the window size.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Set the swap interval.
    #[must_use]
    pub fn with_swap_interval(mut self, swap_interval: u32) -> Self {
        self.swap_interval = swap_interval;
        self
    }

    /// Whether presentation waits for the display refresh.
    #[must_use]
    pub const fn vsync(&self) -> bool {
        self.swap_interval > 0
    }
}
