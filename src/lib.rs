//! # Clipkit
//!
//! An interactive harness for exercising the system clipboard from a live window.
//!
//! Clipkit opens a small window, draws a static rectangle to show the rendering
//! context is alive, and reacts to keypresses by reading or writing the clipboard.
//!
//! ## Features
//!
//! - `clipboard`: Clipboard access through a provider trait (system and in-memory backends).
//! - `session`: The interactive session loop, its event model and the desktop window host.
//!
//! Use the `full` feature to enable everything.
//!
//! ## Example
//!
//! ```toml
//! [dependencies]
//! clipkit = { version = "0.1", features = ["full"] }
//! ```
//!
//! ```rust,ignore
//! fn main() -> Result<(), clipkit::session::Error> {
//!     clipkit::session::run_desktop(&clipkit::session::SessionConfig::default())
//! }
//! ```

#[cfg(feature = "clipboard")]
pub use clipkit_clipboard as clipboard;

#[cfg(feature = "session")]
pub use clipkit_session as session;
