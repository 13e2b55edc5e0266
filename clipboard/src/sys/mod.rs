//! Platform-specific clipboard backend implementations.

#[cfg(any(target_os = "windows", target_os = "linux", target_os = "macos"))]
/// Desktop platform backend.
pub mod desktop;
#[cfg(any(target_os = "windows", target_os = "linux", target_os = "macos"))]
pub use desktop::SystemClipboard;

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
/// Fallback for platforms without a clipboard backend.
pub mod unsupported;
#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
pub use unsupported::SystemClipboard;
