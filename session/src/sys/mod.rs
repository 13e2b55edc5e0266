//! Platform-specific window host implementations.

#[cfg(any(target_os = "windows", target_os = "linux", target_os = "macos"))]
/// Desktop platform backend.
pub mod desktop;
