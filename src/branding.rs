//! Branding and application identity configuration.
//!
//! This module centralizes all branding-related strings (names, paths, URLs) to make
//! future rebranding easier. Change values here to rebrand the entire application.

/// The human-readable display name of the application.
///
/// Used in:
/// - The navigation bar title
/// - Help text
/// - Startup banner
pub const APP_DISPLAY_NAME: &str = "Termfolio";

/// The directory name for application data (config file).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "Termfolio";
