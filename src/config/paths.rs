// SPDX-License-Identifier: MPL-2.0
//! Resolution of the configuration directory.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - `--config-dir` on the command line, or a path
//!    handed in by tests
//! 2. **Environment variable** - `TOUCHLESS_VIEWER_CONFIG_DIR`
//! 3. **Platform default** - via `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "TouchlessViewer";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "TOUCHLESS_VIEWER_CONFIG_DIR";

/// Returns the application config directory, honoring an explicit override.
pub fn config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }

    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
