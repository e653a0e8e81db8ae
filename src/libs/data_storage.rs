//! Platform data directory resolution.
//!
//! All persistent state (the JSON configuration and the SQLite database)
//! lives in one vendor/app directory under the platform's conventional
//! data root: `%LOCALAPPDATA%` on Windows, `~/Library/Application Support`
//! on macOS and `~/.local/share` elsewhere. The directory is created on
//! first access.

use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::PathBuf;

pub const VENDOR_NAME: &str = "lacodda";
pub const APP_NAME: &str = "takt";

fn data_dir() -> PathBuf {
    let root = match OS {
        "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
        "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
        _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
    };
    PathBuf::from(root).join(VENDOR_NAME).join(APP_NAME)
}

/// Resolves `file_name` inside the application data directory, creating
/// the directory when it does not exist yet.
pub fn data_file(file_name: &str) -> Result<PathBuf> {
    let dir = data_dir();
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir.join(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_ends_with_vendor_and_app() {
        assert!(data_dir().ends_with(format!("{}/{}", VENDOR_NAME, APP_NAME)));
    }
}
