use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::descriptor::BrandingDescriptor;
use crate::error::{BrandingError, Result};

/// Subdirectories of an asset bundle searched for icon files, in order.
/// Flutter web bundles keep favicons at the root and app icons in `icons/`.
pub const ASSET_SEARCH_DIRS: [&str; 2] = ["", "icons"];

pub fn parse_descriptor(content: &str) -> Result<BrandingDescriptor> {
    serde_json::from_str(content).map_err(BrandingError::Parse)
}

pub fn load_descriptor(path: &Path) -> Result<BrandingDescriptor> {
    let content = fs::read_to_string(path).map_err(BrandingError::io(path))?;
    let descriptor = parse_descriptor(&content)?;
    log::info!(target: "branding.persist", "Loaded descriptor from {}", path.display());
    Ok(descriptor)
}

pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(BrandingError::Serialize)
}

/// Writes `value` as pretty JSON, creating missing parent directories.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut content = to_json_pretty(value)?;
    content.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(BrandingError::io(parent))?;
    }

    fs::write(path, content).map_err(BrandingError::io(path))?;
    log::info!(target: "branding.persist", "Wrote {}", path.display());
    Ok(())
}

/// Locates an icon inside the asset bundle.
pub fn resolve_asset(assets_dir: &Path, relative: &str) -> Option<PathBuf> {
    ASSET_SEARCH_DIRS
        .iter()
        .map(|sub| assets_dir.join(sub).join(relative))
        .find(|candidate| candidate.is_file())
}
