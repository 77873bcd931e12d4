use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::descriptor::{BrandingDescriptor, DisplayMode, HexColor, IconSet, Orientation};
use crate::error::{BrandingError, Result};
use crate::persist::{resolve_asset, save_json};

pub const DEFAULT_ICON_BASE: &str = "icons/";
pub const DEFAULT_LANG: &str = "fr";
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

const PURPOSE_MASKABLE: &str = "maskable";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcon {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

/// A W3C web app manifest (`manifest.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestDocument {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub lang: String,
    pub display: DisplayMode,
    pub orientation: Orientation,
    pub background_color: HexColor,
    pub theme_color: HexColor,
    pub prefer_related_applications: bool,
    pub icons: Vec<ManifestIcon>,
}

#[derive(Debug, Clone, Copy)]
pub struct ManifestOptions<'a> {
    /// Asset bundle used to read icon sizes and inline icon data.
    pub assets_dir: Option<&'a Path>,
    /// Prefix prepended to each icon `src`.
    pub icon_base: &'a str,
    pub lang: &'a str,
    /// Embed icons as base64 `data:` URLs instead of linking them.
    pub inline_icons: bool,
}

impl Default for ManifestOptions<'_> {
    fn default() -> Self {
        Self {
            assets_dir: None,
            icon_base: DEFAULT_ICON_BASE,
            lang: DEFAULT_LANG,
            inline_icons: false,
        }
    }
}

pub fn build_manifest(
    descriptor: &BrandingDescriptor,
    options: &ManifestOptions<'_>,
) -> Result<ManifestDocument> {
    if options.inline_icons && options.assets_dir.is_none() {
        return Err(BrandingError::MissingAssetDir);
    }

    let mut icons = Vec::new();
    for path in manifest_icon_paths(&descriptor.icons) {
        icons.push(icon_entry(path, options)?);
    }
    let maskable: Vec<ManifestIcon> = icons
        .iter()
        .map(|icon| ManifestIcon {
            purpose: Some(PURPOSE_MASKABLE.to_string()),
            ..icon.clone()
        })
        .collect();
    icons.extend(maskable);

    let manifest = &descriptor.manifest;
    log::debug!(
        target: "branding.manifest",
        "Built manifest for {} with {} icon entries",
        manifest.name,
        icons.len()
    );

    Ok(ManifestDocument {
        name: manifest.name.to_string(),
        short_name: manifest.short_name.to_string(),
        description: manifest.description.to_string(),
        start_url: manifest.start_url.to_string(),
        lang: options.lang.to_string(),
        display: manifest.display,
        orientation: manifest.orientation,
        background_color: manifest.background_color,
        theme_color: manifest.theme_color,
        prefer_related_applications: manifest.prefer_related_applications,
        icons,
    })
}

pub fn write_manifest(document: &ManifestDocument, path: &Path) -> Result<()> {
    save_json(path, document)?;
    log::info!(
        target: "branding.manifest",
        "Manifest for {} written to {}",
        document.name,
        path.display()
    );
    Ok(())
}

/// Launcher icons listed in the manifest: android then web, without repeats.
fn manifest_icon_paths(icons: &IconSet) -> Vec<&str> {
    let mut paths: Vec<&str> = Vec::new();
    for path in [&*icons.android, &*icons.web] {
        if !path.is_empty() && !paths.contains(&path) {
            paths.push(path);
        }
    }
    paths
}

fn icon_entry(path: &str, options: &ManifestOptions<'_>) -> Result<ManifestIcon> {
    let mime_type = mime_type_for(path);
    let file = match options.assets_dir {
        Some(assets_dir) => Some(locate(assets_dir, path)?),
        None => None,
    };

    let sizes = if mime_type == Some("image/svg+xml") {
        Some("any".to_string())
    } else if let Some(file) = &file {
        match image::image_dimensions(file) {
            Ok((width, height)) => Some(format!("{}x{}", width, height)),
            Err(image::ImageError::Unsupported(e)) => {
                log::warn!(
                    target: "branding.manifest",
                    "Cannot read size of {}: {}, falling back to its file name",
                    file.display(),
                    e
                );
                sizes_from_file_name(path)
            }
            Err(source) => {
                return Err(BrandingError::Image {
                    path: file.clone(),
                    source,
                })
            }
        }
    } else {
        sizes_from_file_name(path)
    };

    let src = match (&file, options.inline_icons) {
        (Some(file), true) => data_url(file, mime_type)?,
        _ => asset_href(options.icon_base, path),
    };

    Ok(ManifestIcon {
        src,
        sizes,
        mime_type: mime_type.map(str::to_string),
        purpose: None,
    })
}

fn locate(assets_dir: &Path, path: &str) -> Result<PathBuf> {
    resolve_asset(assets_dir, path).ok_or_else(|| BrandingError::AssetNotFound {
        path: path.to_string(),
        assets_dir: assets_dir.to_path_buf(),
    })
}

fn data_url(file: &Path, mime_type: Option<&str>) -> Result<String> {
    use base64::{engine::general_purpose::STANDARD, Engine};

    let bytes = fs::read(file).map_err(BrandingError::io(file))?;
    Ok(format!(
        "data:{};base64,{}",
        mime_type.unwrap_or("application/octet-stream"),
        STANDARD.encode(bytes)
    ))
}

/// MIME type for an icon, from its extension.
pub fn mime_type_for(path: &str) -> Option<&'static str> {
    let ext = Path::new(path).extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "ico" => Some("image/x-icon"),
        "svg" => Some("image/svg+xml"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// `Icon-192.png` -> `192x192`. Square icons are assumed.
pub fn sizes_from_file_name(path: &str) -> Option<String> {
    let stem = Path::new(path).file_stem()?.to_str()?;
    let prefix = stem.trim_end_matches(|c: char| c.is_ascii_digit());
    let size: u32 = stem[prefix.len()..].parse().ok()?;
    if size == 0 {
        return None;
    }
    Some(format!("{}x{}", size, size))
}

/// Joins `base` and a relative asset path, percent-encoding each segment.
pub fn asset_href(base: &str, path: &str) -> String {
    let encoded: Vec<String> = path
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect();
    format!("{}{}", base, encoded.join("/"))
}
