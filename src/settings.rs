use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::manifest::{DEFAULT_ICON_BASE, DEFAULT_LANG, MANIFEST_FILE_NAME};

pub const DEFAULT_SETTINGS_FILE: &str = "branding.settings.json";

/// Build settings for the command-line tool. Every field is optional in the
/// settings file; command-line flags take precedence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildSettings {
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,
    #[serde(default = "BuildSettings::default_out_dir")]
    pub out_dir: PathBuf,
    #[serde(default = "BuildSettings::default_icon_base")]
    pub icon_base: String,
    #[serde(default = "BuildSettings::default_favicon_base")]
    pub favicon_base: String,
    #[serde(default = "BuildSettings::default_lang")]
    pub lang: String,
    #[serde(default = "BuildSettings::default_inline_icons")]
    pub inline_icons: bool,
}

impl BuildSettings {
    pub const DEFAULT_OUT_DIR: &'static str = "build/web";
    pub const DEFAULT_FAVICON_BASE: &'static str = "";
    pub const DEFAULT_INLINE_ICONS: bool = false;

    fn default_out_dir() -> PathBuf {
        PathBuf::from(Self::DEFAULT_OUT_DIR)
    }

    fn default_icon_base() -> String {
        DEFAULT_ICON_BASE.to_string()
    }

    fn default_favicon_base() -> String {
        Self::DEFAULT_FAVICON_BASE.to_string()
    }

    fn default_lang() -> String {
        DEFAULT_LANG.to_string()
    }

    fn default_inline_icons() -> bool {
        Self::DEFAULT_INLINE_ICONS
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.out_dir.join(MANIFEST_FILE_NAME)
    }
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            assets_dir: None,
            out_dir: Self::default_out_dir(),
            icon_base: Self::default_icon_base(),
            favicon_base: Self::default_favicon_base(),
            lang: Self::default_lang(),
            inline_icons: Self::DEFAULT_INLINE_ICONS,
        }
    }
}

/// Loads build settings, falling back to defaults when the file is absent or
/// unreadable. An explicitly requested file that does not exist is logged.
pub fn load_settings(path: Option<&Path>) -> BuildSettings {
    let settings_file = path.unwrap_or_else(|| Path::new(DEFAULT_SETTINGS_FILE));

    if !settings_file.exists() {
        if path.is_some() {
            log::warn!(
                target: "branding.settings",
                "Settings file {} not found, using defaults",
                settings_file.display()
            );
        }
        return BuildSettings::default();
    }

    match fs::read_to_string(settings_file) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(settings) => {
                log::debug!(
                    target: "branding.settings",
                    "Loaded settings from {}",
                    settings_file.display()
                );
                return settings;
            }
            Err(e) => {
                log::warn!(target: "branding.settings", "Failed to parse settings file: {}", e)
            }
        },
        Err(e) => log::warn!(target: "branding.settings", "Failed to read settings file: {}", e),
    }
    BuildSettings::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let settings: BuildSettings =
            serde_json::from_str(r#"{ "assets_dir": "web", "lang": "en" }"#).unwrap();

        assert_eq!(settings.assets_dir, Some(PathBuf::from("web")));
        assert_eq!(settings.lang, "en");
        assert_eq!(settings.icon_base, "icons/");
        assert_eq!(settings.out_dir, PathBuf::from("build/web"));
        assert!(!settings.inline_icons);
    }

    #[test]
    fn loads_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "inline_icons": true, "out_dir": "dist" }"#).unwrap();

        let settings = load_settings(Some(&path));

        assert!(settings.inline_icons);
        assert_eq!(settings.manifest_path(), PathBuf::from("dist").join("manifest.json"));
    }

    #[test]
    fn unreadable_settings_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(load_settings(Some(&path)), BuildSettings::default());
        assert_eq!(
            load_settings(Some(&dir.path().join("absent.json"))),
            BuildSettings::default()
        );
    }
}
