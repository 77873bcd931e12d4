use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Static identity and theming record of the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BrandingDescriptor {
    pub app_name: Cow<'static, str>,
    pub app_description: Cow<'static, str>,
    pub app_version: Cow<'static, str>,
    pub icons: IconSet,
    pub colors: ColorPalette,
    pub manifest: WebManifest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IconRole {
    Favicon,
    FaviconIco,
    AppleTouch,
    Android,
    Web,
}

impl IconRole {
    pub const ALL: [IconRole; 5] = [
        IconRole::Favicon,
        IconRole::FaviconIco,
        IconRole::AppleTouch,
        IconRole::Android,
        IconRole::Web,
    ];

    /// Key used for this role in the JSON descriptor.
    pub fn key(&self) -> &'static str {
        match self {
            IconRole::Favicon => "favicon",
            IconRole::FaviconIco => "faviconIco",
            IconRole::AppleTouch => "appleTouch",
            IconRole::Android => "android",
            IconRole::Web => "web",
        }
    }
}

impl fmt::Display for IconRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Icon file names, relative to the asset bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IconSet {
    pub favicon: Cow<'static, str>,
    pub favicon_ico: Cow<'static, str>,
    pub apple_touch: Cow<'static, str>,
    pub android: Cow<'static, str>,
    pub web: Cow<'static, str>,
}

impl IconSet {
    pub fn get(&self, role: IconRole) -> &str {
        match role {
            IconRole::Favicon => &self.favicon,
            IconRole::FaviconIco => &self.favicon_ico,
            IconRole::AppleTouch => &self.apple_touch,
            IconRole::Android => &self.android,
            IconRole::Web => &self.web,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (IconRole, &str)> + '_ {
        IconRole::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorRole {
    Primary,
    Accent,
    Background,
    Theme,
}

impl ColorRole {
    pub const ALL: [ColorRole; 4] = [
        ColorRole::Primary,
        ColorRole::Accent,
        ColorRole::Background,
        ColorRole::Theme,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Accent => "accent",
            ColorRole::Background => "background",
            ColorRole::Theme => "theme",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorPalette {
    pub primary: HexColor,
    pub accent: HexColor,
    pub background: HexColor,
    pub theme: HexColor,
}

impl ColorPalette {
    pub fn get(&self, role: ColorRole) -> HexColor {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::Accent => self.accent,
            ColorRole::Background => self.background,
            ColorRole::Theme => self.theme,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, HexColor)> + '_ {
        ColorRole::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}

/// Fields mirrored into the generated web app manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebManifest {
    pub name: Cow<'static, str>,
    pub short_name: Cow<'static, str>,
    pub description: Cow<'static, str>,
    pub start_url: Cow<'static, str>,
    pub display: DisplayMode,
    pub background_color: HexColor,
    pub theme_color: HexColor,
    pub orientation: Orientation,
    pub prefer_related_applications: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    Fullscreen,
    Standalone,
    MinimalUi,
    Browser,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 4] = [
        DisplayMode::Fullscreen,
        DisplayMode::Standalone,
        DisplayMode::MinimalUi,
        DisplayMode::Browser,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Fullscreen => "fullscreen",
            DisplayMode::Standalone => "standalone",
            DisplayMode::MinimalUi => "minimal-ui",
            DisplayMode::Browser => "browser",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Screen orientation values accepted by the W3C manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    Any,
    Natural,
    Landscape,
    LandscapePrimary,
    LandscapeSecondary,
    Portrait,
    PortraitPrimary,
    PortraitSecondary,
}

impl Orientation {
    pub const ALL: [Orientation; 8] = [
        Orientation::Any,
        Orientation::Natural,
        Orientation::Landscape,
        Orientation::LandscapePrimary,
        Orientation::LandscapeSecondary,
        Orientation::Portrait,
        Orientation::PortraitPrimary,
        Orientation::PortraitSecondary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Any => "any",
            Orientation::Natural => "natural",
            Orientation::Landscape => "landscape",
            Orientation::LandscapePrimary => "landscape-primary",
            Orientation::LandscapeSecondary => "landscape-secondary",
            Orientation::Portrait => "portrait",
            Orientation::PortraitPrimary => "portrait-primary",
            Orientation::PortraitSecondary => "portrait-secondary",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HexColorError {
    #[error("expected 7 characters in the form #RRGGBB")]
    WrongLength,
    #[error("color must start with '#'")]
    MissingHash,
    #[error("color contains a non-hexadecimal digit")]
    InvalidDigit,
}

/// An opaque sRGB color written as `#RRGGBB`.
///
/// Parsing accepts either case; formatting always emits uppercase digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn parse(s: &str) -> Result<Self, HexColorError> {
        let bytes = s.as_bytes();
        if bytes.len() != 7 {
            return Err(HexColorError::WrongLength);
        }
        if bytes[0] != b'#' {
            return Err(HexColorError::MissingHash);
        }
        let r = match hex_pair(bytes[1], bytes[2]) {
            Some(v) => v,
            None => return Err(HexColorError::InvalidDigit),
        };
        let g = match hex_pair(bytes[3], bytes[4]) {
            Some(v) => v,
            None => return Err(HexColorError::InvalidDigit),
        };
        let b = match hex_pair(bytes[5], bytes[6]) {
            Some(v) => v,
            None => return Err(HexColorError::InvalidDigit),
        };
        Ok(Self { r, g, b })
    }

    /// Parses a color literal in a const context. A malformed literal in a
    /// `const` or `static` initializer fails compilation.
    pub const fn from_literal(s: &str) -> Self {
        match Self::parse(s) {
            Ok(color) => color,
            Err(_) => panic!("malformed #RRGGBB color literal"),
        }
    }

    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

const fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

const fn hex_pair(hi: u8, lo: u8) -> Option<u8> {
    match (hex_digit(hi), hex_digit(lo)) {
        (Some(h), Some(l)) => Some(h * 16 + l),
        _ => None,
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Cow::<'de, str>::deserialize(deserializer)?;
        HexColor::parse(&raw)
            .map_err(|e| serde::de::Error::custom(format!("invalid color {:?}: {}", raw, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_either_case_and_prints_uppercase() {
        let lower: HexColor = "#4caf50".parse().unwrap();
        let upper: HexColor = "#4CAF50".parse().unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.rgb(), (0x4C, 0xAF, 0x50));
        assert_eq!(lower.to_string(), "#4CAF50");
    }

    #[test]
    fn rejects_malformed_colors() {
        assert_eq!(HexColor::parse("#FFF"), Err(HexColorError::WrongLength));
        assert_eq!(HexColor::parse("4CAF50F"), Err(HexColorError::MissingHash));
        assert_eq!(HexColor::parse("#4CAG50"), Err(HexColorError::InvalidDigit));
        assert_eq!(HexColor::parse(""), Err(HexColorError::WrongLength));
    }

    #[test]
    fn color_deserialization_reports_the_bad_value() {
        let err = serde_json::from_str::<HexColor>("\"green\"").unwrap_err();
        assert!(err.to_string().contains("\"green\""));
    }

    #[test]
    fn display_modes_use_manifest_spelling() {
        let json = serde_json::to_string(&DisplayMode::MinimalUi).unwrap();
        assert_eq!(json, "\"minimal-ui\"");
        for mode in DisplayMode::ALL {
            let parsed: DisplayMode =
                serde_json::from_str(&format!("\"{}\"", mode.as_str())).unwrap();
            assert_eq!(parsed, mode);
        }
        assert!(serde_json::from_str::<DisplayMode>("\"kiosk\"").is_err());
    }

    #[test]
    fn orientations_use_manifest_spelling() {
        for orientation in Orientation::ALL {
            let json = serde_json::to_string(&orientation).unwrap();
            assert_eq!(json, format!("\"{}\"", orientation.as_str()));
        }
        assert!(serde_json::from_str::<Orientation>("\"upside-down\"").is_err());
    }

    #[test]
    fn icon_roles_match_descriptor_keys() {
        for role in IconRole::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.key()));
        }
    }
}
