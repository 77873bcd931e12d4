use std::borrow::Cow;

use crate::descriptor::{
    BrandingDescriptor, ColorPalette, DisplayMode, HexColor, IconSet, Orientation, WebManifest,
};

// App identity
pub const APP_NAME: &str = "Veg'N Bio";
pub const APP_SHORT_NAME: &str = "VegnBio";
pub const APP_DESCRIPTION: &str =
    "Application Veg'N Bio pour la restauration bio et végétarienne";
pub const APP_VERSION: &str = "1.0.0";

// Brand colors
pub const COLOR_PRIMARY: HexColor = HexColor::from_literal("#4CAF50");
pub const COLOR_ACCENT: HexColor = HexColor::from_literal("#81C784");
pub const COLOR_BACKGROUND: HexColor = HexColor::from_literal("#FFFFFF");

/// The application's branding, fixed at compile time.
pub static BRANDING: BrandingDescriptor = BrandingDescriptor {
    app_name: Cow::Borrowed(APP_NAME),
    app_description: Cow::Borrowed(APP_DESCRIPTION),
    app_version: Cow::Borrowed(APP_VERSION),
    icons: IconSet {
        favicon: Cow::Borrowed("favicon.png"),
        favicon_ico: Cow::Borrowed("favicon.ico"),
        apple_touch: Cow::Borrowed("Icon-192.png"),
        android: Cow::Borrowed("Icon-192.png"),
        web: Cow::Borrowed("Icon-512.png"),
    },
    colors: ColorPalette {
        primary: COLOR_PRIMARY,
        accent: COLOR_ACCENT,
        background: COLOR_BACKGROUND,
        theme: COLOR_PRIMARY,
    },
    manifest: WebManifest {
        name: Cow::Borrowed(APP_NAME),
        short_name: Cow::Borrowed(APP_SHORT_NAME),
        description: Cow::Borrowed(APP_DESCRIPTION),
        start_url: Cow::Borrowed("."),
        display: DisplayMode::Standalone,
        background_color: COLOR_PRIMARY,
        theme_color: COLOR_PRIMARY,
        orientation: Orientation::PortraitPrimary,
        prefer_related_applications: false,
    },
};
