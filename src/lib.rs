//! Branding for the Veg'N Bio mobile and web app.
//!
//! [`BRANDING`] is the single source of truth for the app name, icon files,
//! color palette and web manifest fields. The other modules consume it:
//! [`validate`] checks it against an asset bundle, [`manifest`] renders
//! `manifest.json` and [`head`] renders HTML head tags and CSS variables.

pub mod constants;
pub mod descriptor;
pub mod error;
pub mod head;
pub mod manifest;
pub mod persist;
pub mod settings;
pub mod validate;

pub use constants::BRANDING;
pub use descriptor::{
    BrandingDescriptor, ColorPalette, ColorRole, DisplayMode, HexColor, HexColorError, IconRole,
    IconSet, Orientation, WebManifest,
};
pub use error::{BrandingError, Result};

pub fn branding() -> &'static BrandingDescriptor {
    &BRANDING
}
