//! HTML `<head>` tags and CSS custom properties derived from the branding.

use crate::descriptor::{BrandingDescriptor, ColorPalette};
use crate::manifest::{asset_href, mime_type_for, DEFAULT_ICON_BASE, MANIFEST_FILE_NAME};

#[derive(Debug, Clone, Copy)]
pub struct HeadOptions<'a> {
    /// Prefix for app icons (apple touch icon).
    pub icon_base: &'a str,
    /// Prefix for favicons, which live at the bundle root by default.
    pub favicon_base: &'a str,
    pub manifest_href: &'a str,
}

impl Default for HeadOptions<'_> {
    fn default() -> Self {
        Self {
            icon_base: DEFAULT_ICON_BASE,
            favicon_base: "",
            manifest_href: MANIFEST_FILE_NAME,
        }
    }
}

pub fn render_head(descriptor: &BrandingDescriptor, options: &HeadOptions<'_>) -> String {
    let icons = &descriptor.icons;
    let mut tags = vec![
        format!("<title>{}</title>", html_escape(&descriptor.app_name)),
        meta("description", &descriptor.app_description),
        meta("theme-color", &descriptor.manifest.theme_color.to_string()),
        meta("apple-mobile-web-app-capable", "yes"),
        meta("apple-mobile-web-app-title", &descriptor.app_name),
    ];

    for favicon in [&icons.favicon, &icons.favicon_ico] {
        if favicon.is_empty() {
            continue;
        }
        let href = asset_href(options.favicon_base, favicon);
        tags.push(match mime_type_for(favicon) {
            Some(mime) => format!(
                r#"<link rel="icon" type="{}" href="{}">"#,
                mime,
                html_escape(&href)
            ),
            None => format!(r#"<link rel="icon" href="{}">"#, html_escape(&href)),
        });
    }

    if !icons.apple_touch.is_empty() {
        tags.push(format!(
            r#"<link rel="apple-touch-icon" href="{}">"#,
            html_escape(&asset_href(options.icon_base, &icons.apple_touch))
        ));
    }
    tags.push(format!(
        r#"<link rel="manifest" href="{}">"#,
        html_escape(options.manifest_href)
    ));

    let mut out = tags.join("\n");
    out.push('\n');
    out
}

pub fn render_css_variables(palette: &ColorPalette) -> String {
    let mut css = String::from(":root {\n");
    for (role, color) in palette.iter() {
        let (r, g, b) = color.rgb();
        css.push_str(&format!("  --color-{}: {};\n", role, color));
        css.push_str(&format!("  --color-{}-rgb: {}, {}, {};\n", role, r, g, b));
    }
    css.push_str("}\n");
    css
}

fn meta(name: &str, content: &str) -> String {
    format!(
        r#"<meta name="{}" content="{}">"#,
        name,
        html_escape(content)
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
