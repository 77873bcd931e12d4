//! Build-time checks for a [`BrandingDescriptor`].
//!
//! Colors, display modes and orientations are enforced by the descriptor
//! types when JSON is parsed. This module covers what the types cannot:
//! empty strings, the version format, and icon files in the asset bundle.

use serde::Serialize;
use std::fmt;
use std::path::{Component, Path};

use crate::descriptor::{BrandingDescriptor, HexColor, IconRole};
use crate::error::{BrandingError, Result};
use crate::persist::resolve_asset;

/// Launchers truncate longer short names under the icon.
pub const MAX_SHORT_NAME_LEN: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    EmptyField {
        field: &'static str,
    },
    InvalidVersion {
        version: String,
        reason: String,
    },
    EmptyIcon {
        role: IconRole,
    },
    IconOutsideBundle {
        role: IconRole,
        path: String,
    },
    MissingAsset {
        role: IconRole,
        path: String,
    },
    ShortNameTooLong {
        short_name: String,
        len: usize,
    },
    ThemeColorMismatch {
        manifest: HexColor,
        palette: HexColor,
    },
}

impl ValidationIssue {
    pub fn severity(&self) -> Severity {
        match self {
            ValidationIssue::ShortNameTooLong { .. }
            | ValidationIssue::ThemeColorMismatch { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::EmptyField { field } => write!(f, "{} is empty", field),
            ValidationIssue::InvalidVersion { version, reason } => {
                write!(f, "appVersion {:?} is not a semantic version: {}", version, reason)
            }
            ValidationIssue::EmptyIcon { role } => write!(f, "icons.{} has no file name", role),
            ValidationIssue::IconOutsideBundle { role, path } => {
                write!(f, "icons.{} {:?} points outside the asset bundle", role, path)
            }
            ValidationIssue::MissingAsset { role, path } => {
                write!(f, "icons.{} {:?} does not exist in the asset bundle", role, path)
            }
            ValidationIssue::ShortNameTooLong { short_name, len } => write!(
                f,
                "manifest.short_name {:?} has {} characters, launchers may truncate past {}",
                short_name, len, MAX_SHORT_NAME_LEN
            ),
            ValidationIssue::ThemeColorMismatch { manifest, palette } => write!(
                f,
                "manifest.theme_color {} differs from colors.theme {}",
                manifest, palette
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity() == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity() == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// True when no error-level issue was found. Warnings do not fail a build.
    pub fn is_ok(&self) -> bool {
        self.error_count() == 0
    }

    pub fn into_result(self) -> Result<()> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(BrandingError::Invalid(self))
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for issue in &self.issues {
            let label = match issue.severity() {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            writeln!(f, "{}: {}", label, issue)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateOptions<'a> {
    /// When set, every icon must resolve to a file in this directory.
    pub assets_dir: Option<&'a Path>,
}

pub fn validate(
    descriptor: &BrandingDescriptor,
    options: &ValidateOptions<'_>,
) -> ValidationReport {
    let mut issues = Vec::new();

    let required = [
        ("appName", &descriptor.app_name),
        ("appDescription", &descriptor.app_description),
        ("manifest.name", &descriptor.manifest.name),
        ("manifest.short_name", &descriptor.manifest.short_name),
        ("manifest.start_url", &descriptor.manifest.start_url),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            issues.push(ValidationIssue::EmptyField { field });
        }
    }

    if let Err(e) = semver::Version::parse(&descriptor.app_version) {
        issues.push(ValidationIssue::InvalidVersion {
            version: descriptor.app_version.to_string(),
            reason: e.to_string(),
        });
    }

    for (role, path) in descriptor.icons.iter() {
        if path.trim().is_empty() {
            issues.push(ValidationIssue::EmptyIcon { role });
            continue;
        }
        if !stays_in_bundle(path) {
            issues.push(ValidationIssue::IconOutsideBundle {
                role,
                path: path.to_string(),
            });
            continue;
        }
        if let Some(assets_dir) = options.assets_dir {
            if resolve_asset(assets_dir, path).is_none() {
                issues.push(ValidationIssue::MissingAsset {
                    role,
                    path: path.to_string(),
                });
            }
        }
    }

    let short_len = descriptor.manifest.short_name.chars().count();
    if short_len > MAX_SHORT_NAME_LEN {
        issues.push(ValidationIssue::ShortNameTooLong {
            short_name: descriptor.manifest.short_name.to_string(),
            len: short_len,
        });
    }

    if descriptor.manifest.theme_color != descriptor.colors.theme {
        issues.push(ValidationIssue::ThemeColorMismatch {
            manifest: descriptor.manifest.theme_color,
            palette: descriptor.colors.theme,
        });
    }

    for issue in &issues {
        log::debug!(target: "branding.validate", "{}", issue);
    }
    let report = ValidationReport { issues };
    log::info!(
        target: "branding.validate",
        "Validated {}: {} error(s), {} warning(s)",
        descriptor.app_name,
        report.error_count(),
        report.warnings().count()
    );
    report
}

/// Relative paths only, with no `..` hop out of the bundle root.
fn stays_in_bundle(path: &str) -> bool {
    Path::new(path)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
