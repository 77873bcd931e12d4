use std::path::{Path, PathBuf};

use crate::validate::ValidationReport;

#[derive(Debug, thiserror::Error)]
pub enum BrandingError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid branding descriptor: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("failed to serialize to JSON: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("cannot read image header of {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("asset {path:?} not found in {}", .assets_dir.display())]
    AssetNotFound { path: String, assets_dir: PathBuf },

    #[error("inlining icons requires an asset directory")]
    MissingAssetDir,

    #[error("branding descriptor failed validation:\n{0}")]
    Invalid(ValidationReport),
}

impl BrandingError {
    pub(crate) fn io(path: &Path) -> impl FnOnce(std::io::Error) -> BrandingError + '_ {
        move |source| BrandingError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, BrandingError>;
