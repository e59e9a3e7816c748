//! Built-site output
//!
//! Writes the rendered document and generated stylesheet to disk under the
//! configured layout: `index.html` at the output root, everything else under
//! the assets directory with stable `name.ext` filenames.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::page::STYLESHEET_ASSET;
use crate::site::SiteConfig;

/// Errors while writing site output
#[derive(Error, Debug)]
pub enum DistError {
    #[error("Failed to write site output: {0}")]
    IoError(#[from] std::io::Error),
}

/// The files a site build produces
#[derive(Debug, Clone)]
pub struct SiteArtifacts {
    /// Complete host document
    pub index_html: String,
    /// Generated theme stylesheet
    pub stylesheet: String,
}

/// Write the built site under `out_dir`, returning the paths written
pub fn write_site(
    out_dir: &Path,
    artifacts: &SiteArtifacts,
    site: &SiteConfig,
) -> Result<Vec<PathBuf>, DistError> {
    let assets_dir = out_dir.join(&site.build.assets_dir);
    std::fs::create_dir_all(&assets_dir)?;

    let index_path = out_dir.join("index.html");
    std::fs::write(&index_path, &artifacts.index_html)?;

    let css_path = assets_dir.join(STYLESHEET_ASSET);
    std::fs::write(&css_path, &artifacts.stylesheet)?;

    info!(
        out = %out_dir.display(),
        files = 2,
        "site written"
    );

    Ok(vec![index_path, css_path])
}
