//! Site configuration: dev-server binding, build-output conventions,
//! scroll-reveal overrides
//!
//! The dev server and the asset bundler are external collaborators. This
//! module only declares the contract they consume: where the dev server
//! listens, where built assets land, and how asset files are named. Asset
//! filenames are stable `name.ext` paths with no content hash, so anything
//! that caches by URL keeps working across builds.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::reveal::ScrollReveal;

/// Errors that can occur when loading or validating site configuration
#[derive(Error, Debug)]
pub enum SiteConfigError {
    #[error("Failed to read site config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse site config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("server port must be non-zero")]
    ZeroPort,
    #[error("base path must begin with '/', got '{0}'")]
    BadBasePath(String),
    #[error("assets directory must be a non-empty relative path, got '{0}'")]
    BadAssetsDir(String),
}

/// Development server binding, consumed by the external dev server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address; "0.0.0.0" listens on all interfaces
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5173,
        }
    }
}

impl ServerConfig {
    /// The socket address string for the dev server
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Build output conventions, consumed by the external bundler
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Public base path the site is served from
    pub base: String,
    /// Directory under the output root where built assets are written
    pub assets_dir: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            base: "/".to_string(),
            assets_dir: "assets".to_string(),
        }
    }
}

/// Complete site configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub server: ServerConfig,
    pub build: BuildConfig,
    pub reveal: ScrollReveal,
}

impl SiteConfig {
    /// Load site configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SiteConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load site configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SiteConfigError> {
        let parsed: SiteConfig = toml::from_str(content)?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Check binding and output-layout well-formedness
    pub fn validate(&self) -> Result<(), SiteConfigError> {
        if self.server.port == 0 {
            return Err(SiteConfigError::ZeroPort);
        }
        if !self.build.base.starts_with('/') {
            return Err(SiteConfigError::BadBasePath(self.build.base.clone()));
        }
        if self.build.assets_dir.is_empty() || self.build.assets_dir.starts_with('/') {
            return Err(SiteConfigError::BadAssetsDir(self.build.assets_dir.clone()));
        }
        Ok(())
    }

    /// Public URL for a built asset, under the base path and assets
    /// directory. Filenames are used as-is: `name.ext`, no content hash.
    pub fn asset_url(&self, file_name: &str) -> String {
        let base = self.build.base.trim_end_matches('/');
        format!("{}/{}/{}", base, self.build.assets_dir, file_name)
    }
}
