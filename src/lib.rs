//! CrowdFund Site - static page renderer for the CrowdFund platform frontend
//!
//! This library turns declarative content (link lists, brand copy), a color
//! theme, and a scroll-reveal configuration into rendered HTML, and writes
//! the built site to disk under stable asset-layout conventions.
//!
//! # Example
//!
//! ```rust
//! use crowdfund_site::render_footer;
//!
//! let html = render_footer().unwrap();
//! assert!(html.contains("<footer"));
//! ```

pub mod app;
pub mod content;
pub mod dist;
pub mod html;
pub mod page;
pub mod reveal;
pub mod site;
pub mod theme;

use chrono::Datelike;
use thiserror::Error;

pub use app::{bootstrap, mount, BootstrapError, MountError, MOUNT_ID};
pub use content::{ContentError, FooterContent, LinkTarget, NavLink};
pub use dist::{write_site, DistError, SiteArtifacts};
pub use html::{HtmlConfig, HtmlError};
pub use reveal::{Easing, RevealError, ScrollReveal};
pub use site::{SiteConfig, SiteConfigError};
pub use theme::Theme;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Content failed validation
    #[error("content error: {0}")]
    Content(#[from] ContentError),

    /// Markup generation produced an unbalanced tree
    #[error("markup error: {0}")]
    Html(#[from] HtmlError),

    /// The generated shell lost its mount point
    #[error("mount error: {0}")]
    Mount(#[from] MountError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Footer content
    pub content: FooterContent,
    /// Color theme for stylesheet generation
    pub theme: Theme,
    /// HTML output configuration
    pub html: HtmlConfig,
    /// Document title
    pub title: String,
    /// Copyright year override; the host clock's current year when None
    pub copyright_year: Option<i32>,
    /// Debug mode: print the content tree to stderr
    pub debug: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            content: FooterContent::default(),
            theme: Theme::default(),
            html: HtmlConfig::default(),
            title: "CrowdFund".to_string(),
            copyright_year: None,
            debug: false,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the footer content
    pub fn with_content(mut self, content: FooterContent) -> Self {
        self.content = content;
        self
    }

    /// Set the color theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the HTML output configuration
    pub fn with_html(mut self, config: HtmlConfig) -> Self {
        self.html = config;
        self
    }

    /// Set the document title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Pin the copyright year instead of reading the host clock
    pub fn with_copyright_year(mut self, year: i32) -> Self {
        self.copyright_year = Some(year);
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// The current calendar year from the host clock
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Render the footer fragment with default configuration
///
/// This is the main entry point for the library: built-in content, default
/// theme classes, and the current year in the copyright line.
///
/// # Example
///
/// ```rust
/// use crowdfund_site::render_footer;
///
/// let html = render_footer().unwrap();
/// assert!(html.contains("Browse Campaigns"));
/// assert!(html.contains(r#"href="/campaigns""#));
/// ```
pub fn render_footer() -> Result<String, RenderError> {
    render_footer_with_config(&RenderConfig::default())
}

/// Render the footer fragment with custom configuration
pub fn render_footer_with_config(config: &RenderConfig) -> Result<String, RenderError> {
    config.content.validate()?;

    if config.debug {
        eprintln!("=== Content Debug ===");
        eprintln!(
            "[brand] {} ({} social links)",
            config.content.brand.name,
            config.content.brand.social.len()
        );
        for column in &config.content.columns {
            eprintln!("[{}] {} links", column.title, column.links.len());
        }
        eprintln!("[copyright] {} links", config.content.copyright_links.len());
        eprintln!("=====================");
    }

    let year = config.copyright_year.unwrap_or_else(current_year);
    let fragment = page::render_footer(&config.content, &config.html, year)?;
    Ok(fragment)
}

/// Render the complete page document
///
/// Builds the host shell (head, stylesheet links, empty mount point, reveal
/// engine hookup) and splices the rendered application tree into it. The
/// process-global reveal install is untouched; use [`bootstrap`] for
/// one-time startup semantics.
pub fn render_page(config: &RenderConfig, site: &SiteConfig) -> Result<String, RenderError> {
    let shell = page::host_document(&config.title, &site.reveal, site, &config.html)?;
    let fragment = render_footer_with_config(config)?;
    Ok(mount(&shell, MOUNT_ID, &fragment)?)
}

/// Build the artifacts for a site write: page document plus stylesheet
pub fn build_artifacts(
    config: &RenderConfig,
    site: &SiteConfig,
) -> Result<SiteArtifacts, RenderError> {
    Ok(SiteArtifacts {
        index_html: render_page(config, site)?,
        stylesheet: config
            .theme
            .css(config.html.class_prefix.as_deref().unwrap_or_default()),
    })
}
