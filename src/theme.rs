//! Theme system for site color palettes
//!
//! This module provides symbolic color tokens that can be resolved to
//! concrete values via TOML theme files, plus generation of the site
//! stylesheet from the resolved palette. This keeps the rendered markup
//! brand-agnostic: the same page can ship with different color schemes.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing themes
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse theme TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A theme mapping symbolic color tokens to concrete values
#[derive(Debug, Clone)]
pub struct Theme {
    /// Optional name for the theme
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: token name -> hex color
    pub colors: HashMap<String, String>,
}

/// TOML structure for deserializing themes
#[derive(Deserialize)]
struct TomlTheme {
    metadata: Option<TomlMetadata>,
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default palette - the CrowdFund dark footer scheme: near-black slate
/// backgrounds, muted gray text, indigo/purple accent pair
const DEFAULT_PALETTE: &str = r##"
[colors]
# Background colors
background-1 = "#111827"
background-2 = "#1f2937"

# Text colors
text-1 = "#d1d5db"
text-2 = "#9ca3af"
text-3 = "#6b7280"
text-light = "#ffffff"

# Accent colors (indigo primary, purple secondary for the brand gradient)
accent-1 = "#818cf8"
accent-2 = "#c084fc"
accent-dark = "#6366f1"

# Borders and dividers
border-1 = "#1f2937"
"##;

impl Theme {
    /// Load theme from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load theme from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ThemeError> {
        let parsed: TomlTheme = toml::from_str(content)?;

        Ok(Theme {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
        })
    }

    /// Resolve a symbolic color token to a concrete value
    ///
    /// Returns None if the token is not defined in this theme.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a symbolic color token with fallback to the default palette
    ///
    /// Fallback order:
    /// 1. Check this theme for the exact token
    /// 2. Check the default palette for the exact token
    /// 3. Use a category default (background → #111827, etc.)
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(color) = self.resolve(token) {
            return color.to_string();
        }

        let default = Self::default();
        if let Some(color) = default.resolve(token) {
            return color.to_string();
        }

        if token.starts_with("background") {
            return "#111827".to_string();
        }
        if token.starts_with("text") {
            return "#d1d5db".to_string();
        }
        if token.starts_with("accent") {
            return "#818cf8".to_string();
        }
        if token.starts_with("border") {
            return "#1f2937".to_string();
        }

        // Unknown category - fall back to body text
        "#d1d5db".to_string()
    }

    /// Generate the site stylesheet for this theme
    ///
    /// Emits `:root` custom properties for every token, then the footer
    /// layout and typography rules referencing them. The gradient brand mark
    /// carries the vendor-prefixed `background-clip` pair.
    pub fn css(&self, class_prefix: &str) -> String {
        let mut css = String::from(":root {\n");
        let mut tokens: Vec<(&String, &String)> = self.colors.iter().collect();
        tokens.sort();
        for (token, value) in tokens {
            css.push_str(&format!("  --{}: {};\n", token, value));
        }
        css.push_str("}\n");

        let p = class_prefix;
        css.push_str(&format!(
            r#".{p}footer {{
  background: var(--background-1);
  color: var(--text-1);
}}
.{p}footer-inner {{
  max-width: 80rem;
  margin: 0 auto;
  padding: 3rem 1.5rem;
}}
.{p}footer-grid {{
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 2rem;
}}
@media (min-width: 768px) {{
  .{p}footer-grid {{
    grid-template-columns: repeat(4, minmax(0, 1fr));
  }}
}}
.{p}brand-mark {{
  font-size: 1.5rem;
  font-weight: 700;
  background-image: linear-gradient(to right, var(--accent-1), var(--accent-2));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}}
.{p}tagline {{
  font-size: 0.875rem;
  line-height: 1.5rem;
}}
.{p}social-row {{
  display: flex;
  gap: 1.5rem;
}}
.{p}social-link {{
  color: var(--text-2);
  transition: color 0.15s ease;
}}
.{p}social-link:hover {{
  color: var(--accent-1);
}}
.{p}column-title {{
  font-size: 0.875rem;
  font-weight: 600;
  line-height: 1.5rem;
  color: var(--text-light);
}}
.{p}footer-link {{
  font-size: 0.875rem;
  color: var(--text-1);
  transition: color 0.15s ease;
}}
.{p}footer-link:hover {{
  color: var(--accent-1);
}}
.{p}copyright-bar {{
  margin-top: 4rem;
  padding-top: 2rem;
  border-top: 1px solid var(--border-1);
  display: flex;
  flex-direction: column;
  justify-content: space-between;
  align-items: center;
}}
@media (min-width: 768px) {{
  .{p}copyright-bar {{
    flex-direction: row;
  }}
}}
.{p}copyright {{
  font-size: 0.75rem;
  color: var(--text-3);
}}
.{p}copyright-link {{
  font-size: 0.75rem;
  color: var(--text-3);
  transition: color 0.15s ease;
}}
.{p}copyright-link:hover {{
  color: var(--accent-1);
}}
.{p}sr-only {{
  position: absolute;
  width: 1px;
  height: 1px;
  padding: 0;
  margin: -1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
  border-width: 0;
}}
"#
        ));

        css
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}
