//! Link model for footer navigation
//!
//! Link lists are externally supplied content: labels and targets are fixed
//! at load time and never mutated afterwards. Targets come in three kinds:
//! site-internal paths, external URLs, and unresolved placeholders.

use serde::Deserialize;
use thiserror::Error;

/// Errors raised when loading or validating content
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read content file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse content TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("link in '{context}' has an empty label")]
    EmptyLabel { context: String },
    #[error("internal link '{label}' must target a path beginning with '/', got '{target}'")]
    BadInternalTarget { label: String, target: String },
    #[error("external link '{label}' must target an absolute URL, got '{target}'")]
    BadExternalTarget { label: String, target: String },
    #[error("footer requires exactly {expected} titled link columns, found {found}")]
    WrongColumnCount { expected: usize, found: usize },
}

/// Where a link points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Site-internal path, absolute from the site base (`/campaigns`)
    Internal(String),
    /// Fully qualified external URL
    External(String),
    /// Destination not yet decided; renders as `href="#"`
    Placeholder,
}

impl LinkTarget {
    pub fn internal(path: impl Into<String>) -> Self {
        LinkTarget::Internal(path.into())
    }

    pub fn external(url: impl Into<String>) -> Self {
        LinkTarget::External(url.into())
    }

    /// The anchor target this link renders with
    pub fn href(&self) -> &str {
        match self {
            LinkTarget::Internal(path) => path,
            LinkTarget::External(url) => url,
            LinkTarget::Placeholder => "#",
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, LinkTarget::Placeholder)
    }
}

impl From<String> for LinkTarget {
    fn from(raw: String) -> Self {
        if raw.is_empty() || raw == "#" {
            LinkTarget::Placeholder
        } else if raw.starts_with('/') {
            LinkTarget::Internal(raw)
        } else {
            LinkTarget::External(raw)
        }
    }
}

impl<'de> Deserialize<'de> for LinkTarget {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(String::deserialize(deserializer)?.into())
    }
}

/// A single navigation link: display label plus target
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub target: LinkTarget,
}

impl NavLink {
    pub fn new(label: impl Into<String>, target: LinkTarget) -> Self {
        Self {
            label: label.into(),
            target,
        }
    }

    /// Check label and target well-formedness
    pub fn validate(&self, context: &str) -> Result<(), ContentError> {
        if self.label.trim().is_empty() {
            return Err(ContentError::EmptyLabel {
                context: context.to_string(),
            });
        }
        match &self.target {
            LinkTarget::Internal(path) if path.is_empty() || !path.starts_with('/') => {
                Err(ContentError::BadInternalTarget {
                    label: self.label.clone(),
                    target: path.clone(),
                })
            }
            LinkTarget::External(url) if !url.contains("://") && !url.starts_with("mailto:") => {
                Err(ContentError::BadExternalTarget {
                    label: self.label.clone(),
                    target: url.clone(),
                })
            }
            _ => Ok(()),
        }
    }
}

/// Built-in social icon glyphs available to social links
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Twitter,
    Github,
    Discord,
}

/// A social link: label (screen-reader only), target, and icon glyph
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub target: LinkTarget,
    pub icon: SocialIcon,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_from_string() {
        assert_eq!(LinkTarget::from("/campaigns".to_string()), LinkTarget::internal("/campaigns"));
        assert_eq!(
            LinkTarget::from("https://example.com".to_string()),
            LinkTarget::external("https://example.com")
        );
        assert_eq!(LinkTarget::from("#".to_string()), LinkTarget::Placeholder);
        assert_eq!(LinkTarget::from(String::new()), LinkTarget::Placeholder);
    }

    #[test]
    fn test_placeholder_href() {
        assert_eq!(LinkTarget::Placeholder.href(), "#");
    }

    #[test]
    fn test_internal_href() {
        assert_eq!(LinkTarget::internal("/dashboard").href(), "/dashboard");
    }

    #[test]
    fn test_validate_empty_label() {
        let link = NavLink::new("  ", LinkTarget::internal("/"));
        assert!(matches!(
            link.validate("Navigation"),
            Err(ContentError::EmptyLabel { .. })
        ));
    }

    #[test]
    fn test_validate_bad_internal_target() {
        let link = NavLink {
            label: "Home".to_string(),
            target: LinkTarget::Internal("home".to_string()),
        };
        assert!(matches!(
            link.validate("Navigation"),
            Err(ContentError::BadInternalTarget { .. })
        ));
    }

    #[test]
    fn test_validate_bad_external_target() {
        let link = NavLink::new("Docs", LinkTarget::external("docs.example.com"));
        assert!(matches!(
            link.validate("Resources"),
            Err(ContentError::BadExternalTarget { .. })
        ));
    }

    #[test]
    fn test_validate_placeholder_is_ok() {
        let link = NavLink::new("Documentation", LinkTarget::Placeholder);
        assert!(link.validate("Resources").is_ok());
    }

    #[test]
    fn test_deserialize_nav_link() {
        let link: NavLink = toml::from_str(r#"label = "Home"
target = "/""#)
        .expect("Should parse");
        assert_eq!(link.label, "Home");
        assert_eq!(link.target, LinkTarget::internal("/"));
    }

    #[test]
    fn test_deserialize_social_icon() {
        let link: SocialLink = toml::from_str(
            r##"label = "GitHub"
target = "#"
icon = "github""##,
        )
        .expect("Should parse");
        assert_eq!(link.icon, SocialIcon::Github);
        assert!(link.target.is_placeholder());
    }
}
