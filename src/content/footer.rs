//! Footer content: brand block, titled link columns, copyright-row links
//!
//! The footer body is a brand column plus exactly three titled link columns,
//! four content columns in total, followed by a copyright bar with its own
//! small link list. All of it is data fixed at load time; the built-in
//! default is the CrowdFund site content.

use std::path::Path;

use serde::Deserialize;

use super::links::{ContentError, NavLink, SocialLink};

/// Number of titled link columns next to the brand column
pub const TITLED_COLUMNS: usize = 3;

/// Brand block: site name, tagline, and the social icon row
#[derive(Debug, Clone, Deserialize)]
pub struct BrandInfo {
    pub name: String,
    /// Name used in the copyright line ("CrowdFund DApp"); falls back to
    /// `name` when absent
    #[serde(default)]
    pub legal_name: String,
    pub tagline: String,
    pub social: Vec<SocialLink>,
}

impl BrandInfo {
    /// The name shown in the copyright line
    pub fn copyright_name(&self) -> &str {
        if self.legal_name.is_empty() {
            &self.name
        } else {
            &self.legal_name
        }
    }
}

/// A titled list of links (Navigation, Resources, Legal)
#[derive(Debug, Clone, Deserialize)]
pub struct LinkColumn {
    pub title: String,
    pub links: Vec<NavLink>,
}

/// Complete footer content
#[derive(Debug, Clone, Deserialize)]
pub struct FooterContent {
    pub brand: BrandInfo,
    pub columns: Vec<LinkColumn>,
    /// Secondary links shown in the copyright bar
    pub copyright_links: Vec<NavLink>,
}

/// Built-in content: the CrowdFund site footer. Placeholder targets are
/// intentionally unresolved.
const DEFAULT_CONTENT: &str = r##"
copyright_links = [
    { label = "Privacy Policy", target = "#" },
    { label = "Terms of Service", target = "#" },
    { label = "Cookie Policy", target = "#" },
]

[brand]
name = "CrowdFund"
legal_name = "CrowdFund DApp"
tagline = "The world's most trusted decentralized crowdfunding platform for innovators and changemakers."
social = [
    { label = "Twitter", target = "#", icon = "twitter" },
    { label = "GitHub", target = "#", icon = "github" },
    { label = "Discord", target = "#", icon = "discord" },
]

[[columns]]
title = "Navigation"
links = [
    { label = "Home", target = "/" },
    { label = "Browse Campaigns", target = "/campaigns" },
    { label = "Dashboard", target = "/dashboard" },
    { label = "Start a Campaign", target = "/create-campaign" },
]

[[columns]]
title = "Resources"
links = [
    { label = "Documentation", target = "#" },
    { label = "How it Works", target = "#" },
    { label = "Creator Handbook", target = "#" },
    { label = "Support Center", target = "#" },
]

[[columns]]
title = "Legal"
links = [
    { label = "Privacy Policy", target = "#" },
    { label = "Terms of Service", target = "#" },
    { label = "Cookie Policy", target = "#" },
    { label = "Disclaimer", target = "#" },
]
"##;

impl FooterContent {
    /// Load footer content from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ContentError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load footer content from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ContentError> {
        let parsed: FooterContent = toml::from_str(content)?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Total content columns: brand block plus the titled columns
    pub fn column_count(&self) -> usize {
        1 + self.columns.len()
    }

    /// Check column shape and every link in every list
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.columns.len() != TITLED_COLUMNS {
            return Err(ContentError::WrongColumnCount {
                expected: TITLED_COLUMNS,
                found: self.columns.len(),
            });
        }
        for social in &self.brand.social {
            NavLink::new(social.label.clone(), social.target.clone()).validate("brand")?;
        }
        for column in &self.columns {
            for link in &column.links {
                link.validate(&column.title)?;
            }
        }
        for link in &self.copyright_links {
            link.validate("copyright")?;
        }
        Ok(())
    }
}

impl Default for FooterContent {
    fn default() -> Self {
        Self::from_str(DEFAULT_CONTENT).expect("Default footer content should be valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::links::LinkTarget;

    #[test]
    fn test_default_content_shape() {
        let content = FooterContent::default();
        assert_eq!(content.column_count(), 4);
        assert_eq!(content.brand.social.len(), 3);
        assert_eq!(content.copyright_links.len(), 3);
    }

    #[test]
    fn test_default_navigation_targets() {
        let content = FooterContent::default();
        let nav = &content.columns[0];
        assert_eq!(nav.title, "Navigation");
        let targets: Vec<&str> = nav.links.iter().map(|l| l.target.href()).collect();
        assert_eq!(targets, vec!["/", "/campaigns", "/dashboard", "/create-campaign"]);
    }

    #[test]
    fn test_default_internal_targets_are_absolute() {
        let content = FooterContent::default();
        for column in &content.columns {
            for link in &column.links {
                if let LinkTarget::Internal(path) = &link.target {
                    assert!(path.starts_with('/'), "{} is not absolute", path);
                    assert!(!path.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_default_resources_are_placeholders() {
        let content = FooterContent::default();
        assert!(content.columns[1].links.iter().all(|l| l.target.is_placeholder()));
        assert!(content.columns[2].links.iter().all(|l| l.target.is_placeholder()));
    }

    #[test]
    fn test_wrong_column_count_rejected() {
        let toml_str = r#"
copyright_links = []

[brand]
name = "X"
tagline = "Y"
social = []

[[columns]]
title = "Only"
links = []
"#;
        let result = FooterContent::from_str(toml_str);
        assert!(matches!(
            result,
            Err(ContentError::WrongColumnCount { expected: 3, found: 1 })
        ));
    }

    #[test]
    fn test_custom_content_parses() {
        let toml_str = r#"
copyright_links = []

[brand]
name = "Acme"
tagline = "Things"
social = [{ label = "GitHub", target = "https://github.com/acme", icon = "github" }]

[[columns]]
title = "A"
links = [{ label = "Home", target = "/" }]

[[columns]]
title = "B"
links = []

[[columns]]
title = "C"
links = []
"#;
        let content = FooterContent::from_str(toml_str).expect("Should parse");
        assert_eq!(content.brand.name, "Acme");
        assert_eq!(content.column_count(), 4);
    }

    #[test]
    fn test_bad_link_rejected_at_load() {
        let toml_str = r#"
copyright_links = []

[brand]
name = "Acme"
tagline = "Things"
social = []

[[columns]]
title = "A"
links = [{ label = "", target = "/" }]

[[columns]]
title = "B"
links = []

[[columns]]
title = "C"
links = []
"#;
        assert!(matches!(
            FooterContent::from_str(toml_str),
            Err(ContentError::EmptyLabel { .. })
        ));
    }
}
