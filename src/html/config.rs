//! Configuration for HTML output

/// Configuration options for HTML generation
#[derive(Debug, Clone)]
pub struct HtmlConfig {
    /// Whether to emit the `<!DOCTYPE html>` declaration on full documents
    pub doctype: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "cf-" for "cf-footer")
    pub class_prefix: Option<String>,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            doctype: true,
            pretty_print: true,
            class_prefix: Some("cf-".to_string()),
        }
    }
}

impl HtmlConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether full documents include the doctype declaration
    pub fn with_doctype(mut self, doctype: bool) -> Self {
        self.doctype = doctype;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HtmlConfig::default();
        assert!(config.doctype);
        assert!(config.pretty_print);
        assert_eq!(config.class_prefix, Some("cf-".to_string()));
    }

    #[test]
    fn test_builder_pattern() {
        let config = HtmlConfig::new()
            .with_doctype(false)
            .with_pretty_print(false)
            .with_class_prefix("my-");

        assert!(!config.doctype);
        assert!(!config.pretty_print);
        assert_eq!(config.class_prefix, Some("my-".to_string()));
    }
}
