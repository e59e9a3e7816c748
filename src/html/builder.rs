//! Incremental HTML generation
//!
//! This module builds HTML fragments element by element, mirroring the
//! document tree with an open-tag stack. Output is either pretty-printed
//! with two-space indentation or emitted as a single line.

use thiserror::Error;

use super::HtmlConfig;

/// Errors produced when a builder is finalized with a malformed tree
#[derive(Error, Debug, PartialEq)]
pub enum HtmlError {
    #[error("unclosed element <{0}> at end of fragment")]
    UnclosedElement(String),
    #[error("end() called with no open element")]
    UnbalancedEnd,
}

/// Build HTML elements incrementally
pub struct HtmlBuilder {
    config: HtmlConfig,
    lines: Vec<String>,
    open: Vec<String>,
    indent: usize,
    underflow: bool,
}

impl HtmlBuilder {
    /// Create a new HTML builder
    pub fn new(config: HtmlConfig) -> Self {
        Self {
            config,
            lines: vec![],
            open: vec![],
            indent: 0,
            underflow: false,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    /// Join base class names (run through the configured prefix) with
    /// caller-supplied extras into a class attribute value
    pub fn class_list(&self, bases: &[&str], extra: &[String]) -> String {
        let prefix = self.prefix();
        bases
            .iter()
            .map(|b| format!("{}{}", prefix, b))
            .chain(extra.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Open a container element; must be paired with a later `end()`
    pub fn start(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.lines
            .push(format!("{}<{}{}>", self.indent_str(), tag, fmt_attrs(attrs)));
        self.open.push(tag.to_string());
        self.indent += 1;
    }

    /// Close the most recently opened element
    pub fn end(&mut self) {
        match self.open.pop() {
            Some(tag) => {
                self.indent = self.indent.saturating_sub(1);
                self.lines.push(format!("{}</{}>", self.indent_str(), tag));
            }
            None => {
                self.underflow = true;
            }
        }
    }

    /// Add a self-closing element (HTML voids and SVG leaf nodes)
    pub fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.lines
            .push(format!("{}<{}{} />", self.indent_str(), tag, fmt_attrs(attrs)));
    }

    /// Add an escaped text node
    pub fn text(&mut self, text: &str) {
        self.lines
            .push(format!("{}{}", self.indent_str(), escape_html(text)));
    }

    /// Add a pre-rendered line without escaping (style/script payloads)
    pub fn raw(&mut self, markup: &str) {
        let indent = self.indent_str();
        for line in markup.lines() {
            self.lines.push(format!("{}{}", indent, line));
        }
    }

    /// Add a complete element with escaped text content on one line
    pub fn element(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) {
        self.lines.push(format!(
            "{}<{}{}>{}</{}>",
            self.indent_str(),
            tag,
            fmt_attrs(attrs),
            escape_html(text),
            tag
        ));
    }

    /// Add an anchor element with escaped label text
    pub fn anchor(&mut self, href: &str, class: &str, label: &str) {
        self.element(
            "a",
            &[("href", href), ("class", class)],
            label,
        );
    }

    /// Finalize the fragment, verifying the element tree is balanced
    pub fn build(self) -> Result<String, HtmlError> {
        if self.underflow {
            return Err(HtmlError::UnbalancedEnd);
        }
        if let Some(tag) = self.open.into_iter().next_back() {
            return Err(HtmlError::UnclosedElement(tag));
        }

        let sep = if self.config.pretty_print { "\n" } else { "" };
        Ok(self.lines.join(sep))
    }
}

fn fmt_attrs(attrs: &[(&str, &str)]) -> String {
    attrs
        .iter()
        .map(|(k, v)| format!(r#" {}="{}""#, k, escape_attr(v)))
        .collect::<String>()
}

/// Escape text content for HTML
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape an attribute value (double-quoted context)
pub fn escape_attr(s: &str) -> String {
    escape_html(s).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b"), "a &lt; b");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn test_escape_attr_quotes() {
        assert_eq!(escape_attr(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn test_nested_elements_pretty() {
        let mut b = HtmlBuilder::new(HtmlConfig::default());
        b.start("div", &[("class", "outer")]);
        b.element("p", &[], "hello");
        b.end();
        let html = b.build().unwrap();
        assert_eq!(html, "<div class=\"outer\">\n  <p>hello</p>\n</div>");
    }

    #[test]
    fn test_minified_output() {
        let mut b = HtmlBuilder::new(HtmlConfig::default().with_pretty_print(false));
        b.start("div", &[]);
        b.element("p", &[], "hi");
        b.end();
        assert_eq!(b.build().unwrap(), "<div><p>hi</p></div>");
    }

    #[test]
    fn test_unclosed_element_error() {
        let mut b = HtmlBuilder::new(HtmlConfig::default());
        b.start("div", &[]);
        assert_eq!(
            b.build().unwrap_err(),
            HtmlError::UnclosedElement("div".to_string())
        );
    }

    #[test]
    fn test_unbalanced_end_error() {
        let mut b = HtmlBuilder::new(HtmlConfig::default());
        b.end();
        assert_eq!(b.build().unwrap_err(), HtmlError::UnbalancedEnd);
    }

    #[test]
    fn test_void_element_self_closes() {
        let mut b = HtmlBuilder::new(HtmlConfig::default());
        b.void("meta", &[("charset", "utf-8")]);
        assert_eq!(b.build().unwrap(), r#"<meta charset="utf-8" />"#);
    }

    #[test]
    fn test_class_list_prefix() {
        let b = HtmlBuilder::new(HtmlConfig::default());
        assert_eq!(
            b.class_list(&["footer", "footer-grid"], &[]),
            "cf-footer cf-footer-grid"
        );
    }

    #[test]
    fn test_class_list_without_prefix() {
        let b = HtmlBuilder::new(HtmlConfig::default().without_class_prefix());
        assert_eq!(b.class_list(&["footer"], &["extra".to_string()]), "footer extra");
    }

    #[test]
    fn test_text_is_escaped() {
        let mut b = HtmlBuilder::new(HtmlConfig::default().with_pretty_print(false));
        b.start("p", &[]);
        b.text("5 < 6 & 7 > 2");
        b.end();
        assert_eq!(b.build().unwrap(), "<p>5 &lt; 6 &amp; 7 &gt; 2</p>");
    }
}
