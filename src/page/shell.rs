//! Host document shell
//!
//! The shell is the page the application mounts into: head with metadata
//! and stylesheet links, an empty mount element, and the scroll-reveal
//! engine hookup (library script plus the one-time init call). Stylesheets
//! are linked by their stable asset URLs, not inlined.

use crate::app::MOUNT_ID;
use crate::html::{HtmlBuilder, HtmlConfig, HtmlError};
use crate::reveal::ScrollReveal;
use crate::site::SiteConfig;

/// Stable file name of the generated site stylesheet
pub const STYLESHEET_ASSET: &str = "site.css";

/// Stable file names of the external reveal-engine assets
pub const REVEAL_CSS_ASSET: &str = "aos.css";
pub const REVEAL_JS_ASSET: &str = "aos.js";

/// Render the host document with an empty mount point
pub fn host_document(
    title: &str,
    reveal: &ScrollReveal,
    site: &SiteConfig,
    config: &HtmlConfig,
) -> Result<String, HtmlError> {
    let mut b = HtmlBuilder::new(config.clone());

    if config.doctype {
        b.raw("<!DOCTYPE html>");
    }
    b.start("html", &[("lang", "en")]);

    b.start("head", &[]);
    b.void("meta", &[("charset", "utf-8")]);
    b.void(
        "meta",
        &[
            ("name", "viewport"),
            ("content", "width=device-width, initial-scale=1"),
        ],
    );
    b.element("title", &[], title);
    b.void(
        "link",
        &[
            ("rel", "stylesheet"),
            ("href", &site.asset_url(REVEAL_CSS_ASSET)),
        ],
    );
    b.void(
        "link",
        &[
            ("rel", "stylesheet"),
            ("href", &site.asset_url(STYLESHEET_ASSET)),
        ],
    );
    b.end(); // head

    b.start("body", &[]);
    b.start("div", &[("id", MOUNT_ID)]);
    b.end();

    b.start("script", &[("src", &site.asset_url(REVEAL_JS_ASSET))]);
    b.end();
    b.start("script", &[]);
    b.raw(&reveal.init_snippet());
    b.end();

    b.end(); // body
    b.end(); // html

    b.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell() -> String {
        host_document(
            "CrowdFund",
            &ScrollReveal::default(),
            &SiteConfig::default(),
            &HtmlConfig::default(),
        )
        .expect("shell renders")
    }

    #[test]
    fn test_doctype_and_structure() {
        let html = shell();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn test_mount_point_present_and_empty() {
        let html = shell();
        assert!(html.contains(r#"<div id="root">"#));
    }

    #[test]
    fn test_stylesheets_linked_by_stable_url() {
        let html = shell();
        assert!(html.contains(r#"href="/assets/site.css""#));
        assert!(html.contains(r#"href="/assets/aos.css""#));
    }

    #[test]
    fn test_reveal_init_emitted_once() {
        let html = shell();
        assert_eq!(html.matches("AOS.init(").count(), 1);
        assert!(html.contains(r#"src="/assets/aos.js""#));
    }

    #[test]
    fn test_doctype_can_be_disabled() {
        let html = host_document(
            "CrowdFund",
            &ScrollReveal::default(),
            &SiteConfig::default(),
            &HtmlConfig::default().with_doctype(false),
        )
        .expect("shell renders");
        assert!(html.starts_with("<html"));
    }
}
