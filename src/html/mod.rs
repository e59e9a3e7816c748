//! HTML generation for rendered page output
//!
//! This module takes declarative content and produces HTML strings
//! with appropriate CSS classes for styling.

pub mod builder;
pub mod config;

pub use builder::{escape_attr, escape_html, HtmlBuilder, HtmlError};
pub use config::HtmlConfig;
