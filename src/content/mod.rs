//! Static site content: link lists and footer copy
//!
//! Everything here is declarative data, fixed once loaded. Content ships
//! with built-in defaults and can be replaced wholesale from a TOML file.

pub mod footer;
pub mod links;

pub use footer::{BrandInfo, FooterContent, LinkColumn, TITLED_COLUMNS};
pub use links::{ContentError, LinkTarget, NavLink, SocialIcon, SocialLink};
