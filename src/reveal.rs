//! Scroll-reveal configuration
//!
//! Entrance animations are delegated to an external scroll-reveal engine:
//! elements carry `data-aos` trigger attributes and the engine is handed one
//! global options object at startup. This module owns that options object.
//! It is constructed once per process and never reassigned.

use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from process-wide reveal installation
#[derive(Error, Debug, PartialEq)]
pub enum RevealError {
    #[error("a different scroll-reveal configuration is already installed")]
    AlreadyInstalled,
}

/// Easing curve applied to reveal animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Easing::Linear => "linear",
            Easing::Ease => "ease",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        };
        f.write_str(name)
    }
}

/// Entrance effect attached to a revealed element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEffect {
    FadeUp,
    FadeRight,
    FadeIn,
}

impl RevealEffect {
    /// Attribute value consumed by the reveal engine
    pub fn as_str(&self) -> &'static str {
        match self {
            RevealEffect::FadeUp => "fade-up",
            RevealEffect::FadeRight => "fade-right",
            RevealEffect::FadeIn => "fade-in",
        }
    }
}

/// Global options for the scroll-reveal engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollReveal {
    /// Animation duration in milliseconds
    pub duration: u32,
    /// Easing curve name
    pub easing: Easing,
    /// Each element animates at most once
    pub once: bool,
    /// Distance in pixels before the trigger point
    pub offset: u32,
    /// Delay in milliseconds before the animation starts
    pub delay: u32,
}

impl Default for ScrollReveal {
    fn default() -> Self {
        Self {
            duration: 1000,
            easing: Easing::EaseInOut,
            once: true,
            offset: 120,
            delay: 100,
        }
    }
}

impl ScrollReveal {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the animation duration in milliseconds
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }

    /// Set the easing curve
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set whether elements animate at most once
    pub fn with_once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }

    /// Set the trigger offset in pixels
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Set the start delay in milliseconds
    pub fn with_delay(mut self, delay: u32) -> Self {
        self.delay = delay;
        self
    }

    /// The one-time engine initialization call emitted in the page shell
    pub fn init_snippet(&self) -> String {
        let options =
            serde_json::to_string(self).expect("Reveal options should serialize to JSON");
        format!("AOS.init({});", options)
    }
}

static INSTALLED: OnceLock<ScrollReveal> = OnceLock::new();

/// Install the process-wide reveal configuration
///
/// The first call wins and the value is never reassigned. Re-installing an
/// identical configuration returns the existing one; installing a different
/// one is an error.
pub fn install(config: ScrollReveal) -> Result<&'static ScrollReveal, RevealError> {
    let current = INSTALLED.get_or_init(|| config.clone());
    if *current == config {
        Ok(current)
    } else {
        Err(RevealError::AlreadyInstalled)
    }
}

/// The installed configuration, if any
pub fn installed() -> Option<&'static ScrollReveal> {
    INSTALLED.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ScrollReveal::default();
        assert_eq!(config.duration, 1000);
        assert_eq!(config.easing, Easing::EaseInOut);
        assert!(config.once);
        assert_eq!(config.offset, 120);
        assert_eq!(config.delay, 100);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ScrollReveal::new()
            .with_duration(500)
            .with_easing(Easing::Linear)
            .with_once(false)
            .with_offset(0)
            .with_delay(0);
        assert_eq!(config.duration, 500);
        assert_eq!(config.easing, Easing::Linear);
        assert!(!config.once);
    }

    #[test]
    fn test_easing_display() {
        assert_eq!(Easing::EaseInOut.to_string(), "ease-in-out");
        assert_eq!(Easing::Linear.to_string(), "linear");
    }

    #[test]
    fn test_init_snippet() {
        let snippet = ScrollReveal::default().init_snippet();
        assert!(snippet.starts_with("AOS.init({"));
        assert!(snippet.ends_with("});"));
        assert!(snippet.contains(r#""duration":1000"#));
        assert!(snippet.contains(r#""easing":"ease-in-out""#));
        assert!(snippet.contains(r#""once":true"#));
        assert!(snippet.contains(r#""offset":120"#));
        assert!(snippet.contains(r#""delay":100"#));
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let config: ScrollReveal = toml::from_str("duration = 600").expect("Should parse");
        assert_eq!(config.duration, 600);
        // remaining fields keep their defaults
        assert_eq!(config.easing, Easing::EaseInOut);
        assert_eq!(config.offset, 120);
    }

    #[test]
    fn test_install_is_write_once() {
        // single test body: the global survives across tests in this binary,
        // so ordering between separate #[test] fns would be racy
        let first = install(ScrollReveal::default()).expect("first install succeeds");
        assert_eq!(*first, ScrollReveal::default());

        let again = install(ScrollReveal::default()).expect("same config re-installs");
        assert_eq!(*again, ScrollReveal::default());

        let conflict = install(ScrollReveal::default().with_duration(5));
        assert_eq!(conflict, Err(RevealError::AlreadyInstalled));

        // the installed value was not reassigned
        assert_eq!(installed().map(|c| c.duration), Some(1000));
    }
}
