//! Page assembly: footer fragment and host document shell

pub mod footer;
mod icons;
pub mod shell;

pub use footer::{render_footer, REVEAL_DELAY_STEP};
pub use shell::{host_document, REVEAL_CSS_ASSET, REVEAL_JS_ASSET, STYLESHEET_ASSET};
