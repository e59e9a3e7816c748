//! Footer rendering
//!
//! A pure function of the footer content plus the copyright year: emits the
//! brand column, the three titled link columns, and the copyright bar, with
//! scroll-reveal trigger attributes on each section. Columns reveal left to
//! right with a stepped delay; the copyright bar follows last.

use crate::content::{FooterContent, LinkColumn, SocialLink};
use crate::html::{HtmlBuilder, HtmlConfig, HtmlError};
use crate::reveal::RevealEffect;

use super::icons;

/// Per-section reveal delay step in milliseconds
pub const REVEAL_DELAY_STEP: u32 = 100;

/// Render the footer fragment
pub fn render_footer(
    content: &FooterContent,
    config: &HtmlConfig,
    year: i32,
) -> Result<String, HtmlError> {
    let mut b = HtmlBuilder::new(config.clone());

    let footer_class = b.class_list(&["footer"], &[]);
    b.start(
        "footer",
        &[
            ("class", &footer_class),
            ("data-aos", RevealEffect::FadeUp.as_str()),
        ],
    );

    let inner_class = b.class_list(&["footer-inner"], &[]);
    b.start("div", &[("class", &inner_class)]);

    let grid_class = b.class_list(&["footer-grid"], &[]);
    b.start("div", &[("class", &grid_class)]);

    render_brand_column(content, &mut b);
    for (index, column) in content.columns.iter().enumerate() {
        // brand column took the first delay slot
        let delay = REVEAL_DELAY_STEP * (index as u32 + 2);
        render_link_column(column, delay, &mut b);
    }

    b.end(); // grid

    render_copyright_bar(content, year, &mut b);

    b.end(); // inner
    b.end(); // footer

    b.build()
}

fn render_brand_column(content: &FooterContent, b: &mut HtmlBuilder) {
    let column_class = b.class_list(&["footer-column"], &[]);
    let delay = REVEAL_DELAY_STEP.to_string();
    b.start(
        "div",
        &[
            ("class", &column_class),
            ("data-aos", RevealEffect::FadeRight.as_str()),
            ("data-aos-delay", &delay),
        ],
    );

    let mark_class = b.class_list(&["brand-mark"], &[]);
    b.element("span", &[("class", &mark_class)], &content.brand.name);

    let tagline_class = b.class_list(&["tagline"], &[]);
    b.element("p", &[("class", &tagline_class)], &content.brand.tagline);

    let row_class = b.class_list(&["social-row"], &[]);
    b.start("div", &[("class", &row_class)]);
    for link in &content.brand.social {
        render_social_link(link, b);
    }
    b.end();

    b.end();
}

fn render_social_link(link: &SocialLink, b: &mut HtmlBuilder) {
    let link_class = b.class_list(&["social-link"], &[]);
    b.start("a", &[("href", link.target.href()), ("class", &link_class)]);

    let sr_class = b.class_list(&["sr-only"], &[]);
    b.element("span", &[("class", &sr_class)], &link.label);

    let glyph = icons::glyph(link.icon);
    b.start(
        "svg",
        &[
            ("width", "24"),
            ("height", "24"),
            ("fill", "currentColor"),
            ("viewBox", glyph.view_box),
            ("aria-hidden", "true"),
        ],
    );
    if glyph.even_odd {
        b.void(
            "path",
            &[
                ("fill-rule", "evenodd"),
                ("clip-rule", "evenodd"),
                ("d", glyph.path),
            ],
        );
    } else {
        b.void("path", &[("d", glyph.path)]);
    }
    b.end(); // svg

    b.end(); // a
}

fn render_link_column(column: &LinkColumn, delay_ms: u32, b: &mut HtmlBuilder) {
    let column_class = b.class_list(&["footer-column"], &[]);
    let delay = delay_ms.to_string();
    b.start(
        "div",
        &[
            ("class", &column_class),
            ("data-aos", RevealEffect::FadeRight.as_str()),
            ("data-aos-delay", &delay),
        ],
    );

    let title_class = b.class_list(&["column-title"], &[]);
    b.element("h3", &[("class", &title_class)], &column.title);

    let list_class = b.class_list(&["link-list"], &[]);
    b.start("ul", &[("class", &list_class)]);
    let link_class = b.class_list(&["footer-link"], &[]);
    for link in &column.links {
        b.start("li", &[]);
        b.anchor(link.target.href(), &link_class, &link.label);
        b.end();
    }
    b.end(); // ul

    b.end();
}

fn render_copyright_bar(content: &FooterContent, year: i32, b: &mut HtmlBuilder) {
    let bar_class = b.class_list(&["copyright-bar"], &[]);
    // reveals after the brand column and every titled column
    let delay = (REVEAL_DELAY_STEP * (content.columns.len() as u32 + 2)).to_string();
    b.start(
        "div",
        &[
            ("class", &bar_class),
            ("data-aos", RevealEffect::FadeIn.as_str()),
            ("data-aos-delay", &delay),
        ],
    );

    let copyright_class = b.class_list(&["copyright"], &[]);
    b.element(
        "p",
        &[("class", &copyright_class)],
        &format!(
            "\u{a9} {} {}. All rights reserved.",
            year,
            content.brand.copyright_name()
        ),
    );

    let links_class = b.class_list(&["copyright-links"], &[]);
    b.start("div", &[("class", &links_class)]);
    let link_class = b.class_list(&["copyright-link"], &[]);
    for link in &content.copyright_links {
        b.anchor(link.target.href(), &link_class, &link.label);
    }
    b.end();

    b.end();
}
