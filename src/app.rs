//! Application bootstrap: one-time startup and mounting into a host document
//!
//! The host document must contain exactly one element carrying the
//! well-known mount id. Startup installs the process-wide scroll-reveal
//! configuration, renders the application tree, and splices it into that
//! element. Every failure here is fatal; nothing is silently skipped.

use thiserror::Error;
use tracing::debug;

use crate::reveal::{self, RevealError};
use crate::site::SiteConfig;
use crate::{render_footer_with_config, RenderConfig, RenderError};

/// Well-known id of the mount element in the host document
pub const MOUNT_ID: &str = "root";

/// Errors locating or splicing into the mount point
#[derive(Error, Debug, PartialEq)]
pub enum MountError {
    #[error("mount point '#{0}' not found in host document")]
    MountPointNotFound(String),
    #[error("mount point '#{0}' appears more than once in host document")]
    DuplicateMountPoint(String),
    #[error("mount point '#{0}' element is never closed")]
    UnclosedMountPoint(String),
}

/// Errors during application startup
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("scroll-reveal initialization failed: {0}")]
    Reveal(#[from] RevealError),
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
    #[error("mount failed: {0}")]
    Mount(#[from] MountError),
}

/// Splice rendered markup inside the element with the given id
///
/// Any existing children of the mount element are replaced. The host
/// document is expected to be well-formed markup where the id appears as an
/// attribute (`id="root"`), on exactly one element.
pub fn mount(document: &str, mount_id: &str, markup: &str) -> Result<String, MountError> {
    let candidates = find_id_attrs(document, mount_id);

    let attr_pos = match candidates.len() {
        0 => return Err(MountError::MountPointNotFound(mount_id.to_string())),
        1 => candidates[0],
        _ => return Err(MountError::DuplicateMountPoint(mount_id.to_string())),
    };

    // the tag this attribute belongs to
    let tag_start = document[..attr_pos]
        .rfind('<')
        .ok_or_else(|| MountError::MountPointNotFound(mount_id.to_string()))?;
    let tag_name: String = document[tag_start + 1..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();

    let open_end = document[attr_pos..]
        .find('>')
        .map(|i| attr_pos + i)
        .ok_or_else(|| MountError::UnclosedMountPoint(mount_id.to_string()))?;

    let close_start = find_matching_close(document, open_end + 1, &tag_name)
        .ok_or_else(|| MountError::UnclosedMountPoint(mount_id.to_string()))?;

    let mut out = String::with_capacity(document.len() + markup.len() + 2);
    out.push_str(&document[..open_end + 1]);
    out.push('\n');
    out.push_str(markup);
    out.push('\n');
    out.push_str(&document[close_start..]);
    Ok(out)
}

/// One-time application startup against a host document
///
/// Installs the global scroll-reveal configuration, renders the application
/// tree, and mounts it at [`MOUNT_ID`]. Returns the complete document with
/// the tree attached.
pub fn bootstrap(
    host_document: &str,
    config: &RenderConfig,
    site: &SiteConfig,
) -> Result<String, BootstrapError> {
    reveal::install(site.reveal.clone())?;
    let tree = render_footer_with_config(config)?;
    let mounted = mount(host_document, MOUNT_ID, &tree)?;
    debug!(mount_id = MOUNT_ID, bytes = mounted.len(), "application tree mounted");
    Ok(mounted)
}

/// Positions of `id="<id>"` / `id='<id>'` attributes that sit inside a tag
fn find_id_attrs(document: &str, mount_id: &str) -> Vec<usize> {
    let mut positions = Vec::new();
    for needle in [format!(r#"id="{}""#, mount_id), format!("id='{}'", mount_id)] {
        let mut from = 0;
        while let Some(found) = document[from..].find(&needle) {
            let pos = from + found;
            // attribute must be inside an open tag: a '<' before it with no
            // intervening '>'
            if let Some(lt) = document[..pos].rfind('<') {
                if !document[lt..pos].contains('>') {
                    positions.push(pos);
                }
            }
            from = pos + needle.len();
        }
    }
    positions.sort_unstable();
    positions
}

/// Scan forward for the close tag matching an already-opened element
fn find_matching_close(document: &str, mut cursor: usize, tag_name: &str) -> Option<usize> {
    let close_pat = format!("</{}", tag_name);
    let open_pat = format!("<{}", tag_name);
    let mut depth = 1usize;

    while depth > 0 {
        let next_close = document[cursor..].find(&close_pat).map(|i| cursor + i)?;
        let next_open = find_open_tag(document, cursor, &open_pat);

        match next_open {
            Some(open) if open < next_close => {
                depth += 1;
                cursor = open + open_pat.len();
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    return Some(next_close);
                }
                cursor = next_close + close_pat.len();
            }
        }
    }
    None
}

/// Next occurrence of `<tag` followed by a tag-name boundary
fn find_open_tag(document: &str, mut cursor: usize, open_pat: &str) -> Option<usize> {
    while let Some(found) = document[cursor..].find(open_pat) {
        let pos = cursor + found;
        let after = document[pos + open_pat.len()..].chars().next();
        match after {
            Some(c) if c.is_whitespace() || c == '>' || c == '/' => return Some(pos),
            None => return None,
            _ => cursor = pos + open_pat.len(),
        }
    }
    None
}
