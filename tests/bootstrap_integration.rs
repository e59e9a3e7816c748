//! Integration tests for startup and mounting
//!
//! The reveal install is process-global, so every test in this binary that
//! touches it uses the default configuration; the conflict check seeds the
//! default first.

use crowdfund_site::{
    bootstrap, mount, render_page, reveal, BootstrapError, MountError, RenderConfig,
    ScrollReveal, SiteConfig, MOUNT_ID,
};

// a minimal host document with the well-known mount point
fn host_shell() -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>CrowdFund</title></head>\n<body>\n<div id=\"{}\"></div>\n</body>\n</html>",
        MOUNT_ID
    )
}

#[test]
fn test_bootstrap_attaches_non_empty_tree() {
    let out = bootstrap(&host_shell(), &RenderConfig::default(), &SiteConfig::default())
        .expect("bootstrap succeeds");

    // the mount point now holds the rendered tree
    let root_pos = out.find(r#"<div id="root">"#).expect("mount point present");
    let footer_pos = out.find("<footer").expect("tree present");
    assert!(footer_pos > root_pos);
    assert!(out.contains("</footer>"));
}

#[test]
fn test_bootstrap_installs_reveal_defaults() {
    bootstrap(&host_shell(), &RenderConfig::default(), &SiteConfig::default())
        .expect("bootstrap succeeds");

    let installed = reveal::installed().expect("reveal config installed");
    assert_eq!(installed.duration, 1000);
    assert_eq!(installed.offset, 120);
    assert!(installed.once);
}

#[test]
fn test_reveal_config_is_never_reassigned() {
    // seed the default (idempotent regardless of test ordering)
    let _ = reveal::install(ScrollReveal::default());

    let conflicting = ScrollReveal::default().with_duration(250);
    assert!(reveal::install(conflicting).is_err());
    assert_eq!(reveal::installed().map(|c| c.duration), Some(1000));
}

#[test]
fn test_bootstrap_missing_mount_point_fails_fast() {
    let host = "<html><body><main></main></body></html>";
    let err = bootstrap(host, &RenderConfig::default(), &SiteConfig::default())
        .expect_err("must fail");
    match err {
        BootstrapError::Mount(MountError::MountPointNotFound(id)) => assert_eq!(id, "root"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_mount_never_silently_no_ops() {
    // every outcome is either a changed document or an error
    let host = host_shell();
    let mounted = mount(&host, MOUNT_ID, "<p>tree</p>").expect("mounts");
    assert_ne!(mounted, host);

    assert!(mount("<body></body>", MOUNT_ID, "<p>tree</p>").is_err());
}

#[test]
fn test_render_page_output_is_mountable_host() {
    // the full document produced by render_page carries exactly one mount
    // point holding the tree
    let html = render_page(&RenderConfig::default(), &SiteConfig::default())
        .expect("Should render");
    assert_eq!(html.matches(r#"id="root""#).count(), 1);
    assert!(html.contains("<footer"));
    assert_eq!(html.matches("AOS.init(").count(), 1);
}
