//! CrowdFund Site CLI
//!
//! Usage:
//!   crowdfund-site [OPTIONS]
//!
//! Options:
//!   -C, --content <FILE>  Footer content (TOML format)
//!   -t, --theme <FILE>    Color theme (TOML format)
//!   -c, --config <FILE>   Site configuration (TOML format)
//!   -o, --out <DIR>       Write the built site into DIR
//!       --footer-only     Emit only the footer fragment
//!       --minify          Disable pretty printing
//!   -h, --help            Print help

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crowdfund_site::{
    build_artifacts, render_footer_with_config, render_page, write_site, FooterContent,
    HtmlConfig, RenderConfig, SiteConfig, Theme,
};

#[derive(Parser)]
#[command(name = "crowdfund-site")]
#[command(about = "Static page renderer for the CrowdFund platform frontend")]
struct Cli {
    /// Footer content file (TOML format)
    #[arg(short = 'C', long)]
    content: Option<PathBuf>,

    /// Color theme file (TOML format)
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Site configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the built site into this directory instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Emit only the footer fragment
    #[arg(long)]
    footer_only: bool,

    /// Disable pretty printing
    #[arg(long)]
    minify: bool,

    /// Debug mode: print the content tree to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let content = match &cli.content {
        Some(path) => match FooterContent::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading content '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => FooterContent::default(),
    };

    let theme = match &cli.theme {
        Some(path) => match Theme::from_file(path) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Error loading theme '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Theme::default(),
    };

    let site = match &cli.config {
        Some(path) => match SiteConfig::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading site config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => SiteConfig::default(),
    };

    let config = RenderConfig::new()
        .with_content(content)
        .with_theme(theme)
        .with_html(HtmlConfig::default().with_pretty_print(!cli.minify))
        .with_debug(cli.debug);

    if cli.footer_only {
        match render_footer_with_config(&config) {
            Ok(html) => println!("{}", html),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    match &cli.out {
        Some(out_dir) => {
            let artifacts = match build_artifacts(&config, &site) {
                Ok(a) => a,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };
            match write_site(out_dir, &artifacts, &site) {
                Ok(written) => {
                    for path in &written {
                        info!(path = %path.display(), "wrote");
                    }
                    info!(
                        dev_server = %site.server.addr(),
                        "serve the output directory to preview"
                    );
                }
                Err(e) => {
                    eprintln!("Error writing site to '{}': {}", out_dir.display(), e);
                    std::process::exit(1);
                }
            }
        }
        None => match render_page(&config, &site) {
            Ok(html) => println!("{}", html),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    }
}
