use anyhow::Result;

use crate::types::{ProxyConfig, ViewportSize};
use crate::webdriver::{Browser, BrowserType};

/// Browser flags shared by every subcommand
#[derive(Debug, Clone, clap::Args)]
pub struct BrowserOpts {
    /// Browser to use
    #[arg(short, long, default_value = "firefox")]
    pub browser: String,

    /// Route browser traffic through a forwarding proxy (HOST:PORT or URL)
    #[arg(long)]
    pub proxy: Option<String>,

    /// Set viewport size (WIDTHxHEIGHT, e.g., 1920x1080)
    #[arg(long)]
    pub viewport: Option<String>,

    /// Run browser in visible mode (disables headless)
    #[arg(long = "no-headless")]
    pub no_headless: bool,
}

/// Connect a browsing session from CLI flags
pub async fn connect(opts: &BrowserOpts) -> Result<Browser> {
    let browser_type: BrowserType = opts.browser.parse()?;
    let proxy = opts.proxy.as_deref().map(ProxyConfig::parse).transpose()?;
    let viewport = opts
        .viewport
        .as_deref()
        .map(ViewportSize::parse)
        .transpose()?;

    Browser::new(browser_type, proxy.as_ref(), viewport, !opts.no_headless).await
}
