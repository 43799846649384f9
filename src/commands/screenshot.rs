use anyhow::{Context, Result};
use tracing::info;

use crate::commands::utils::{self, BrowserOpts};

pub async fn handle_screenshot(
    url: String,
    selector: Option<String>,
    output: String,
    opts: BrowserOpts,
) -> Result<()> {
    info!(
        "Taking screenshot{}",
        if selector.is_some() {
            " of element"
        } else {
            " of page"
        }
    );

    let browser = utils::connect(&opts).await?;

    let result = browser.screenshot(&url, selector.as_deref()).await;
    let close_result = browser.close().await;

    let bytes = result?;
    close_result?;

    std::fs::write(&output, &bytes)
        .context(format!("Failed to write screenshot to {}", output))?;

    println!("Screenshot saved to: {}", output);
    println!("Size: {} bytes", bytes.len());
    Ok(())
}
