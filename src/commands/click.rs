use anyhow::Result;
use tracing::info;

use crate::commands::utils::{self, BrowserOpts};

pub async fn handle_click(url: String, selector: String, opts: BrowserOpts) -> Result<()> {
    info!("Clicking {} on {}", selector, url);

    let browser = utils::connect(&opts).await?;

    let result = browser.click_element(&url, &selector).await;
    // Close the session whether or not the click succeeded
    let close_result = browser.close().await;

    result?;
    close_result?;

    println!("Successfully clicked element: {}", selector);
    Ok(())
}
