use anyhow::Result;
use tracing::info;

use crate::commands::utils::{self, BrowserOpts};

pub async fn handle_type(
    url: String,
    selector: String,
    text: String,
    clear: bool,
    opts: BrowserOpts,
) -> Result<()> {
    info!("Typing into {} on {}", selector, url);

    let browser = utils::connect(&opts).await?;

    let result = browser.type_text(&url, &selector, &text, clear).await;
    let close_result = browser.close().await;

    result?;
    close_result?;

    println!("Successfully typed text into element: {}", selector);
    Ok(())
}
