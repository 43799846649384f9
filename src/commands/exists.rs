use anyhow::Result;
use serde_json::json;
use tracing::info;

use crate::commands::utils::{self, BrowserOpts};
use crate::types::OutputFormat;

pub async fn handle_exists(
    url: String,
    selector: String,
    opts: BrowserOpts,
    format: OutputFormat,
) -> Result<()> {
    info!("Checking existence of {} on {}", selector, url);

    let browser = utils::connect(&opts).await?;

    let result = async {
        browser.goto(&url).await?;
        browser.element_exists(&selector).await
    }
    .await;
    let close_result = browser.close().await;

    let exists = result?;
    close_result?;

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "selector": selector,
                    "exists": exists,
                }))?
            );
        }
        OutputFormat::Simple => {
            println!(
                "{}",
                if exists {
                    "Element exists"
                } else {
                    "Element not found"
                }
            );
        }
    }
    Ok(())
}
