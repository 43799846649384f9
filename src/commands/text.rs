use anyhow::Result;
use serde_json::json;
use tracing::info;

use crate::commands::utils::{self, BrowserOpts};
use crate::types::OutputFormat;

pub async fn handle_text(
    url: String,
    selector: String,
    opts: BrowserOpts,
    format: OutputFormat,
) -> Result<()> {
    info!("Reading text of {} on {}", selector, url);

    let browser = utils::connect(&opts).await?;

    let result = async {
        browser.goto(&url).await?;
        browser.text_content(&selector).await
    }
    .await;
    let close_result = browser.close().await;

    let text = result?;
    close_result?;

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "selector": selector,
                    "text": text,
                }))?
            );
        }
        OutputFormat::Simple => {
            println!("{}", text);
        }
    }
    Ok(())
}
