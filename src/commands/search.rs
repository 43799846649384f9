use anyhow::Result;
use tracing::info;

use crate::commands::utils::{self, BrowserOpts};
use crate::generators::GeneratorKind;
use crate::search::{SearchRequest, search_until_match};
use crate::types::OutputFormat;

#[allow(clippy::too_many_arguments)]
pub async fn handle_search(
    url: String,
    template: String,
    target: String,
    placeholder: String,
    generator: String,
    start: Option<u64>,
    opts: BrowserOpts,
    format: OutputFormat,
) -> Result<()> {
    info!("Searching for '{}' with template '{}'", target, template);

    let generator = match generator.parse::<GeneratorKind>()? {
        // --start only applies to the counting generator
        GeneratorKind::Counting { .. } if start.is_some() => GeneratorKind::counting(start),
        kind => kind,
    };

    let browser = utils::connect(&opts).await?;
    browser.goto(&url).await?;

    let request = SearchRequest {
        template,
        placeholder,
        generator,
        target,
    };

    // On failure the loop has already closed the session
    let result = search_until_match(&browser, &request).await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Simple => {
            println!("Matched selector: {}", result.selector);
            println!("Candidates tried: {}", result.candidates_tried);
        }
    }

    browser.close().await?;
    Ok(())
}
