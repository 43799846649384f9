//! # domscout
#![allow(clippy::uninlined_format_args)]
//!
//! CLI tool and library for scripted headless-browser automation over
//! WebDriver: navigate pages, click and type, capture screenshots, and run
//! generator-driven selector searches. Traffic can optionally be routed
//! through a local forwarding proxy.
//!
//! ## CLI Usage
//!
//! ```bash
//! # Find the first even-numbered row whose text contains "Invoice"
//! domscout search "https://example.com/invoices" "#row-{n}" "Invoice" --generator even
//!
//! # Counting generator with a custom start
//! domscout search "https://example.com" ".item-{n}" "sold out" --generator int --start 5
//!
//! # Check a selector, read text, interact
//! domscout exists "https://example.com" "#login"
//! domscout text "https://example.com" "h1"
//! domscout click "https://example.com" "button.submit"
//! domscout type "https://example.com" "input[name='q']" "query text" --clear
//!
//! # Screenshots (whole page or one element)
//! domscout screenshot "https://example.com" --output page.png
//! domscout screenshot "https://example.com" --selector "#chart" --output chart.png
//!
//! # Route traffic through a local forwarding proxy
//! domscout search "https://example.com" "#row-{n}" "Invoice" --proxy 127.0.0.1:8080
//! ```
//!
//! ## Library Usage
//!
//! ```no_run
//! use domscout::{Browser, BrowserType, GeneratorKind, SearchRequest, search_until_match};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let browser = Browser::new(
//!     BrowserType::Firefox,
//!     None,  // No proxy
//!     None,  // Default viewport
//!     true,  // Headless
//! ).await?;
//!
//! browser.goto("https://example.com/invoices").await?;
//!
//! let request = SearchRequest {
//!     template: "#row-{n}".to_string(),
//!     placeholder: "{n}".to_string(),
//!     generator: GeneratorKind::Even,
//!     target: "Invoice".to_string(),
//! };
//! let matched = search_until_match(&browser, &request).await?;
//! println!("found {}", matched.selector);
//!
//! browser.close().await?;
//! # Ok(())
//! # }
//! ```

/// Error taxonomy and structured failure envelopes
pub mod errors;

/// Infinite numeric generators that drive template expansion
pub mod generators;

/// Selector-discovery search loop
pub mod search;

/// Selector template expansion
pub mod template;

/// Type definitions for viewport, proxy, and search results
pub mod types;

/// WebDriver browser control and automation
pub mod webdriver;

pub use errors::{FailureEnvelope, FailureKind, ScoutError};
pub use generators::{GeneratorKind, NumberStream};
pub use search::{DomProbe, SearchRequest, search_until_match};
pub use template::expand;
pub use types::{OutputFormat, ProxyConfig, SearchMatch, ViewportSize};
pub use webdriver::{Browser, BrowserType};
