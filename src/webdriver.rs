use anyhow::{Context, Result};
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::json;
use tracing::{debug, info, warn};

use crate::search::DomProbe;
use crate::types::{ProxyConfig, ViewportSize};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Browser instance for WebDriver automation.
///
/// Pairs one WebDriver client with one active page. The handle is a single
/// shared mutable resource: callers serialize operations on it, there is no
/// internal locking.
pub struct Browser {
    client: Client,
    browser_type: BrowserType,
    closed: Arc<AtomicBool>,
}

/// Supported browser types
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum BrowserType {
    /// Mozilla Firefox
    Firefox,
    /// Google Chrome/Chromium
    Chrome,
}

impl std::str::FromStr for BrowserType {
    type Err = anyhow::Error;

    /// Parse browser type from string (case-insensitive)
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "firefox" => Ok(BrowserType::Firefox),
            "chrome" | "chromium" => Ok(BrowserType::Chrome),
            _ => anyhow::bail!("Unsupported browser: {}", s),
        }
    }
}

impl BrowserType {
    /// Get the WebDriver URL for this browser type
    pub fn get_webdriver_url(&self) -> String {
        match self {
            BrowserType::Firefox => "http://localhost:4444".to_string(),
            BrowserType::Chrome => "http://localhost:9515".to_string(),
        }
    }
}

impl Browser {
    /// Create a new browser instance
    ///
    /// # Arguments
    /// * `browser_type` - Firefox or Chrome
    /// * `proxy` - Optional forwarding proxy for all browser traffic
    /// * `viewport` - Optional viewport dimensions
    /// * `headless` - Whether to run in headless mode
    pub async fn new(
        browser_type: BrowserType,
        proxy: Option<&ProxyConfig>,
        viewport: Option<ViewportSize>,
        headless: bool,
    ) -> Result<Self> {
        info!("Connecting to {:?} WebDriver", browser_type);

        let webdriver_url = browser_type.get_webdriver_url();

        if !Self::is_webdriver_running(&webdriver_url).await {
            let driver_name = match browser_type {
                BrowserType::Firefox => "geckodriver",
                BrowserType::Chrome => "chromedriver",
            };

            anyhow::bail!(
                "Cannot connect to {} WebDriver at {}.\n\
                Please ensure {} is running:\n\
                  For Firefox: geckodriver --port 4444\n\
                  For Chrome: chromedriver --port 9515\n\n\
                Install instructions:\n\
                  macOS: brew install {}\n\
                  Linux: Download from https://github.com/mozilla/geckodriver/releases\n\
                  Windows: Download and add to PATH",
                driver_name,
                webdriver_url,
                driver_name,
                driver_name
            );
        }

        let mut caps = serde_json::Map::new();

        match &browser_type {
            BrowserType::Firefox => {
                let mut firefox_opts = serde_json::Map::new();
                let mut args = Vec::new();

                if headless {
                    args.push("--headless".to_string());
                }

                if let Some(vp) = &viewport {
                    args.push(format!("--width={}", vp.width));
                    args.push(format!("--height={}", vp.height));
                }

                firefox_opts.insert("args".to_string(), json!(args));
                caps.insert("moz:firefoxOptions".to_string(), json!(firefox_opts));
            }
            BrowserType::Chrome => {
                let mut chrome_opts = serde_json::Map::new();
                let mut args = vec!["--no-sandbox".to_string()];

                if headless {
                    // Chrome 112+ changed headless behavior
                    args.push("--headless=new".to_string());
                    args.push("--disable-gpu".to_string());
                    args.push("--disable-dev-shm-usage".to_string());
                }

                if let Some(vp) = &viewport {
                    args.push(format!("--window-size={},{}", vp.width, vp.height));
                }

                // Chrome is strict about profile directory usage, so always
                // hand it a unique temp directory
                let temp_dir = tempfile::Builder::new()
                    .prefix("domscout-chrome-")
                    .tempdir()?;
                #[allow(deprecated)]
                let profile_path = temp_dir.into_path();
                args.push(format!("--user-data-dir={}", profile_path.display()));

                chrome_opts.insert("args".to_string(), json!(args));
                caps.insert("goog:chromeOptions".to_string(), json!(chrome_opts));
            }
        }

        // Route all traffic through the forwarding proxy when configured.
        // Standard W3C proxy capability, honored by both drivers.
        if let Some(proxy) = proxy {
            let address = proxy.address();
            debug!("Routing browser traffic through proxy {}", address);
            caps.insert(
                "proxy".to_string(),
                json!({
                    "proxyType": "manual",
                    "httpProxy": address,
                    "sslProxy": address,
                }),
            );
        }

        debug!("Connecting to WebDriver at {}", webdriver_url);

        let client = ClientBuilder::rustls()
            .capabilities(caps)
            .connect(&webdriver_url)
            .await
            .context("Failed to connect to WebDriver")?;

        // Set viewport size after connection if specified
        if let Some(vp) = viewport {
            debug!("Setting viewport to {}x{}", vp.width, vp.height);
            if let Err(e) = client.set_window_size(vp.width, vp.height).await {
                debug!("Note: Could not set window size: {}", e);
                // Continue anyway - viewport setting is best-effort
            }
        }

        Ok(Browser {
            client,
            browser_type,
            closed: Arc::new(AtomicBool::new(false)),
        })
    }

    async fn is_webdriver_running(url: &str) -> bool {
        // Try to connect to the WebDriver status endpoint
        let status_url = format!("{}/status", url);

        match reqwest::get(&status_url).await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    /// The browser engine behind this session
    #[allow(dead_code)]
    pub fn browser_type(&self) -> BrowserType {
        self.browser_type
    }

    pub async fn goto(&self, url: &str) -> Result<()> {
        info!("Navigating to {}", url);

        self.client.goto(url).await?;

        // Wait for the page to be ready
        // This helps avoid stale element references
        let wait_script = r#"
            return document.readyState === 'complete';
        "#;

        // Try waiting for page to be ready (with timeout)
        for _ in 0..20 {
            // Max 2 seconds
            match self.client.execute(wait_script, vec![]).await {
                Ok(val) if val.as_bool().unwrap_or(false) => {
                    break;
                }
                _ => {
                    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
                }
            }
        }

        Ok(())
    }

    /// Get the current URL - used for error context and health checks
    pub async fn get_current_url(&self) -> Result<String> {
        Ok(self.client.current_url().await?.to_string())
    }

    /// True if exactly one node matches the selector.
    ///
    /// Zero matches reports false; the caller decides whether that is fatal.
    /// More than one match also reports false, with a warning, since every
    /// downstream read assumes an unambiguous node.
    pub async fn element_exists(&self, selector: &str) -> Result<bool> {
        debug!("Checking existence of selector: {}", selector);

        let elements = self.client.find_all(Locator::Css(selector)).await?;
        match elements.len() {
            0 => Ok(false),
            1 => Ok(true),
            n => {
                warn!("{} elements match '{}'; expected exactly one", n, selector);
                Ok(false)
            }
        }
    }

    /// Read the text content of a node already known to exist.
    ///
    /// A node with no text yields an empty string.
    pub async fn text_content(&self, selector: &str) -> Result<String> {
        debug!("Reading text content of selector: {}", selector);

        let element = self
            .client
            .find(Locator::Css(selector))
            .await
            .context(format!("Element not found: {}", selector))?;

        let text = element
            .text()
            .await
            .context(format!("Failed to read text of: {}", selector))?;
        Ok(text)
    }

    pub async fn click_element(&self, url: &str, selector: &str) -> Result<()> {
        // Navigate if URL is provided
        if !url.is_empty() {
            self.goto(url).await?;
        }

        debug!("Finding element with selector: {}", selector);
        let element = self
            .client
            .find(Locator::Css(selector))
            .await
            .context(format!("Element not found: {}", selector))?;

        info!("Clicking element");
        element.click().await?;

        Ok(())
    }

    pub async fn type_text(
        &self,
        url: &str,
        selector: &str,
        text: &str,
        clear: bool,
    ) -> Result<()> {
        // Navigate if URL is provided
        if !url.is_empty() {
            self.goto(url).await?;
        }

        debug!("Finding element with selector: {}", selector);
        let element = self
            .client
            .find(Locator::Css(selector))
            .await
            .context(format!("Element not found: {}", selector))?;

        if clear {
            info!("Clearing field");
            element.clear().await?;
        }

        info!("Typing text into element");
        element.send_keys(text).await?;

        Ok(())
    }

    /// Capture a PNG screenshot of the full page, or of one element when a
    /// selector is given. Encoding is the engine's concern; we pass the
    /// bytes through untouched.
    pub async fn screenshot(&self, url: &str, selector: Option<&str>) -> Result<Vec<u8>> {
        if !url.is_empty() {
            self.goto(url).await?;
        }

        let bytes = match selector {
            Some(sel) => {
                debug!("Capturing screenshot of element: {}", sel);
                let element = self
                    .client
                    .find(Locator::Css(sel))
                    .await
                    .context(format!("Element not found: {}", sel))?;
                element.screenshot().await?
            }
            None => {
                debug!("Capturing screenshot of page");
                self.client.screenshot().await?
            }
        };

        info!("Captured screenshot ({} bytes)", bytes.len());
        Ok(bytes)
    }

    /// Whether this session has been closed
    #[allow(dead_code)]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Close the browsing session.
    ///
    /// Idempotent: the first call tears down the WebDriver session, repeated
    /// calls are no-ops. The search loop relies on this when it closes the
    /// session on failure and the caller closes again on its own way out.
    pub async fn close(&self) -> Result<()> {
        if self.closed.swap(true, Ordering::SeqCst) {
            debug!("Session already closed, ignoring close request");
            return Ok(());
        }

        info!("Closing browsing session");
        self.client.clone().close().await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl DomProbe for Browser {
    async fn query_exists(&self, selector: &str) -> Result<bool> {
        self.element_exists(selector).await
    }

    async fn query_text_content(&self, selector: &str) -> Result<String> {
        self.text_content(selector).await
    }

    async fn current_url(&self) -> Result<String> {
        self.get_current_url().await
    }

    async fn close_session(&self) -> Result<()> {
        self.close().await
    }
}
