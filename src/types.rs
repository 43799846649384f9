use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Output format for CLI results
#[derive(Clone, Copy, Debug, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON format for programmatic consumption
    Json,
    /// Human-readable simple format
    Simple,
}

/// Browser viewport dimensions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportSize {
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
}

impl ViewportSize {
    /// Parse viewport size from "WIDTHxHEIGHT" format (e.g., "1920x1080")
    pub fn parse(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('x').collect();
        if parts.len() != 2 {
            anyhow::bail!("Invalid viewport format. Use WIDTHxHEIGHT (e.g., 1920x1080)");
        }

        let width = parts[0]
            .parse::<u32>()
            .map_err(|_| anyhow::anyhow!("Invalid width in viewport size"))?;
        let height = parts[1]
            .parse::<u32>()
            .map_err(|_| anyhow::anyhow!("Invalid height in viewport size"))?;

        Ok(ViewportSize { width, height })
    }
}

/// Local forwarding proxy the browser routes its traffic through
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyConfig {
    pub host: String,
    pub port: u16,
}

impl ProxyConfig {
    /// Parse a proxy from "host:port" or a full URL (e.g., "http://127.0.0.1:8080")
    pub fn parse(s: &str) -> Result<Self> {
        if s.contains("://") {
            let parsed = url::Url::parse(s)
                .map_err(|e| anyhow::anyhow!("Invalid proxy URL '{}': {}", s, e))?;
            let host = parsed
                .host_str()
                .ok_or_else(|| anyhow::anyhow!("Proxy URL '{}' has no host", s))?
                .to_string();
            let port = parsed
                .port()
                .ok_or_else(|| anyhow::anyhow!("Proxy URL '{}' has no port", s))?;
            return Ok(ProxyConfig { host, port });
        }

        let (host, port) = s
            .rsplit_once(':')
            .ok_or_else(|| anyhow::anyhow!("Invalid proxy format. Use HOST:PORT or a URL"))?;
        if host.is_empty() {
            anyhow::bail!("Invalid proxy format. Use HOST:PORT or a URL");
        }
        let port = port
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("Invalid port in proxy address"))?;

        Ok(ProxyConfig {
            host: host.to_string(),
            port,
        })
    }

    /// The "host:port" form used in WebDriver proxy capabilities
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Result of a successful selector search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMatch {
    /// The expanded selector whose text matched the target
    pub selector: String,
    /// How many candidates were probed, including the match
    pub candidates_tried: u64,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
