//! Headless browser rendering for JS-heavy pages.
//!
//! This module provides a renderer trait and implementation using
//! chromiumoxide for headless Chrome/Chromium browser control. The page is
//! given a settle delay after navigation so pending JavaScript runs before
//! the DOM markup is read back.

use chromiumoxide::cdp::browser_protocol::emulation::SetDeviceMetricsOverrideParams;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use linkseeker_core::config::BrowserConfig;

/// Errors that can occur during page rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Failed to launch or connect to browser.
    #[error("browser launch failed: {0}")]
    BrowserLaunch(String),

    /// DNS resolution failed for the target host.
    #[error("unknown host: {0}")]
    HostNotFound(String),

    /// Failed to navigate to URL.
    #[error("navigation failed: {0}")]
    Navigation(String),

    /// Failed to get page content.
    #[error("content retrieval failed: {0}")]
    ContentRetrieval(String),

    /// Timeout waiting for page to load.
    #[error("render timeout after {0}ms")]
    Timeout(u64),
}

impl From<RenderError> for linkseeker_core::Error {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::HostNotFound(msg) => linkseeker_core::Error::HostNotFound(msg),
            other => linkseeker_core::Error::Render(other.to_string()),
        }
    }
}

/// Chromium reports DNS failures as navigation errors; everything else is a
/// generic driver failure.
fn classify_navigation(message: String, host: &str) -> RenderError {
    if message.contains("ERR_NAME_NOT_RESOLVED") || message.contains("ERR_NAME_RESOLUTION_FAILED") {
        RenderError::HostNotFound(host.to_string())
    } else {
        RenderError::Navigation(message)
    }
}

/// Options for rendering a page.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Timeout in milliseconds for the whole render, navigation included
    /// (default: 30000).
    pub timeout_ms: u64,

    /// Delay after navigation for pending JavaScript, in milliseconds
    /// (default: 2000). Counted against the timeout.
    pub settle_ms: u64,

    /// Viewport dimensions (default: 1280x720).
    pub viewport: (u32, u32),
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { timeout_ms: 30000, settle_ms: 2000, viewport: (1280, 720) }
    }
}

impl RenderOptions {
    /// Settle delay actually applied, clamped to half the timeout so the
    /// delay can never consume the whole render budget.
    pub fn effective_settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms.min(self.timeout_ms / 2))
    }
}

/// Result of rendering a page.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Rendered HTML content.
    pub html: String,

    /// Final URL after redirects.
    pub final_url: Url,

    /// Time taken to render in milliseconds.
    pub render_time_ms: u64,
}

/// Renderer trait for headless browser page rendering.
#[async_trait::async_trait]
pub trait Renderer: Send + Sync {
    /// Render a URL to HTML via headless browser.
    async fn render(&self, url: &Url, opts: &RenderOptions) -> Result<RenderedPage, RenderError>;
}

/// Headless Chrome/Chromium renderer using chromiumoxide.
pub struct HeadlessRenderer {
    _browser: chromiumoxide::Browser,
}

impl HeadlessRenderer {
    /// Create a new headless renderer by launching a browser instance.
    ///
    /// The browser is launched with the flags from `BrowserConfig` and uses
    /// a background task to handle Chrome DevTools Protocol events.
    pub async fn new(config: &BrowserConfig) -> Result<Self, RenderError> {
        use chromiumoxide::browser::{Browser, BrowserConfig as OxideConfig};
        use futures_util::StreamExt;

        let mut builder = OxideConfig::builder();
        if !config.headless {
            builder = builder.with_head();
        }
        builder = builder.args(launch_args(config));

        let (browser, mut handler) =
            Browser::launch(builder.build().map_err(RenderError::BrowserLaunch)?)
                .await
                .map_err(|e| RenderError::BrowserLaunch(e.to_string()))?;

        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("browser handler event error: {e}");
                    break;
                }
            }
        });

        Ok(Self { _browser: browser })
    }
}

fn launch_args(config: &BrowserConfig) -> Vec<&'static str> {
    let flags = [
        (config.disable_infobars, "--disable-infobars"),
        (config.disable_extensions, "--disable-extensions"),
        (config.no_sandbox, "--no-sandbox"),
        (config.disable_application_cache, "--disable-application-cache"),
        (config.disable_gpu, "--disable-gpu"),
        (config.disable_dev_shm_usage, "--disable-dev-shm-usage"),
    ];

    flags
        .into_iter()
        .filter_map(|(enabled, arg)| enabled.then_some(arg))
        .collect()
}

#[async_trait::async_trait]
impl Renderer for HeadlessRenderer {
    async fn render(&self, url: &Url, opts: &RenderOptions) -> Result<RenderedPage, RenderError> {
        let host = url.host_str().unwrap_or(url.as_str());
        let start = std::time::Instant::now();

        // Navigation, settle, and content readback can all stall on a dead
        // server; one timer bounds the whole sequence.
        let (width, height) = opts.viewport;
        let settle = opts.effective_settle();

        let (html, page_url, page) =
            tokio::time::timeout(Duration::from_millis(opts.timeout_ms), async {
                let page = self
                    ._browser
                    .new_page(url.as_str())
                    .await
                    .map_err(|e| classify_navigation(e.to_string(), host))?;

                page.execute(
                    SetDeviceMetricsOverrideParams::builder()
                        .width(width as i64)
                        .height(height as i64)
                        .device_scale_factor(1.)
                        .mobile(false)
                        .build()
                        .map_err(RenderError::Navigation)?,
                )
                .await
                .map_err(|e| RenderError::Navigation(e.to_string()))?;

                tokio::time::sleep(settle).await;

                let html = page
                    .content()
                    .await
                    .map_err(|e| RenderError::ContentRetrieval(e.to_string()))?;

                let page_url = page
                    .url()
                    .await
                    .map_err(|e| RenderError::ContentRetrieval(e.to_string()))?;

                Ok::<_, RenderError>((html, page_url, page))
            })
            .await
            .map_err(|_| RenderError::Timeout(opts.timeout_ms))??;

        let final_url = Url::parse(page_url.as_deref().unwrap_or(url.as_str()))
            .map_err(|e| RenderError::Navigation(e.to_string()))?;

        let render_time_ms = start.elapsed().as_millis() as u64;

        page.close().await.ok();
        Ok(RenderedPage { html, final_url, render_time_ms })
    }
}
