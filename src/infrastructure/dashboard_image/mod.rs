//! Server side of `POST /api/generate-dashboard-image`.
//!
//! The handler parses a [`PortfolioSnapshot`], renders the share card as
//! HTML and hands it to a [`PngRasterizer`] (a headless browser owned by the
//! host process). Either a complete PNG comes back or a JSON error with
//! status 500; partial output is never returned.

pub mod template;

use futures::future::LocalBoxFuture;

use crate::domain::{
    errors::{DashboardImageError, ImageResult},
    logging::{LogComponent, get_logger},
    portfolio::PortfolioSnapshot,
};

pub use template::render_dashboard_html;

pub const DASHBOARD_IMAGE_PATH: &str = "/api/generate-dashboard-image";
pub const ATTACHMENT_PREFIX: &str = "radbot-dashboard-";
pub const GENERIC_FAILURE: &str = "Failed to generate image";

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Browser viewport the card is captured at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureViewport {
    pub width: u32,
    pub height: u32,
}

impl Default for CaptureViewport {
    fn default() -> Self {
        Self { width: 800, height: 600 }
    }
}

/// Turns an HTML document into PNG bytes.
pub trait PngRasterizer {
    fn rasterize<'a>(&'a self, html: &'a str, viewport: CaptureViewport) -> LocalBoxFuture<'a, ImageResult<Vec<u8>>>;
}

/// `radbot-dashboard-<name>.png`, where every whitespace run in the name
/// becomes one hyphen and the result is lowercased. Characters that would
/// break the quoted `filename="..."` parameter are dropped.
pub fn attachment_filename(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else if matches!(ch, '"' | ';' | '\\') || ch.is_control() {
            continue;
        } else {
            slug.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    format!("{}{}.png", ATTACHMENT_PREFIX, slug)
}

/// Transport-neutral HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn png(bytes: Vec<u8>, filename: &str) -> Self {
        Self {
            status: 200,
            headers: vec![
                ("Content-Type".to_string(), "image/png".to_string()),
                (
                    "Content-Disposition".to_string(),
                    format!("attachment; filename=\"{}\"", filename),
                ),
            ],
            body: bytes,
        }
    }

    pub fn internal_error() -> Self {
        let body = serde_json::json!({ "error": GENERIC_FAILURE }).to_string();
        Self {
            status: 500,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: body.into_bytes(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A rendered card ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardImage {
    pub filename: String,
    pub png: Vec<u8>,
}

pub struct DashboardImageEndpoint<R: PngRasterizer> {
    rasterizer: R,
    viewport: CaptureViewport,
}

impl<R: PngRasterizer> DashboardImageEndpoint<R> {
    pub fn new(rasterizer: R) -> Self {
        Self { rasterizer, viewport: CaptureViewport::default() }
    }

    /// Render `body` into a PNG. `generated_on` is the date printed on the card.
    pub async fn render(&self, body: &[u8], generated_on: &str) -> ImageResult<DashboardImage> {
        let snapshot = PortfolioSnapshot::from_json(body)?;
        let html = render_dashboard_html(&snapshot, generated_on, self.viewport);

        let png = self.rasterizer.rasterize(&html, self.viewport).await?;
        if !png.starts_with(&PNG_SIGNATURE) {
            return Err(DashboardImageError::Render(format!(
                "rasterizer returned {} bytes without a PNG signature",
                png.len()
            )));
        }

        Ok(DashboardImage { filename: attachment_filename(&snapshot.name), png })
    }

    /// Full request cycle; failures are logged and collapse into a generic 500.
    pub async fn handle(&self, body: &[u8], generated_on: &str) -> ApiResponse {
        match self.render(body, generated_on).await {
            Ok(image) => {
                get_logger().info(
                    LogComponent::Infrastructure("DashboardImage"),
                    &format!("🖼️ Rendered {} ({} bytes)", image.filename, image.png.len()),
                );
                ApiResponse::png(image.png, &image.filename)
            }
            Err(e) => {
                crate::log_error!(LogComponent::Infrastructure("DashboardImage"), "Error generating dashboard image: {}", e);
                ApiResponse::internal_error()
            }
        }
    }
}
