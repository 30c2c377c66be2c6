use gloo::net::http::Request;

use crate::domain::{
    errors::{DashboardImageError, ImageResult},
    logging::{LogComponent, LogLevel, get_logger},
    portfolio::PortfolioSnapshot,
};
use crate::infrastructure::dashboard_image::DASHBOARD_IMAGE_PATH;

/// HTTP client for the dashboard image endpoint.
#[derive(Clone, Debug)]
pub struct DashboardImageClient {
    base_url: String,
}

impl Default for DashboardImageClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardImageClient {
    /// Same-origin client.
    pub fn new() -> Self {
        Self::with_base_url("")
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_string() }
    }

    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.base_url, DASHBOARD_IMAGE_PATH)
    }

    /// POST the snapshot and return the PNG bytes.
    pub async fn generate(&self, snapshot: &PortfolioSnapshot) -> ImageResult<Vec<u8>> {
        let url = self.endpoint_url();
        get_logger().info(
            LogComponent::Infrastructure("DashboardImageClient"),
            &format!("📡 Requesting dashboard image for '{}' from {}", snapshot.name, url),
        );

        let response = Request::post(&url)
            .json(snapshot)
            .map_err(|e| DashboardImageError::Network(format!("Failed to encode request: {:?}", e)))?
            .send()
            .await
            .map_err(|e| DashboardImageError::Network(format!("Failed to send request: {:?}", e)))?;

        if !response.ok() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| response.status_text());
            get_logger().log_with_metadata(
                LogLevel::Warn,
                LogComponent::Infrastructure("DashboardImageClient"),
                "Image endpoint rejected the request",
                &format!("status={} url={}", response.status(), url),
            );
            return Err(DashboardImageError::Network(format!(
                "HTTP error: {} - {}",
                response.status(),
                detail
            )));
        }

        let bytes = response
            .binary()
            .await
            .map_err(|e| DashboardImageError::Network(format!("Failed to read body: {:?}", e)))?;

        get_logger().info(
            LogComponent::Infrastructure("DashboardImageClient"),
            &format!("✅ Received {} bytes of PNG", bytes.len()),
        );
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_joins_base_and_path() {
        assert_eq!(DashboardImageClient::new().endpoint_url(), "/api/generate-dashboard-image");
        assert_eq!(
            DashboardImageClient::with_base_url("https://radbot.app/").endpoint_url(),
            "https://radbot.app/api/generate-dashboard-image"
        );
    }
}
