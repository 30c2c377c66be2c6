use crate::domain::{
    errors::ImageResult,
    logging::LogComponent,
    portfolio::UserPortfolio,
};
use crate::infrastructure::{
    DashboardImageClient, browser::download_bytes, dashboard_image::attachment_filename,
};

/// Export the dashboard as a PNG and hand it to the browser as a download.
#[derive(Clone, Debug, Default)]
pub struct ShareDashboardUseCase {
    client: DashboardImageClient,
}

impl ShareDashboardUseCase {
    pub fn new(client: DashboardImageClient) -> Self {
        Self { client }
    }

    /// Returns the filename the image was saved under.
    pub async fn execute(&self, portfolio: &UserPortfolio) -> ImageResult<String> {
        let snapshot = portfolio.snapshot();
        snapshot.validate()?;

        let png = self.client.generate(&snapshot).await?;
        let filename = attachment_filename(&snapshot.name);
        download_bytes(&png, &filename, "image/png")?;

        crate::log_info!(LogComponent::Application("ShareDashboard"), "📥 Saved {}", filename);
        Ok(filename)
    }
}
