use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct HomeEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> HomeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting homepage build...");

        // Extract
        let data = self.pipeline.extract().await?;
        tracing::info!(
            "Fetched {} banners, {} shortcuts, {} collections",
            data.banners.len(),
            data.shortcuts.len(),
            data.collections.len()
        );
        if data.is_empty() {
            tracing::warn!("All sections are empty; rendering an empty homepage");
        }

        // Transform
        let view = self.pipeline.transform(data).await?;
        tracing::info!(
            "Prepared {} collections with {} products for {}",
            view.collections.len(),
            view.product_count(),
            view.device
        );

        // Load
        let output_path = self.pipeline.load(view).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
