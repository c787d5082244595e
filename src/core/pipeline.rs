use crate::core::loader::HomepageLoader;
use crate::core::render::{render_homepage, render_price_sheet};
use crate::core::view::{build_view, ViewOptions};
use crate::core::{ConfigProvider, HomepageData, HomepageView, Pipeline, Storage};
use crate::utils::error::{HomeError, Result};
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub const HTML_FILENAME: &str = "index.html";
pub const JSON_FILENAME: &str = "homepage.json";
pub const CSV_FILENAME: &str = "price_sheet.csv";

pub struct HomepagePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    loader: HomepageLoader,
}

impl<S: Storage, C: ConfigProvider> HomepagePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let loader = HomepageLoader::new(config.api_base_url(), config.fetch_failure_policy());
        Self {
            storage,
            config,
            loader,
        }
    }

    fn view_options(&self) -> ViewOptions {
        ViewOptions {
            device: self.config.device(),
            page_title: self.config.page_title().to_string(),
            currency_unit: self.config.currency_unit().to_string(),
        }
    }

    /// 依設定的輸出格式產生 (檔名, 內容)
    fn render_outputs(&self, view: &HomepageView) -> Result<Vec<(&'static str, Vec<u8>)>> {
        let mut outputs = Vec::new();
        for format in self.config.output_formats() {
            let output = match format.as_str() {
                "html" => (
                    HTML_FILENAME,
                    render_homepage(view, self.config.rating_icon_url()).into_bytes(),
                ),
                "json" => (JSON_FILENAME, serde_json::to_vec_pretty(view)?),
                "csv" => (CSV_FILENAME, render_price_sheet(view)?.into_bytes()),
                other => {
                    return Err(HomeError::InvalidConfigValueError {
                        field: "output_formats".to_string(),
                        value: other.to_string(),
                        reason: "Unsupported format".to_string(),
                    })
                }
            };
            outputs.push(output);
        }
        Ok(outputs)
    }

    fn bundle(outputs: &[(&'static str, Vec<u8>)]) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
        for (name, data) in outputs {
            zip.start_file::<_, ()>(*name, FileOptions::default())?;
            zip.write_all(data)?;
        }
        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for HomepagePipeline<S, C> {
    async fn extract(&self) -> Result<HomepageData> {
        self.loader.load_all().await
    }

    async fn transform(&self, data: HomepageData) -> Result<HomepageView> {
        let options = self.view_options();
        tracing::debug!("Rendering for device: {}", options.device);
        Ok(build_view(&data, &options))
    }

    async fn load(&self, view: HomepageView) -> Result<String> {
        let outputs = self.render_outputs(&view)?;

        if self.config.compression_enabled() {
            let bundle_name = self.config.bundle_filename();
            let zip_data = Self::bundle(&outputs)?;
            tracing::debug!(
                "Writing bundle {} ({} files, {} bytes)",
                bundle_name,
                outputs.len(),
                zip_data.len()
            );
            self.storage.write_file(bundle_name, &zip_data).await?;
            return Ok(format!("{}/{}", self.config.output_path(), bundle_name));
        }

        for (name, data) in &outputs {
            tracing::debug!("Writing {} ({} bytes)", name, data.len());
            self.storage.write_file(name, data).await?;
        }

        let primary = outputs
            .first()
            .map(|(name, _)| *name)
            .ok_or_else(|| HomeError::MissingConfigError {
                field: "output_formats".to_string(),
            })?;
        Ok(format!("{}/{}", self.config.output_path(), primary))
    }
}
