use crate::domain::device::DeviceClass;
use crate::domain::model::{HomepageData, HomepageView};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// 單一資源抓取失敗時的處理方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchFailurePolicy {
    /// 記錄警告，資料槽維持空值
    #[default]
    Empty,
    /// 直接回傳錯誤
    Fail,
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn output_path(&self) -> &str;
    fn device(&self) -> DeviceClass;
    fn output_formats(&self) -> &[String];
    fn compression_enabled(&self) -> bool;
    fn bundle_filename(&self) -> &str;
    fn fetch_failure_policy(&self) -> FetchFailurePolicy;
    fn page_title(&self) -> &str;
    fn currency_unit(&self) -> &str;
    fn rating_icon_url(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<HomepageData>;
    async fn transform(&self, data: HomepageData) -> Result<HomepageView>;
    async fn load(&self, view: HomepageView) -> Result<String>;
}
