pub mod storage;
pub mod toml_config;

#[cfg(feature = "cli")]
mod cli_config;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

use crate::domain::device::DeviceClass;

pub const DEFAULT_API_BASE_URL: &str = "https://api.testvalley.kr";
pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_PAGE_TITLE: &str = "Hi";
pub const DEFAULT_BUNDLE_FILENAME: &str = "homepage.zip";

/// User-Agent 優先於明確指定的裝置類別
pub(crate) fn resolve_device(device: Option<DeviceClass>, user_agent: Option<&str>) -> DeviceClass {
    match user_agent {
        Some(ua) => DeviceClass::from_user_agent(ua),
        None => device.unwrap_or_default(),
    }
}
