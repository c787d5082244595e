use crate::config::toml_config::ConfigOverrides;
use crate::config::{
    resolve_device, DEFAULT_API_BASE_URL, DEFAULT_BUNDLE_FILENAME, DEFAULT_OUTPUT_PATH,
    DEFAULT_PAGE_TITLE,
};
use crate::core::render::DEFAULT_RATING_ICON_URL;
use crate::core::ConfigProvider;
use crate::domain::device::DeviceClass;
use crate::domain::ports::FetchFailurePolicy;
use crate::domain::pricing::DEFAULT_CURRENCY_UNIT;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_output_formats, validate_path, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

fn default_output_formats() -> &'static [String] {
    static FORMATS: OnceLock<Vec<String>> = OnceLock::new();
    FORMATS.get_or_init(|| vec!["html".to_string()])
}

/// 命令列設定。未指定的選項保持 `None`，預設值在讀取時才補上，
/// 搭配 `--config` 時只有明確指定的選項會覆蓋設定檔。
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "storefront-home")]
#[command(about = "Fetch storefront banners, shortcuts and collections and render the homepage")]
pub struct CliConfig {
    #[arg(long, help = format!("Commerce API base URL [default: {}]", DEFAULT_API_BASE_URL))]
    pub api_base_url: Option<String>,

    #[arg(long, help = format!("Output directory [default: {}]", DEFAULT_OUTPUT_PATH))]
    pub output_path: Option<String>,

    #[arg(long, help = "Device class to render for: mobile or desktop [default: desktop]")]
    pub device: Option<DeviceClass>,

    #[arg(long, help = "Detect the device class from a User-Agent string")]
    pub user_agent: Option<String>,

    #[arg(
        long,
        value_delimiter = ',',
        help = "Comma-separated outputs: html, json, csv [default: html]"
    )]
    pub output_formats: Option<Vec<String>>,

    #[arg(long, help = "Bundle all outputs into a single zip archive")]
    pub compress: bool,

    #[arg(long, help = format!("Zip archive name [default: {}]", DEFAULT_BUNDLE_FILENAME))]
    pub bundle_filename: Option<String>,

    #[arg(long, help = "Abort when any resource fails to load instead of rendering it empty")]
    pub fail_on_fetch_error: bool,

    #[arg(long, help = format!("Page title [default: {}]", DEFAULT_PAGE_TITLE))]
    pub page_title: Option<String>,

    #[arg(long, help = format!("Currency suffix [default: {}]", DEFAULT_CURRENCY_UNIT))]
    pub currency_unit: Option<String>,

    #[arg(long, help = "Icon shown next to product ratings")]
    pub rating_icon_url: Option<String>,

    #[arg(short, long, help = "Load settings from a TOML file; other flags override it")]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// 明確指定的選項，用來覆蓋 TOML 設定檔
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_url: self.api_base_url.clone(),
            output_path: self.output_path.clone(),
            output_formats: self.output_formats.clone(),
            compress: self.compress,
            bundle_filename: self.bundle_filename.clone(),
            device: self.device,
            user_agent: self.user_agent.clone(),
            page_title: self.page_title.clone(),
            currency_unit: self.currency_unit.clone(),
            rating_icon_url: self.rating_icon_url.clone(),
            fail_on_api_failure: self.fail_on_fetch_error,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    fn output_path(&self) -> &str {
        self.output_path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn device(&self) -> DeviceClass {
        resolve_device(self.device, self.user_agent.as_deref())
    }

    fn output_formats(&self) -> &[String] {
        self.output_formats
            .as_deref()
            .unwrap_or_else(|| default_output_formats())
    }

    fn compression_enabled(&self) -> bool {
        self.compress
    }

    fn bundle_filename(&self) -> &str {
        self.bundle_filename
            .as_deref()
            .unwrap_or(DEFAULT_BUNDLE_FILENAME)
    }

    fn fetch_failure_policy(&self) -> FetchFailurePolicy {
        if self.fail_on_fetch_error {
            FetchFailurePolicy::Fail
        } else {
            FetchFailurePolicy::Empty
        }
    }

    fn page_title(&self) -> &str {
        self.page_title.as_deref().unwrap_or(DEFAULT_PAGE_TITLE)
    }

    fn currency_unit(&self) -> &str {
        self.currency_unit.as_deref().unwrap_or(DEFAULT_CURRENCY_UNIT)
    }

    fn rating_icon_url(&self) -> &str {
        self.rating_icon_url
            .as_deref()
            .unwrap_or(DEFAULT_RATING_ICON_URL)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base_url", self.api_base_url())?;
        validate_path("output_path", self.output_path())?;
        validate_output_formats("output_formats", self.output_formats())?;
        validate_non_empty_string("currency_unit", self.currency_unit())?;
        validate_url("rating_icon_url", self.rating_icon_url())?;
        if self.compress {
            validate_path("bundle_filename", self.bundle_filename())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::TomlConfig;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_defaults() {
        let config = CliConfig::parse_from(["storefront-home"]);
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(config.output_path(), DEFAULT_OUTPUT_PATH);
        assert_eq!(config.output_formats(), ["html"]);
        assert_eq!(config.bundle_filename(), DEFAULT_BUNDLE_FILENAME);
        assert_eq!(config.page_title(), DEFAULT_PAGE_TITLE);
        assert_eq!(config.device(), DeviceClass::Desktop);
        assert_eq!(config.fetch_failure_policy(), FetchFailurePolicy::Empty);
        assert_eq!(config.currency_unit(), "원");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_flags() {
        let config = CliConfig::parse_from([
            "storefront-home",
            "--device",
            "mobile",
            "--output-formats",
            "html,json,csv",
            "--compress",
            "--fail-on-fetch-error",
        ]);
        assert_eq!(config.device(), DeviceClass::Mobile);
        assert_eq!(config.output_formats(), ["html", "json", "csv"]);
        assert!(config.compression_enabled());
        assert_eq!(config.fetch_failure_policy(), FetchFailurePolicy::Fail);
    }

    #[test]
    fn test_unset_flags_produce_empty_overrides() {
        let overrides = CliConfig::parse_from(["storefront-home", "--config", "home.toml"]).overrides();
        assert!(overrides.base_url.is_none());
        assert!(overrides.output_path.is_none());
        assert!(overrides.output_formats.is_none());
        assert!(overrides.bundle_filename.is_none());
        assert!(overrides.page_title.is_none());
        assert!(overrides.currency_unit.is_none());
        assert!(overrides.rating_icon_url.is_none());
        assert!(!overrides.compress);
        assert!(!overrides.fail_on_api_failure);
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[source]
base_url = "https://api.example.com"

[render]
page_title = "From file"
currency_unit = " KRW"

[load]
output_path = "./from-file"
output_formats = ["html"]
"#
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "storefront-home",
            "--config",
            path.as_str(),
            "--output-path",
            "./from-flag",
            "--output-formats",
            "json",
            "--page-title",
            "Flag",
            "--compress",
            "--bundle-filename",
            "flag.zip",
        ]);

        let mut config = TomlConfig::from_file(cli.config.as_deref().unwrap()).unwrap();
        config.apply_overrides(cli.overrides());

        assert_eq!(config.output_path(), "./from-flag");
        assert_eq!(config.output_formats(), ["json"]);
        assert_eq!(config.page_title(), "Flag");
        assert!(config.compression_enabled());
        assert_eq!(config.bundle_filename(), "flag.zip");

        // Flags that were not given leave the file values alone.
        assert_eq!(config.api_base_url(), "https://api.example.com");
        assert_eq!(config.currency_unit(), " KRW");
        assert_eq!(config.device(), DeviceClass::Desktop);
    }

    #[test]
    fn test_user_agent_overrides_device() {
        let config = CliConfig {
            device: Some(DeviceClass::Desktop),
            user_agent: Some("Mozilla/5.0 (Linux; Android 14) Mobile Safari".to_string()),
            ..Default::default()
        };
        assert_eq!(config.device(), DeviceClass::Mobile);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let bad_url = CliConfig {
            api_base_url: Some("api.testvalley.kr".to_string()),
            ..Default::default()
        };
        assert!(bad_url.validate().is_err());

        let bad_format = CliConfig {
            output_formats: Some(vec!["xml".to_string()]),
            ..Default::default()
        };
        assert!(bad_format.validate().is_err());
    }
}
