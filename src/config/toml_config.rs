use crate::config::{
    resolve_device, DEFAULT_API_BASE_URL, DEFAULT_BUNDLE_FILENAME, DEFAULT_PAGE_TITLE,
};
use crate::core::render::DEFAULT_RATING_ICON_URL;
use crate::core::ConfigProvider;
use crate::domain::device::DeviceClass;
use crate::domain::ports::FetchFailurePolicy;
use crate::domain::pricing::DEFAULT_CURRENCY_UNIT;
use crate::utils::error::{HomeError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_output_formats, validate_path, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

const ON_API_FAILURE_VALUES: [&str; 2] = ["empty", "fail"];

/// 命令列明確指定的設定；`None` / `false` 表示沿用設定檔
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub output_path: Option<String>,
    pub output_formats: Option<Vec<String>>,
    pub compress: bool,
    pub bundle_filename: Option<String>,
    pub device: Option<DeviceClass>,
    pub user_agent: Option<String>,
    pub page_title: Option<String>,
    pub currency_unit: Option<String>,
    pub rating_icon_url: Option<String>,
    pub fail_on_api_failure: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    #[serde(default)]
    pub render: RenderConfig,
    pub load: LoadConfig,
    pub error_handling: Option<ErrorHandlingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderConfig {
    pub device: Option<DeviceClass>,
    pub user_agent: Option<String>,
    pub page_title: Option<String>,
    pub currency_unit: Option<String>,
    pub rating_icon_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    #[serde(default = "default_output_formats")]
    pub output_formats: Vec<String>,
    pub compression: Option<CompressionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressionConfig {
    pub enabled: bool,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorHandlingConfig {
    /// `"empty"`（預設）或 `"fail"`
    pub on_api_failure: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_output_formats() -> Vec<String> {
    vec!["html".to_string()]
}

fn env_var_pattern() -> &'static Regex {
    static ENV_VAR: OnceLock<Regex> = OnceLock::new();
    ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HomeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| HomeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_BASE_URL})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 命令列指定的裝置類別覆蓋設定檔
    pub fn override_device(&mut self, device: Option<DeviceClass>, user_agent: Option<String>) {
        if device.is_some() {
            self.render.device = device;
            self.render.user_agent = None;
        }
        if user_agent.is_some() {
            self.render.user_agent = user_agent;
        }
    }

    /// 套用命令列覆蓋值，只處理有指定的欄位
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(base_url) = overrides.base_url {
            self.source.base_url = base_url;
        }
        if let Some(output_path) = overrides.output_path {
            self.load.output_path = output_path;
        }
        if let Some(output_formats) = overrides.output_formats {
            self.load.output_formats = output_formats;
        }
        if overrides.compress || overrides.bundle_filename.is_some() {
            let compression = self.load.compression.get_or_insert(CompressionConfig {
                enabled: false,
                filename: None,
            });
            if overrides.compress {
                compression.enabled = true;
            }
            if overrides.bundle_filename.is_some() {
                compression.filename = overrides.bundle_filename;
            }
        }

        self.override_device(overrides.device, overrides.user_agent);
        if overrides.page_title.is_some() {
            self.render.page_title = overrides.page_title;
        }
        if overrides.currency_unit.is_some() {
            self.render.currency_unit = overrides.currency_unit;
        }
        if overrides.rating_icon_url.is_some() {
            self.render.rating_icon_url = overrides.rating_icon_url;
        }

        if overrides.fail_on_api_failure {
            self.set_fail_on_api_failure();
        }
    }

    pub fn set_fail_on_api_failure(&mut self) {
        self.error_handling = Some(ErrorHandlingConfig {
            on_api_failure: Some("fail".to_string()),
        });
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("source.base_url", &self.source.base_url)?;
        validate_path("load.output_path", &self.load.output_path)?;
        validate_output_formats("load.output_formats", &self.load.output_formats)?;
        validate_non_empty_string("render.currency_unit", self.currency_unit())?;
        validate_url("render.rating_icon_url", self.rating_icon_url())?;

        if let Some(compression) = &self.load.compression {
            if compression.enabled {
                validate_path("load.compression.filename", self.bundle_filename())?;
            }
        }

        if let Some(policy) = self
            .error_handling
            .as_ref()
            .and_then(|e| e.on_api_failure.as_deref())
        {
            if !ON_API_FAILURE_VALUES.contains(&policy) {
                return Err(HomeError::InvalidConfigValueError {
                    field: "error_handling.on_api_failure".to_string(),
                    value: policy.to_string(),
                    reason: format!("Expected one of: {}", ON_API_FAILURE_VALUES.join(", ")),
                });
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn api_base_url(&self) -> &str {
        &self.source.base_url
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn device(&self) -> DeviceClass {
        resolve_device(self.render.device, self.render.user_agent.as_deref())
    }

    fn output_formats(&self) -> &[String] {
        &self.load.output_formats
    }

    fn compression_enabled(&self) -> bool {
        self.load.compression.as_ref().is_some_and(|c| c.enabled)
    }

    fn bundle_filename(&self) -> &str {
        self.load
            .compression
            .as_ref()
            .and_then(|c| c.filename.as_deref())
            .unwrap_or(DEFAULT_BUNDLE_FILENAME)
    }

    fn fetch_failure_policy(&self) -> FetchFailurePolicy {
        match self
            .error_handling
            .as_ref()
            .and_then(|e| e.on_api_failure.as_deref())
        {
            Some("fail") => FetchFailurePolicy::Fail,
            _ => FetchFailurePolicy::Empty,
        }
    }

    fn page_title(&self) -> &str {
        self.render.page_title.as_deref().unwrap_or(DEFAULT_PAGE_TITLE)
    }

    fn currency_unit(&self) -> &str {
        self.render
            .currency_unit
            .as_deref()
            .unwrap_or(DEFAULT_CURRENCY_UNIT)
    }

    fn rating_icon_url(&self) -> &str {
        self.render
            .rating_icon_url
            .as_deref()
            .unwrap_or(DEFAULT_RATING_ICON_URL)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
