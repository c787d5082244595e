use crate::domain::model::Banner;
use crate::utils::error::HomeError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// 每次渲染決定一次的裝置類別。
///
/// 設定檔與命令列共用 [`FromStr`] 的解析規則（忽略大小寫、接受 `pc`）。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DeviceClass {
    Mobile,
    #[default]
    Desktop,
}

fn mobile_user_agent() -> &'static Regex {
    static MOBILE_UA: OnceLock<Regex> = OnceLock::new();
    MOBILE_UA.get_or_init(|| {
        Regex::new(r"(?i)android|iphone|ipod|ipad|iemobile|windows phone|blackberry|opera mini|mobile")
            .expect("mobile user agent pattern is valid")
    })
}

impl DeviceClass {
    /// 由 User-Agent 粗略判斷是否為行動裝置
    pub fn from_user_agent(user_agent: &str) -> Self {
        if mobile_user_agent().is_match(user_agent) {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn product_columns(self) -> usize {
        match self {
            DeviceClass::Mobile => 2,
            DeviceClass::Desktop => 4,
        }
    }

    pub fn shortcut_columns(self) -> usize {
        match self {
            DeviceClass::Mobile => 5,
            DeviceClass::Desktop => 10,
        }
    }

    pub fn select_banner_image(self, banner: &Banner) -> &str {
        match self {
            DeviceClass::Mobile => &banner.mobile_image_url,
            DeviceClass::Desktop => &banner.pc_image_url,
        }
    }
}

impl FromStr for DeviceClass {
    type Err = HomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" => Ok(DeviceClass::Mobile),
            "desktop" | "pc" => Ok(DeviceClass::Desktop),
            other => Err(HomeError::InvalidConfigValueError {
                field: "device".to_string(),
                value: other.to_string(),
                reason: "Expected 'mobile' or 'desktop'".to_string(),
            }),
        }
    }
}

impl TryFrom<String> for DeviceClass {
    type Error = HomeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DeviceClass> for String {
    fn from(device: DeviceClass) -> Self {
        device.to_string()
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceClass::Mobile => write!(f, "mobile"),
            DeviceClass::Desktop => write!(f, "desktop"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banner() -> Banner {
        Banner {
            pc_image_url: "https://cdn.example.com/wide.jpg".to_string(),
            mobile_image_url: "https://cdn.example.com/narrow.jpg".to_string(),
            title: "Banner".to_string(),
            main_banner_id: 1,
        }
    }

    #[test]
    fn test_select_banner_image_by_device() {
        let banner = banner();
        assert_eq!(
            DeviceClass::Mobile.select_banner_image(&banner),
            "https://cdn.example.com/narrow.jpg"
        );
        assert_eq!(
            DeviceClass::Desktop.select_banner_image(&banner),
            "https://cdn.example.com/wide.jpg"
        );
    }

    #[test]
    fn test_from_user_agent() {
        let iphone = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
        let android = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Mobile Safari/537.36";
        let mac = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0) AppleWebKit/605.1.15 Safari/605.1.15";

        assert_eq!(DeviceClass::from_user_agent(iphone), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_user_agent(android), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_user_agent(mac), DeviceClass::Desktop);
        assert_eq!(DeviceClass::from_user_agent(""), DeviceClass::Desktop);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("Mobile".parse::<DeviceClass>().unwrap(), DeviceClass::Mobile);
        assert_eq!(" desktop ".parse::<DeviceClass>().unwrap(), DeviceClass::Desktop);
        assert!("tablet".parse::<DeviceClass>().is_err());
        assert_eq!(DeviceClass::Mobile.to_string(), "mobile");
    }

    #[test]
    fn test_serde_accepts_command_line_spellings() {
        let parsed: Vec<DeviceClass> =
            serde_json::from_str(r#"["Mobile", "PC", " desktop "]"#).unwrap();
        assert_eq!(
            parsed,
            vec![DeviceClass::Mobile, DeviceClass::Desktop, DeviceClass::Desktop]
        );
        assert!(serde_json::from_str::<DeviceClass>(r#""tablet""#).is_err());

        assert_eq!(serde_json::to_string(&DeviceClass::Mobile).unwrap(), r#""mobile""#);
        assert_eq!(serde_json::to_string(&DeviceClass::Desktop).unwrap(), r#""desktop""#);
    }

    #[test]
    fn test_layout_columns() {
        assert_eq!(DeviceClass::Mobile.product_columns(), 2);
        assert_eq!(DeviceClass::Desktop.product_columns(), 4);
        assert_eq!(DeviceClass::Mobile.shortcut_columns(), 5);
        assert_eq!(DeviceClass::Desktop.shortcut_columns(), 10);
    }
}
