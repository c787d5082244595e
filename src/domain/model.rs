use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub pc_image_url: String,
    pub mobile_image_url: String,
    #[serde(default)]
    pub title: String,
    pub main_banner_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shortcut {
    pub image_url: String,
    #[serde(default)]
    pub title: String,
    pub main_shortcut_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub view_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub items: Vec<CollectionItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionItem {
    pub publication: Publication,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub title: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub media: Vec<Media>,
    pub price_info: PriceInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub uri: String,
}

/// 價格欄位之間的一致性由上游負責，這裡不做交叉驗證
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceInfo {
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_discount_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_discount_rate: Option<f64>,
}

/// `GET /collections` 的外層結構；項目保持原始 JSON，篩選後才轉型
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionEnvelope {
    pub items: Vec<serde_json::Value>,
}

/// 首頁的三個獨立資料槽，初始皆為空
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomepageData {
    pub banners: Vec<Banner>,
    pub shortcuts: Vec<Shortcut>,
    pub collections: Vec<Collection>,
}

impl HomepageData {
    pub fn is_empty(&self) -> bool {
        self.banners.is_empty() && self.shortcuts.is_empty() && self.collections.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BannerView {
    pub id: i64,
    pub title: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortcutView {
    pub id: i64,
    pub title: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceLabel {
    pub badge: Option<String>,
    pub amount: String,
    pub currency: String,
}

impl PriceLabel {
    /// 例如 `"1,000원"`
    pub fn display_price(&self) -> String {
        format!("{}{}", self.amount, self.currency)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub title: String,
    pub image_url: Option<String>,
    pub rating: String,
    pub price: PriceLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionView {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub products: Vec<ProductCard>,
}

/// 轉換後、可直接渲染的首頁
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomepageView {
    pub page_title: String,
    pub device: crate::domain::device::DeviceClass,
    pub banners: Vec<BannerView>,
    pub shortcuts: Vec<ShortcutView>,
    pub collections: Vec<CollectionView>,
}

impl HomepageView {
    pub fn product_count(&self) -> usize {
        self.collections.iter().map(|c| c.products.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_banner_uses_camel_case_fields() {
        let banner: Banner = serde_json::from_value(json!({
            "mainBannerId": 7,
            "title": "Autumn sale",
            "pcImageUrl": "https://cdn.example.com/pc.jpg",
            "mobileImageUrl": "https://cdn.example.com/m.jpg",
            "linkUrl": "https://www.example.com/sale"
        }))
        .unwrap();

        assert_eq!(banner.main_banner_id, 7);
        assert_eq!(banner.pc_image_url, "https://cdn.example.com/pc.jpg");
        assert_eq!(banner.mobile_image_url, "https://cdn.example.com/m.jpg");
    }

    #[test]
    fn test_collection_reads_type_tag() {
        let collection: Collection = serde_json::from_value(json!({
            "id": 3,
            "type": "SINGLE",
            "viewType": "TILE",
            "title": "Deals",
            "items": [{
                "publication": {
                    "title": "Phone case",
                    "rating": 4.8,
                    "media": [{"uri": "https://cdn.example.com/case.png"}],
                    "priceInfo": {"price": 12000, "discountPrice": 9900, "discountRate": 17}
                }
            }]
        }))
        .unwrap();

        assert_eq!(collection.kind, "SINGLE");
        assert_eq!(collection.view_type, "TILE");
        assert_eq!(collection.subtitle, "");
        let price = &collection.items[0].publication.price_info;
        assert_eq!(price.discount_price, Some(9900.0));
        assert_eq!(price.coupon_discount_price, None);
    }

    #[test]
    fn test_publication_without_price_info_is_rejected() {
        let result: std::result::Result<Publication, _> =
            serde_json::from_value(json!({"title": "No price", "rating": 3}));
        assert!(result.is_err());
    }

    #[test]
    fn test_display_price_appends_currency() {
        let label = PriceLabel {
            badge: None,
            amount: "1,000".to_string(),
            currency: "원".to_string(),
        };
        assert_eq!(label.display_price(), "1,000원");
    }
}
