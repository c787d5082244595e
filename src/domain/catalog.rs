use crate::domain::model::{Collection, CollectionItem};
use crate::utils::error::{HomeError, Result};
use serde_json::Value;

pub const FEATURED_TYPE: &str = "SINGLE";
pub const FEATURED_VIEW_TYPE: &str = "TILE";

/// 每個商品集合最多顯示的商品數
pub const MAX_ITEMS_PER_COLLECTION: usize = 4;

pub fn is_featured(kind: &str, view_type: &str) -> bool {
    kind == FEATURED_TYPE && view_type == FEATURED_VIEW_TYPE
}

fn is_featured_value(raw: &Value) -> bool {
    let kind = raw.get("type").and_then(Value::as_str).unwrap_or_default();
    let view_type = raw.get("viewType").and_then(Value::as_str).unwrap_or_default();
    is_featured(kind, view_type)
}

/// 保留 `SINGLE` + `TILE` 的集合並維持原始順序。
///
/// 先以原始 JSON 篩選，只有保留下來的項目才會轉成 [`Collection`]，
/// 其他形狀不同的集合不會影響結果。
pub fn filter_featured(raw_items: Vec<Value>) -> Result<Vec<Collection>> {
    raw_items
        .into_iter()
        .filter(is_featured_value)
        .map(|raw| {
            serde_json::from_value::<Collection>(raw).map_err(|e| HomeError::MalformedDataError {
                resource: "collection".to_string(),
                message: e.to_string(),
            })
        })
        .collect()
}

pub fn truncate_items(items: &[CollectionItem]) -> &[CollectionItem] {
    &items[..items.len().min(MAX_ITEMS_PER_COLLECTION)]
}
