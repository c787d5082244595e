use crate::domain::catalog::truncate_items;
use crate::domain::device::DeviceClass;
use crate::domain::model::{
    BannerView, Collection, CollectionView, HomepageData, HomepageView, ProductCard, Publication,
    ShortcutView,
};
use crate::domain::pricing::price_label;

#[derive(Debug, Clone)]
pub struct ViewOptions {
    pub device: DeviceClass,
    pub page_title: String,
    pub currency_unit: String,
}

/// 將三個資料槽轉成可渲染的首頁；不修改輸入資料
pub fn build_view(data: &HomepageData, options: &ViewOptions) -> HomepageView {
    let device = options.device;

    let banners = data
        .banners
        .iter()
        .map(|banner| BannerView {
            id: banner.main_banner_id,
            title: banner.title.clone(),
            image_url: device.select_banner_image(banner).to_string(),
        })
        .collect();

    let shortcuts = data
        .shortcuts
        .iter()
        .map(|shortcut| ShortcutView {
            id: shortcut.main_shortcut_id,
            title: shortcut.title.clone(),
            image_url: shortcut.image_url.clone(),
        })
        .collect();

    let collections = data
        .collections
        .iter()
        .map(|collection| collection_view(collection, &options.currency_unit))
        .collect();

    HomepageView {
        page_title: options.page_title.clone(),
        device,
        banners,
        shortcuts,
        collections,
    }
}

fn collection_view(collection: &Collection, currency_unit: &str) -> CollectionView {
    CollectionView {
        id: collection.id,
        title: collection.title.clone(),
        subtitle: collection.subtitle.clone(),
        products: truncate_items(&collection.items)
            .iter()
            .map(|item| product_card(&item.publication, currency_unit))
            .collect(),
    }
}

fn product_card(publication: &Publication, currency_unit: &str) -> ProductCard {
    let image_url = publication.media.first().map(|m| m.uri.clone());
    if image_url.is_none() {
        tracing::debug!("Publication '{}' has no media; rendering without image", publication.title);
    }

    ProductCard {
        title: publication.title.clone(),
        image_url,
        // 評分原樣顯示，不做千分位或小數位數處理
        rating: publication.rating.to_string(),
        price: price_label(&publication.price_info, currency_unit),
    }
}
