//! 首頁 HTML 與價格表輸出。
//!
//! 所有輸出只依賴 [`HomepageView`]，相同輸入一定得到相同位元組。

use crate::domain::model::{CollectionView, HomepageView, ProductCard};
use crate::utils::error::{HomeError, Result};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use serde::Serialize;

pub const DEFAULT_RATING_ICON_URL: &str = "https://www.testvalley.kr/star/star-darkgray.svg";

pub fn render_homepage(view: &HomepageView, rating_icon_url: &str) -> String {
    let device = view.device;
    let markup = html! {
        (DOCTYPE)
        html lang="ko" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (view.page_title) }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main class={ "home home-" (device.to_string()) } {
                    section class="carousel" {
                        @for banner in &view.banners {
                            img class="carousel-slide" data-banner-id=(banner.id)
                                src=(banner.image_url) alt=(banner.title);
                        }
                    }

                    section class={ "shortcuts cols-" (device.shortcut_columns()) } {
                        @for shortcut in &view.shortcuts {
                            div class="shortcut" data-shortcut-id=(shortcut.id) {
                                img class="shortcut-icon" src=(shortcut.image_url) alt="banner";
                                div class="shortcut-title" { (shortcut.title) }
                            }
                        }
                    }

                    section class="collections" {
                        @for collection in &view.collections {
                            (render_collection(collection, device.product_columns(), rating_icon_url))
                        }
                    }
                }
            }
        }
    };

    markup.into_string()
}

fn render_collection(collection: &CollectionView, columns: usize, rating_icon_url: &str) -> Markup {
    html! {
        div class="collection" data-collection-id=(collection.id) {
            div class="collection-heading" {
                h2 { (collection.title) }
                h4 class="collection-subtitle" { (collection.subtitle) }
            }
            div class={ "products cols-" (columns) } {
                @for product in &collection.products {
                    (render_product(product, rating_icon_url))
                }
            }
        }
    }
}

fn render_product(product: &ProductCard, rating_icon_url: &str) -> Markup {
    html! {
        div class="product" {
            @if let Some(image_url) = &product.image_url {
                img class="product-image" src=(image_url) alt="product";
            }
            h3 class="product-title" { (product.title) }
            div class="product-price" {
                @if let Some(badge) = &product.price.badge {
                    span class="badge" { (badge) }
                }
                span class="amount" { (product.price.amount) }
                span class="currency" { (product.price.currency) }
            }
            div class="rating" {
                img src=(rating_icon_url) alt="rating";
                (product.rating)
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct PriceSheetRow<'a> {
    collection: &'a str,
    title: &'a str,
    badge: &'a str,
    price: &'a str,
    currency: &'a str,
    rating: &'a str,
}

/// 匯出首頁上實際顯示的商品價格（CSV）
pub fn render_price_sheet(view: &HomepageView) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for collection in &view.collections {
        for product in &collection.products {
            writer.serialize(PriceSheetRow {
                collection: &collection.title,
                title: &product.title,
                badge: product.price.badge.as_deref().unwrap_or(""),
                price: &product.price.amount,
                currency: &product.price.currency,
                rating: &product.rating,
            })?;
        }
    }

    // 沒有任何資料列時 serialize 不會輸出標題列
    if view.product_count() == 0 {
        writer.write_record(["collection", "title", "badge", "price", "currency", "rating"])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| HomeError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| HomeError::MalformedDataError {
        resource: "price sheet".to_string(),
        message: e.to_string(),
    })
}

const PAGE_CSS: &str = r#"
body{margin:0;font-family:system-ui,-apple-system,"Apple SD Gothic Neo",sans-serif;background:#fff;color:#111}
.home{padding-bottom:5rem}
.home-desktop{padding-left:10rem;padding-right:10rem}
.carousel{display:flex;overflow-x:auto;scroll-snap-type:x mandatory}
.carousel-slide{flex:0 0 100%;width:100%;object-fit:cover;scroll-snap-align:start}
.shortcuts{display:grid;padding:1rem 1rem 0}
.shortcuts.cols-5{grid-template-columns:repeat(5,1fr)}
.shortcuts.cols-10{grid-template-columns:repeat(10,1fr);padding:0;margin-top:2.5rem}
.shortcut{display:flex;flex-direction:column;align-items:center;justify-content:center;min-width:3.5rem;padding:.25rem}
.shortcut-icon{width:3rem}
.home-desktop .shortcut-icon{width:4rem}
.shortcut-title{font-size:.7rem;margin-top:.5rem}
.collections{display:flex;flex-direction:column;padding:0 1rem}
.collection{margin-top:3.5rem}
.home-desktop .collection{display:grid;grid-template-columns:repeat(8,1fr)}
.home-desktop .collection-heading{grid-column:span 2}
.home-desktop .products{grid-column:span 6}
.collection-subtitle{font-size:.75rem;font-weight:400;margin-top:.5rem;color:#999}
.products{display:grid}
.products.cols-2{grid-template-columns:repeat(2,1fr)}
.products.cols-4{grid-template-columns:repeat(4,1fr)}
.product{padding:.25rem}
.product-image{width:100%;border-radius:.25rem}
.product-title{font-size:.875rem;font-weight:400;overflow:hidden;display:-webkit-box;-webkit-line-clamp:2;-webkit-box-orient:vertical}
.product-price .badge{font-size:1.125rem;font-weight:600;color:#FF5023;margin-right:.25rem}
.product-price .amount{font-size:1.125rem;font-weight:600}
.product-price .currency{font-size:.75rem}
.rating{font-size:.75rem;display:inline-flex}
"#;
