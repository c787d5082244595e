use crate::domain::model::{PriceInfo, PriceLabel};
use crate::utils::format::{format_number, format_rate};

pub const DEFAULT_CURRENCY_UNIT: &str = "원";

/// 欄位存在且不為 0 才算有效；0 視同未設定
fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// 折扣徽章：優惠券折扣率優先，其次一般折扣率
pub fn resolve_badge(info: &PriceInfo) -> Option<f64> {
    present(info.coupon_discount_rate).or_else(|| present(info.discount_rate))
}

/// 顯示金額：優惠券價 → 折扣價 → 原價
///
/// 與 [`resolve_badge`] 各自獨立回退，兩者不保證一致。
pub fn resolve_amount(info: &PriceInfo) -> f64 {
    present(info.coupon_discount_price)
        .or_else(|| present(info.discount_price))
        .unwrap_or(info.price)
}

pub fn price_label(info: &PriceInfo, currency_unit: &str) -> PriceLabel {
    PriceLabel {
        badge: resolve_badge(info).map(format_rate),
        amount: format_number(resolve_amount(info)),
        currency: currency_unit.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_price_only() {
        let info = PriceInfo {
            price: 1000.0,
            ..Default::default()
        };
        let label = price_label(&info, DEFAULT_CURRENCY_UNIT);
        assert_eq!(label.badge, None);
        assert_eq!(label.display_price(), "1,000원");
    }

    #[test]
    fn test_discount_price() {
        let info = PriceInfo {
            price: 1000.0,
            discount_rate: Some(10.0),
            discount_price: Some(900.0),
            ..Default::default()
        };
        let label = price_label(&info, DEFAULT_CURRENCY_UNIT);
        assert_eq!(label.badge.as_deref(), Some("10%"));
        assert_eq!(label.display_price(), "900원");
    }

    #[test]
    fn test_coupon_discount_wins() {
        let info = PriceInfo {
            price: 1000.0,
            discount_rate: Some(10.0),
            discount_price: Some(900.0),
            coupon_discount_rate: Some(20.0),
            coupon_discount_price: Some(800.0),
        };
        let label = price_label(&info, DEFAULT_CURRENCY_UNIT);
        assert_eq!(label.badge.as_deref(), Some("20%"));
        assert_eq!(label.display_price(), "800원");
    }

    #[test]
    fn test_badge_and_amount_fall_back_independently() {
        // Coupon rate without a coupon price: badge from coupon, amount from discount.
        let info = PriceInfo {
            price: 1000.0,
            discount_rate: Some(10.0),
            discount_price: Some(900.0),
            coupon_discount_rate: Some(20.0),
            coupon_discount_price: None,
        };
        let label = price_label(&info, DEFAULT_CURRENCY_UNIT);
        assert_eq!(label.badge.as_deref(), Some("20%"));
        assert_eq!(label.amount, "900");
    }

    #[test]
    fn test_zero_values_count_as_absent() {
        let info = PriceInfo {
            price: 15000.0,
            discount_rate: Some(0.0),
            discount_price: Some(0.0),
            coupon_discount_rate: Some(0.0),
            coupon_discount_price: Some(0.0),
        };
        assert_eq!(resolve_badge(&info), None);
        assert_eq!(resolve_amount(&info), 15000.0);
    }

    #[test]
    fn test_custom_currency_unit() {
        let info = PriceInfo {
            price: 25900.0,
            ..Default::default()
        };
        assert_eq!(price_label(&info, " KRW").display_price(), "25,900 KRW");
    }
}
