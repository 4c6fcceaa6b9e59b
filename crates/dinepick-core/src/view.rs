//! Text for the result panel and the form controls.

use crate::types::{Coordinate, SelectedRestaurant, UiState};

/// Price tier as repeated currency symbols, never fewer than one.
#[must_use]
pub fn price_symbols(price_level: u8) -> String {
    "$".repeat(usize::from(price_level.max(1)))
}

/// An unknown open state renders as closed.
#[must_use]
pub fn open_status_label(open_now: Option<bool>) -> &'static str {
    if open_now.unwrap_or(false) {
        "營業中"
    } else {
        "已打烊"
    }
}

#[must_use]
pub fn search_button_label(ui: &UiState) -> &'static str {
    if ui.loading {
        "搜尋中..."
    } else {
        "隨機選擇餐廳"
    }
}

/// Indicator shown next to the location button once a coordinate is held.
#[must_use]
pub fn location_status(location: Option<Coordinate>) -> Option<&'static str> {
    location.map(|_| "位置已獲取")
}

/// Renders the recommendation panel, one line per field.
#[must_use]
pub fn render_restaurant(restaurant: &SelectedRestaurant) -> String {
    [
        "推薦餐廳".to_string(),
        restaurant.name.clone(),
        format!("地址: {}", restaurant.address),
        format!("價位: {}", price_symbols(restaurant.price_level)),
        format!(
            "評分: {} / 5 ({} 則評價)",
            restaurant.rating, restaurant.rating_count
        ),
        format!("電話: {}", restaurant.phone),
        format!("營業狀態: {}", open_status_label(restaurant.open_now)),
        format!("網站: {}", restaurant.website),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SelectedRestaurant {
        SelectedRestaurant {
            name: "阜杭豆漿".to_string(),
            address: "台北市中正區忠孝東路一段108號".to_string(),
            price_level: 2,
            rating: 4.2,
            rating_count: 18_000,
            phone: "02 2392 2175".to_string(),
            open_now: Some(true),
            website: "無網站".to_string(),
        }
    }

    #[test]
    fn price_symbols_repeat_per_level() {
        assert_eq!(price_symbols(1), "$");
        assert_eq!(price_symbols(4), "$$$$");
    }

    #[test]
    fn price_symbols_floor_at_one() {
        assert_eq!(price_symbols(0), "$");
    }

    #[test]
    fn open_status_treats_unknown_as_closed() {
        assert_eq!(open_status_label(Some(true)), "營業中");
        assert_eq!(open_status_label(Some(false)), "已打烊");
        assert_eq!(open_status_label(None), "已打烊");
    }

    #[test]
    fn button_label_tracks_loading() {
        let mut ui = UiState::default();
        assert_eq!(search_button_label(&ui), "隨機選擇餐廳");
        ui.loading = true;
        assert_eq!(search_button_label(&ui), "搜尋中...");
    }

    #[test]
    fn location_status_only_when_held() {
        assert_eq!(location_status(None), None);
        assert_eq!(
            location_status(Some(Coordinate::new(25.0, 121.5))),
            Some("位置已獲取")
        );
    }

    #[test]
    fn render_restaurant_lists_every_field() {
        let panel = render_restaurant(&sample());
        let lines: Vec<&str> = panel.lines().collect();
        assert_eq!(
            lines,
            vec![
                "推薦餐廳",
                "阜杭豆漿",
                "地址: 台北市中正區忠孝東路一段108號",
                "價位: $$",
                "評分: 4.2 / 5 (18000 則評價)",
                "電話: 02 2392 2175",
                "營業狀態: 營業中",
                "網站: 無網站",
            ]
        );
    }

    #[test]
    fn render_restaurant_has_no_trailing_newline() {
        let panel = render_restaurant(&sample());
        assert!(panel.ends_with("網站: 無網站"), "got: {panel:?}");
    }
}
