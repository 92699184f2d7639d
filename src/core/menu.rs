use crate::domain::model::{Menu, MenuItem};
use crate::utils::error::Result;

/// Diet icon the feed uses to mark a vegetarian offering.
pub const VEGGIE_ICON: &str = "veg";

/// Strict decode of the raw feed.
pub fn decode_menu(raw: &str) -> Result<Menu> {
    Ok(serde_json::from_str(raw)?)
}

/// Decode the raw feed into a menu.
///
/// Malformed text and an empty feed both come out as the empty menu; the
/// difference only shows up in the logs, never in the reply.
pub fn parse_menu(raw: &str) -> Menu {
    match decode_menu(raw) {
        Ok(menu) => {
            if menu.is_empty() {
                tracing::debug!("Menu feed returned no items");
            }
            menu
        }
        Err(e) => {
            tracing::warn!("Menu feed could not be decoded: {}", e);
            Vec::new()
        }
    }
}

/// Rewrite every image reference to an absolute URL, falling back to the
/// placeholder when the feed has no picture for an item.
pub fn resolve_images(menu: &mut Menu, image_base_url: &str, placeholder_image_url: &str) {
    for item in menu.iter_mut() {
        item.image = if item.image.is_empty() {
            placeholder_image_url.to_string()
        } else {
            format!("{}{}", image_base_url, item.image)
        };
    }
}

/// Printable serving station for an item. Unknown codes pass through as-is.
pub fn item_location(item: &MenuItem) -> &str {
    match item.loc.as_str() {
        "1" | "1veg" => "Ausgabe 1",
        "2" | "2veg" => "Ausgabe 2",
        "Feelgood" => "Atrium (Feelgood)",
        other => other,
    }
}

/// All items sharing the lowest price, in menu order.
///
/// Prices that fail to parse never participate, so a menu where nothing
/// parses yields an empty result.
pub fn cheapest_items(menu: &Menu) -> Vec<&MenuItem> {
    let mut cheapest = f64::INFINITY;
    for item in menu {
        if let Ok(price) = item.price.parse::<f64>() {
            if price < cheapest {
                cheapest = price;
            }
        }
    }

    menu.iter()
        .filter(|item| {
            item.price
                .parse::<f64>()
                .map(|price| price == cheapest)
                .unwrap_or(false)
        })
        .collect()
}

/// First vegetarian item in menu order. Later matches are ignored.
pub fn veggie_item(menu: &Menu) -> Option<&MenuItem> {
    menu.iter().find(|item| item.icon == VEGGIE_ICON)
}
