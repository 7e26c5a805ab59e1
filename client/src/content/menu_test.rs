use std::collections::HashSet;

use super::*;

#[test]
fn menu_category_names_are_unique() {
    let names: HashSet<_> = MENU.iter().map(|c| c.name).collect();
    assert_eq!(names.len(), MENU.len());
}

#[test]
fn every_category_has_items() {
    for category in MENU {
        assert!(!category.items.is_empty(), "{} has no items", category.name);
    }
}

#[test]
fn spice_level_only_set_on_spicy_items() {
    for item in MENU.iter().flat_map(|c| c.items) {
        assert!(item.spice_level <= MAX_SPICE_LEVEL, "{}", item.name);
        if !item.spicy {
            assert_eq!(item.spice_level, 0, "{}", item.name);
        }
    }
}

#[test]
fn spicy_builder_clamps_level() {
    let item = MenuItem::new("Test", 100).spicy(9);
    assert!(item.spicy);
    assert_eq!(item.spice_level, MAX_SPICE_LEVEL);
}

#[test]
fn builder_defaults_are_plain() {
    let item = MenuItem::new("Plain Naan", 295);
    assert_eq!(item.description, None);
    assert!(!item.popular);
    assert!(!item.spicy);
    assert_eq!(item.spice_level, 0);
}

#[test]
fn items_keep_declared_order() {
    let starters = &MENU[0];
    assert_eq!(starters.name, "Starters");
    assert_eq!(starters.items[0].name, "Onion Bhaji");
    assert_eq!(starters.items[1].name, "Vegetable Samosa");
}

#[test]
fn category_index_finds_by_name() {
    assert_eq!(category_index(MENU, "Starters"), Some(0));
    assert_eq!(category_index(MENU, "Desserts"), Some(MENU.len() - 1));
    assert_eq!(category_index(MENU, "Breakfast"), None);
}

#[test]
fn signature_dishes_match_home_page_prices() {
    let find = |name: &str| MENU.iter().flat_map(|c| c.items).find(|i| i.name == name).copied();
    assert_eq!(find("Prithi Tikka Masala").map(|i| i.price_pence), Some(1145));
    assert_eq!(find("Tandoori Mixed Grill").map(|i| i.price_pence), Some(1545));
    assert_eq!(find("Non-Vegetable Thali").map(|i| i.price_pence), Some(1795));
}
