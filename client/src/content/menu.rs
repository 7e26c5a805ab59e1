//! Menu categories and dishes.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Highest spice level rendered as dots next to a dish.
pub const MAX_SPICE_LEVEL: u8 = 3;

/// A named group of dishes, rendered as one section with its own tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuCategory {
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub items: &'static [MenuItem],
}

/// A single dish. Prices are whole pence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub name: &'static str,
    pub price_pence: u32,
    pub description: Option<&'static str>,
    pub popular: bool,
    pub spicy: bool,
    pub spice_level: u8,
}

impl MenuItem {
    const fn new(name: &'static str, price_pence: u32) -> Self {
        Self { name, price_pence, description: None, popular: false, spicy: false, spice_level: 0 }
    }

    const fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    const fn popular(mut self) -> Self {
        self.popular = true;
        self
    }

    const fn spicy(mut self, level: u8) -> Self {
        self.spicy = true;
        self.spice_level = if level > MAX_SPICE_LEVEL { MAX_SPICE_LEVEL } else { level };
        self
    }
}

/// Index of the category with `name`, if present.
pub fn category_index(categories: &[MenuCategory], name: &str) -> Option<usize> {
    categories.iter().position(|c| c.name == name)
}

const STARTERS: &[MenuItem] = &[
    MenuItem::new("Onion Bhaji", 395).describe("Crisp spiced onion fritters with mint yoghurt."),
    MenuItem::new("Vegetable Samosa", 395).describe("Hand-folded pastry filled with spiced potato and peas."),
    MenuItem::new("Chicken Tikka", 495)
        .describe("Boneless chicken marinated for 48 hours and charred in the clay oven.")
        .popular(),
    MenuItem::new("Lamb Seekh Kebab", 545).describe("Minced lamb with fresh herbs, grilled on skewers.").spicy(1),
    MenuItem::new("King Prawn Puri", 695).describe("Prawns in a tangy bhuna sauce on fried puri bread."),
    MenuItem::new("Chicken Chaat", 495).describe("Shredded chicken tossed in chaat masala, served on puri.").spicy(1),
];

const TANDOORI: &[MenuItem] = &[
    MenuItem::new("Tandoori Chicken (Half)", 895).describe("On the bone, yoghurt and Kashmiri chilli marinade."),
    MenuItem::new("Chicken Shashlik", 1095).describe("Chicken tikka skewered with onion, pepper and tomato."),
    MenuItem::new("Lamb Chops", 1395).describe("Four chops marinated overnight in ginger, garlic and garam masala.").popular(),
    MenuItem::new("Tandoori King Prawn", 1495).describe("Jumbo prawns roasted over open flame."),
    MenuItem::new("Tandoori Mixed Grill", 1545)
        .describe("Chicken tikka, lamb chops, seekh kebab and tandoori prawns from the clay oven.")
        .popular(),
];

const SIGNATURES: &[MenuItem] = &[
    MenuItem::new("Prithi Tikka Masala", 1145)
        .describe("Chicken tikka in our signature creamy masala with hand-ground Kashmiri spices.")
        .popular(),
    MenuItem::new("Lamb Shatkora", 1245)
        .describe("Slow-cooked lamb with shatkora, a Sylheti citrus fruit, for a sharp aromatic finish.")
        .spicy(2),
    MenuItem::new("Naga Chicken", 1145).describe("Cooked with Bangladeshi naga chilli. Very hot.").spicy(3),
    MenuItem::new("Garlic Chilli Chicken", 1095).describe("Roasted garlic, green chilli and fresh coriander.").spicy(2),
    MenuItem::new("Salmon Bhuna", 1395).describe("Salmon fillet in a thick, dry bhuna with tomato and onion."),
    MenuItem::new("Butter Chicken", 1095).describe("Mild, rich tomato and butter sauce."),
];

const CLASSICS: &[MenuItem] = &[
    MenuItem::new("Korma", 895).describe("Mild and creamy with coconut and almond."),
    MenuItem::new("Bhuna", 895).describe("Medium, well-spiced with onions and tomatoes."),
    MenuItem::new("Dansak", 895).describe("Sweet, sour and hot with lentils.").spicy(1),
    MenuItem::new("Madras", 895).describe("Fairly hot with a touch of lemon.").spicy(2),
    MenuItem::new("Vindaloo", 895).describe("Very hot, with potato.").spicy(3),
    MenuItem::new("Jalfrezi", 945).describe("Fresh green chillies, peppers and onion.").spicy(2).popular(),
];

const BIRYANI: &[MenuItem] = &[
    MenuItem::new("Chicken Biryani", 1095).describe("Basmati rice cooked with chicken, served with vegetable curry."),
    MenuItem::new("Lamb Biryani", 1195).describe("Basmati rice cooked with lamb, served with vegetable curry."),
    MenuItem::new("Prithi Special Biryani", 1395)
        .describe("Chicken, lamb and prawn layered with saffron rice.")
        .popular(),
    MenuItem::new("Vegetable Biryani", 945),
];

const SIDES: &[MenuItem] = &[
    MenuItem::new("Saag Aloo", 445).describe("Spinach and potato."),
    MenuItem::new("Bombay Aloo", 445).describe("Spiced potato.").spicy(1),
    MenuItem::new("Tarka Dal", 445).describe("Yellow lentils tempered with garlic."),
    MenuItem::new("Chana Masala", 445).describe("Chickpeas in a tangy masala."),
    MenuItem::new("Bhindi Bhaji", 445).describe("Okra stir-fried with onion."),
];

const RICE_AND_BREADS: &[MenuItem] = &[
    MenuItem::new("Pilau Rice", 325),
    MenuItem::new("Mushroom Rice", 375),
    MenuItem::new("Plain Naan", 295).describe("Baked to order in the clay oven."),
    MenuItem::new("Garlic Naan", 345).popular(),
    MenuItem::new("Peshwari Naan", 375).describe("Filled with coconut, almond and sultana."),
    MenuItem::new("Keema Naan", 395).describe("Stuffed with spiced minced lamb."),
];

const SET_MEALS: &[MenuItem] = &[
    MenuItem::new("Vegetable Thali", 1595).describe("Three vegetable curries, dal, rice, naan and dessert."),
    MenuItem::new("Non-Vegetable Thali", 1795)
        .describe("Curries, tandoori meats, rice, naan, sides and dessert on a traditional thali.")
        .popular(),
    MenuItem::new("Wednesday Banquet", 1595).describe("Create your own four courses: starter, main, side and rice or naan."),
];

const DESSERTS: &[MenuItem] = &[
    MenuItem::new("Gulab Jamun", 395).describe("Warm milk dumplings in rose syrup."),
    MenuItem::new("Mango Kulfi", 425),
    MenuItem::new("Rasmalai", 425).describe("Soft cheese dumplings in cardamom milk."),
];

/// The full menu in display order.
pub const MENU: &[MenuCategory] = &[
    MenuCategory { name: "Starters", description: Some("Small plates to begin"), items: STARTERS },
    MenuCategory {
        name: "Tandoori",
        description: Some("Marinated for up to 48 hours and cooked in the clay oven"),
        items: TANDOORI,
    },
    MenuCategory { name: "Chef's Signatures", description: Some("Dishes we are known for"), items: SIGNATURES },
    MenuCategory {
        name: "Classic Curries",
        description: Some("Choose chicken, lamb, prawn or vegetable; king prawn £3.00 extra"),
        items: CLASSICS,
    },
    MenuCategory { name: "Biryani", description: None, items: BIRYANI },
    MenuCategory { name: "Vegetable Sides", description: None, items: SIDES },
    MenuCategory { name: "Rice & Breads", description: None, items: RICE_AND_BREADS },
    MenuCategory { name: "Set Meals", description: Some("Served for one"), items: SET_MEALS },
    MenuCategory { name: "Desserts", description: None, items: DESSERTS },
];
