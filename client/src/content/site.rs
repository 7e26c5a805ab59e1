//! Restaurant details shared by the navbar, footer and pages.

/// A top-level route shown in the navbar and footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", path: "/" },
    NavLink { label: "Menu", path: "/menu" },
    NavLink { label: "About", path: "/about" },
    NavLink { label: "Gallery", path: "/gallery" },
    NavLink { label: "Contact", path: "/contact" },
];

pub const RESTAURANT_NAME: &str = "Prithi Cuisine";
pub const TAGLINE: &str = "Contemporary Bangladeshi & Indian Cuisine";
pub const ADDRESS: &str = "285 Ewell Rd, Surbiton KT6 7AB, United Kingdom";
pub const EMAIL: &str = "contactus@prithicuisine.com";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhoneNumber {
    pub display: &'static str,
    pub tel: &'static str,
}

pub const PRIMARY_PHONE: PhoneNumber = PhoneNumber { display: "020 8399 0030", tel: "tel:+442083990030" };
pub const SECONDARY_PHONE: PhoneNumber = PhoneNumber { display: "020 8399 3904", tel: "tel:+442083993904" };

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpeningHours {
    pub days: &'static str,
    pub hours: &'static str,
}

pub const OPENING_HOURS: &[OpeningHours] = &[
    OpeningHours { days: "Sunday", hours: "12:00 - 2:30 PM & 6:00 - 11:00 PM" },
    OpeningHours { days: "Monday - Thursday", hours: "6:00 PM - 11:00 PM" },
    OpeningHours { days: "Friday - Saturday", hours: "6:00 PM - 11:30 PM" },
];

pub const OFFER_SUMMARY: &str = "10% discount on collection over £10 | Free delivery over £15";
pub const BANQUET_PRICE_PENCE: u32 = 1595;

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d2490.0!2d-0.1900!3d51.3940!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x4876070be0a71591%3A0x7e3a4b4e78b0a64f!2s285+Ewell+Rd%2C+Surbiton+KT6+7AB!5e0!3m2!1sen!2suk!4v1700000000000!5m2!1sen!2suk";

pub const SOCIAL_LINKS: &[NavLink] = &[
    NavLink { label: "Facebook", path: "https://facebook.com/prithicuisine/" },
    NavLink { label: "Instagram", path: "https://instagram.com" },
    NavLink { label: "Twitter", path: "https://twitter.com" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeaturedDish {
    pub name: &'static str,
    pub price_pence: u32,
    pub image: &'static str,
    pub description: &'static str,
}

pub const FEATURED_DISHES: &[FeaturedDish] = &[
    FeaturedDish {
        name: "Prithi Tikka Masala",
        price_pence: 1145,
        image: "/images/dish-1.jpg",
        description: "Tender chicken tikka bathed in our signature creamy masala sauce, infused with hand-ground Kashmiri spices.",
    },
    FeaturedDish {
        name: "Tandoori Mixed Grill",
        price_pence: 1545,
        image: "/images/dish-2.jpg",
        description: "A sizzling platter of chicken tikka, lamb chops, seekh kebab, and tandoori prawns from our clay oven.",
    },
    FeaturedDish {
        name: "Non-Vegetable Thali",
        price_pence: 1795,
        image: "/images/dish-3.jpg",
        description: "A grand selection of curries, tandoori meats, rice, naan, sides, and dessert served on a traditional thali.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub rating: u8,
    pub text: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "James L.",
        rating: 5,
        text: "An absolutely exquisite dining experience. The Tandoori Mixed Grill was cooked to perfection and the spices were beautifully balanced. Best Indian restaurant in Surbiton without a doubt.",
    },
    Testimonial {
        name: "Sarah M.",
        rating: 5,
        text: "We visit Prithi every week for their Banquet Night and it never disappoints. The flavours are authentic, the staff are wonderful, and the atmosphere is always warm and welcoming.",
    },
    Testimonial {
        name: "David R.",
        rating: 5,
        text: "From the moment you walk in, you know this place is special. The chef clearly takes immense pride in every dish. The slow-cooked lamb curry is something I dream about.",
    },
];

/// Title + body pair used for value cards and craft highlights.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub body: &'static str,
}

pub const CRAFT_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Hand-Ground Spice Blends",
        body: "Each spice blend is prepared fresh daily, stone-ground to release maximum aroma and depth.",
    },
    Highlight {
        title: "48-Hour Marinated Tandoori",
        body: "Our meats are marinated for up to 48 hours in yoghurt and spices before meeting the searing heat of the tandoor.",
    },
    Highlight {
        title: "Slow-Cooked Curries",
        body: "Simmered low and slow, our curries develop rich, layered flavours that simply cannot be rushed.",
    },
    Highlight {
        title: "Artisanal Clay Oven Breads",
        body: "From naan to paratha, our breads are hand-stretched and baked to order in our traditional clay oven.",
    },
];

pub const VALUES: &[Highlight] = &[
    Highlight {
        title: "Fresh Ingredients",
        body: "Every dish begins with the finest seasonal produce and whole spices, sourced daily to ensure vibrant flavour and unmatched quality.",
    },
    Highlight {
        title: "Authentic Recipes",
        body: "Rooted in generations of Bangladeshi and Indian culinary heritage, our recipes honour time-tested traditions passed down through family kitchens.",
    },
    Highlight {
        title: "Warm Hospitality",
        body: "From the moment you step through our doors, expect genuine warmth, attentive service, and an atmosphere that feels like coming home.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certificate {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const CERTIFICATES: &[Certificate] = &[
    Certificate { src: "/images/award.jpg", alt: "Excellence Award" },
    Certificate { src: "/images/certificate.jpg", alt: "Quality Certificate" },
    Certificate { src: "/images/certificate-2.jpg", alt: "Hygiene Certificate" },
];
