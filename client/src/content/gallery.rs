//! Gallery photographs and their categories.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

/// Fixed set of photo categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GalleryCategory {
    OurDishes,
    Restaurant,
    HappyGuests,
}

impl GalleryCategory {
    pub const ALL: [Self; 3] = [Self::OurDishes, Self::Restaurant, Self::HappyGuests];

    pub fn label(self) -> &'static str {
        match self {
            Self::OurDishes => "Our Dishes",
            Self::Restaurant => "Restaurant",
            Self::HappyGuests => "Happy Guests",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
    pub category: GalleryCategory,
}

const fn image(src: &'static str, alt: &'static str, category: GalleryCategory) -> GalleryImage {
    GalleryImage { src, alt, category }
}

use GalleryCategory::{HappyGuests, OurDishes, Restaurant};

/// Every gallery photo in display order.
pub const GALLERY_IMAGES: &[GalleryImage] = &[
    image("/images/dish-1.jpg", "Signature dish beautifully plated", OurDishes),
    image("/images/guest-1.jpg", "Happy guests enjoying their meal", HappyGuests),
    image("/images/shop-front.jpeg", "Prithi Cuisine shop front", Restaurant),
    image("/images/dish-2.jpg", "Traditional Indian delicacy", OurDishes),
    image("/images/guest-2.jpg", "Guests celebrating a special occasion", HappyGuests),
    image("/images/interior-1.jpg", "Elegant restaurant interior", Restaurant),
    image("/images/dish-3.jpg", "Chef's special creation", OurDishes),
    image("/images/guest-3.jpg", "Family dinner at Prithi Cuisine", HappyGuests),
    image("/images/gallery-1.jpg", "Exquisite culinary presentation", OurDishes),
    image("/images/guest-4.jpg", "Friends gathering over fine dining", HappyGuests),
    image("/images/offer-1.png", "Special seasonal offering", OurDishes),
    image("/images/guest-5.jpg", "Birthday celebration at Prithi", HappyGuests),
    image("/images/offer-2.png", "Featured dish of the day", OurDishes),
    image("/images/guest-6.jpg", "Guests enjoying the ambiance", HappyGuests),
];
