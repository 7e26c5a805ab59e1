use super::*;

#[test]
fn gallery_has_fourteen_images() {
    assert_eq!(GALLERY_IMAGES.len(), 14);
}

#[test]
fn every_category_is_represented() {
    for category in GalleryCategory::ALL {
        assert!(
            GALLERY_IMAGES.iter().any(|img| img.category == category),
            "no images for {}",
            category.label()
        );
    }
}

#[test]
fn category_labels_are_distinct() {
    assert_eq!(GalleryCategory::OurDishes.label(), "Our Dishes");
    assert_eq!(GalleryCategory::Restaurant.label(), "Restaurant");
    assert_eq!(GalleryCategory::HappyGuests.label(), "Happy Guests");
}

#[test]
fn image_paths_are_served_from_images_dir() {
    for img in GALLERY_IMAGES {
        assert!(img.src.starts_with("/images/"), "{}", img.src);
        assert!(!img.alt.is_empty());
    }
}
