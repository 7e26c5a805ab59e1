//! Gallery filter and lightbox state.
//!
//! Lightbox indices point into the *filtered* list, so any filter change
//! closes the lightbox rather than leaving it on a stale index.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::content::gallery::{GalleryCategory, GalleryImage};

/// Category filter applied to the photo grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GalleryFilter {
    #[default]
    All,
    Only(GalleryCategory),
}

impl GalleryFilter {
    /// Filter buttons in display order.
    pub const OPTIONS: [Self; 4] = [
        Self::All,
        Self::Only(GalleryCategory::OurDishes),
        Self::Only(GalleryCategory::Restaurant),
        Self::Only(GalleryCategory::HappyGuests),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    pub fn matches(self, image: &GalleryImage) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => image.category == category,
        }
    }

    /// Images passing this filter, in their original relative order.
    pub fn apply<'a>(self, images: &'a [GalleryImage]) -> Vec<&'a GalleryImage> {
        images.iter().filter(|img| self.matches(img)).collect()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lightbox {
    #[default]
    Closed,
    Open(usize),
}

/// Keyboard commands understood while the lightbox is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxKey {
    Prev,
    Next,
    Close,
}

impl LightboxKey {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Prev),
            "ArrowRight" => Some(Self::Next),
            "Escape" => Some(Self::Close),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GalleryState {
    pub filter: GalleryFilter,
    pub lightbox: Lightbox,
}

impl GalleryState {
    pub fn set_filter(&mut self, filter: GalleryFilter) {
        self.filter = filter;
        self.lightbox = Lightbox::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self.lightbox, Lightbox::Open(_))
    }

    pub fn open_index(&self) -> Option<usize> {
        match self.lightbox {
            Lightbox::Open(index) => Some(index),
            Lightbox::Closed => None,
        }
    }

    /// Open image `index` of a filtered list holding `len` images.
    pub fn open(&mut self, index: usize, len: usize) {
        if index < len {
            self.lightbox = Lightbox::Open(index);
        }
    }

    pub fn close(&mut self) {
        self.lightbox = Lightbox::Closed;
    }

    pub fn next(&mut self, len: usize) {
        if let Lightbox::Open(index) = self.lightbox
            && len > 0
        {
            self.lightbox = Lightbox::Open((index + 1) % len);
        }
    }

    pub fn prev(&mut self, len: usize) {
        if let Lightbox::Open(index) = self.lightbox
            && len > 0
        {
            self.lightbox = Lightbox::Open((index + len - 1) % len);
        }
    }

    /// Apply a keyboard command. Returns `true` if the key was consumed.
    pub fn handle_key(&mut self, key: LightboxKey, len: usize) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            LightboxKey::Prev => self.prev(len),
            LightboxKey::Next => self.next(len),
            LightboxKey::Close => self.close(),
        }
        true
    }
}
