//! Display formatting for prices, spice dots and dates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::content::menu::MAX_SPICE_LEVEL;

/// Render whole pence as pounds, e.g. `1145` -> `"£11.45"`.
pub fn format_price(pence: u32) -> String {
    format!("£{}.{:02}", pence / 100, pence % 100)
}

/// One flag per spice dot; `true` dots are filled.
pub fn spice_dots(level: u8) -> [bool; MAX_SPICE_LEVEL as usize] {
    let mut dots = [false; MAX_SPICE_LEVEL as usize];
    for (i, dot) in dots.iter_mut().enumerate() {
        *dot = i < usize::from(level);
    }
    dots
}

/// Star glyphs for a review rating out of five.
pub fn rating_stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Current calendar year (UTC) for the footer copyright line.
pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}
