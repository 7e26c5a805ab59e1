//! Menu tab strip synchronization.
//!
//! DESIGN
//! ======
//! Two inputs drive the active category: intersection reports while the
//! user scrolls, and tab clicks that start a smooth programmatic scroll. A
//! click suppresses intersection updates until its settle timer fires, so the
//! sections scrolled past on the way to the target cannot steal the highlight.
//! Each click bumps a generation counter; a timer only re-enables observation
//! when its generation is still the latest, which makes the last click win.

#[cfg(test)]
#[path = "menu_scroll_test.rs"]
mod menu_scroll_test;

/// Delay after a tab click before intersection updates resume.
pub const SETTLE_DELAY_MS: u32 = 900;

/// Distance kept between the viewport top and a section heading after a jump.
pub const HEADER_CLEARANCE_PX: f64 = 140.0;

/// Observation band: 30%..70% of the viewport height from the top.
pub const SECTION_ROOT_MARGIN: &str = "-30% 0px -30% 0px";

/// A tab click the page must act on: scroll to `index`, then call
/// [`MenuScrollSync::settle`] with `generation` after [`SETTLE_DELAY_MS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabJump {
    pub index: usize,
    pub generation: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuScrollSync {
    category_count: usize,
    active_index: usize,
    suppress_observation: bool,
    generation: u64,
}

impl MenuScrollSync {
    pub fn new(category_count: usize) -> Self {
        Self { category_count, active_index: 0, suppress_observation: false, generation: 0 }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppress_observation
    }

    /// Apply one intersection report. Returns `true` when the active index changed.
    pub fn observe(&mut self, index: usize, is_intersecting: bool) -> bool {
        if self.suppress_observation || !is_intersecting || index >= self.category_count {
            return false;
        }
        let changed = self.active_index != index;
        self.active_index = index;
        changed
    }

    /// Apply every entry from one observer callback; the last intersecting
    /// entry wins.
    pub fn observe_batch<I>(&mut self, entries: I) -> bool
    where
        I: IntoIterator<Item = (usize, bool)>,
    {
        let before = self.active_index;
        for (index, is_intersecting) in entries {
            self.observe(index, is_intersecting);
        }
        before != self.active_index
    }

    /// Handle a tab click. Re-clicking the active tab still yields a jump.
    pub fn click_tab(&mut self, index: usize) -> Option<TabJump> {
        if index >= self.category_count {
            return None;
        }
        self.active_index = index;
        self.suppress_observation = true;
        self.generation += 1;
        Some(TabJump { index, generation: self.generation })
    }

    /// Settle timer callback. Stale generations are ignored.
    pub fn settle(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.suppress_observation {
            return false;
        }
        self.suppress_observation = false;
        true
    }
}

/// Window scroll position that puts a section `section_top` (relative to the
/// viewport) at [`HEADER_CLEARANCE_PX`] below the top.
pub fn scroll_target_y(section_top: f64, scroll_y: f64) -> f64 {
    (section_top + scroll_y - HEADER_CLEARANCE_PX).max(0.0)
}

/// Horizontal strip offset that centers a tab inside its strip.
pub fn centered_strip_offset(tab_offset_left: f64, tab_width: f64, strip_width: f64) -> f64 {
    (tab_offset_left - strip_width / 2.0 + tab_width / 2.0).max(0.0)
}
