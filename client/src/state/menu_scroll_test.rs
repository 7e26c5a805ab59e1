use super::*;

// =============================================================
// Passive observation
// =============================================================

#[test]
fn starts_on_first_category() {
    let sync = MenuScrollSync::new(4);
    assert_eq!(sync.active_index(), 0);
    assert!(!sync.is_suppressed());
}

#[test]
fn intersecting_section_becomes_active() {
    let mut sync = MenuScrollSync::new(4);
    assert!(sync.observe(2, true));
    assert_eq!(sync.active_index(), 2);
}

#[test]
fn non_intersecting_report_is_ignored() {
    let mut sync = MenuScrollSync::new(4);
    assert!(!sync.observe(3, false));
    assert_eq!(sync.active_index(), 0);
}

#[test]
fn out_of_range_report_is_ignored() {
    let mut sync = MenuScrollSync::new(2);
    assert!(!sync.observe(5, true));
    assert_eq!(sync.active_index(), 0);
}

#[test]
fn repeated_report_for_active_section_is_not_a_change() {
    let mut sync = MenuScrollSync::new(3);
    sync.observe(1, true);
    assert!(!sync.observe(1, true));
}

#[test]
fn batch_last_intersecting_entry_wins() {
    let mut sync = MenuScrollSync::new(5);
    assert!(sync.observe_batch([(1, true), (2, true), (3, false)]));
    assert_eq!(sync.active_index(), 2);
}

#[test]
fn batch_without_intersections_keeps_active() {
    let mut sync = MenuScrollSync::new(5);
    sync.observe(4, true);
    assert!(!sync.observe_batch([(1, false), (2, false)]));
    assert_eq!(sync.active_index(), 4);
}

// =============================================================
// Tab clicks and suppression
// =============================================================

#[test]
fn click_sets_active_and_suppresses() {
    let mut sync = MenuScrollSync::new(2);
    let jump = sync.click_tab(1).unwrap();
    assert_eq!(jump.index, 1);
    assert_eq!(sync.active_index(), 1);
    assert!(sync.is_suppressed());
}

#[test]
fn every_category_click_survives_passive_reports_until_settle() {
    let count = 6;
    for target in 0..count {
        let mut sync = MenuScrollSync::new(count);
        let jump = sync.click_tab(target).unwrap();
        for passing in 0..count {
            sync.observe(passing, true);
        }
        assert_eq!(sync.active_index(), target);

        assert!(sync.settle(jump.generation));
        assert_eq!(sync.active_index(), target);

        let other = (target + 1) % count;
        assert!(sync.observe(other, true));
        assert_eq!(sync.active_index(), other);
    }
}

#[test]
fn clicking_active_tab_still_jumps() {
    let mut sync = MenuScrollSync::new(3);
    let first = sync.click_tab(0).unwrap();
    let second = sync.click_tab(0).unwrap();
    assert_eq!(second.index, 0);
    assert!(second.generation > first.generation);
}

#[test]
fn stale_settle_does_not_release_suppression() {
    let mut sync = MenuScrollSync::new(4);
    let first = sync.click_tab(1).unwrap();
    let second = sync.click_tab(3).unwrap();

    assert!(!sync.settle(first.generation));
    assert!(sync.is_suppressed());
    assert!(!sync.observe(0, true));
    assert_eq!(sync.active_index(), 3);

    assert!(sync.settle(second.generation));
    assert!(!sync.is_suppressed());
}

#[test]
fn settle_twice_is_noop() {
    let mut sync = MenuScrollSync::new(2);
    let jump = sync.click_tab(1).unwrap();
    assert!(sync.settle(jump.generation));
    assert!(!sync.settle(jump.generation));
}

#[test]
fn out_of_range_click_is_ignored() {
    let mut sync = MenuScrollSync::new(2);
    assert_eq!(sync.click_tab(2), None);
    assert!(!sync.is_suppressed());
    assert_eq!(sync.active_index(), 0);
}

#[test]
fn empty_menu_ignores_everything() {
    let mut sync = MenuScrollSync::new(0);
    assert_eq!(sync.click_tab(0), None);
    assert!(!sync.observe(0, true));
}

// =============================================================
// Geometry
// =============================================================

#[test]
fn starters_mains_click_scrolls_heading_to_clearance() {
    let categories = ["Starters", "Mains"];
    let mut sync = MenuScrollSync::new(categories.len());
    let jump = sync.click_tab(1).unwrap();
    assert_eq!(categories[sync.active_index()], "Mains");

    // "Mains" heading is 900px below the viewport top while scrolled 300px.
    let target = scroll_target_y(900.0, 300.0);
    assert_eq!(target, 1060.0);
    // After scrolling to `target`, the heading sits at the clearance offset.
    assert_eq!(900.0 + 300.0 - target, HEADER_CLEARANCE_PX);
    assert_eq!(jump.index, 1);
}

#[test]
fn scroll_target_clamps_at_page_top() {
    assert_eq!(scroll_target_y(50.0, 0.0), 0.0);
}

#[test]
fn centered_strip_offset_centers_tab() {
    // Tab at 500px, 100px wide, strip 400px wide: center 550 -> left 350.
    assert_eq!(centered_strip_offset(500.0, 100.0, 400.0), 350.0);
}

#[test]
fn centered_strip_offset_clamps_for_leading_tabs() {
    assert_eq!(centered_strip_offset(0.0, 80.0, 400.0), 0.0);
}
