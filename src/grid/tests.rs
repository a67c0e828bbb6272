#![allow(clippy::unwrap_used)]

use super::*;

fn grid(rows: usize, cols: usize) -> GridNav {
    let mut nav = GridNav::new();
    nav.rows_changed(rows, cols);
    nav
}

fn at(nav: &GridNav) -> (usize, usize) {
    let pos = nav.focus().unwrap();
    (pos.row, pos.col)
}

// ── arrows ────────────────────────────────────────────────────

#[test]
fn test_arrows_move_one_cell() {
    let mut nav = grid(3, 4);
    nav.set_focus(1, 1);

    assert!(nav.step(NavKey::Down));
    assert_eq!(at(&nav), (2, 1));
    assert!(nav.step(NavKey::Up));
    assert_eq!(at(&nav), (1, 1));
    assert!(nav.step(NavKey::Left));
    assert_eq!(at(&nav), (1, 0));
    assert!(nav.step(NavKey::Right));
    assert_eq!(at(&nav), (1, 1));
}

#[test]
fn test_up_at_first_row_is_noop() {
    let mut nav = grid(3, 4);
    nav.set_focus(0, 2);
    assert!(!nav.step(NavKey::Up));
    assert_eq!(at(&nav), (0, 2));
}

#[test]
fn test_down_at_last_row_is_noop() {
    let mut nav = grid(3, 4);
    nav.set_focus(2, 2);
    assert!(!nav.step(NavKey::Down));
    assert_eq!(at(&nav), (2, 2));
}

#[test]
fn test_left_at_first_column_is_noop() {
    let mut nav = grid(3, 4);
    nav.set_focus(1, 0);
    assert!(!nav.step(NavKey::Left));
    assert_eq!(at(&nav), (1, 0));
}

// ── wrap ──────────────────────────────────────────────────────

#[test]
fn test_tab_wraps_at_last_column() {
    let mut nav = grid(3, 4);
    nav.set_focus(0, 3);
    assert!(nav.step(NavKey::Tab));
    assert_eq!(at(&nav), (1, 0));
}

#[test]
fn test_right_wraps_at_last_column() {
    let mut nav = grid(3, 4);
    nav.set_focus(1, 3);
    assert!(nav.step(NavKey::Right));
    assert_eq!(at(&nav), (2, 0));
}

#[test]
fn test_wrap_on_last_row_is_noop() {
    let mut nav = grid(3, 4);
    nav.set_focus(2, 3);
    assert!(!nav.step(NavKey::Tab));
    assert_eq!(at(&nav), (2, 3));
}

// ── enter ─────────────────────────────────────────────────────

#[test]
fn test_enter_moves_down_one_row() {
    let mut nav = grid(3, 4);
    nav.set_focus(0, 2);
    assert!(nav.step(NavKey::Enter));
    assert_eq!(at(&nav), (1, 2));
}

#[test]
fn test_enter_at_last_row_is_noop() {
    let mut nav = grid(2, 2);
    nav.set_focus(1, 1);
    assert!(!nav.step(NavKey::Enter));
    assert_eq!(at(&nav), (1, 1));
}

// ── insertion continuation ────────────────────────────────────

#[test]
fn test_row_wait_resolves_against_new_row_list() {
    let mut nav = grid(3, 4);
    nav.set_focus(2, 1);

    nav.arm_row_wait();
    assert!(nav.row_wait_armed());

    // A row was inserted below; the target is computed post-insertion.
    assert!(nav.rows_changed(4, 4));
    assert_eq!(at(&nav), (3, 1));
    assert!(!nav.row_wait_armed());
}

#[test]
fn test_row_wait_is_one_shot() {
    let mut nav = grid(3, 4);
    nav.set_focus(2, 0);
    nav.arm_row_wait();
    assert!(nav.rows_changed(4, 4));

    // A second structural change without re-arming moves nothing.
    assert!(!nav.rows_changed(5, 4));
    assert_eq!(at(&nav), (3, 0));
}

#[test]
fn test_row_wait_cancelled_on_teardown() {
    let mut nav = grid(3, 4);
    nav.set_focus(2, 1);
    nav.arm_row_wait();
    nav.cancel_row_wait();

    assert!(!nav.rows_changed(4, 4));
    assert_eq!(at(&nav), (2, 1));
}

#[test]
fn test_row_wait_target_out_of_range_keeps_focus_clamped() {
    let mut nav = grid(3, 4);
    nav.set_focus(2, 1);
    nav.arm_row_wait();

    // The change removed rows instead of inserting one.
    assert!(!nav.rows_changed(2, 4));
    assert_eq!(at(&nav), (1, 1));
}

// ── reshaping ─────────────────────────────────────────────────

#[test]
fn test_rows_changed_clamps_focus() {
    let mut nav = grid(5, 6);
    nav.set_focus(4, 5);
    nav.rows_changed(2, 3);
    assert_eq!(at(&nav), (1, 2));
}

#[test]
fn test_empty_grid_has_no_focus() {
    let mut nav = grid(2, 2);
    nav.rows_changed(0, 2);
    assert!(nav.focus().is_none());
    assert!(!nav.step(NavKey::Down));
}

#[test]
fn test_focus_restored_after_refill() {
    let mut nav = grid(2, 2);
    nav.rows_changed(0, 0);
    nav.rows_changed(3, 3);
    assert_eq!(at(&nav), (0, 0));
}

// ── digit filter ──────────────────────────────────────────────

#[test]
fn test_filter_passes_pure_digits() {
    let f = filter_digits("12345");
    assert_eq!(f.value, "12345");
    assert!(!f.suppressed);
}

#[test]
fn test_filter_strips_interleaved_junk() {
    let f = filter_digits("1,2a3.4 5");
    assert_eq!(f.value, "12345");
    assert!(f.suppressed);
}

#[test]
fn test_filter_strips_sign_and_decimals() {
    let f = filter_digits("-42.50");
    assert_eq!(f.value, "4250");
    assert!(f.suppressed);
}

#[test]
fn test_filter_empty_input() {
    let f = filter_digits("");
    assert_eq!(f.value, "");
    assert!(!f.suppressed);
}

#[test]
fn test_filter_all_junk_suppresses() {
    let f = filter_digits("abc");
    assert_eq!(f.value, "");
    assert!(f.suppressed);
}
