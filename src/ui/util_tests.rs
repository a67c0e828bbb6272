#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(1234)), "1,234");
}

#[test]
fn test_format_amount_no_commas() {
    assert_eq!(format_amount(dec!(999)), "999");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(dec!(0)), "0");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-600)), "-600");
}

#[test]
fn test_format_amount_large() {
    assert_eq!(format_amount(dec!(1234567)), "1,234,567");
}

#[test]
fn test_format_amount_negative_large() {
    assert_eq!(format_amount(dec!(-99999)), "-99,999");
}

#[test]
fn test_format_amount_single_digit() {
    assert_eq!(format_amount(dec!(5)), "5");
}

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("rent", 10), "rent");
}

#[test]
fn test_truncate_exact_length() {
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("hello world", 5), "hell…");
}

#[test]
fn test_truncate_empty() {
    assert_eq!(truncate("", 5), "");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_unicode() {
    assert_eq!(truncate("日本語テスト", 4), "日本語…");
}

#[test]
fn test_truncate_one_char() {
    assert_eq!(truncate("hello", 1), "…");
}

// ── ensure_visible ────────────────────────────────────────────

#[test]
fn test_ensure_visible_inside_viewport_is_noop() {
    let mut scroll = 3;
    ensure_visible(&mut scroll, 5, 10);
    assert_eq!(scroll, 3);
}

#[test]
fn test_ensure_visible_scrolls_up_to_target() {
    let mut scroll = 8;
    ensure_visible(&mut scroll, 2, 10);
    assert_eq!(scroll, 2);
}

#[test]
fn test_ensure_visible_scrolls_down_to_target() {
    let mut scroll = 0;
    ensure_visible(&mut scroll, 12, 10);
    assert_eq!(scroll, 3);
}

#[test]
fn test_ensure_visible_target_at_page_edge() {
    let mut scroll = 0;
    ensure_visible(&mut scroll, 9, 10);
    assert_eq!(scroll, 0);
    ensure_visible(&mut scroll, 10, 10);
    assert_eq!(scroll, 1);
}

#[test]
fn test_ensure_visible_zero_page() {
    let mut scroll = 4;
    ensure_visible(&mut scroll, 9, 0);
    assert_eq!(scroll, 4);
}
