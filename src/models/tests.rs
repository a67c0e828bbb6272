#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

// ── Budget ────────────────────────────────────────────────────

#[test]
fn test_budget_new_defaults() {
    let budget = Budget::new(7, BudgetKind::Income);
    assert_eq!(budget.id, 7);
    assert!(budget.name.is_empty());
    assert_eq!(budget.kind, BudgetKind::Income);
    assert!(budget.amounts.is_empty());
    assert!(budget.children.is_empty());
}

#[test]
fn test_budget_amount_missing_month_is_zero() {
    let budget = Budget::new(1, BudgetKind::Expense);
    assert_eq!(budget.amount("Jan 2024"), Decimal::ZERO);
}

#[test]
fn test_budget_set_and_read_amount() {
    let mut budget = Budget::new(1, BudgetKind::Income);
    budget.set_amount("Jan 2024", Some(dec!(1500)));
    assert_eq!(budget.amount("Jan 2024"), dec!(1500));
    assert_eq!(budget.amount("Feb 2024"), Decimal::ZERO);
}

#[test]
fn test_budget_clear_amount() {
    let mut budget = Budget::new(1, BudgetKind::Income);
    budget.set_amount("Jan 2024", Some(dec!(100)));
    budget.set_amount("Jan 2024", None);
    assert_eq!(budget.amount("Jan 2024"), Decimal::ZERO);
    assert!(budget.amounts.is_empty());
}

// ── BudgetKind ────────────────────────────────────────────────

#[test]
fn test_kind_parse() {
    assert_eq!(BudgetKind::parse("income"), Some(BudgetKind::Income));
    assert_eq!(BudgetKind::parse("INCOME"), Some(BudgetKind::Income));
    assert_eq!(BudgetKind::parse("in"), Some(BudgetKind::Income));
    assert_eq!(BudgetKind::parse("expense"), Some(BudgetKind::Expense));
    assert_eq!(BudgetKind::parse("ex"), Some(BudgetKind::Expense));
    assert_eq!(BudgetKind::parse("other"), None);
}

#[test]
fn test_kind_roundtrip() {
    for kind in BudgetKind::all() {
        assert_eq!(BudgetKind::parse(kind.as_str()), Some(*kind));
    }
}

#[test]
fn test_kind_display() {
    assert_eq!(format!("{}", BudgetKind::Income), "Income");
    assert_eq!(format!("{}", BudgetKind::Expense), "Expense");
}

// ── month_range ───────────────────────────────────────────────

#[test]
fn test_month_range_single_month() {
    assert_eq!(month_range("2024-01", "2024-01"), vec!["Jan 2024"]);
}

#[test]
fn test_month_range_full_year() {
    let months = month_range("2024-01", "2024-12");
    assert_eq!(months.len(), 12);
    assert_eq!(months.first().unwrap(), "Jan 2024");
    assert_eq!(months.last().unwrap(), "Dec 2024");
}

#[test]
fn test_month_range_crosses_year_boundary() {
    let months = month_range("2023-11", "2024-02");
    assert_eq!(months, vec!["Nov 2023", "Dec 2023", "Jan 2024", "Feb 2024"]);
}

#[test]
fn test_month_range_count_formula() {
    // (end.month - start.month) + 12 * (end.year - start.year) + 1
    let months = month_range("2022-03", "2024-07");
    assert_eq!(months.len(), (7 - 3) + 12 * (2024 - 2022) + 1);
}

#[test]
fn test_month_range_start_after_end_is_empty() {
    assert!(month_range("2024-06", "2024-01").is_empty());
    assert!(month_range("2025-01", "2024-12").is_empty());
}

#[test]
fn test_month_range_malformed_period_is_empty() {
    assert!(month_range("2024", "2024-12").is_empty());
    assert!(month_range("2024-01", "garbage").is_empty());
    assert!(month_range("", "").is_empty());
    assert!(month_range("2024-13", "2024-14").is_empty());
}

#[test]
fn test_month_range_labels_are_chronological() {
    let months = month_range("2023-10", "2024-03");
    for pair in months.windows(2) {
        assert_eq!(prev_month_label(&pair[1]).unwrap(), pair[0]);
    }
}

// ── prev_month_label ──────────────────────────────────────────

#[test]
fn test_prev_month_label_within_year() {
    assert_eq!(prev_month_label("Jul 2024").unwrap(), "Jun 2024");
}

#[test]
fn test_prev_month_label_across_year() {
    assert_eq!(prev_month_label("Jan 2024").unwrap(), "Dec 2023");
}

#[test]
fn test_prev_month_label_rejects_garbage() {
    assert!(prev_month_label("not a month").is_none());
    assert!(prev_month_label("").is_none());
}

// ── parse_period ──────────────────────────────────────────────

#[test]
fn test_parse_period_valid() {
    let date = parse_period("2024-02").unwrap();
    assert_eq!(date.to_string(), "2024-02-01");
}

#[test]
fn test_parse_period_invalid() {
    assert!(parse_period("2024-00").is_none());
    assert!(parse_period("2024-13").is_none());
    assert!(parse_period("abcd-ef").is_none());
}
