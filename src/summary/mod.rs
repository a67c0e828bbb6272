//! Per-month aggregation over the budget tree: subtotals, kind totals,
//! profit/loss, and the running opening/closing balances.
//!
//! Everything here recomputes from scratch on every call. Ranges are a
//! handful of months and category counts are small, so there is nothing to
//! memoize.

use rust_decimal::Decimal;

use crate::models::{prev_month_label, BudgetKind};
use crate::store::BudgetStore;

/// Own amount plus the sum of child amounts for `month`. Zero when `id` is
/// not a root of the given kind.
pub(crate) fn sub_total(store: &BudgetStore, month: &str, kind: BudgetKind, id: u64) -> Decimal {
    let Some(budget) = store.of_kind(kind).into_iter().find(|b| b.id == id) else {
        return Decimal::ZERO;
    };

    let child_total: Decimal = budget.children.iter().map(|c| c.amount(month)).sum();
    budget.amount(month) + child_total
}

/// Sum of `sub_total` over every root of `kind`.
pub(crate) fn total(store: &BudgetStore, month: &str, kind: BudgetKind) -> Decimal {
    store
        .of_kind(kind)
        .iter()
        .map(|b| sub_total(store, month, kind, b.id))
        .sum()
}

pub(crate) fn profit_loss(store: &BudgetStore, month: &str) -> Decimal {
    total(store, month, BudgetKind::Income) - total(store, month, BudgetKind::Expense)
}

/// Zero for the first displayed month; otherwise the closing balance of the
/// previous calendar month. The previous label is re-derived from `month`
/// with the same formatting rule the range generator uses, so the lookup
/// chain stays on generated labels. An unparseable label degrades to zero.
pub(crate) fn opening_balance(store: &BudgetStore, month: &str, index: usize) -> Decimal {
    if index == 0 {
        return Decimal::ZERO;
    }
    match prev_month_label(month) {
        Some(prev) => closing_balance(store, &prev, index - 1),
        None => Decimal::ZERO,
    }
}

pub(crate) fn closing_balance(store: &BudgetStore, month: &str, index: usize) -> Decimal {
    opening_balance(store, month, index) + profit_loss(store, month)
}
