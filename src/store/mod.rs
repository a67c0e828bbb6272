use chrono::{Datelike, Local};
use rust_decimal::Decimal;

use crate::models::{month_range, Budget, BudgetKind};

/// Single source of truth for the sheet: the root category list plus the
/// selected period. All mutation goes through here and ends in `commit`,
/// which bumps the revision dependents key off to rebuild derived state.
pub(crate) struct BudgetStore {
    budgets: Vec<Budget>,
    start_period: String,
    end_period: String,
    next_id: u64,
    revision: u64,
}

impl BudgetStore {
    /// A fresh sheet: the current calendar year with one blank category per
    /// kind, so the grid renders an editable row in each section.
    pub(crate) fn new() -> Self {
        let year = Local::now().year();
        let mut store = Self {
            budgets: Vec::new(),
            start_period: format!("{year}-01"),
            end_period: format!("{year}-12"),
            next_id: 1,
            revision: 0,
        };
        store.add_budget(BudgetKind::Income, None);
        store.add_budget(BudgetKind::Expense, None);
        store
    }

    #[cfg(test)]
    pub(crate) fn empty(start_period: &str, end_period: &str) -> Self {
        Self {
            budgets: Vec::new(),
            start_period: start_period.into(),
            end_period: end_period.into(),
            next_id: 1,
            revision: 0,
        }
    }

    // ── Accessors ────────────────────────────────────────────

    pub(crate) fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub(crate) fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn start_period(&self) -> &str {
        &self.start_period
    }

    pub(crate) fn end_period(&self) -> &str {
        &self.end_period
    }

    /// The displayed month labels, derived from the selected period. Empty
    /// when start > end.
    pub(crate) fn months(&self) -> Vec<String> {
        month_range(&self.start_period, &self.end_period)
    }

    pub(crate) fn of_kind(&self, kind: BudgetKind) -> Vec<&Budget> {
        self.budgets.iter().filter(|b| b.kind == kind).collect()
    }

    pub(crate) fn income_budgets(&self) -> Vec<&Budget> {
        self.of_kind(BudgetKind::Income)
    }

    pub(crate) fn expense_budgets(&self) -> Vec<&Budget> {
        self.of_kind(BudgetKind::Expense)
    }

    /// Look an id up among roots, then among every root's children.
    pub(crate) fn find(&self, id: u64) -> Option<&Budget> {
        self.budgets
            .iter()
            .find(|b| b.id == id)
            .or_else(|| self.budgets.iter().flat_map(|b| &b.children).find(|c| c.id == id))
    }

    fn find_mut(&mut self, id: u64) -> Option<&mut Budget> {
        // Two passes keep the borrow checker out of the way.
        if self.budgets.iter().any(|b| b.id == id) {
            return self.budgets.iter_mut().find(|b| b.id == id);
        }
        self.budgets
            .iter_mut()
            .flat_map(|b| &mut b.children)
            .find(|c| c.id == id)
    }

    // ── Mutation ─────────────────────────────────────────────

    /// Append a blank category and return its id. With a `parent_id`
    /// matching a root, the new category lands in that root's children;
    /// otherwise it lands at the end of the root list.
    pub(crate) fn add_budget(&mut self, kind: BudgetKind, parent_id: Option<u64>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        let budget = Budget::new(id, kind);
        match parent_id.and_then(|pid| self.budgets.iter_mut().find(|b| b.id == pid)) {
            Some(parent) => parent.children.push(budget),
            None => self.budgets.push(budget),
        }
        self.commit();
        id
    }

    /// Remove the category with `id`: roots first, then the first matching
    /// child of any root. Unknown ids are a silent no-op.
    pub(crate) fn delete_budget(&mut self, id: u64) -> bool {
        if let Some(pos) = self.budgets.iter().position(|b| b.id == id) {
            self.budgets.remove(pos);
            self.commit();
            return true;
        }
        for parent in &mut self.budgets {
            if let Some(pos) = parent.children.iter().position(|c| c.id == id) {
                parent.children.remove(pos);
                self.commit();
                return true;
            }
        }
        false
    }

    /// Read the source row's amount for `month` and write it into every
    /// root's and every child's amounts for that month, across both kinds.
    /// A source row with no amount for `month` clears the month everywhere.
    /// No-op when the source row is gone.
    pub(crate) fn apply_to_all(&mut self, source_id: u64, month: &str) -> bool {
        let Some(value) = self.find(source_id).map(|b| b.amounts.get(month).copied()) else {
            return false;
        };

        for root in &mut self.budgets {
            root.set_amount(month, value);
            for child in &mut root.children {
                child.set_amount(month, value);
            }
        }
        self.commit();
        true
    }

    /// Silent no-op when `id` is unknown.
    pub(crate) fn set_amount(&mut self, id: u64, month: &str, value: Option<Decimal>) {
        if let Some(budget) = self.find_mut(id) {
            budget.set_amount(month, value);
            self.commit();
        }
    }

    /// Silent no-op when `id` is unknown.
    pub(crate) fn set_name(&mut self, id: u64, name: &str) {
        if let Some(budget) = self.find_mut(id) {
            budget.name = name.to_string();
            self.commit();
        }
    }

    /// Returns false (and changes nothing) unless both periods parse.
    pub(crate) fn set_period(&mut self, start: &str, end: &str) -> bool {
        use crate::models::parse_period;
        if parse_period(start).is_none() || parse_period(end).is_none() {
            return false;
        }
        self.start_period = start.to_string();
        self.end_period = end.to_string();
        self.commit();
        true
    }

    pub(crate) fn set_start_period(&mut self, start: &str) -> bool {
        let end = self.end_period.clone();
        self.set_period(start, &end)
    }

    pub(crate) fn set_end_period(&mut self, end: &str) -> bool {
        let start = self.start_period.clone();
        self.set_period(&start, end)
    }

    /// Commit point of every mutation: the list the accessors hand out is
    /// "replaced" by bumping the revision, which is what dependents watch
    /// to rebuild their derived views.
    fn commit(&mut self) {
        self.revision += 1;
    }
}

impl Default for BudgetStore {
    fn default() -> Self {
        Self::new()
    }
}
