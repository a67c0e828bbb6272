use std::collections::HashMap;

use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetKind {
    Income,
    Expense,
}

impl BudgetKind {
    pub fn all() -> &'static [BudgetKind] {
        &[Self::Income, Self::Expense]
    }

    pub fn parse(s: &str) -> Option<BudgetKind> {
        match s.to_ascii_lowercase().as_str() {
            "income" | "in" => Some(Self::Income),
            "expense" | "ex" => Some(Self::Expense),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl std::fmt::Display for BudgetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One category row of the sheet. Roots may carry children; children never
/// carry children of their own (the tree is two levels deep at most).
#[derive(Debug, Clone)]
pub struct Budget {
    pub id: u64,
    pub name: String,
    pub kind: BudgetKind,
    /// Keyed by month label as produced by `period::month_range`
    /// (e.g. "Jan 2024"). An absent key reads as zero.
    pub amounts: HashMap<String, Decimal>,
    pub children: Vec<Budget>,
}

impl Budget {
    pub fn new(id: u64, kind: BudgetKind) -> Self {
        Self {
            id,
            name: String::new(),
            kind,
            amounts: HashMap::new(),
            children: Vec::new(),
        }
    }

    pub fn amount(&self, month: &str) -> Decimal {
        self.amounts.get(month).copied().unwrap_or(Decimal::ZERO)
    }

    /// `None` clears the month: a cleared cell and a never-set cell are
    /// indistinguishable to readers.
    pub fn set_amount(&mut self, month: &str, value: Option<Decimal>) {
        match value {
            Some(v) => {
                self.amounts.insert(month.to_string(), v);
            }
            None => {
                self.amounts.remove(month);
            }
        }
    }
}
