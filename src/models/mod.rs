mod budget;
mod period;

pub use budget::{Budget, BudgetKind};
pub use period::{month_range, parse_period, prev_month_label};

#[cfg(test)]
mod tests;
