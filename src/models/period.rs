use chrono::{Months, NaiveDate};

/// Parse a "YYYY-MM" period string as the first day of that month.
pub fn parse_period(period: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{period}-01"), "%Y-%m-%d").ok()
}

/// The label used for column headers and as the key space for per-month
/// amounts, e.g. "Jan 2024". Must stay in lockstep with
/// `parse_month_label` so balance lookups always land on generated labels.
fn month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

fn parse_month_label(label: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("01 {label}"), "%d %b %Y").ok()
}

/// All month labels from `start` through `end` inclusive, one calendar
/// month apart. Empty when start > end or either period fails to parse.
pub fn month_range(start: &str, end: &str) -> Vec<String> {
    let mut months = Vec::new();

    let (Some(start), Some(end)) = (parse_period(start), parse_period(end)) else {
        return months;
    };

    let mut current = start;
    while current <= end {
        months.push(month_label(current));
        match current.checked_add_months(Months::new(1)) {
            Some(next) => current = next,
            None => break,
        }
    }
    months
}

/// Label of the calendar month before `label`, formatted with the same
/// rule as `month_range`. `None` when the label does not parse.
pub fn prev_month_label(label: &str) -> Option<String> {
    let date = parse_month_label(label)?;
    let prev = date.checked_sub_months(Months::new(1))?;
    Some(month_label(prev))
}
