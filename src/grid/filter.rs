use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::expect_used)]
static NON_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^0-9]").expect("literal pattern compiles"));

/// Result of running an amount-cell input event through the digit filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Filtered {
    pub(crate) value: String,
    /// True when anything was stripped; the triggering event must then be
    /// swallowed so navigation never reacts to a filtered keystroke.
    pub(crate) suppressed: bool,
}

pub(crate) fn filter_digits(input: &str) -> Filtered {
    let value = NON_DIGIT.replace_all(input, "");
    Filtered {
        suppressed: value != input,
        value: value.into_owned(),
    }
}
