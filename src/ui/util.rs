use rust_decimal::Decimal;

/// Format an amount with thousand separators and no fractional part.
/// Cell entry is digit-only, so every value on the sheet is a whole
/// number. e.g. `1234567` → `"1,234,567"`, `-600` → `"-600"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let int_part = format!("{:.0}", val.abs());

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if val < Decimal::ZERO {
        format!("-{with_commas}")
    } else {
        with_commas
    }
}

/// Truncate a string to `max` visible characters, appending "…" if
/// truncated. Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

/// Adjust a scroll offset so `target` lands inside the `page`-sized
/// viewport. Works for rows and for month columns alike.
pub(crate) fn ensure_visible(scroll: &mut usize, target: usize, page: usize) {
    if target < *scroll {
        *scroll = target;
    } else if page > 0 && target >= *scroll + page {
        *scroll = target + 1 - page;
    }
}
