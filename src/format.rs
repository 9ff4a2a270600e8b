use rust_decimal::Decimal;

/// Format an amount as dollars with thousand separators and 2 decimal places.
/// e.g. `1234.5` → `"$1,234.50"`, `-42.5` → `"-$42.50"`
pub fn format_currency(val: Decimal) -> String {
    let cents = val.round_dp(2);
    let sign = if cents < Decimal::ZERO { "-" } else { "" };
    let digits = format!("{:.2}", cents.abs());
    let (whole, frac) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    format!("{sign}${}.{frac}", group_thousands(whole))
}

/// Insert a comma every three digits from the right: `"1234567"` → `"1,234,567"`.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a value already expressed in percent, e.g. `57.5` → `"57.5%"`.
pub fn format_percentage(val: Decimal, decimals: u32) -> String {
    let rounded = val.round_dp(decimals);
    format!("{:.*}%", decimals as usize, rounded)
}

/// Cut a string to at most `max` characters, ending in "…" when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some(_) => {
            let cut = s
                .char_indices()
                .nth(max - 1)
                .map_or(s.len(), |(idx, _)| idx);
            format!("{}…", &s[..cut])
        }
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
