//! Thousands grouping and shortest-form trimming of decimal strings.
//!
//! Only the integer part is grouped; the fractional part is never touched.

/// Insert thousands separators into the integer part of a decimal string.
pub fn group_thousands(s: &str) -> String {
    let parts = s.split('.').collect::<Vec<_>>();

    let integer_part = parts[0]
        .chars()
        .rev()
        .collect::<String>()
        .as_bytes()
        .chunks(3)
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",")
        .chars()
        .rev()
        .collect::<String>();

    // A leading sign must not be separated from the first group.
    let integer_part = integer_part
        .strip_prefix("-,")
        .map(|rest| format!("-{rest}"))
        .unwrap_or(integer_part);

    if parts.len() > 1 {
        format!("{}.{}", integer_part, parts[1])
    } else {
        integer_part
    }
}

/// Apply grouping unless the caller suppressed separators.
pub fn group_unless(s: &str, remove_comma: bool) -> String {
    if remove_comma {
        s.to_string()
    } else {
        group_thousands(s)
    }
}

/// Trim forced trailing zeros: `"1.50"` → `"1.5"`, `"2.00"` → `"2"`.
pub fn trim_trailing_zeros(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_integers() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("12345"), "12,345");
        assert_eq!(group_thousands("1234567890"), "1,234,567,890");
    }

    #[test]
    fn test_group_leaves_fraction_untouched() {
        assert_eq!(group_thousands("1234.56789"), "1,234.56789");
        assert_eq!(group_thousands("1000000.00000"), "1,000,000.00000");
        assert_eq!(group_thousands("0.123456"), "0.123456");
    }

    #[test]
    fn test_group_negative() {
        assert_eq!(group_thousands("-1"), "-1");
        assert_eq!(group_thousands("-1000"), "-1,000");
        assert_eq!(group_thousands("-1234.56"), "-1,234.56");
    }

    #[test]
    fn test_group_unless_suppressed() {
        assert_eq!(group_unless("1234.5", true), "1234.5");
        assert_eq!(group_unless("1234.5", false), "1,234.5");
    }

    #[test]
    fn test_trim_trailing_zeros() {
        assert_eq!(trim_trailing_zeros("1.50"), "1.5");
        assert_eq!(trim_trailing_zeros("2.00"), "2");
        assert_eq!(trim_trailing_zeros("1.23"), "1.23");
        assert_eq!(trim_trailing_zeros("100"), "100");
        assert_eq!(trim_trailing_zeros("0.00"), "0");
    }
}
