//! Rupee amount detection and normalization.
//!
//! Fee schedules render amounts with stray separators ("Rs.66,5500,000000/-")
//! or spacing ("Rs. 25,000"). Normalization concatenates every digit of the
//! amount and regroups it in thousands as `Rs.<n>/-`. It is best-effort: an
//! amount that cannot be reparsed is left exactly as found.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// "Rs", optional period, optional spacing, digits/commas, optional "/-" suffix
    static ref RE_AMOUNT: Regex = Regex::new(r"Rs\.?\s*[0-9,]+(?:/-)?").unwrap();

    /// Cell carrying an amount: "Rs." then a digit, spacing allowed
    static ref RE_AMOUNT_CELL: Regex = Regex::new(r"Rs\.\s*[0-9]").unwrap();
}

/// Whether a cell carries a rupee amount (used by split-table detection).
pub fn is_amount_cell(text: &str) -> bool {
    RE_AMOUNT_CELL.is_match(text)
}

/// Rewrite every rupee amount in `text` as `Rs.<thousands-grouped>/-`.
///
/// # Examples
///
/// ```
/// use pdf_layout_text::text::normalize_amounts;
///
/// assert_eq!(normalize_amounts("Fee Rs. 25000 per year"), "Fee Rs.25,000/- per year");
/// assert_eq!(normalize_amounts("Rs.66,5500,000000/-"), "Rs.665,500,000,000/-");
/// ```
pub fn normalize_amounts(text: &str) -> String {
    RE_AMOUNT
        .replace_all(text, |caps: &regex::Captures<'_>| format_amount(&caps[0]).into_owned())
        .into_owned()
}

/// Format one matched amount, or return it unchanged if it has no usable digits.
fn format_amount(matched: &str) -> Cow<'_, str> {
    let digits: String = matched.chars().filter(char::is_ascii_digit).collect();
    match digits.parse::<u128>() {
        Ok(value) => Cow::Owned(format!("Rs.{}/-", group_thousands(value))),
        Err(_) => Cow::Borrowed(matched),
    }
}

/// Insert a comma between every group of three digits.
fn group_thousands(value: u128) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, c) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_malformed_separators_are_regrouped() {
        assert_eq!(normalize_amounts("Rs.66,5500,000000/-"), "Rs.665,500,000,000/-");
    }

    #[test]
    fn test_amount_without_period_or_suffix() {
        assert_eq!(normalize_amounts("Rs 1500"), "Rs.1,500/-");
        assert_eq!(normalize_amounts("Rs1500 only"), "Rs.1,500/- only");
    }

    #[test]
    fn test_multiple_amounts() {
        assert_eq!(
            normalize_amounts("Admission Rs.5000 and Tuition Rs. 45,000/-"),
            "Admission Rs.5,000/- and Tuition Rs.45,000/-"
        );
    }

    #[test]
    fn test_comma_only_amount_left_unmodified() {
        assert_eq!(normalize_amounts("Rs., see annex"), "Rs., see annex");
    }

    #[test]
    fn test_overflowing_amount_left_unmodified() {
        let huge = format!("Rs.{}", "9".repeat(60));
        assert_eq!(normalize_amounts(&huge), huge);
    }

    #[test]
    fn test_text_without_amount_is_unchanged() {
        assert_eq!(normalize_amounts("Mrs Khan, Registrar"), "Mrs Khan, Registrar");
    }

    #[test]
    fn test_is_amount_cell() {
        assert!(is_amount_cell("Rs.25,000"));
        assert!(is_amount_cell("Rs. 25,000/-"));
        assert!(!is_amount_cell("Rs 25,000"));
        assert!(!is_amount_cell("Bachelor of Arts"));
    }
}
