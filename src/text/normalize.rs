//! Base cleanup applied to every span and to assembled lines.
//!
//! Rendered institutional PDFs frequently contain jittered whitespace and
//! glyphs painted several times over (fake bold), which a text layer reports
//! as "Reeegistrar" or "AAADMISSIONS". The cleaner collapses both.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use super::hyphenation::fix_hyphenation;

lazy_static! {
    /// Any run of whitespace, including newlines
    static ref RE_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Shortest run of one repeated ASCII letter treated as a rendering artifact.
const MIN_ARTIFACT_RUN: usize = 3;

/// Trim, collapse whitespace runs to one space and collapse letter runs.
///
/// Idempotent: `clean_text(&clean_text(s)) == clean_text(s)`.
///
/// # Examples
///
/// ```
/// use pdf_layout_text::text::clean_text;
///
/// assert_eq!(clean_text("  Reeegistrar \t Office "), "Registrar Office");
/// assert_eq!(clean_text("Fee   Structure"), "Fee Structure");
/// ```
pub fn clean_text(text: &str) -> String {
    let collapsed = RE_WHITESPACE.replace_all(text.trim(), " ");
    collapse_repeated_letters(&collapsed)
}

/// Collapse any run of 3+ identical ASCII letters to a single letter.
///
/// Runs of two are kept ("ass", "Committee"). Digits and punctuation are
/// never touched.
pub fn collapse_repeated_letters(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let mut run = 1;
        while chars.peek() == Some(&c) {
            chars.next();
            run += 1;
        }

        let keep = if c.is_ascii_alphabetic() && run >= MIN_ARTIFACT_RUN {
            1
        } else {
            run
        };
        out.extend(std::iter::repeat(c).take(keep));
    }

    out
}

/// Drop cells identical to an earlier cell of the same row.
///
/// Order of first appearance is preserved.
pub fn dedupe_cells(cells: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(cells.len());
    cells
        .iter()
        .filter(|cell| seen.insert(cell.as_str()))
        .cloned()
        .collect()
}

/// Flatten page content into a single line for embedding.
///
/// Rejoins hyphen-broken words, then collapses every whitespace run
/// (line breaks included) into one space.
pub fn prepare_for_embedding(text: &str) -> String {
    let joined = fix_hyphenation(text);
    RE_WHITESPACE.replace_all(&joined, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_trims_and_collapses_whitespace() {
        assert_eq!(clean_text("  Dean \n\n Faculty   of Arts  "), "Dean Faculty of Arts");
    }

    #[test]
    fn test_clean_collapses_letter_runs() {
        assert_eq!(clean_text("aaa"), "a");
        assert_eq!(clean_text("DDDEAN"), "DEAN");
        assert_eq!(clean_text("Reeeegistrar"), "Registrar");
    }

    #[test]
    fn test_clean_keeps_double_letters() {
        assert_eq!(clean_text("ass"), "ass");
        assert_eq!(clean_text("Committee"), "Committee");
    }

    #[test]
    fn test_clean_keeps_digit_runs() {
        assert_eq!(clean_text("Rs.1000000"), "Rs.1000000");
        assert_eq!(clean_text("..."), "...");
    }

    #[test]
    fn test_clean_empty() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   \t\n"), "");
    }

    #[test]
    fn test_clean_is_idempotent_on_samples() {
        for sample in ["aaaa bbb", "  x  y  ", "AAAaaa", "Prooofessor   Dr.", "ééé"] {
            let once = clean_text(sample);
            assert_eq!(clean_text(&once), once, "sample: {:?}", sample);
        }
    }

    #[test]
    fn test_collapse_non_ascii_untouched() {
        assert_eq!(collapse_repeated_letters("ééé"), "ééé");
    }

    #[test]
    fn test_dedupe_preserves_first_occurrence() {
        let cells: Vec<String> = ["Name", "Dean", "Name", "Arts", "Dean"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(dedupe_cells(&cells), vec!["Name", "Dean", "Arts"]);
    }

    #[test]
    fn test_dedupe_empty_row() {
        assert!(dedupe_cells(&[]).is_empty());
    }

    #[test]
    fn test_prepare_for_embedding() {
        let text = "The admis-\nsion policy\n\n\napplies   to all";
        assert_eq!(prepare_for_embedding(text), "The admission policy applies to all");
    }
}
