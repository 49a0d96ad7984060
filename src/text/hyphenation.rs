//! Rejoining words broken across a line wrap.
//!
//! Once the rows of a narrative column are concatenated, a word the
//! renderer wrapped as "admis-" / "sion" shows up as "admis- sion". A hyphen
//! followed by whitespace is removed together with the whitespace, whatever
//! precedes it ("2019- 20" becomes "201920"). The one exception is the "/-"
//! suffix written by currency normalization, which must survive.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A hyphen not preceded by '/', then at least one whitespace character
    static ref RE_WRAP_HYPHEN: Regex = Regex::new(r"(^|[^/])-\s+").unwrap();
}

/// Remove line-wrap hyphens and resume the next token immediately.
///
/// # Examples
///
/// ```
/// use pdf_layout_text::text::fix_hyphenation;
///
/// assert_eq!(fix_hyphenation("Govern- ment"), "Government");
/// assert_eq!(fix_hyphenation("well-known"), "well-known");
/// assert_eq!(fix_hyphenation("Rs.500/- per year"), "Rs.500/- per year");
/// ```
pub fn fix_hyphenation(text: &str) -> String {
    RE_WRAP_HYPHEN.replace_all(text, "$1").into_owned()
}
