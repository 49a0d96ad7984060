//! Stateless text cleanup transforms.
//!
//! These are composed at several points of the pipeline:
//! - [`clean_text`] on every span before it joins a row
//! - [`dedupe_cells`] on every row before it is emitted
//! - [`fix_hyphenation`] and [`normalize_amounts`] on narrative lines only;
//!   table cells keep their raw values so columns stay aligned

pub mod currency;
pub mod hyphenation;
pub mod normalize;

pub use currency::{is_amount_cell, normalize_amounts};
pub use hyphenation::fix_hyphenation;
pub use normalize::{clean_text, collapse_repeated_letters, dedupe_cells, prepare_for_embedding};
