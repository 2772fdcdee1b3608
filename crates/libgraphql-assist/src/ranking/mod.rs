//! Fuzzy filtering and ordering of completion candidates against the text
//! already typed at the cursor.

mod rank;
mod ranked_text;

pub use rank::normalize_text;
pub use rank::proximity;
pub use rank::rank;
pub use ranked_text::RankedText;
