pub mod extract;
pub mod record;
pub mod text;

use chrono::Datelike;

use extract::Source;
pub use record::{Field, ProfileRecord};

/// Best-effort profile fields from copied profile text. Never fails: fields
/// nothing could be found for hold their sentinel.
pub fn extract(text: &str) -> ProfileRecord {
    extract_with_year(text, current_year())
}

/// Same as [`extract`] with the graduation-year window anchored to
/// `current_year` instead of the local clock.
pub fn extract_with_year(text: &str, current_year: i32) -> ProfileRecord {
    let src = Source::new(text, current_year);
    extract::extract_all(&src)
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

// ── Tests ──
