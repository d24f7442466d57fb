//! Explicit `Label: value` lines, for text pasted in a form-like layout.
//! These run after every heuristic for their field.

use std::sync::LazyLock;

use regex::Regex;

use super::Source;
use crate::parser::text::non_empty;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:name|full name):\s*([^\n]+)").unwrap());
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:title|position|role|headline):\s*([^\n]+)").unwrap());
static COMPANY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:company|organization|employer|current company):\s*([^\n]+)").unwrap()
});
static COLLEGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:college|university|school|education|institution):\s*([^\n]+)").unwrap()
});
static GRAD_YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:graduation|grad|year|graduated):\s*([0-9]{4})").unwrap());

pub fn name(src: &Source<'_>) -> Option<String> {
    labeled(&NAME_RE, src)
}

pub fn title(src: &Source<'_>) -> Option<String> {
    labeled(&TITLE_RE, src)
}

pub fn company(src: &Source<'_>) -> Option<String> {
    labeled(&COMPANY_RE, src)
}

pub fn college(src: &Source<'_>) -> Option<String> {
    labeled(&COLLEGE_RE, src)
}

pub fn grad_year(src: &Source<'_>) -> Option<String> {
    labeled(&GRAD_YEAR_RE, src)
}

// Only the first label occurrence counts, even if its value is blank.
fn labeled(re: &Regex, src: &Source<'_>) -> Option<String> {
    let caps = re.captures(src.text.full())?;
    non_empty(caps.get(1)?.as_str())
}
