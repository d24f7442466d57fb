use std::sync::LazyLock;

use regex::Regex;

use super::Source;
use crate::parser::text::contains_any;

const EDUCATION_KEYWORDS: &[&str] = &[
    "university", "college", "institute", "school", "bachelor", "master", "phd",
    "degree", "graduated", "education", "studied", "alumni",
];

static DEGREE_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:studied|graduated|education|degree|bachelor|master|phd|b\.?s\.?|m\.?s\.?|ph\.?d\.?)\s+",
    )
    .unwrap()
});

const MIN_COLLEGE_CHARS: usize = 4;

/// First education line, minus a leading verb or degree token. Only the first
/// education line is ever considered.
pub fn education_line(src: &Source<'_>) -> Option<String> {
    let line = src
        .text
        .lines()
        .iter()
        .find(|line| contains_any(line, EDUCATION_KEYWORDS))?;
    let cleaned = DEGREE_PREFIX_RE.replace(line, "");
    let cleaned = cleaned.trim();
    if cleaned.chars().count() >= MIN_COLLEGE_CHARS {
        Some(cleaned.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn college(text: &str) -> Option<String> {
        education_line(&Source::new(text, 2025))
    }

    #[test]
    fn strips_leading_verb() {
        assert_eq!(
            college("Jane Roe\nStudied Computer Science at MIT").as_deref(),
            Some("Computer Science at MIT")
        );
        assert_eq!(
            college("graduated   Stanford University 2019").as_deref(),
            Some("Stanford University 2019")
        );
        assert_eq!(
            college("B.S. Mechanical Engineering, Purdue University").as_deref(),
            Some("Mechanical Engineering, Purdue University")
        );
        assert_eq!(
            college("Ph.D. Physics, California Institute of Technology").as_deref(),
            Some("Physics, California Institute of Technology")
        );
    }

    #[test]
    fn line_without_prefix_kept_whole() {
        assert_eq!(
            college("Jane Roe\nUniversity of Michigan").as_deref(),
            Some("University of Michigan")
        );
    }

    #[test]
    fn short_remainder_stops_the_scan() {
        // "PhD UCL" strips to three characters; the later line is never tried
        assert_eq!(college("PhD UCL\nHarvard University"), None);
        assert_eq!(college("Boston\nNo schooling listed"), Some("No schooling listed".into()));
        assert_eq!(college("Boston\nSeattle"), None);
    }
}
