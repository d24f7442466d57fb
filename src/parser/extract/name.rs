use std::sync::LazyLock;

use regex::Regex;

use super::Source;

// "John Doe", "John Michael Doe"
static NAME_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+(?:\s+[A-Z][a-z]+){1,2}$").unwrap());
// "John M. Doe"
static INITIAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+\s+[A-Z]\.?\s+[A-Z][a-z]+$").unwrap());
static CAPITALIZED_WORDS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+(?:\s+[A-Z][a-z]+)+$").unwrap());

const MAX_FIRST_LINE_TOKENS: usize = 4;

/// Any line consisting of two or three capitalized words.
pub fn capitalized_line(src: &Source<'_>) -> Option<String> {
    matching_line(src, &NAME_LINE_RE)
}

/// Any line shaped like "First M. Last".
pub fn with_initial(src: &Source<'_>) -> Option<String> {
    matching_line(src, &INITIAL_RE)
}

/// The first line, when it reads as a short run of capitalized words.
pub fn first_line(src: &Source<'_>) -> Option<String> {
    let line = src.text.first_line()?;
    if CAPITALIZED_WORDS_RE.is_match(line) && line.split(' ').count() <= MAX_FIRST_LINE_TOKENS {
        Some(line.to_string())
    } else {
        None
    }
}

fn matching_line(src: &Source<'_>, re: &Regex) -> Option<String> {
    src.text
        .lines()
        .iter()
        .find(|line| re.is_match(line))
        .map(|line| line.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn src(text: &str) -> Source<'_> {
        Source::new(text, 2025)
    }

    #[test]
    fn two_and_three_word_names() {
        assert_eq!(capitalized_line(&src("John Doe")).as_deref(), Some("John Doe"));
        assert_eq!(
            capitalized_line(&src("Software Engineer at Acme\nJohn Michael Doe")).as_deref(),
            Some("John Michael Doe")
        );
        assert_eq!(capitalized_line(&src("John Paul Michael Doe")), None);
        assert_eq!(capitalized_line(&src("JOHN DOE")), None);
        assert_eq!(capitalized_line(&src("John")), None);
    }

    #[test]
    fn middle_initial() {
        assert_eq!(with_initial(&src("John M. Doe")).as_deref(), Some("John M. Doe"));
        assert_eq!(with_initial(&src("John M Doe")).as_deref(), Some("John M Doe"));
        assert_eq!(capitalized_line(&src("John M. Doe")), None);
    }

    #[test]
    fn first_line_allows_four_words() {
        assert_eq!(
            first_line(&src("John Paul Michael Doe\nEngineer")).as_deref(),
            Some("John Paul Michael Doe")
        );
        assert_eq!(first_line(&src("John Paul Michael Ringo Doe")), None);
        assert_eq!(first_line(&src("Engineer\nJohn Paul Michael Doe")), None);
        assert_eq!(first_line(&src("")), None);
    }
}
