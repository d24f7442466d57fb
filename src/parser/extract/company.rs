use std::sync::LazyLock;

use regex::Regex;

use super::{title, Source};
use crate::parser::text::non_empty;

// Whole pattern is case-insensitive and the phrase may run across line breaks.
static WORKS_AT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:at|@|works? at|employed at)\s+([A-Z][A-Za-z0-9\s&.,-]+)").unwrap()
});
static ORG_FIELD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:company|organization|employer):\s*([A-Z][A-Za-z0-9\s&.,-]+)").unwrap()
});

/// Employer taken from the headline, e.g. "Engineer at Acme".
pub fn from_headline(src: &Source<'_>) -> Option<String> {
    let line = title::find_line(src)?;
    title::split_company(line).map(|(_, company)| company)
}

/// "at Acme", "works at Acme", "@ Acme" anywhere in the text.
pub fn works_at(src: &Source<'_>) -> Option<String> {
    capture(&WORKS_AT_RE, src.text.full())
}

/// "Company: Acme" style fields.
pub fn org_field(src: &Source<'_>) -> Option<String> {
    capture(&ORG_FIELD_RE, src.text.full())
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    let caps = re.captures(text)?;
    non_empty(caps.get(1)?.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn src(text: &str) -> Source<'_> {
        Source::new(text, 2025)
    }

    #[test]
    fn headline_employer() {
        let s = src("Jane Roe\nProduct Manager @ Globex\nBoston");
        assert_eq!(from_headline(&s).as_deref(), Some("Globex"));
        assert_eq!(from_headline(&src("Jane Roe\nBoston")), None);
    }

    #[test]
    fn works_at_phrases() {
        assert_eq!(works_at(&src("She works at Initech Labs")).as_deref(), Some("Initech Labs"));
        assert_eq!(works_at(&src("Currently employed at Hooli.")).as_deref(), Some("Hooli."));
        assert_eq!(works_at(&src("Pinging @ Vandelay Industries")).as_deref(), Some("Vandelay Industries"));
    }

    #[test]
    fn works_at_ignores_case() {
        assert_eq!(works_at(&src("Jane Roe\nworks at acme corp")).as_deref(), Some("acme corp"));
        assert_eq!(works_at(&src("WORKS AT GLOBEX")).as_deref(), Some("GLOBEX"));
    }

    #[test]
    fn works_at_phrase_crosses_lines() {
        assert_eq!(
            works_at(&src("Jane Roe\nworks at\nGlobex Corp")).as_deref(),
            Some("Globex Corp")
        );
        assert_eq!(
            works_at(&src("works at Initech\nBoston")).as_deref(),
            Some("Initech\nBoston")
        );
    }

    #[test]
    fn works_at_matches_inside_words() {
        // no word boundary: the "at" closing "Data" counts
        assert_eq!(works_at(&src("Data Science enthusiast")).as_deref(), Some("Science enthusiast"));
        // "@" still needs whitespace after it
        assert_eq!(works_at(&src("mail jane@Example.com")), None);
        assert_eq!(works_at(&src("follow for more")), None);
    }

    #[test]
    fn org_field_value() {
        assert_eq!(org_field(&src("Employer: Wayne Enterprises")).as_deref(), Some("Wayne Enterprises"));
        assert_eq!(org_field(&src("COMPANY:Acme & Sons")).as_deref(), Some("Acme & Sons"));
        assert_eq!(org_field(&src("company: lowercase inc")).as_deref(), Some("lowercase inc"));
        assert_eq!(org_field(&src("Organization:\nUmbrella Corp")).as_deref(), Some("Umbrella Corp"));
    }
}
