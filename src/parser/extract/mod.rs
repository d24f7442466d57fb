pub mod college;
pub mod company;
pub mod grad_year;
pub mod labeled;
pub mod name;
pub mod title;

use tracing::debug;

use super::record::{Field, ProfileRecord};
use super::text::ProfileText;

/// Input shared by every strategy: the prepared text plus the calendar year
/// bounding plausible graduation years.
#[derive(Debug, Clone)]
pub struct Source<'a> {
    pub text: ProfileText<'a>,
    pub current_year: i32,
}

impl<'a> Source<'a> {
    pub fn new(raw: &'a str, current_year: i32) -> Self {
        Source {
            text: ProfileText::from_raw(raw),
            current_year,
        }
    }
}

/// One way of finding a field's value.
#[derive(Clone, Copy)]
pub struct Strategy {
    pub name: &'static str,
    pub run: fn(&Source<'_>) -> Option<String>,
}

const fn strategy(name: &'static str, run: fn(&Source<'_>) -> Option<String>) -> Strategy {
    Strategy { name, run }
}

// Per-field precedence, most specific first. Labeled values come last so they
// only fill fields the heuristics left empty.

pub const NAME: &[Strategy] = &[
    strategy("capitalized_line", name::capitalized_line),
    strategy("middle_initial", name::with_initial),
    strategy("first_line", name::first_line),
    strategy("label", labeled::name),
];

pub const TITLE: &[Strategy] = &[
    strategy("headline", title::headline),
    strategy("label", labeled::title),
];

pub const COMPANY: &[Strategy] = &[
    strategy("headline_split", company::from_headline),
    strategy("works_at", company::works_at),
    strategy("org_field", company::org_field),
    strategy("label", labeled::company),
];

pub const COLLEGE: &[Strategy] = &[
    strategy("education_line", college::education_line),
    strategy("label", labeled::college),
];

pub const GRAD_YEAR: &[Strategy] = &[
    strategy("latest_year", grad_year::latest_year),
    strategy("label", labeled::grad_year),
];

pub fn strategies(field: Field) -> &'static [Strategy] {
    match field {
        Field::Name => NAME,
        Field::Title => TITLE,
        Field::Company => COMPANY,
        Field::College => COLLEGE,
        Field::GradYear => GRAD_YEAR,
    }
}

/// Run strategies in order; the first one that produces a value wins.
pub fn first_found(field: Field, src: &Source<'_>) -> Option<String> {
    strategies(field).iter().find_map(|s| {
        let value = (s.run)(src)?;
        debug!(field = field.key(), strategy = s.name, value = %value, "field found");
        Some(value)
    })
}

pub fn extract_all(src: &Source<'_>) -> ProfileRecord {
    ProfileRecord::from_found(
        first_found(Field::Name, src),
        first_found(Field::Title, src),
        first_found(Field::Company, src),
        first_found(Field::College, src),
        first_found(Field::GradYear, src),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(field: Field) -> Vec<&'static str> {
        strategies(field).iter().map(|s| s.name).collect()
    }

    #[test]
    fn label_is_always_last_resort() {
        for field in Field::ALL {
            assert_eq!(names(field).last(), Some(&"label"), "{:?}", field);
        }
    }

    #[test]
    fn company_precedence() {
        assert_eq!(
            names(Field::Company),
            vec!["headline_split", "works_at", "org_field", "label"]
        );
    }

    #[test]
    fn headline_split_beats_labeled_company() {
        let src = Source::new("Jane Roe\nAnalyst at Globex\nCompany: Initech", 2025);
        assert_eq!(first_found(Field::Company, &src).as_deref(), Some("Globex"));
    }

    #[test]
    fn labeled_title_does_not_feed_company_split() {
        let src = Source::new("Title: Chef at Umbrella", 2025);
        let record = extract_all(&src);
        assert_eq!(record.title, "Chef at Umbrella");
        // company still comes from the free-text "at Umbrella"
        assert_eq!(record.company, "Umbrella");
    }
}
