use std::sync::LazyLock;

use regex::Regex;

use super::Source;

// ASCII word boundaries, so "2019年" still counts as a year.
static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)(?:19|20)[0-9]{2}(?-u:\b)").unwrap());

pub const EARLIEST_GRAD_YEAR: i32 = 1950;
/// Expected graduations may be listed a few years ahead.
pub const FUTURE_GRAD_YEARS: i32 = 5;

/// Most recent plausible year mentioned anywhere in the text.
pub fn latest_year(src: &Source<'_>) -> Option<String> {
    let latest = src.current_year + FUTURE_GRAD_YEARS;
    YEAR_RE
        .find_iter(src.text.full())
        .filter_map(|m| m.as_str().parse::<i32>().ok())
        .filter(|y| (EARLIEST_GRAD_YEAR..=latest).contains(y))
        .max()
        .map(|y| y.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(text: &str, current: i32) -> Option<String> {
        latest_year(&Source::new(text, current))
    }

    #[test]
    fn most_recent_wins() {
        assert_eq!(year("BS 1998\nMS 2022\n", 2025).as_deref(), Some("2022"));
    }

    #[test]
    fn window_bounds_are_inclusive() {
        assert_eq!(year("Class of 2030", 2025).as_deref(), Some("2030"));
        assert_eq!(year("Class of 2031", 2025), None);
        assert_eq!(year("since 1950", 2025).as_deref(), Some("1950"));
        assert_eq!(year("since 1949", 2025), None);
    }

    #[test]
    fn out_of_range_and_embedded_numbers_ignored() {
        assert_eq!(year("born 1899, ticket 3050", 2025), None);
        assert_eq!(year("id 120221 and 20225", 2025), None);
        assert_eq!(year("2099 or 2010", 2025).as_deref(), Some("2010"));
    }

    #[test]
    fn year_next_to_non_ascii_text() {
        assert_eq!(year("山田太郎\n東京大学 2019年卒業", 2025).as_deref(), Some("2019"));
        assert_eq!(year("Jane Roe\nClass of 2019年", 2025).as_deref(), Some("2019"));
        assert_eq!(year("卒業2016", 2025).as_deref(), Some("2016"));
    }
}
