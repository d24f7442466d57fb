use super::Source;
use crate::parser::text::non_empty;

const TITLE_KEYWORDS: &[&str] = &[
    "engineer", "developer", "manager", "director", "lead", "senior", "junior",
    "analyst", "consultant", "specialist", "coordinator", "executive", "president",
    "ceo", "cto", "cfo", "founder", "co-founder", "designer", "architect", "scientist",
    "researcher", "professor", "instructor", "student", "intern",
];

/// Separators between a role and its employer, highest priority first.
const COMPANY_SEPARATORS: &[&str] = &[" at ", " @ ", " | ", " - ", "—", "–"];

const TITLE_SCAN_LINES: usize = 5;

/// The headline line: first of the leading lines mentioning a role keyword.
pub fn find_line<'a>(src: &Source<'a>) -> Option<&'a str> {
    src.text.find_keyword_line(TITLE_SCAN_LINES, TITLE_KEYWORDS)
}

/// Split "Role at Company" on the first separator present in the line.
/// Everything after the first occurrence belongs to the company.
pub fn split_company(line: &str) -> Option<(String, String)> {
    let sep = COMPANY_SEPARATORS.iter().find(|sep| line.contains(*sep))?;
    let (role, company) = line.split_once(sep)?;
    Some((non_empty(role)?, non_empty(company)?))
}

/// Headline with any trailing employer removed.
pub fn headline(src: &Source<'_>) -> Option<String> {
    let line = find_line(src)?;
    match split_company(line) {
        Some((role, _)) => Some(role),
        None => Some(line.to_string()),
    }
}
