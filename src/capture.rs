//! Pieces of the capture workflow that surround the extractor: pulling an
//! email address out of clipboard text, classifying the profile URL and
//! assembling the record that gets posted to the spreadsheet.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CaptureError;
use crate::parser::{Field, ProfileRecord};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());
static TWO_CAPITALIZED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][a-z]+\s+[A-Z][a-z]+").unwrap());

pub const NO_URL: &str = "No URL Found";
pub const NOT_PROVIDED: &str = "Not provided";
pub const NOT_AVAILABLE: &str = "Not available";

const PROFILE_HOST: &str = "linkedin.com";
const MIN_PROFILE_TEXT_CHARS: usize = 11;

pub fn find_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// Email address from clipboard text.
pub fn capture_email(clipboard: &str) -> Result<String, CaptureError> {
    if clipboard.trim().is_empty() {
        return Err(CaptureError::EmptyClipboard("email"));
    }
    find_email(clipboard).ok_or(CaptureError::NoEmail)
}

pub fn validate_email(email: &str) -> Result<(), CaptureError> {
    if !email.trim().is_empty() && EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(CaptureError::InvalidEmail(email.to_string()))
    }
}

pub fn is_profile_url(url: &str) -> bool {
    url.contains(PROFILE_HOST)
}

/// Cheap check that clipboard text is worth parsing as a profile.
pub fn looks_like_profile(clipboard: &str) -> bool {
    clipboard.trim().chars().count() >= MIN_PROFILE_TEXT_CHARS && TWO_CAPITALIZED_RE.is_match(clipboard)
}

/// Non-fatal notes about a capture, for the user to act on before sending.
pub fn capture_warnings(
    clipboard: &str,
    record: &ProfileRecord,
    profile_url: Option<&str>,
) -> Vec<String> {
    let mut warnings = Vec::new();
    if let Some(url) = profile_url.filter(|u| !is_profile_url(u)) {
        warnings.push(format!("{} is not a profile page URL.", url));
    }
    if !looks_like_profile(clipboard) {
        warnings.push("Text does not look like a copied profile.".to_string());
    }
    if !record.has_profile() {
        warnings.push("No name found. Check the copied text or fill it in by hand.".to_string());
    }
    warnings
}

/// Profile text from the clipboard, rejecting blank clipboards.
pub fn capture_profile(clipboard: &str, current_year: i32) -> Result<ProfileRecord, CaptureError> {
    if clipboard.trim().is_empty() {
        return Err(CaptureError::EmptyClipboard("profile text"));
    }
    Ok(crate::parser::extract_with_year(clipboard, current_year))
}

/// Body posted to the spreadsheet endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(flatten)]
    pub profile: ProfileRecord,
    pub email: String,
    #[serde(rename = "linkedinUrl")]
    pub profile_url: String,
}

impl Submission {
    pub fn assemble(
        profile: ProfileRecord,
        email: &str,
        profile_url: Option<&str>,
    ) -> Result<Self, CaptureError> {
        let email = email.trim();
        validate_email(email)?;
        let profile_url = profile_url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(NO_URL)
            .to_string();
        Ok(Submission {
            profile: profile.fill_sentinels(),
            email: email.to_string(),
            profile_url,
        })
    }

    /// (label, value) rows for a review screen.
    pub fn review_lines(&self) -> Vec<(&'static str, String)> {
        let shown = |v: &str| {
            if v.trim().is_empty() {
                NOT_PROVIDED.to_string()
            } else {
                v.to_string()
            }
        };
        let mut rows = vec![("Email", shown(&self.email))];
        rows.extend(
            Field::ALL
                .iter()
                .map(|f| (f.label(), shown(self.profile.get(*f)))),
        );
        let url = if self.profile_url.is_empty() || self.profile_url == NO_URL {
            NOT_AVAILABLE.to_string()
        } else {
            self.profile_url.clone()
        };
        rows.push(("Profile URL", url));
        rows
    }
}
