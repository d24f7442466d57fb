use thiserror::Error;

/// Failures of the capture workflow around the extractor. Each message is
/// meant to be shown to the user as-is.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CaptureError {
    #[error("Clipboard is empty! Copy the {0} first.")]
    EmptyClipboard(&'static str),
    #[error("No email found in clipboard. Please copy an email address.")]
    NoEmail,
    #[error("Please enter a valid email address! (got {0:?})")]
    InvalidEmail(String),
}
