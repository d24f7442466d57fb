pub mod batch;
pub mod capture;
pub mod error;
pub mod parser;
pub mod settings;

pub use error::CaptureError;
pub use parser::{extract, extract_with_year, Field, ProfileRecord};
