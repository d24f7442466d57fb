/// Clipboard text prepared for extraction: the untouched original plus its
/// non-empty, trimmed lines in their original order.
#[derive(Debug, Clone)]
pub struct ProfileText<'a> {
    full: &'a str,
    lines: Vec<&'a str>,
}

impl<'a> ProfileText<'a> {
    pub fn from_raw(raw: &'a str) -> Self {
        let lines = raw
            .split('\n')
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        ProfileText { full: raw, lines }
    }

    pub fn full(&self) -> &'a str {
        self.full
    }

    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    pub fn first_line(&self) -> Option<&'a str> {
        self.lines.first().copied()
    }

    /// First of the leading `n` lines whose lowercase form contains any keyword.
    pub fn find_keyword_line(&self, n: usize, keywords: &[&str]) -> Option<&'a str> {
        self.lines
            .iter()
            .take(n)
            .copied()
            .find(|line| contains_any(line, keywords))
    }
}

pub fn contains_any(line: &str, keywords: &[&str]) -> bool {
    let lower = line.to_lowercase();
    keywords.iter().any(|k| lower.contains(k))
}

/// Trim and reject empty values.
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
