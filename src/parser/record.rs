use serde::{Deserialize, Serialize};

/// The five profile fields, in extraction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Title,
    Company,
    College,
    GradYear,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Title,
        Field::Company,
        Field::College,
        Field::GradYear,
    ];

    /// Placeholder stored when no pass found a value. Downstream consumers
    /// match these verbatim.
    pub const fn sentinel(self) -> &'static str {
        match self {
            Field::Name => "No Name Found",
            Field::Title => "No Title Found",
            Field::Company => "No Company Found",
            Field::College => "No College Found",
            Field::GradYear => "No Grad Year Found",
        }
    }

    /// JSON key of the field.
    pub const fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Title => "title",
            Field::Company => "company",
            Field::College => "college",
            Field::GradYear => "gradYear",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Title => "Title",
            Field::Company => "Company",
            Field::College => "College",
            Field::GradYear => "Grad Year",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub name: String,
    pub title: String,
    pub company: String,
    pub college: String,
    pub grad_year: String,
}

impl ProfileRecord {
    /// Build a record from per-field results, substituting sentinels for `None`.
    pub fn from_found(
        name: Option<String>,
        title: Option<String>,
        company: Option<String>,
        college: Option<String>,
        grad_year: Option<String>,
    ) -> Self {
        let or_sentinel = |v: Option<String>, f: Field| v.unwrap_or_else(|| f.sentinel().to_string());
        ProfileRecord {
            name: or_sentinel(name, Field::Name),
            title: or_sentinel(title, Field::Title),
            company: or_sentinel(company, Field::Company),
            college: or_sentinel(college, Field::College),
            grad_year: or_sentinel(grad_year, Field::GradYear),
        }
    }

    pub fn empty() -> Self {
        Self::from_found(None, None, None, None, None)
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Title => &self.title,
            Field::Company => &self.company,
            Field::College => &self.college,
            Field::GradYear => &self.grad_year,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Title => &mut self.title,
            Field::Company => &mut self.company,
            Field::College => &mut self.college,
            Field::GradYear => &mut self.grad_year,
        };
        *slot = value;
    }

    /// A field counts as captured when it holds something other than blank
    /// text or its own sentinel.
    pub fn is_captured(&self, field: Field) -> bool {
        let value = self.get(field).trim();
        !value.is_empty() && value != field.sentinel()
    }

    pub fn has_profile(&self) -> bool {
        self.is_captured(Field::Name)
    }

    /// Replace blank fields with their sentinel, e.g. after manual edits.
    pub fn fill_sentinels(mut self) -> Self {
        for field in Field::ALL {
            let trimmed = self.get(field).trim().to_string();
            if trimmed.is_empty() {
                self.set(field, field.sentinel().to_string());
            } else {
                self.set(field, trimmed);
            }
        }
        self
    }

    pub fn captured_count(&self) -> usize {
        Field::ALL.iter().filter(|f| self.is_captured(**f)).count()
    }
}

impl Default for ProfileRecord {
    fn default() -> Self {
        Self::empty()
    }
}
