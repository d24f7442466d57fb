use serde::Deserialize;

/// Output layout for extracted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Pretty,
    Compact,
    Table,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Pins the graduation-year window; defaults to the local calendar year.
    pub current_year: Option<i32>,
    pub chunk_size: usize,
    pub output: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            current_year: None,
            chunk_size: 500,
            output: OutputFormat::Pretty,
        }
    }
}

impl Settings {
    /// Defaults overlaid with `PROFILE_*` environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::from_source(config::Environment::with_prefix("PROFILE").try_parsing(true))
    }

    fn from_source<S>(source: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = Settings::default();
        config::Config::builder()
            .set_default("chunk_size", defaults.chunk_size as i64)?
            .set_default("output", "pretty")?
            .add_source(source)
            .build()?
            .try_deserialize()
    }

    pub fn year(&self) -> i32 {
        self.current_year.unwrap_or_else(crate::parser::current_year)
    }
}
