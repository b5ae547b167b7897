//! CLI enum types for filter selection.

use clap::ValueEnum;

use crate::render::FilterMode;

/// Box-filter window strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Filter {
    /// Truncated integer windows
    #[default]
    Truncated,
    /// Fractional-coverage weighting
    Exact,
}

impl From<Filter> for FilterMode {
    fn from(f: Filter) -> Self {
        match f {
            Filter::Truncated => FilterMode::Truncated,
            Filter::Exact => FilterMode::Exact,
        }
    }
}

impl Filter {
    /// Parse a filter name as written in the config file (case-insensitive).
    pub fn parse_name(name: &str) -> Option<Self> {
        <Filter as ValueEnum>::from_str(name.trim(), true).ok()
    }
}
