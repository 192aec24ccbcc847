//! Publication-date formatting.
//!
//! Wraps chrono's localized formatting behind an injected configuration so
//! tests can substitute the locale and pattern without touching process
//! globals. Every production call site uses the same fixed pt-BR pattern.

use chrono::{DateTime, Locale, Utc};

/// Pattern, locale, and draft placeholder for publication dates.
#[derive(Debug, Clone)]
pub struct DateFormatConfig {
    /// strftime-style pattern. The default renders day, abbreviated month
    /// name, and year.
    pub pattern: String,
    pub locale: Locale,
    /// Rendered for entries without a publication date, instead of ever
    /// calling into the formatter with a missing value.
    pub missing_label: String,
}

impl Default for DateFormatConfig {
    fn default() -> Self {
        Self {
            pattern: "%d %b %Y".to_string(),
            locale: Locale::pt_BR,
            missing_label: "não publicado".to_string(),
        }
    }
}

/// Formats publication timestamps for display.
///
/// Pure: no side effects, deterministic for a given point and configuration.
#[derive(Debug, Clone, Default)]
pub struct DateFormatter {
    config: DateFormatConfig,
}

impl DateFormatter {
    pub fn new(config: DateFormatConfig) -> Self {
        Self { config }
    }

    /// Renders a point in time under the configured pattern and locale.
    pub fn format(&self, when: &DateTime<Utc>) -> String {
        when.format_localized(&self.config.pattern, self.config.locale)
            .to_string()
    }

    /// Renders an optional publication date, falling back to the configured
    /// placeholder for drafts. Callers never need to guard the `None` case
    /// themselves.
    pub fn format_publication(&self, when: Option<&DateTime<Utc>>) -> String {
        match when {
            Some(when) => self.format(when),
            None => self.config.missing_label.clone(),
        }
    }
}
