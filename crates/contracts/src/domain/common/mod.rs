//! Helpers shared by several aggregates.

use chrono::NaiveDate;
use validator::ValidationError;

/// Date format used by date inputs and the API.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Field validator for `YYYY-MM-DD` strings.
pub fn validate_date(value: &str) -> Result<(), ValidationError> {
    if parse_date(value).is_some() {
        return Ok(());
    }
    let mut err = ValidationError::new("date");
    err.message = Some("Enter a date as YYYY-MM-DD".into());
    Err(err)
}

/// Splits a comma separated input into trimmed, non-empty, unique tags.
pub fn parse_tags(input: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// Lower-case, hyphen separated slug of a title.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for ch in title.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_are_strict() {
        assert!(validate_date("2026-02-28").is_ok());
        assert!(validate_date("28.02.2026").is_err());
        assert!(validate_date("").is_err());
    }

    #[test]
    fn tags_are_deduplicated() {
        assert_eq!(parse_tags(" rust, Web ,,rust , web"), vec!["rust", "Web"]);
    }

    #[test]
    fn slug_collapses_separators() {
        assert_eq!(slugify("  Summer Sale -- 2026! "), "summer-sale-2026");
    }
}
