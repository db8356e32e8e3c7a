//! Date helper functions

use chrono::NaiveDate;

/// Format a date in long display form (like "January 1, 2020").
///
/// An absent date produces no output.
pub fn display_date(date: Option<&NaiveDate>) -> Option<String> {
    date.map(|d| d.format("%B %-d, %Y").to_string())
}

/// Format a date in ISO 8601 form for `datetime` attributes
pub fn date_iso(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Generate a `<time>` HTML element, or an empty string without a date
pub fn time_tag(date: Option<&NaiveDate>) -> String {
    match date {
        Some(d) => format!(
            r#"<time datetime="{}">{}</time>"#,
            date_iso(d),
            d.format("%B %-d, %Y")
        ),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date() {
        let d = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert_eq!(display_date(Some(&d)), Some("January 1, 2020".to_string()));
    }

    #[test]
    fn test_display_date_no_padding() {
        let d = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
        assert_eq!(display_date(Some(&d)), Some("June 1, 2020".to_string()));
    }

    #[test]
    fn test_display_date_absent() {
        assert_eq!(display_date(None), None);
    }

    #[test]
    fn test_time_tag() {
        let d = NaiveDate::from_ymd_opt(2020, 1, 15).unwrap();
        assert_eq!(
            time_tag(Some(&d)),
            r#"<time datetime="2020-01-15">January 15, 2020</time>"#
        );
        assert_eq!(time_tag(None), "");
    }
}
