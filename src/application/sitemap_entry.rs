//! Sitemap entry validation and W3C date normalization.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::debug;
use url::Url;

use crate::domain::entities::{ChangeFrequency, RawSitemapEntry, SitemapEntry};

/// Errors raised for entries that must not reach serialization.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SitemapEntryError {
    #[error("Sitemap entry URL is required")]
    MissingUrl,

    #[error("Invalid sitemap URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Priority must be between 0.0 and 1.0, got {0}")]
    PriorityOutOfRange(f64),

    #[error("Invalid change frequency '{0}'")]
    InvalidChangeFrequency(String),
}

impl SitemapEntryError {
    /// Name of the offending entry field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingUrl | Self::InvalidUrl { .. } => "url",
            Self::PriorityOutOfRange(_) => "priority",
            Self::InvalidChangeFrequency(_) => "changefreq",
        }
    }
}

/// Formats with an offset but accepting optional fractional seconds.
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
];

/// Zone-less formats, interpreted as UTC.
const NAIVE_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Validates a raw entry.
///
/// # Rules
///
/// - `url` must be a non-empty absolute `http`/`https` URL with a host
/// - `priority`, when given, must be a finite number in `[0.0, 1.0]`
/// - `changefreq`, when given, must be one of the protocol values
/// - `lastmod`, when given, is passed through [`normalize_date`]; a value
///   that does not parse is dropped
///
/// Fields that were not supplied stay absent.
///
/// # Errors
///
/// Returns a [`SitemapEntryError`] describing the first rule violated.
pub fn format_entry(raw: &RawSitemapEntry) -> Result<SitemapEntry, SitemapEntryError> {
    let trimmed = raw.url.trim();
    if trimmed.is_empty() {
        return Err(SitemapEntryError::MissingUrl);
    }

    let url = Url::parse(trimmed).map_err(|e| SitemapEntryError::InvalidUrl {
        url: trimmed.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(SitemapEntryError::InvalidUrl {
            url: trimmed.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(SitemapEntryError::InvalidUrl {
            url: trimmed.to_string(),
            reason: "missing host".to_string(),
        });
    }

    if let Some(priority) = raw.priority
        && !(0.0..=1.0).contains(&priority)
    {
        return Err(SitemapEntryError::PriorityOutOfRange(priority));
    }

    let changefreq = match raw.changefreq.as_deref() {
        Some(value) => Some(
            ChangeFrequency::parse(value)
                .ok_or_else(|| SitemapEntryError::InvalidChangeFrequency(value.to_string()))?,
        ),
        None => None,
    };

    let lastmod = match raw.lastmod.as_deref() {
        Some(value) => {
            let normalized = normalize_date(Some(value));
            if normalized.is_none() {
                debug!("Dropping unparseable lastmod '{}' for {}", value, url);
            }
            normalized
        }
        None => None,
    };

    Ok(SitemapEntry {
        loc: url.to_string(),
        lastmod,
        changefreq,
        priority: raw.priority,
    })
}

/// Normalizes a timestamp to a W3C datetime at whole-second precision in UTC.
///
/// Accepts RFC 3339 timestamps with any offset, zone-less date-times (with or
/// without fractional seconds, `T` or space separated, read as UTC) and bare
/// `YYYY-MM-DD` dates. Returns `None` for absent, blank or unparseable input.
///
/// The output format is `YYYY-MM-DDTHH:MM:SS+00:00`, which this function
/// accepts again unchanged.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     normalize_date(Some("2025-07-14T08:58:28.426257")).as_deref(),
///     Some("2025-07-14T08:58:28+00:00")
/// );
/// assert_eq!(normalize_date(Some("invalid-date")), None);
/// ```
pub fn normalize_date(raw: Option<&str>) -> Option<String> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    parse_timestamp(raw).map(|dt| format_w3c(&dt))
}

/// Formats a UTC timestamp as `YYYY-MM-DDTHH:MM:SS+00:00`.
pub fn format_w3c(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S+00:00").to_string()
}

/// Formats a priority with at least one and at most two decimals.
pub fn format_priority(priority: f64) -> String {
    let fixed = format!("{:.2}", priority);
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_drops_fraction_and_adds_offset() {
        assert_eq!(
            normalize_date(Some("2025-07-14T08:58:28.426257")).as_deref(),
            Some("2025-07-14T08:58:28+00:00")
        );
    }

    #[test]
    fn test_normalize_converts_offsets_to_utc() {
        assert_eq!(
            normalize_date(Some("2025-07-14T10:58:28.5+02:00")).as_deref(),
            Some("2025-07-14T08:58:28+00:00")
        );
        assert_eq!(
            normalize_date(Some("2025-07-14T08:58:28Z")).as_deref(),
            Some("2025-07-14T08:58:28+00:00")
        );
        assert_eq!(
            normalize_date(Some("2025-07-14 08:58:28.123+00")).as_deref(),
            Some("2025-07-14T08:58:28+00:00")
        );
    }

    #[test]
    fn test_normalize_accepts_short_offsets() {
        assert_eq!(
            normalize_date(Some("2025-07-14T08:58:28.426257+00")).as_deref(),
            Some("2025-07-14T08:58:28+00:00")
        );
        assert_eq!(
            normalize_date(Some("2025-07-14T10:58:28+02")).as_deref(),
            Some("2025-07-14T08:58:28+00:00")
        );
        assert_eq!(
            normalize_date(Some("2025-07-14T10:58:28+0200")).as_deref(),
            Some("2025-07-14T08:58:28+00:00")
        );
    }

    #[test]
    fn test_normalize_accepts_plain_dates_and_spaces() {
        assert_eq!(
            normalize_date(Some("2025-07-14")).as_deref(),
            Some("2025-07-14T00:00:00+00:00")
        );
        assert_eq!(
            normalize_date(Some("2025-07-14 08:58:28")).as_deref(),
            Some("2025-07-14T08:58:28+00:00")
        );
    }

    #[test]
    fn test_normalize_rejects_invalid_input() {
        assert_eq!(normalize_date(None), None);
        assert_eq!(normalize_date(Some("")), None);
        assert_eq!(normalize_date(Some("   ")), None);
        assert_eq!(normalize_date(Some("invalid-date")), None);
        assert_eq!(normalize_date(Some("2025-02-30T10:00:00")), None);
        assert_eq!(normalize_date(Some("2025-13-01")), None);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "2025-07-14T08:58:28.426257",
            "2024-02-29T23:59:59.999+05:30",
            "2023-01-01",
        ];
        for input in inputs {
            let once = normalize_date(Some(input)).unwrap();
            let twice = normalize_date(Some(&once)).unwrap();
            assert_eq!(once, twice);
            assert!(once.ends_with("+00:00"));
        }
    }

    #[test]
    fn test_format_entry_minimal() {
        let entry = format_entry(&RawSitemapEntry::new("https://example.com/dogs/1")).unwrap();
        assert_eq!(entry.loc, "https://example.com/dogs/1");
        assert!(entry.lastmod.is_none());
        assert!(entry.changefreq.is_none());
        assert!(entry.priority.is_none());
    }

    #[test]
    fn test_format_entry_full() {
        let raw = RawSitemapEntry::new("https://example.com/dogs/1")
            .changefreq("daily")
            .priority(0.8)
            .lastmod("2025-07-14T08:58:28.426257");
        let entry = format_entry(&raw).unwrap();
        assert_eq!(entry.changefreq, Some(ChangeFrequency::Daily));
        assert_eq!(entry.priority, Some(0.8));
        assert_eq!(entry.lastmod.as_deref(), Some("2025-07-14T08:58:28+00:00"));
    }

    #[test]
    fn test_format_entry_rejects_out_of_range_priority() {
        let raw = RawSitemapEntry::new("https://example.com/dogs/1").priority(1.5);
        assert_eq!(
            format_entry(&raw),
            Err(SitemapEntryError::PriorityOutOfRange(1.5))
        );

        let raw = RawSitemapEntry::new("https://example.com/dogs/1").priority(-0.1);
        assert!(format_entry(&raw).is_err());

        let raw = RawSitemapEntry::new("https://example.com/dogs/1").priority(f64::NAN);
        assert!(format_entry(&raw).is_err());
    }

    #[test]
    fn test_format_entry_accepts_priority_bounds() {
        for p in [0.0, 1.0] {
            let raw = RawSitemapEntry::new("https://example.com/").priority(p);
            assert!(format_entry(&raw).is_ok());
        }
    }

    #[test]
    fn test_format_entry_rejects_bad_changefreq() {
        let raw = RawSitemapEntry::new("https://example.com/").changefreq("sometimes");
        let err = format_entry(&raw).unwrap_err();
        assert_eq!(err.field(), "changefreq");
    }

    #[test]
    fn test_format_entry_rejects_bad_urls() {
        for url in ["", "   ", "not a url", "/dogs/1", "ftp://example.com/a", "mailto:a@b.c"] {
            let err = format_entry(&RawSitemapEntry::new(url)).unwrap_err();
            assert_eq!(err.field(), "url", "accepted {url:?}");
        }
    }

    #[test]
    fn test_format_entry_drops_unparseable_lastmod() {
        let raw = RawSitemapEntry::new("https://example.com/").lastmod("yesterday");
        let entry = format_entry(&raw).unwrap();
        assert!(entry.lastmod.is_none());
    }

    #[test]
    fn test_format_priority() {
        assert_eq!(format_priority(1.0), "1.0");
        assert_eq!(format_priority(0.8), "0.8");
        assert_eq!(format_priority(0.85), "0.85");
        assert_eq!(format_priority(0.0), "0.0");
    }
}
