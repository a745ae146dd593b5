//! Query String Encoding
//!
//! Filters are flattened to `key=value` pairs. Array filters repeat their
//! key once per element; absent values are left out entirely.

use chrono::{DateTime, SecondsFormat, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Unreserved characters (RFC 3986) pass through, everything else is escaped
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Ordered list of query pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: impl ToString) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    pub fn push_opt<V: ToString>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Text values are trimmed; blank text is treated as absent.
    pub fn push_text(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.push(key, value);
        }
    }

    /// Repeat `key` once per element.
    pub fn push_all<V: ToString>(&mut self, key: &str, values: &[V]) {
        for value in values {
            self.push(key, value.to_string());
        }
    }

    pub fn push_time(&mut self, key: &str, value: Option<DateTime<Utc>>) {
        if let Some(value) = value {
            self.push(key, value.to_rfc3339_opts(SecondsFormat::Secs, false));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// All values recorded for `key`, in order
    pub fn values(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(key, QUERY_VALUE),
                    utf8_percent_encode(value, QUERY_VALUE)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Filters know how to flatten themselves into a query string
pub trait ToQuery {
    fn write_query(&self, query: &mut QueryString);

    fn to_query(&self) -> QueryString {
        let mut query = QueryString::new();
        self.write_query(&mut query);
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_repeated_keys() {
        let mut query = QueryString::new();
        query.push_all("class_ids", &[3, 5, 8]);
        assert_eq!(query.encode(), "class_ids=3&class_ids=5&class_ids=8");
        assert_eq!(query.values("class_ids"), vec!["3", "5", "8"]);
    }

    #[test]
    fn test_absent_values_omitted() {
        let mut query = QueryString::new();
        query.push_opt::<i64>("count", None);
        query.push_text("name", Some("   "));
        query.push_all::<i32>("subject_ids", &[]);
        assert!(query.is_empty());
        assert_eq!(query.encode(), "");
    }

    #[test]
    fn test_text_is_trimmed_and_escaped() {
        let mut query = QueryString::new();
        query.push_text("name", Some(" Иван Петров "));
        assert_eq!(
            query.encode(),
            "name=%D0%98%D0%B2%D0%B0%D0%BD%20%D0%9F%D0%B5%D1%82%D1%80%D0%BE%D0%B2"
        );
    }

    #[test]
    fn test_time_is_rfc3339() {
        let mut query = QueryString::new();
        let after = Utc.with_ymd_and_hms(2024, 9, 1, 8, 30, 0).unwrap();
        query.push_time("after", Some(after));
        assert_eq!(query.values("after"), vec!["2024-09-01T08:30:00+00:00"]);
        assert_eq!(query.encode(), "after=2024-09-01T08%3A30%3A00%2B00%3A00");
    }
}
