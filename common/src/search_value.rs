//! Typed filter values understood by the search query builder.

use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};


/// Day of the week used by the food exchange filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Saturday,
        Day::Sunday,
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Saturday => "saturday",
            Day::Sunday => "sunday",
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
        }
    }

    pub fn persian_name(&self) -> &'static str {
        match self {
            Day::Saturday => "شنبه",
            Day::Sunday => "یکشنبه",
            Day::Monday => "دوشنبه",
            Day::Tuesday => "سه‌شنبه",
            Day::Wednesday => "چهارشنبه",
            Day::Thursday => "پنجشنبه",
            Day::Friday => "جمعه",
        }
    }
}

impl Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDay(pub String);

impl Display for UnknownDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown day of week: {}", self.0)
    }
}

impl std::error::Error for UnknownDay {}

// Accepts the English name in any case, or the Persian name shown in the UI.
impl FromStr for Day {
    type Err = UnknownDay;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Day::ALL
            .into_iter()
            .find(|day| {
                day.as_str().eq_ignore_ascii_case(trimmed) || day.persian_name() == trimmed
            })
            .ok_or_else(|| UnknownDay(s.to_string()))
    }
}


/// A single filter value, tagged by shape.
///
/// The variant decides which encoding the search query builder applies, so
/// the order of the arms in [`crate::search_query`] is the rule priority.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchFieldValue {
    Null,
    Text(String),
    Number(f64),
    Boolean(bool),
    Date(DateTime<Utc>),
    Day(Day),
    NumberRange(f64, f64),
    DateRange(DateTime<Utc>, DateTime<Utc>),
    TextList(Vec<String>),
}

impl From<&str> for SearchFieldValue {
    fn from(value: &str) -> Self {
        SearchFieldValue::Text(value.to_string())
    }
}

impl From<String> for SearchFieldValue {
    fn from(value: String) -> Self {
        SearchFieldValue::Text(value)
    }
}

impl From<f64> for SearchFieldValue {
    fn from(value: f64) -> Self {
        SearchFieldValue::Number(value)
    }
}

impl From<i64> for SearchFieldValue {
    fn from(value: i64) -> Self {
        SearchFieldValue::Number(value as f64)
    }
}

impl From<bool> for SearchFieldValue {
    fn from(value: bool) -> Self {
        SearchFieldValue::Boolean(value)
    }
}

impl From<DateTime<Utc>> for SearchFieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        SearchFieldValue::Date(value)
    }
}

impl From<Day> for SearchFieldValue {
    fn from(value: Day) -> Self {
        SearchFieldValue::Day(value)
    }
}

impl From<(f64, f64)> for SearchFieldValue {
    fn from((min, max): (f64, f64)) -> Self {
        SearchFieldValue::NumberRange(min, max)
    }
}

impl From<(DateTime<Utc>, DateTime<Utc>)> for SearchFieldValue {
    fn from((min, max): (DateTime<Utc>, DateTime<Utc>)) -> Self {
        SearchFieldValue::DateRange(min, max)
    }
}

impl From<Vec<String>> for SearchFieldValue {
    fn from(value: Vec<String>) -> Self {
        SearchFieldValue::TextList(value)
    }
}

impl<T: Into<SearchFieldValue>> From<Option<T>> for SearchFieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(SearchFieldValue::Null)
    }
}


/// How a raw URL string for a filter key should be typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[default]
    Text,
    Number,
    Boolean,
    Date,
    Day,
    NumberRange,
    DateRange,
    TextList,
}

impl FieldKind {
    /// Types a raw URL value. Returns `None` when the value does not parse
    /// for this kind; callers drop such filters instead of failing.
    pub fn parse(&self, raw: &str) -> Option<SearchFieldValue> {
        let value = match self {
            FieldKind::Text => SearchFieldValue::Text(raw.to_string()),
            FieldKind::Number => SearchFieldValue::Number(parse_number(raw)?),
            FieldKind::Boolean => SearchFieldValue::Boolean(raw.trim().parse().ok()?),
            FieldKind::Date => SearchFieldValue::Date(parse_date(raw)?),
            FieldKind::Day => SearchFieldValue::Day(raw.parse().ok()?),
            FieldKind::NumberRange => {
                let (min, max) = split_pair(raw)?;
                SearchFieldValue::NumberRange(parse_number(min)?, parse_number(max)?)
            }
            FieldKind::DateRange => {
                let (min, max) = split_pair(raw)?;
                SearchFieldValue::DateRange(parse_date(min)?, parse_date(max)?)
            }
            FieldKind::TextList => SearchFieldValue::TextList(
                raw.split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
        };
        Some(value)
    }
}

fn split_pair(raw: &str) -> Option<(&str, &str)> {
    let (min, max) = raw.split_once(',')?;
    if max.contains(',') {
        return None;
    }
    Some((min, max))
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}


#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn day_parses_english_and_persian_names() {
        assert_eq!("saturday".parse::<Day>(), Ok(Day::Saturday));
        assert_eq!("Monday".parse::<Day>(), Ok(Day::Monday));
        assert_eq!("جمعه".parse::<Day>(), Ok(Day::Friday));
        assert!("someday".parse::<Day>().is_err());
    }

    #[test]
    fn text_kind_keeps_raw_value() {
        assert_eq!(
            FieldKind::Text.parse(" lunch "),
            Some(SearchFieldValue::Text(" lunch ".to_string()))
        );
    }

    #[test]
    fn number_range_kind_parses_pair() {
        assert_eq!(
            FieldKind::NumberRange.parse("1000,5000"),
            Some(SearchFieldValue::NumberRange(1000.0, 5000.0))
        );
        assert_eq!(FieldKind::NumberRange.parse("1000"), None);
        assert_eq!(FieldKind::NumberRange.parse("1,2,3"), None);
        assert_eq!(FieldKind::NumberRange.parse("a,2"), None);
    }

    #[test]
    fn number_kind_rejects_non_finite() {
        assert_eq!(FieldKind::Number.parse("NaN"), None);
        assert_eq!(FieldKind::Number.parse("inf"), None);
        assert_eq!(FieldKind::Number.parse("12.5"), Some(SearchFieldValue::Number(12.5)));
    }

    #[test]
    fn boolean_kind() {
        assert_eq!(FieldKind::Boolean.parse("true"), Some(SearchFieldValue::Boolean(true)));
        assert_eq!(FieldKind::Boolean.parse("false"), Some(SearchFieldValue::Boolean(false)));
        assert_eq!(FieldKind::Boolean.parse("yes"), None);
    }

    #[test]
    fn date_kind_accepts_plain_dates_and_rfc3339() {
        let midnight = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(FieldKind::Date.parse("2024-03-01"), Some(SearchFieldValue::Date(midnight)));
        assert_eq!(
            FieldKind::Date.parse("2024-03-01T00:00:00+00:00"),
            Some(SearchFieldValue::Date(midnight))
        );
        assert_eq!(FieldKind::Date.parse("yesterday"), None);
    }

    #[test]
    fn text_list_kind_splits_and_skips_blanks() {
        assert_eq!(
            FieldKind::TextList.parse("yas, central_m,,"),
            Some(SearchFieldValue::TextList(vec![
                "yas".to_string(),
                "central_m".to_string()
            ]))
        );
    }

    #[test]
    fn option_none_becomes_null() {
        let value: SearchFieldValue = Option::<String>::None.into();
        assert_eq!(value, SearchFieldValue::Null);
    }
}
