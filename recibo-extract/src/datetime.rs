//! Receipt date and time resolution.
//!
//! Date entities arrive in whatever format the provider saw on paper, so
//! the entity tier runs the mention text through a list of known formats.
//! The text tier tries four patterns in a fixed order. A token that looks
//! like a date but is not one (month 13) is a non-match and falls through.
//! When nothing parses, the extraction-time local date is the documented
//! default, not an error.

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use recibo_core::RawOcrResult;

const DATE_ENTITY_TYPES: &[&str] = &["receipt_date", "date"];

const ENTITY_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%m/%d/%y",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

static SLASH_MDY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{2,4})\b").unwrap());
static DASH_MDY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})-(\d{1,2})-(\d{4})\b").unwrap());
static ISO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b").unwrap());
static MONTH_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+(\d{1,2}),?\s+(\d{4})")
        .unwrap()
});

static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b\d{1,2}:\d{2}(?::\d{2})?\s*(?:am|pm)?").unwrap());

fn parse_entity_date(mention: &str) -> Option<NaiveDate> {
    let mention = mention.trim();
    ENTITY_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(mention, fmt).ok())
}

fn two_digit_year(year: i32) -> i32 {
    if year < 100 { 2000 + year } else { year }
}

fn month_number(name: &str) -> Option<u32> {
    let month = match name.to_lowercase().as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// First text pattern whose first match is a real calendar date.
fn date_from_text(text: &str) -> Option<NaiveDate> {
    if let Some(caps) = SLASH_MDY_RE.captures(text) {
        let (m, d, y) = (caps[1].parse().ok()?, caps[2].parse().ok()?, caps[3].parse().ok()?);
        if let Some(date) = NaiveDate::from_ymd_opt(two_digit_year(y), m, d) {
            return Some(date);
        }
    }
    if let Some(caps) = DASH_MDY_RE.captures(text) {
        let (m, d, y) = (caps[1].parse().ok()?, caps[2].parse().ok()?, caps[3].parse().ok()?);
        if let Some(date) = NaiveDate::from_ymd_opt(y, m, d) {
            return Some(date);
        }
    }
    if let Some(caps) = ISO_RE.captures(text) {
        let (y, m, d) = (caps[1].parse().ok()?, caps[2].parse().ok()?, caps[3].parse().ok()?);
        if let Some(date) = NaiveDate::from_ymd_opt(y, m, d) {
            return Some(date);
        }
    }
    if let Some(caps) = MONTH_NAME_RE.captures(text) {
        let m = month_number(&caps[1])?;
        let (d, y) = (caps[2].parse().ok()?, caps[3].parse().ok()?);
        if let Some(date) = NaiveDate::from_ymd_opt(y, m, d) {
            return Some(date);
        }
    }
    None
}

/// Entity tier, then the ordered text patterns. `None` means the caller
/// should use the default.
pub fn find_date(raw: &RawOcrResult) -> Option<NaiveDate> {
    if let Some(entity) = raw.find_entity(DATE_ENTITY_TYPES) {
        if let Some(date) = parse_entity_date(&entity.mention_text) {
            return Some(date);
        }
    }
    date_from_text(&raw.text)
}

pub fn extract_date(raw: &RawOcrResult) -> NaiveDate {
    find_date(raw).unwrap_or_else(|| {
        tracing::debug!("no date found, defaulting to today");
        Local::now().date_naive()
    })
}

/// First time-of-day token in the text ("3:41 PM", "14:02:55").
pub fn extract_time(text: &str) -> Option<String> {
    TIME_RE.find(text).map(|m| m.as_str().trim().to_string())
}
