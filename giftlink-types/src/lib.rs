//! Types shared with the GiftLink REST API.
//!
//! The gift record is owned and stored server-side; the frontend only reads
//! one instance per page view. Fields mirror the JSON payload of
//! `GET /api/gifts/{id}` (camelCase on the wire).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Gift
// ============================================================================

/// One gift record as served by the API.
///
/// Display fields default to empty so a partial server record still parses
/// instead of failing the whole page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gift {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub date_added: DateAdded,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Gift {
    /// Image URL if one is present and non-empty.
    pub fn image_url(&self) -> Option<&str> {
        self.image
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

// ============================================================================
// DateAdded
// ============================================================================

/// The `dateAdded` field as the API sends it: either an ISO-8601 / plain
/// calendar date string or epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateAdded {
    Timestamp(i64),
    Text(String),
}

impl Default for DateAdded {
    fn default() -> Self {
        DateAdded::Text(String::new())
    }
}

impl DateAdded {
    /// Locale-style `M/D/YYYY` calendar date. Falls back to the raw value
    /// when it cannot be parsed.
    pub fn to_display_date(&self) -> String {
        match self {
            DateAdded::Timestamp(millis) => match chrono::DateTime::from_timestamp_millis(*millis)
            {
                Some(datetime) => format_date(datetime.date_naive()),
                None => millis.to_string(),
            },
            DateAdded::Text(text) => parse_date_text(text)
                .map(format_date)
                .unwrap_or_else(|| text.clone()),
        }
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    if let Ok(datetime) = chrono::DateTime::parse_from_rfc3339(text) {
        return Some(datetime.date_naive());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

// ============================================================================
// Comment
// ============================================================================

/// A comment shown under the gift detail card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub comment: String,
}

// ============================================================================
// Tests
// ============================================================================
