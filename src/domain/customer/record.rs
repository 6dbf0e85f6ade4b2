use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display offset for creation timestamps. Applied only when rendering.
pub const JST: FixedOffset = match FixedOffset::east_opt(9 * 3600) {
    Some(offset) => offset,
    None => panic!("UTC+9 is a valid offset"),
};

const DISPLAY_FORMAT: &str = "%Y年%m月%d日 %H時%M分";

/// A row of the `customers` table as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub call_id: String,
    pub customer_name: String,
    pub engagement_date: String,
    #[serde(default)]
    pub business_desc: Option<String>,
    pub created_at: String,
}

impl CustomerRecord {
    pub fn business_desc(&self) -> &str {
        self.business_desc.as_deref().unwrap_or_default()
    }

    pub fn created_at_jst(&self) -> Result<String, String> {
        format_jst(&self.created_at)
    }
}

/// Parses a store timestamp. Timestamps without an offset are read as UTC.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, String> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%d %H:%M:%S%.f%#z"] {
        if let Ok(dt) = DateTime::parse_from_str(s, format) {
            return Ok(dt.with_timezone(&Utc));
        }
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(naive.and_utc());
        }
    }

    Err(format!("Invalid timestamp: `{s}`"))
}

/// Renders a store timestamp in UTC+9, e.g. `2026年01月28日 10時23分`.
pub fn format_jst(created_at: &str) -> Result<String, String> {
    let utc = parse_timestamp(created_at)?;
    Ok(utc.with_timezone(&JST).format(DISPLAY_FORMAT).to_string())
}

/// The current calendar date in UTC+9, used as the default engagement date.
pub fn today_in_jst(now: DateTime<Utc>) -> chrono::NaiveDate {
    now.with_timezone(&JST).date_naive()
}
