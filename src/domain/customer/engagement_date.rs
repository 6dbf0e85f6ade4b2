use chrono::NaiveDate;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngagementDate(NaiveDate);

impl EngagementDate {
    /// Parses a `YYYY-MM-DD` date input. A blank input means `today`.
    pub fn parse(s: String, today: NaiveDate) -> Result<Self, String> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Ok(Self(today));
        }

        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| format!("Invalid engagement date: `{trimmed}` is not a YYYY-MM-DD date."))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl Display for EngagementDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
