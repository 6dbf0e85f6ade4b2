use std::fmt;
use std::fmt::{Display, Formatter};

pub const MISSING_NAME_MESSAGE: &str = "顧客名は必須です。";

#[derive(Debug, Clone)]
pub struct CustomerName(String);

impl CustomerName {
    /// Returns the name as submitted, or the user-facing error if it is blank.
    pub fn parse(s: String) -> Result<Self, String> {
        if s.trim().is_empty() {
            return Err(MISSING_NAME_MESSAGE.to_string());
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for CustomerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CustomerName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
