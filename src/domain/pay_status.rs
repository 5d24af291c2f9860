//! PayStatus value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Whether a client has paid for their lessons.
///
/// Parsing is case-insensitive and ignores surrounding whitespace; the
/// canonical forms written back out are `PAID` and `NOT PAID`.
///
/// # Example
///
/// ```
/// use tutor_book::domain::PayStatus;
///
/// let status: PayStatus = "not paid".parse().unwrap();
/// assert_eq!(status, PayStatus::NotPaid);
/// assert_eq!(status.to_string(), "NOT PAID");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum PayStatus {
    Paid,
    #[default]
    NotPaid,
}

impl PayStatus {
    /// The canonical textual form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "PAID",
            Self::NotPaid => "NOT PAID",
        }
    }

    pub fn is_paid(&self) -> bool {
        matches!(self, Self::Paid)
    }
}

impl FromStr for PayStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");
        if normalized.eq_ignore_ascii_case("PAID") {
            Ok(Self::Paid)
        } else if normalized.eq_ignore_ascii_case("NOT PAID") {
            Ok(Self::NotPaid)
        } else {
            Err(ValidationError::InvalidPayStatus(s.to_string()))
        }
    }
}

impl Serialize for PayStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PayStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
