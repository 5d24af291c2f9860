//! Lesson scheduling value objects.

use super::errors::ValidationError;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A scheduled lesson: a date plus a start and end time on that date.
///
/// The start time is always strictly before the end time.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use tutor_book::domain::Lesson;
///
/// let lesson = Lesson::new(
///     NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
///     NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(lesson.to_string(), "2025-06-10 10:00-12:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Lesson {
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
}

impl Lesson {
    /// Create a new Lesson.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidLesson` if `start` is not before `end`.
    pub fn new(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Result<Self, ValidationError> {
        if start >= end {
            return Err(ValidationError::InvalidLesson {
                start: start.format("%H:%M").to_string(),
                end: end.format("%H:%M").to_string(),
            });
        }

        Ok(Self { date, start, end })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }
}

#[derive(Deserialize)]
struct RawLesson {
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
}

// Deserialize through the validating constructor
impl<'de> Deserialize<'de> for Lesson {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawLesson::deserialize(deserializer)?;
        Lesson::new(raw.date, raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{}",
            self.date.format("%Y-%m-%d"),
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// Ordering key for "who do I teach next".
///
/// Every scheduled lesson orders before [`NextLesson::Unscheduled`]; scheduled
/// lessons order by date, then start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NextLesson {
    Scheduled { date: NaiveDate, start: NaiveTime },
    Unscheduled,
}

impl From<Option<&Lesson>> for NextLesson {
    fn from(lesson: Option<&Lesson>) -> Self {
        match lesson {
            Some(lesson) => Self::Scheduled {
                date: lesson.date,
                start: lesson.start,
            },
            None => Self::Unscheduled,
        }
    }
}
