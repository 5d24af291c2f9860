//! Keyword matching on person names.

use crate::models::Person;

/// Matches persons whose name contains any of the keywords as a whole word,
/// ignoring case.
///
/// `"alex"` matches `Alex Yeoh` but `"ale"` does not, and an empty keyword
/// list matches nobody.
///
/// # Example
///
/// ```
/// use tutor_book::matching::NameContainsKeywords;
/// use tutor_book::models::PersonBuilder;
///
/// let person = PersonBuilder::new()
///     .name("Alex Yeoh")
///     .phone("87438807")
///     .address("Blk 30 Geylang Street 29")
///     .build()
///     .unwrap();
/// assert!(NameContainsKeywords::new(["YEOH"]).matches(&person));
/// assert!(!NameContainsKeywords::new(["Ye"]).matches(&person));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeywords {
    keywords: Vec<String>,
}

impl NameContainsKeywords {
    /// Create a matcher from keywords. Blank keywords are dropped.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords = keywords
            .into_iter()
            .map(Into::into)
            .map(|k: String| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    /// Split a user-supplied query on whitespace into keywords.
    pub fn parse(query: &str) -> Self {
        Self::new(query.split_whitespace())
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn matches(&self, person: &Person) -> bool {
        person.name().words().any(|word| {
            let word = word.to_lowercase();
            self.keywords.iter().any(|keyword| *keyword == word)
        })
    }
}
