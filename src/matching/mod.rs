//! Matching utilities for finding persons.
//!
//! This module provides the keyword matcher behind the "find" operation.

pub mod name_keywords;

pub use name_keywords::NameContainsKeywords;
