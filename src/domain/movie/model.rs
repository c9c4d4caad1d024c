//! Movie domain entity

use chrono::NaiveDate;

/// A single catalog record.
///
/// Movies are created and removed only by the record store; within a
/// request they are immutable read-only values.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    /// Unique identifier, assigned by the store
    pub id: i32,
    /// Display name
    pub name: String,
    /// Release date
    pub date: NaiveDate,
    /// Aggregate rating score
    pub score: f64,
    /// Genre label (comma-separated when multiple)
    pub genre: String,
    /// Free-text synopsis
    pub overview: String,
    /// Crew listing
    pub crew: String,
    /// Title in the original language
    pub orig_title: String,
    /// Release status label (e.g. "Released")
    pub status: String,
    /// Original-language code
    pub orig_lang: String,
    pub budget: f64,
    pub revenue: f64,
    /// Production country label
    pub country: String,
}
