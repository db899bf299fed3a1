//! Review records as they appear in the input file.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A single professor review.
///
/// `stars` keeps the JSON number exactly as written so that it can be copied
/// into vector metadata without turning `5` into `5.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Professor identifier. Doubles as the vector id.
    pub professor: String,
    /// Subject the professor was reviewed for.
    pub subject: String,
    /// Numeric rating.
    pub stars: Number,
    /// Free-text review body. This is the text that gets embedded.
    pub review: String,
}

impl ReviewRecord {
    /// Create a record with an integer star rating.
    pub fn new(
        professor: impl Into<String>,
        subject: impl Into<String>,
        stars: i64,
        review: impl Into<String>,
    ) -> Self {
        Self {
            professor: professor.into(),
            subject: subject.into(),
            stars: Number::from(stars),
            review: review.into(),
        }
    }
}

/// Top-level shape of the input file: `{"reviews": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewCollection {
    pub reviews: Vec<ReviewRecord>,
}

impl ReviewCollection {
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}
