//! Post model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Identifier, the source filename without its extension
    pub id: String,

    /// Post title
    pub title: String,

    /// Publication date, absent when the front-matter has none
    pub date: Option<NaiveDate>,

    /// Raw markdown body
    pub raw: String,

    /// Rendered HTML body
    pub content: String,

    /// Full source file path
    pub source: PathBuf,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(id: String, title: String, source: PathBuf) -> Self {
        Self {
            id,
            title,
            date: None,
            raw: String::new(),
            content: String::new(),
            source,
        }
    }
}
