//! Book domain model and typed identifiers

use crate::types::Validator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(Uuid);

impl BookId {
    /// Creates a new random BookId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a BookId from a UUID string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Returns the BookId as a string
    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorId(Uuid);

impl AuthorId {
    /// Creates a new random AuthorId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an AuthorId from a UUID string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Returns the AuthorId as a string
    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

impl Default for AuthorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AuthorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a genre
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenreId(Uuid);

impl GenreId {
    /// Creates a new random GenreId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a GenreId from a UUID string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Returns the GenreId as a string
    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

impl Default for GenreId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GenreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One catalog entry
///
/// Books are deserialized once from the catalog dataset and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: AuthorId,
    pub image: String,
    pub description: String,
    pub published: DateTime<Utc>,
    pub genres: Vec<GenreId>,
}

impl Book {
    /// Creates a new book with the given fields
    pub fn new(
        title: String,
        author: AuthorId,
        image: String,
        description: String,
        published: DateTime<Utc>,
        genres: Vec<GenreId>,
    ) -> Self {
        Self {
            id: BookId::new(),
            title,
            author,
            image,
            description,
            published,
            genres,
        }
    }

    /// Returns the publication year
    pub fn published_year(&self) -> i32 {
        use chrono::Datelike;
        self.published.year()
    }

    /// Returns true if the book carries the given genre
    pub fn has_genre(&self, genre: GenreId) -> bool {
        self.genres.contains(&genre)
    }
}

impl Validator for Book {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push("Title cannot be empty".to_string());
        }

        if self.description.trim().is_empty() {
            errors.push("Description cannot be empty".to_string());
        }

        if self.genres.is_empty() {
            errors.push("Book must have at least one genre".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
