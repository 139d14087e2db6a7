//! The catalog dataset: books plus author and genre display-name tables
//!
//! The dataset is loaded once at startup, either from the embedded JSON
//! document or from a user-supplied file, and is read-only afterwards.

use crate::error::{CatalogError, CatalogResult};
use bookdeck_core::{AppError, AuthorId, Book, BookId, GenreId, Validator};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Display label for an author id missing from the lookup table
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

/// Display label for a genre id missing from the lookup table
pub const UNKNOWN_GENRE: &str = "Unknown genre";

/// The full book catalog with its lookup tables
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    authors: HashMap<AuthorId, String>,
    genres: HashMap<GenreId, String>,
    books: Vec<Book>,
}

impl Catalog {
    /// Creates a catalog from already-constructed parts
    pub fn new(
        authors: HashMap<AuthorId, String>,
        genres: HashMap<GenreId, String>,
        books: Vec<Book>,
    ) -> Self {
        Self {
            authors,
            genres,
            books,
        }
    }

    /// Parses a catalog from a JSON document
    ///
    /// Entries that fail validation are kept but logged, so a slightly
    /// malformed dataset still browses.
    pub fn from_json(data: &str) -> CatalogResult<Self> {
        let catalog: Catalog = serde_json::from_str(data)?;

        for book in &catalog.books {
            if let Err(errors) = book.validate() {
                log::warn!("Book {} failed validation: {}", book.id, errors.join("; "));
            }
        }

        log::info!(
            "Loaded catalog: {} books, {} authors, {} genres",
            catalog.books.len(),
            catalog.authors.len(),
            catalog.genres.len()
        );

        Ok(catalog)
    }

    /// Loads the catalog shipped with the binary
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_json(include_str!("../data/catalog.json"))
    }

    /// Loads a catalog from a JSON file on disk
    pub fn load_from_path(path: &Path) -> CatalogResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&contents)
    }

    /// Returns all books in dataset order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Returns the number of books in the catalog
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns true if the catalog holds no books
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Looks a book up by id with a linear scan of the full collection
    pub fn find_book(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Like [`find_book`](Self::find_book), but a missing id is an error
    pub fn get_book(&self, id: BookId) -> CatalogResult<&Book> {
        self.find_book(id)
            .ok_or_else(|| AppError::not_found("book", id.as_string()).into())
    }

    /// Resolves an author id to its display name
    ///
    /// An id missing from the table resolves to [`UNKNOWN_AUTHOR`]
    /// rather than surfacing an error.
    pub fn author_name(&self, id: AuthorId) -> &str {
        match self.authors.get(&id) {
            Some(name) => name,
            None => {
                log::warn!("Unknown author id {}", id);
                UNKNOWN_AUTHOR
            }
        }
    }

    /// Resolves a genre id to its display name, falling back to
    /// [`UNKNOWN_GENRE`]
    pub fn genre_name(&self, id: GenreId) -> &str {
        match self.genres.get(&id) {
            Some(name) => name,
            None => {
                log::warn!("Unknown genre id {}", id);
                UNKNOWN_GENRE
            }
        }
    }

    /// Returns the author table sorted by display name
    ///
    /// The selectors need a deterministic order; HashMap iteration
    /// order is not one.
    pub fn authors_sorted(&self) -> Vec<(AuthorId, &str)> {
        let mut entries: Vec<(AuthorId, &str)> = self
            .authors
            .iter()
            .map(|(id, name)| (*id, name.as_str()))
            .collect();
        entries.sort_by(|a, b| a.1.cmp(b.1));
        entries
    }

    /// Returns the genre table sorted by display name
    pub fn genres_sorted(&self) -> Vec<(GenreId, &str)> {
        let mut entries: Vec<(GenreId, &str)> = self
            .genres
            .iter()
            .map(|(id, name)| (*id, name.as_str()))
            .collect();
        entries.sort_by(|a, b| a.1.cmp(b.1));
        entries
    }
}
