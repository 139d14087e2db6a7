//! Catalog filtering
//!
//! A criteria set is built fresh for every search submission and
//! applied to the full collection in one linear, order-preserving pass.

use crate::dataset::Catalog;
use bookdeck_core::{AuthorId, Book, BookId, GenreId};

/// Filter criteria for a catalog search
///
/// `None` for author or genre means "any"; a blank title means no
/// title constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    pub title: String,
    pub author: Option<AuthorId>,
    pub genre: Option<GenreId>,
}

impl SearchCriteria {
    /// Criteria matching every book
    pub fn any() -> Self {
        Self::default()
    }

    /// Criteria constraining the title only
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Returns true if no field constrains the result
    pub fn is_unconstrained(&self) -> bool {
        self.title.trim().is_empty() && self.author.is_none() && self.genre.is_none()
    }

    /// Returns true if the book satisfies every criterion
    pub fn matches(&self, book: &Book) -> bool {
        let genre_match = match self.genre {
            None => true,
            Some(genre) => book.has_genre(genre),
        };

        let author_match = match self.author {
            None => true,
            Some(author) => book.author == author,
        };

        let title = self.title.trim();
        let title_match =
            title.is_empty() || book.title.to_lowercase().contains(&title.to_lowercase());

        genre_match && author_match && title_match
    }

    /// Applies the criteria to the full catalog
    ///
    /// The result preserves dataset order and is always a subset of the
    /// full collection.
    pub fn apply(&self, catalog: &Catalog) -> Vec<BookId> {
        let matches: Vec<BookId> = catalog
            .books()
            .iter()
            .filter(|book| self.matches(book))
            .map(|book| book.id)
            .collect();

        log::debug!(
            "Filter matched {} of {} books",
            matches.len(),
            catalog.len()
        );

        matches
    }
}
