//! Core domain types and errors for Bookdeck

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use types::{AuthorId, Book, BookId, GenreId, Validator};
