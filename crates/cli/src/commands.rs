//! Subcommand implementations

use anyhow::{Context, Result};
use bookdeck_catalog::{Catalog, SearchCriteria};
use bookdeck_config::Config;
use bookdeck_core::{AppError, AuthorId, Book, BookId, GenreId};
use bookdeck_tui::TuiApp;
use clap::ArgMatches;
use console::style;

/// Launches the interactive browser
pub fn browse(catalog: Catalog, config: &Config) -> Result<()> {
    let mut app = TuiApp::new(catalog, config).context("Failed to initialize the terminal")?;
    app.run().context("Browser exited with an error")?;
    Ok(())
}

/// Lists books matching the given filters in dataset order
pub fn list_books(catalog: &Catalog, matches: &ArgMatches) -> Result<()> {
    let criteria = criteria_from_flags(matches)?;
    let found = criteria.apply(catalog);

    for id in &found {
        if let Some(book) = catalog.find_book(*id) {
            print_book_line(catalog, book);
        }
    }

    println!(
        "\n{}",
        style(format!("{} of {} books", found.len(), catalog.len())).dim()
    );
    Ok(())
}

/// Searches books by title substring
pub fn search_books(catalog: &Catalog, matches: &ArgMatches) -> Result<()> {
    let query = matches
        .get_one::<String>("query")
        .context("Missing search query")?;

    let criteria = SearchCriteria::with_title(query.clone());
    let found = criteria.apply(catalog);

    if found.is_empty() {
        println!("No books match '{}'", query);
        return Ok(());
    }

    for id in &found {
        if let Some(book) = catalog.find_book(*id) {
            print_book_line(catalog, book);
        }
    }
    Ok(())
}

/// Shows the full record for one book
pub fn book_info(catalog: &Catalog, matches: &ArgMatches) -> Result<()> {
    let raw_id = matches
        .get_one::<String>("id")
        .context("Missing book id")?;
    let id = BookId::from_string(raw_id)
        .map_err(|_| AppError::invalid_argument("id", format!("'{}' is not a UUID", raw_id)))?;

    let book = catalog.get_book(id)?;

    println!("{}", style(&book.title).bold());
    println!(
        "{} ({})",
        catalog.author_name(book.author),
        book.published_year()
    );
    println!();
    println!("Id:     {}", book.id);
    println!(
        "Genres: {}",
        book.genres
            .iter()
            .map(|genre| catalog.genre_name(*genre))
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("Cover:  {}", book.image);
    println!();
    println!("{}", book.description);
    Ok(())
}

/// Lists the author lookup table
pub fn list_authors(catalog: &Catalog) -> Result<()> {
    for (id, name) in catalog.authors_sorted() {
        println!("{}  {}", style(id).dim(), name);
    }
    Ok(())
}

/// Lists the genre lookup table
pub fn list_genres(catalog: &Catalog) -> Result<()> {
    for (id, name) in catalog.genres_sorted() {
        println!("{}  {}", style(id).dim(), name);
    }
    Ok(())
}

/// Prints catalog statistics
pub fn stats(catalog: &Catalog) -> Result<()> {
    println!("{}", style("Catalog statistics").bold());
    println!("Books:   {}", catalog.len());
    println!("Authors: {}", catalog.authors_sorted().len());
    println!("Genres:  {}", catalog.genres_sorted().len());

    println!();
    for (id, name) in catalog.genres_sorted() {
        let count = catalog
            .books()
            .iter()
            .filter(|book| book.has_genre(id))
            .count();
        println!("{:>4}  {}", count, name);
    }
    Ok(())
}

/// Exports the catalog as JSON to a file or stdout
pub fn export(catalog: &Catalog, matches: &ArgMatches) -> Result<()> {
    let authors: serde_json::Map<String, serde_json::Value> = catalog
        .authors_sorted()
        .into_iter()
        .map(|(id, name)| (id.as_string(), serde_json::Value::String(name.to_string())))
        .collect();
    let genres: serde_json::Map<String, serde_json::Value> = catalog
        .genres_sorted()
        .into_iter()
        .map(|(id, name)| (id.as_string(), serde_json::Value::String(name.to_string())))
        .collect();
    let document = serde_json::json!({
        "authors": authors,
        "genres": genres,
        "books": catalog.books(),
    });
    let rendered = serde_json::to_string_pretty(&document).context("Failed to serialize catalog")?;

    match matches.get_one::<String>("output") {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path))?;
            println!("Exported {} books to {}", catalog.len(), path);
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

/// Builds search criteria from the list command's flags
fn criteria_from_flags(matches: &ArgMatches) -> Result<SearchCriteria> {
    let title = matches
        .get_one::<String>("title")
        .cloned()
        .unwrap_or_default();

    let author = matches
        .get_one::<String>("author")
        .map(|raw| {
            AuthorId::from_string(raw)
                .map_err(|_| AppError::invalid_argument("author", format!("'{}' is not a UUID", raw)))
        })
        .transpose()?;

    let genre = matches
        .get_one::<String>("genre")
        .map(|raw| {
            GenreId::from_string(raw)
                .map_err(|_| AppError::invalid_argument("genre", format!("'{}' is not a UUID", raw)))
        })
        .transpose()?;

    Ok(SearchCriteria {
        title,
        author,
        genre,
    })
}

/// Prints the one-line listing for a book
fn print_book_line(catalog: &Catalog, book: &Book) {
    println!(
        "{}  {} {}",
        style(book.id).dim(),
        style(&book.title).bold(),
        style(format!(
            "— {} ({})",
            catalog.author_name(book.author),
            book.published_year()
        ))
        .dim()
    );
}
