//! Integration tests driving the browser through its public API

use bookdeck_catalog::Catalog;
use bookdeck_config::{BrowseConfig, Config};
use bookdeck_core::{AuthorId, Book, GenreId};
use bookdeck_tui::{App, Overlay};
use chrono::TimeZone;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

fn five_book_catalog() -> Catalog {
    let author = AuthorId::new();
    let genre = GenreId::new();

    let books: Vec<Book> = (1..=5)
        .map(|n| {
            Book::new(
                format!("Book {}", n),
                author,
                format!("https://example.org/{}.jpg", n),
                format!("Description of book {}.", n),
                chrono::Utc.with_ymd_and_hms(1900 + n, 1, 1, 0, 0, 0).unwrap(),
                vec![genre],
            )
        })
        .collect();

    let mut authors = HashMap::new();
    authors.insert(author, "The Author".to_string());
    let mut genres = HashMap::new();
    genres.insert(genre, "The Genre".to_string());

    Catalog::new(authors, genres, books)
}

fn app(page_size: usize) -> App {
    let config = Config {
        browse: BrowseConfig {
            page_size,
            ..BrowseConfig::default()
        },
        ..Config::default()
    };
    App::new(five_book_catalog(), &config)
}

fn key(app: &mut App, code: KeyCode) {
    app.handle_key(code, KeyModifiers::empty());
}

#[test]
fn worked_example_five_books_page_size_two() {
    let mut app = app(2);

    // Initial display: books 1-2, three remaining.
    assert_eq!(app.state().pager.visible_len(), 2);
    assert_eq!(app.state().pager.remaining(), 3);
    assert!(app.state().pager.can_show_more());

    // One click: books 1-4, one remaining.
    key(&mut app, KeyCode::Char('m'));
    assert_eq!(app.state().pager.visible_len(), 4);
    assert_eq!(app.state().pager.remaining(), 1);

    // One more: all five, control disabled.
    key(&mut app, KeyCode::Char('m'));
    assert_eq!(app.state().pager.visible_len(), 5);
    assert_eq!(app.state().pager.remaining(), 0);
    assert!(!app.state().pager.can_show_more());

    // Further presses change nothing.
    key(&mut app, KeyCode::Char('m'));
    assert_eq!(app.state().pager.visible_len(), 5);
}

#[test]
fn initial_display_shows_min_of_page_size_and_matches() {
    let app36 = app(36);
    assert_eq!(app36.state().pager.visible_len(), 5);

    let app = app(3);
    assert_eq!(app.state().pager.visible_len(), 3);
}

#[test]
fn detail_overlay_shows_the_activated_record() {
    let mut app = app(5);

    key(&mut app, KeyCode::Down);
    key(&mut app, KeyCode::Down);
    key(&mut app, KeyCode::Enter);

    let Some(Overlay::Detail(id)) = app.state().overlay else {
        panic!("expected detail overlay");
    };
    let book = app.catalog().find_book(id).unwrap();
    assert_eq!(book.title, "Book 3");
}

#[test]
fn search_title_narrows_then_blank_restores_everything() {
    let mut app = app(2);

    key(&mut app, KeyCode::Char('/'));
    key(&mut app, KeyCode::Char('3'));
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.state().pager.matches().len(), 1);
    assert_eq!(app.state().pager.visible_len(), 1);
    assert!(!app.state().pager.can_show_more());

    // Clear the title again: blank criteria match the whole catalog.
    key(&mut app, KeyCode::Char('/'));
    key(&mut app, KeyCode::Backspace);
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.state().pager.matches().len(), 5);
    assert_eq!(app.state().pager.page(), 1);
    assert_eq!(app.state().pager.visible_len(), 2);
}

#[test]
fn no_results_leaves_an_empty_match_set() {
    let mut app = app(2);

    key(&mut app, KeyCode::Char('/'));
    for c in "missing".chars() {
        key(&mut app, KeyCode::Char(c));
    }
    key(&mut app, KeyCode::Enter);

    assert!(app.state().pager.is_empty());
    assert_eq!(app.state().pager.visible_len(), 0);
    assert!(!app.state().pager.can_show_more());
}

#[test]
fn overlays_are_mutually_exclusive_booleans() {
    let mut app = app(2);

    key(&mut app, KeyCode::Char('/'));
    assert_eq!(app.state().overlay, Some(Overlay::Search));
    key(&mut app, KeyCode::Esc);
    assert_eq!(app.state().overlay, None);

    key(&mut app, KeyCode::Char('s'));
    assert_eq!(app.state().overlay, Some(Overlay::Settings));
    key(&mut app, KeyCode::Esc);
    assert_eq!(app.state().overlay, None);
}

#[test]
fn theme_applies_from_settings_form() {
    let mut app = app(2);
    let initial = app.state().theme_type;

    key(&mut app, KeyCode::Char('s'));
    key(&mut app, KeyCode::Left);
    key(&mut app, KeyCode::Enter);

    assert_eq!(app.state().theme_type, initial.toggled());
    assert_eq!(app.state().settings_form.choice, initial.toggled());
}
