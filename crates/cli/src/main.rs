use anyhow::{Context, Result};
use bookdeck_catalog::Catalog;
use bookdeck_config::{Config, ConfigManager};
use clap::{Arg, Command};
use std::path::Path;

mod commands;

fn build_cli() -> Command {
    Command::new("bookdeck")
        .version("0.1.0")
        .about("Terminal book catalog browser")
        .arg(
            Arg::new("data")
                .short('d')
                .long("data")
                .value_name("PATH")
                .help("Path to a catalog JSON file (defaults to the embedded catalog)")
                .global(true),
        )
        .subcommand(Command::new("browse").about("Browse the catalog interactively (default)"))
        .subcommand(
            Command::new("list")
                .about("List books matching the given filters")
                .arg(
                    Arg::new("title")
                        .short('t')
                        .long("title")
                        .value_name("TEXT")
                        .help("Title substring filter (case-insensitive)"),
                )
                .arg(
                    Arg::new("author")
                        .short('a')
                        .long("author")
                        .value_name("AUTHOR_ID")
                        .help("Author id filter"),
                )
                .arg(
                    Arg::new("genre")
                        .short('g')
                        .long("genre")
                        .value_name("GENRE_ID")
                        .help("Genre id filter"),
                ),
        )
        .subcommand(
            Command::new("search")
                .about("Search books by title")
                .arg(
                    Arg::new("query")
                        .required(true)
                        .value_name("QUERY")
                        .help("Title substring to search for"),
                ),
        )
        .subcommand(
            Command::new("info")
                .about("Show detailed information about a book")
                .arg(
                    Arg::new("id")
                        .required(true)
                        .value_name("BOOK_ID")
                        .help("Book ID (UUID)"),
                ),
        )
        .subcommand(Command::new("authors").about("List the author lookup table"))
        .subcommand(Command::new("genres").about("List the genre lookup table"))
        .subcommand(Command::new("stats").about("Show catalog statistics"))
        .subcommand(
            Command::new("export")
                .about("Export the catalog as JSON")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("FILE")
                        .help("Output file path (stdout if omitted)"),
                ),
        )
}

fn load_catalog(data_path: Option<&String>) -> Result<Catalog> {
    match data_path {
        Some(path) => Catalog::load_from_path(Path::new(path))
            .with_context(|| format!("Failed to load catalog from {}", path)),
        None => Catalog::builtin().context("Failed to load the embedded catalog"),
    }
}

fn load_config() -> Config {
    match ConfigManager::new() {
        Ok(manager) => manager.load_or_default(),
        Err(e) => {
            log::warn!("Could not resolve config directory: {}, using defaults", e);
            Config::default()
        }
    }
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    let config = load_config();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.app.log_level.to_string()),
    )
    .init();

    let catalog = load_catalog(matches.get_one::<String>("data"))?;

    match matches.subcommand() {
        None | Some(("browse", _)) => commands::browse(catalog, &config),
        Some(("list", sub_matches)) => commands::list_books(&catalog, sub_matches),
        Some(("search", sub_matches)) => commands::search_books(&catalog, sub_matches),
        Some(("info", sub_matches)) => commands::book_info(&catalog, sub_matches),
        Some(("authors", _)) => commands::list_authors(&catalog),
        Some(("genres", _)) => commands::list_genres(&catalog),
        Some(("stats", _)) => commands::stats(&catalog),
        Some(("export", sub_matches)) => commands::export(&catalog, sub_matches),
        Some((other, _)) => anyhow::bail!("Unknown subcommand: {}", other),
    }
}
