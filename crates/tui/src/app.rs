// crates/tui/src/app.rs
//! Main application logic

use crate::{
    error::TuiResult,
    events::{mouse_in_area, AppEvent, EventHandler},
    state::{AppState, Overlay, SearchField},
    theme::{Theme, ThemeType},
    ui,
};
use bookdeck_catalog::{Catalog, SearchCriteria};
use bookdeck_config::Config;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::time::Duration;

/// The catalog browser application
pub struct App {
    catalog: Catalog,
    state: AppState,
    event_handler: EventHandler,
    theme: Theme,
}

impl App {
    /// Creates a new application over a catalog
    pub fn new(catalog: Catalog, config: &Config) -> Self {
        let theme_type = ThemeType::from_scheme(config.app.color_scheme);
        let mut state = AppState::new(
            config.browse.page_size,
            theme_type,
            config.browse.show_covers,
        );
        state.apply_criteria(&catalog, &SearchCriteria::any());

        Self {
            catalog,
            state,
            event_handler: EventHandler::new(Duration::from_millis(250)),
            theme: Theme::new(theme_type),
        }
    }

    /// Returns the application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns the catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Runs the application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> TuiResult<()> {
        while !self.state.should_quit {
            terminal.draw(|frame| ui::render(frame, &self.catalog, &self.state, &self.theme))?;

            let size = terminal.size()?;
            self.state.set_viewport(size.width, size.height);

            match self.event_handler.next()? {
                AppEvent::Key(key) => self.handle_key(key.code, key.modifiers),
                AppEvent::Mouse(mouse) => self.handle_mouse(mouse),
                AppEvent::Quit => self.state.quit(),
                AppEvent::Tick => self.state.tick(),
                AppEvent::Resize(_, _) => {
                    // Next draw picks the new size up automatically
                }
            }
        }

        Ok(())
    }

    /// Handles key events
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.state.quit();
            return;
        }

        match self.state.overlay {
            None => self.handle_browse_keys(code),
            Some(Overlay::Search) => self.handle_search_keys(code),
            Some(Overlay::Settings) => self.handle_settings_keys(code),
            Some(Overlay::Detail(_)) => self.handle_detail_keys(code),
            Some(Overlay::Help) => self.handle_help_keys(code),
        }
    }

    /// Handles mouse events
    pub fn handle_mouse(&mut self, mouse: crossterm::event::MouseEvent) {
        use crossterm::event::MouseEventKind;

        if self.state.overlay.is_some() {
            return;
        }

        match mouse.kind {
            MouseEventKind::Down(_) => self.activate_at(mouse.column, mouse.row),
            MouseEventKind::ScrollDown => self.state.select_next(),
            MouseEventKind::ScrollUp => self.state.select_previous(),
            _ => {}
        }
    }

    /// Resolves a click position to the control under it
    ///
    /// A click inside the list resolves through the row geometry to
    /// the enclosing preview's book id; a click on the show-more
    /// button advances the pager; anything else is a no-op.
    fn activate_at(&mut self, x: u16, y: u16) {
        let (width, height) = self.state.viewport;
        let areas = ui::screen_areas(Rect::new(0, 0, width, height));
        let list_areas = ui::list::split(areas.content);

        if mouse_in_area(x, y, list_areas.button) {
            self.show_more();
            return;
        }

        if mouse_in_area(x, y, list_areas.items) {
            let rows = ui::list::viewport_rows(list_areas.items);
            let hit = ui::list::hit_test(
                list_areas.items,
                self.state.selected,
                self.state.pager.visible_len(),
                rows,
                x,
                y,
            );
            if let Some(index) = hit {
                self.state.selected = index;
                self.open_selected_detail();
            }
        }
    }

    /// Handles browse view keys
    fn handle_browse_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.state.quit(),
            KeyCode::Up | KeyCode::Char('k') => self.state.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.state.select_next(),
            KeyCode::Enter => self.open_selected_detail(),
            KeyCode::Char('m') | KeyCode::PageDown => self.show_more(),
            KeyCode::Char('/') => self.state.open_search(),
            KeyCode::Char('s') => self.state.open_settings(),
            KeyCode::Char('h') => self.state.open_help(),
            KeyCode::Char('t') => {
                let next = self.state.theme_type.toggled();
                self.apply_theme(next);
            }
            KeyCode::Esc => self.state.clear_status(),
            _ => {}
        }
    }

    /// Handles search overlay keys
    fn handle_search_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.state.close_overlay(),
            KeyCode::Enter => self.submit_search(),
            KeyCode::Tab | KeyCode::Down => {
                self.state.search_form.focus = self.state.search_form.focus.next();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.search_form.focus = self.state.search_form.focus.previous();
            }
            KeyCode::Left => {
                let count = self.focused_option_count();
                self.state.search_form.move_selection(-1, count);
            }
            KeyCode::Right => {
                let count = self.focused_option_count();
                self.state.search_form.move_selection(1, count);
            }
            KeyCode::Backspace => {
                if self.state.search_form.focus == SearchField::Title {
                    self.state.search_form.title.pop();
                }
            }
            KeyCode::Char(c) => {
                if self.state.search_form.focus == SearchField::Title {
                    self.state.search_form.title.push(c);
                }
            }
            _ => {}
        }
    }

    /// Handles settings overlay keys
    fn handle_settings_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.state.close_overlay(),
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down | KeyCode::Char(' ') => {
                self.state.settings_form.choice = self.state.settings_form.choice.toggled();
            }
            KeyCode::Enter => {
                let choice = self.state.settings_form.choice;
                self.apply_theme(choice);
                self.state.close_overlay();
            }
            _ => {}
        }
    }

    /// Handles detail overlay keys
    fn handle_detail_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q') => {
                self.state.close_overlay();
            }
            _ => {}
        }
    }

    /// Handles help overlay keys
    fn handle_help_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('q') => {
                self.state.close_overlay();
            }
            _ => {}
        }
    }

    /// Opens the detail overlay for the selected book
    ///
    /// The record is looked up by linear scan of the full collection;
    /// a missing id is a silent no-op.
    fn open_selected_detail(&mut self) {
        let Some(id) = self.state.selected_book_id() else {
            return;
        };
        if self.catalog.find_book(id).is_some() {
            self.state.open_detail(id);
        }
    }

    /// Applies the search form and closes the overlay
    fn submit_search(&mut self) {
        let criteria = self.state.search_form.criteria(&self.catalog);
        self.state.apply_criteria(&self.catalog, &criteria);
        self.state.close_overlay();

        let found = self.state.pager.matches().len();
        self.state
            .set_status(format!("{} of {} books match", found, self.catalog.len()));
    }

    /// Reveals the next page of matches
    fn show_more(&mut self) {
        if self.state.show_more() {
            log::debug!(
                "Showing {} of {} matches",
                self.state.pager.visible_len(),
                self.state.pager.matches().len()
            );
        }
    }

    /// Switches the active theme
    fn apply_theme(&mut self, theme_type: ThemeType) {
        self.state.theme_type = theme_type;
        self.state.settings_form.choice = theme_type;
        self.theme = Theme::new(theme_type);
        self.state.set_status(format!("Theme: {}", theme_type.name()));
    }

    /// Returns the option count of the focused selector
    fn focused_option_count(&self) -> usize {
        match self.state.search_form.focus {
            SearchField::Author => self.catalog.authors_sorted().len(),
            SearchField::Genre => self.catalog.genres_sorted().len(),
            SearchField::Title => 0,
        }
    }
}
