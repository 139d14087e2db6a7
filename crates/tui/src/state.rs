// crates/tui/src/state.rs
//! Application state management
//!
//! All mutable view state lives here: the pager over the current
//! match set, the selection cursor, the active overlay, and the two
//! form states. There is no module-level state anywhere.

use crate::theme::ThemeType;
use bookdeck_catalog::{Catalog, Pager, SearchCriteria};
use bookdeck_core::BookId;

/// Number of ticks a status message stays visible (~3s at 250ms)
const STATUS_TICKS: u8 = 12;

/// Modal overlays
///
/// At most one overlay is open at a time; each is driven by its own
/// open/close control pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Search form
    Search,
    /// Settings form
    Settings,
    /// Detail panel for one book
    Detail(BookId),
    /// Key binding reference
    Help,
}

/// Focusable fields of the search form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
    Genre,
}

impl SearchField {
    /// Returns the next field in focus order
    pub fn next(&self) -> Self {
        match self {
            SearchField::Title => SearchField::Author,
            SearchField::Author => SearchField::Genre,
            SearchField::Genre => SearchField::Title,
        }
    }

    /// Returns the previous field in focus order
    pub fn previous(&self) -> Self {
        match self {
            SearchField::Title => SearchField::Genre,
            SearchField::Author => SearchField::Title,
            SearchField::Genre => SearchField::Author,
        }
    }
}

/// Search form state
///
/// Selector index 0 means "any"; index `n > 0` refers to entry `n - 1`
/// of the corresponding sorted lookup table. Field values survive
/// closing the form, like an HTML form keeps its inputs.
#[derive(Debug, Clone)]
pub struct SearchForm {
    pub title: String,
    pub author_index: usize,
    pub genre_index: usize,
    pub focus: SearchField,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            author_index: 0,
            genre_index: 0,
            focus: SearchField::Title,
        }
    }
}

impl SearchForm {
    /// Builds the criteria currently described by the form
    pub fn criteria(&self, catalog: &Catalog) -> SearchCriteria {
        let author = self
            .author_index
            .checked_sub(1)
            .and_then(|i| catalog.authors_sorted().get(i).map(|(id, _)| *id));
        let genre = self
            .genre_index
            .checked_sub(1)
            .and_then(|i| catalog.genres_sorted().get(i).map(|(id, _)| *id));

        SearchCriteria {
            title: self.title.clone(),
            author,
            genre,
        }
    }

    /// Moves the focused selector, clamped to `0..=option_count`
    pub fn move_selection(&mut self, delta: isize, option_count: usize) {
        let index = match self.focus {
            SearchField::Author => &mut self.author_index,
            SearchField::Genre => &mut self.genre_index,
            SearchField::Title => return,
        };
        let new = index.saturating_add_signed(delta);
        *index = new.min(option_count);
    }
}

/// Settings form state
#[derive(Debug, Clone, Default)]
pub struct SettingsForm {
    pub choice: ThemeType,
}

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should quit
    pub should_quit: bool,
    /// Active overlay, if any
    pub overlay: Option<Overlay>,
    /// Pagination over the current match set
    pub pager: Pager,
    /// Selected row in the visible list
    pub selected: usize,
    /// Search form
    pub search_form: SearchForm,
    /// Settings form
    pub settings_form: SettingsForm,
    /// Active theme type
    pub theme_type: ThemeType,
    /// Show cover references in the detail overlay
    pub show_covers: bool,
    /// Transient status message
    pub status_message: Option<String>,
    status_ticks: u8,
    /// Last known terminal size, for mouse hit-testing
    pub viewport: (u16, u16),
}

impl AppState {
    /// Creates a new application state
    pub fn new(page_size: usize, theme_type: ThemeType, show_covers: bool) -> Self {
        Self {
            should_quit: false,
            overlay: None,
            pager: Pager::new(page_size),
            selected: 0,
            search_form: SearchForm::default(),
            settings_form: SettingsForm { choice: theme_type },
            theme_type,
            show_covers,
            status_message: None,
            status_ticks: 0,
            viewport: (0, 0),
        }
    }

    /// Requests quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Applies filter criteria against the catalog
    ///
    /// Recomputes the match set wholesale, resets pagination to the
    /// first page and scrolls back to the top.
    pub fn apply_criteria(&mut self, catalog: &Catalog, criteria: &SearchCriteria) {
        self.pager.set_matches(criteria.apply(catalog));
        self.selected = 0;
    }

    /// Reveals the next page of matches
    pub fn show_more(&mut self) -> bool {
        self.pager.show_more()
    }

    /// Returns the id under the selection cursor
    pub fn selected_book_id(&self) -> Option<BookId> {
        self.pager.visible().get(self.selected).copied()
    }

    /// Selects the next visible row
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.pager.visible_len() {
            self.selected += 1;
        }
    }

    /// Selects the previous visible row
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Resets the selection to the first row
    pub fn reset_selection(&mut self) {
        self.selected = 0;
    }

    /// Opens the search overlay
    pub fn open_search(&mut self) {
        self.overlay = Some(Overlay::Search);
        self.search_form.focus = SearchField::Title;
    }

    /// Opens the settings overlay
    pub fn open_settings(&mut self) {
        self.settings_form.choice = self.theme_type;
        self.overlay = Some(Overlay::Settings);
    }

    /// Opens the detail overlay for a book
    pub fn open_detail(&mut self, id: BookId) {
        self.overlay = Some(Overlay::Detail(id));
    }

    /// Opens the help overlay
    pub fn open_help(&mut self) {
        self.overlay = Some(Overlay::Help);
    }

    /// Closes the active overlay
    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    /// Sets a transient status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_ticks = STATUS_TICKS;
    }

    /// Clears the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_ticks = 0;
    }

    /// Ages out the status message
    pub fn tick(&mut self) {
        if self.status_ticks > 0 {
            self.status_ticks -= 1;
            if self.status_ticks == 0 {
                self.status_message = None;
            }
        }
    }

    /// Records the terminal size for mouse hit-testing
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    fn state_with_matches(page_size: usize) -> (AppState, Catalog) {
        let catalog = catalog();
        let mut state = AppState::new(page_size, ThemeType::Night, true);
        state.apply_criteria(&catalog, &SearchCriteria::any());
        (state, catalog)
    }

    #[test]
    fn test_new_state() {
        let state = AppState::new(36, ThemeType::Night, true);
        assert!(!state.should_quit);
        assert!(state.overlay.is_none());
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_quit() {
        let mut state = AppState::new(36, ThemeType::Night, true);
        state.quit();
        assert!(state.should_quit);
    }

    #[test]
    fn test_apply_criteria_resets_page_and_selection() {
        let (mut state, catalog) = state_with_matches(5);
        state.show_more();
        state.selected = 3;

        state.apply_criteria(&catalog, &SearchCriteria::with_title("the"));
        assert_eq!(state.pager.page(), 1);
        assert_eq!(state.selected, 0);
        assert_eq!(
            state.pager.visible_len(),
            state.pager.matches().len().min(5)
        );
    }

    #[test]
    fn test_selection_bounds() {
        let (mut state, _catalog) = state_with_matches(3);

        state.select_previous();
        assert_eq!(state.selected, 0);

        for _ in 0..10 {
            state.select_next();
        }
        assert_eq!(state.selected, state.pager.visible_len() - 1);
    }

    #[test]
    fn test_selected_book_id_comes_from_visible_slice() {
        let (mut state, _catalog) = state_with_matches(3);
        state.selected = 2;
        assert_eq!(state.selected_book_id(), Some(state.pager.visible()[2]));
    }

    #[test]
    fn test_selected_book_id_empty_matches() {
        let catalog = catalog();
        let mut state = AppState::new(3, ThemeType::Night, true);
        state.apply_criteria(&catalog, &SearchCriteria::with_title("zzz-no-such"));
        assert_eq!(state.selected_book_id(), None);
    }

    #[test]
    fn test_overlay_open_close() {
        let mut state = AppState::new(36, ThemeType::Night, true);

        state.open_search();
        assert_eq!(state.overlay, Some(Overlay::Search));
        state.close_overlay();
        assert!(state.overlay.is_none());

        state.open_settings();
        assert_eq!(state.overlay, Some(Overlay::Settings));
        state.close_overlay();

        state.open_help();
        assert_eq!(state.overlay, Some(Overlay::Help));
        state.close_overlay();
    }

    #[test]
    fn test_open_settings_seeds_form_with_active_theme() {
        let mut state = AppState::new(36, ThemeType::Day, true);
        state.settings_form.choice = ThemeType::Night;
        state.open_settings();
        assert_eq!(state.settings_form.choice, ThemeType::Day);
    }

    #[test]
    fn test_status_ages_out() {
        let mut state = AppState::new(36, ThemeType::Night, true);
        state.set_status("hello");
        assert!(state.status_message.is_some());

        for _ in 0..STATUS_TICKS {
            state.tick();
        }
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_search_field_cycle() {
        let field = SearchField::Title;
        assert_eq!(field.next(), SearchField::Author);
        assert_eq!(field.next().next(), SearchField::Genre);
        assert_eq!(field.next().next().next(), SearchField::Title);
        assert_eq!(field.previous(), SearchField::Genre);
    }

    #[test]
    fn test_search_form_criteria_any() {
        let catalog = catalog();
        let form = SearchForm::default();
        let criteria = form.criteria(&catalog);
        assert!(criteria.is_unconstrained());
    }

    #[test]
    fn test_search_form_criteria_resolves_indices() {
        let catalog = catalog();
        let form = SearchForm {
            author_index: 1,
            genre_index: 2,
            ..SearchForm::default()
        };
        let criteria = form.criteria(&catalog);
        assert_eq!(criteria.author, Some(catalog.authors_sorted()[0].0));
        assert_eq!(criteria.genre, Some(catalog.genres_sorted()[1].0));
    }

    #[test]
    fn test_search_form_out_of_range_index_means_any() {
        let catalog = catalog();
        let form = SearchForm {
            author_index: 9999,
            ..SearchForm::default()
        };
        assert!(form.criteria(&catalog).author.is_none());
    }

    #[test]
    fn test_move_selection_clamps() {
        let mut form = SearchForm {
            focus: SearchField::Author,
            ..SearchForm::default()
        };

        form.move_selection(-1, 5);
        assert_eq!(form.author_index, 0);

        form.move_selection(1, 5);
        assert_eq!(form.author_index, 1);

        form.move_selection(100, 5);
        assert_eq!(form.author_index, 5);
    }

    #[test]
    fn test_move_selection_ignores_title_focus() {
        let mut form = SearchForm::default();
        form.move_selection(1, 5);
        assert_eq!(form.author_index, 0);
        assert_eq!(form.genre_index, 0);
    }
}
