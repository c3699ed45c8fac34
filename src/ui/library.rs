//! Library screen state
//!
//! Lists every algorithm grouped by category. `/` focuses the filter field;
//! while it has focus keys edit the filter and never reach the list.

use crate::catalog::{Algorithm, Catalog};
use crate::input::{FieldEvent, TextField};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::rc::Rc;

/// What the library asks the app to do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryAction {
    None,
    Open(Rc<Algorithm>),
    Quit,
}

#[derive(Debug, Clone)]
pub struct LibraryState {
    entries: Vec<Rc<Algorithm>>,
    selected: usize,
    filter: TextField,
    filter_focused: bool,
}

impl LibraryState {
    pub fn new(catalog: &Catalog) -> Self {
        LibraryState {
            entries: catalog.library_order(),
            selected: 0,
            filter: TextField::text(),
            filter_focused: false,
        }
    }

    /// Entries matching the filter, in library order
    pub fn visible(&self) -> Vec<Rc<Algorithm>> {
        let needle = self.filter.value().trim().to_lowercase();
        self.entries
            .iter()
            .filter(|algorithm| needle.is_empty() || matches_filter(algorithm, &needle))
            .cloned()
            .collect()
    }

    /// Index into [`visible`](Self::visible)
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_algorithm(&self) -> Option<Rc<Algorithm>> {
        self.visible().get(self.selected).cloned()
    }

    pub fn filter(&self) -> &str {
        self.filter.value()
    }

    pub fn is_filter_focused(&self) -> bool {
        self.filter_focused
    }

    /// Put the cursor on `slug` if it is visible
    pub fn select_slug(&mut self, slug: &str) {
        if let Some(idx) = self.visible().iter().position(|a| a.slug == slug) {
            self.selected = idx;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> LibraryAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return LibraryAction::Quit;
        }
        if self.filter_focused {
            return self.handle_filter_key(key);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => LibraryAction::Quit,
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                LibraryAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let count = self.visible().len();
                if self.selected + 1 < count {
                    self.selected += 1;
                }
                LibraryAction::None
            }
            KeyCode::Home => {
                self.selected = 0;
                LibraryAction::None
            }
            KeyCode::End => {
                self.selected = self.visible().len().saturating_sub(1);
                LibraryAction::None
            }
            KeyCode::Char('/') => {
                self.filter_focused = true;
                LibraryAction::None
            }
            KeyCode::Esc => {
                self.filter.clear();
                self.clamp_selection();
                LibraryAction::None
            }
            KeyCode::Enter => match self.selected_algorithm() {
                Some(algorithm) => LibraryAction::Open(algorithm),
                None => LibraryAction::None,
            },
            _ => LibraryAction::None,
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent) -> LibraryAction {
        match self.filter.handle_key(key) {
            FieldEvent::Changed => {
                self.clamp_selection();
                LibraryAction::None
            }
            FieldEvent::Submitted => {
                self.filter_focused = false;
                LibraryAction::None
            }
            FieldEvent::Cancelled => {
                self.filter_focused = false;
                self.filter.clear();
                self.clamp_selection();
                LibraryAction::None
            }
            FieldEvent::Ignored => LibraryAction::None,
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.visible().len();
        self.selected = self.selected.min(count.saturating_sub(1));
    }
}

fn matches_filter(algorithm: &Algorithm, needle: &str) -> bool {
    algorithm.name.to_lowercase().contains(needle)
        || algorithm.slug.contains(needle)
        || algorithm
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(state: &mut LibraryState, text: &str) {
        for c in text.chars() {
            state.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn starts_on_first_sorting_algorithm() {
        let state = LibraryState::new(&Catalog::builtin());
        let first = state.selected_algorithm().expect("entry");
        assert_eq!(first.slug, "bubble-sort");
        assert_eq!(state.visible().len(), 9);
    }

    #[test]
    fn movement_is_clamped() {
        let mut state = LibraryState::new(&Catalog::builtin());
        state.handle_key(key(KeyCode::Up));
        assert_eq!(state.selected(), 0);

        for _ in 0..20 {
            state.handle_key(key(KeyCode::Char('j')));
        }
        assert_eq!(state.selected(), 8);
    }

    #[test]
    fn enter_opens_selection() {
        let mut state = LibraryState::new(&Catalog::builtin());
        state.handle_key(key(KeyCode::Down));
        match state.handle_key(key(KeyCode::Enter)) {
            LibraryAction::Open(algorithm) => assert_eq!(algorithm.slug, "selection-sort"),
            other => panic!("expected open, got {:?}", other),
        }
    }

    #[test]
    fn filter_captures_keys_while_focused() {
        let mut state = LibraryState::new(&Catalog::builtin());
        state.handle_key(key(KeyCode::Char('/')));
        assert!(state.is_filter_focused());

        // 'q' is typed into the filter, not treated as quit
        type_text(&mut state, "queue");
        assert_eq!(state.filter(), "queue");
        assert_eq!(state.visible().len(), 1);

        state.handle_key(key(KeyCode::Enter));
        assert!(!state.is_filter_focused());
        assert_eq!(state.handle_key(key(KeyCode::Char('q'))), LibraryAction::Quit);
    }

    #[test]
    fn filter_matches_tags() {
        let mut state = LibraryState::new(&Catalog::builtin());
        state.handle_key(key(KeyCode::Char('/')));
        type_text(&mut state, "SORTED");
        let slugs: Vec<String> = state.visible().iter().map(|a| a.slug.clone()).collect();
        assert_eq!(slugs, ["binary-search"]);
    }

    #[test]
    fn no_match_opens_nothing() {
        let mut state = LibraryState::new(&Catalog::builtin());
        state.handle_key(key(KeyCode::Char('/')));
        type_text(&mut state, "zzz");
        state.handle_key(key(KeyCode::Enter));
        assert_eq!(state.handle_key(key(KeyCode::Enter)), LibraryAction::None);
    }

    #[test]
    fn escape_in_filter_clears_it() {
        let mut state = LibraryState::new(&Catalog::builtin());
        state.handle_key(key(KeyCode::Char('/')));
        type_text(&mut state, "merge");
        state.handle_key(key(KeyCode::Esc));
        assert_eq!(state.filter(), "");
        assert_eq!(state.visible().len(), 9);
    }
}
