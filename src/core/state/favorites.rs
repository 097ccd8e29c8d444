use crate::{
    core::{cmd::Cmd, msg::favorites::FavoritesMsg, state::selection::SelectionState},
    domain::movie::{MovieId, MovieSummary},
};

/// Favorites marked during this session. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesState {
    items: Vec<MovieSummary>,
    pub selection: SelectionState,
}

impl FavoritesState {
    pub fn items(&self) -> &[MovieSummary] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: MovieId) -> bool {
        self.items.iter().any(|fav| fav.id == id)
    }

    pub fn get(&self, id: MovieId) -> Option<&MovieSummary> {
        self.items.iter().find(|fav| fav.id == id)
    }

    pub fn selected(&self) -> Option<&MovieSummary> {
        self.selection
            .selected_index()
            .and_then(|i| self.items.get(i))
    }

    /// Remove `id` if it is a favorite, otherwise append the listed movie with
    /// that id. Unknown ids are ignored. Returns whether anything changed.
    pub fn toggle(&mut self, id: MovieId, listed: &[MovieSummary]) -> bool {
        if self.contains(id) {
            return self.remove(id);
        }
        match listed.iter().find(|movie| movie.id == id) {
            Some(movie) => {
                self.items.push(movie.clone());
                if self.selection.selected_index().is_none() {
                    self.selection.select(self.items.len() - 1, self.items.len());
                }
                true
            }
            None => false,
        }
    }

    /// Returns whether a favorite was removed; missing ids are a no-op
    pub fn remove(&mut self, id: MovieId) -> bool {
        let before = self.items.len();
        self.items.retain(|fav| fav.id != id);
        self.selection.clamp(self.items.len());
        self.items.len() != before
    }

    /// Favorites-specific update function
    pub fn update(&mut self, msg: FavoritesMsg, listed: &[MovieSummary]) -> Vec<Cmd> {
        let len = self.items.len();
        match msg {
            FavoritesMsg::Toggle(id) => {
                self.toggle(id, listed);
            }
            // resolved against the catalog selection in core::update
            FavoritesMsg::ToggleSelected => {}
            FavoritesMsg::Remove(id) => {
                self.remove(id);
            }
            FavoritesMsg::RemoveSelected => {
                if let Some(id) = self.selected().map(|fav| fav.id) {
                    self.remove(id);
                }
            }
            FavoritesMsg::SelectNext => self.selection.select_next(len),
            FavoritesMsg::SelectPrevious => self.selection.select_previous(len),
            FavoritesMsg::SelectFirst => self.selection.select_first(len),
            FavoritesMsg::SelectLast => self.selection.select_last(len),
        }
        vec![]
    }
}
