use crate::{
    core::{cmd::Cmd, msg::catalog::CatalogMsg, state::selection::SelectionState},
    domain::{
        category::ListCategory,
        movie::{MovieId, MovieSummary},
    },
};

/// Movie list screen state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogState {
    pub category: ListCategory,
    pub movies: Vec<MovieSummary>,
    pub selection: SelectionState,
    pub is_loading: bool,
}

impl CatalogState {
    pub fn new(category: ListCategory) -> Self {
        Self {
            category,
            ..Default::default()
        }
    }

    /// Switch to `category` and request its movies. The current list stays
    /// visible until the response arrives.
    pub fn begin_fetch(&mut self, category: ListCategory) -> Cmd {
        if self.category != category {
            self.selection.deselect();
        }
        self.category = category.clone();
        self.is_loading = true;
        Cmd::FetchMovies { category }
    }

    pub fn selected_movie(&self) -> Option<&MovieSummary> {
        self.selection
            .selected_index()
            .and_then(|i| self.movies.get(i))
    }

    pub fn find(&self, id: MovieId) -> Option<&MovieSummary> {
        self.movies.iter().find(|m| m.id == id)
    }

    /// Catalog-specific update function
    pub fn update(&mut self, msg: CatalogMsg) -> Vec<Cmd> {
        let len = self.movies.len();
        match msg {
            CatalogMsg::SelectNext => self.selection.select_next(len),
            CatalogMsg::SelectPrevious => self.selection.select_previous(len),
            CatalogMsg::SelectFirst => self.selection.select_first(len),
            CatalogMsg::SelectLast => self.selection.select_last(len),
            CatalogMsg::MoviesLoaded { category, movies } => {
                if category != self.category {
                    log::debug!(
                        "Dropping {} movies for {category}, showing {}",
                        movies.len(),
                        self.category
                    );
                    return vec![];
                }
                self.is_loading = false;
                self.movies = movies;
                self.selection.reset(self.movies.len());
            }
        }
        vec![]
    }
}
