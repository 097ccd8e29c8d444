pub mod catalog;
pub mod details;
pub mod favorites;
pub mod navigation;
pub mod selection;
pub mod system;

use crate::{domain::category::ListCategory, infrastructure::config::Config};

pub use catalog::CatalogState;
pub use details::DetailsState;
pub use favorites::FavoritesState;
pub use navigation::{NavigationState, Screen};
pub use system::SystemState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub navigation: NavigationState,
    pub catalog: CatalogState,
    pub details: DetailsState,
    pub favorites: FavoritesState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState showing the given list
    pub fn new(category: ListCategory) -> Self {
        Self {
            catalog: CatalogState::new(category),
            ..Default::default()
        }
    }

    /// Initialize AppState with the given list and config
    pub fn new_with_config(category: ListCategory, config: Config) -> Self {
        Self {
            catalog: CatalogState::new(category),
            config: ConfigState { config },
            ..Default::default()
        }
    }

    pub fn current_screen(&self) -> &Screen {
        self.navigation.current()
    }

    pub fn is_favorite(&self, id: crate::domain::movie::MovieId) -> bool {
        self.favorites.contains(id)
    }

    /// Base URL for poster and profile images
    pub fn image_base_url(&self) -> &str {
        &self.config.config.tmdb.image_base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert_eq!(state.current_screen(), &Screen::MovieList);
        assert_eq!(state.catalog.category, ListCategory::NowPlaying);
        assert!(state.catalog.movies.is_empty());
        assert!(state.favorites.is_empty());
        assert!(!state.system.should_quit);
    }

    #[test]
    fn test_app_state_new_with_category() {
        let state = AppState::new(ListCategory::TopRated);

        assert_eq!(state.catalog.category, ListCategory::TopRated);
        assert!(!state.catalog.is_loading);
    }

    #[test]
    fn test_is_favorite() {
        let mut state = AppState::default();
        state.catalog.movies = vec![crate::domain::movie::MovieSummary::new(5, "Up")];

        assert!(!state.is_favorite(5));
        state.favorites.toggle(5, &state.catalog.movies);
        assert!(state.is_favorite(5));
    }
}
