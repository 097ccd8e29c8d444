//! Screen components
//!
//! Components are stateless renderers that receive `AppState` during render.

use ratatui::prelude::*;

use crate::core::state::{AppState, Screen};

pub mod details;
pub mod favorites;
pub mod footer;
pub mod header;
pub mod movie_list;
pub mod status_bar;

pub use details::DetailsComponent;
pub use favorites::FavoritesComponent;
pub use footer::FooterComponent;
pub use header::HeaderComponent;
pub use movie_list::MovieListComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub header: HeaderComponent,
    pub movie_list: MovieListComponent,
    pub details: DetailsComponent,
    pub favorites: FavoritesComponent,
    pub footer: FooterComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the screen on top of the navigation stack plus the fixed chrome
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Current screen
                Constraint::Length(1), // Footer tabs
                Constraint::Length(1), // Status line
            ])
            .split(frame.area());

        self.header.view(state, frame, layout[0]);

        match state.current_screen() {
            Screen::MovieList => self.movie_list.view(state, frame, layout[1]),
            Screen::MovieDetails(_) => self.details.view(state, frame, layout[1]),
            Screen::Favorites => self.favorites.view(state, frame, layout[1]),
        }

        self.footer.view(state, frame, layout[2]);
        self.status_bar.view(state, frame, layout[3]);
    }
}
