use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::{movie::MovieSummary, text::truncate_width},
    presentation::config::keybindings::Mode,
};

const FAVORITE_MARK: &str = "♥";
const PLAIN_MARK: &str = "♡";

/// Movies of the active category, favorites marked with a heart
#[derive(Debug, Clone, Default)]
pub struct MovieListComponent;

impl MovieListComponent {
    pub fn new() -> Self {
        Self
    }

    /// One display row: favorite mark, then the title cut to `width` columns
    pub fn row(movie: &MovieSummary, is_favorite: bool, width: usize) -> String {
        let mark = if is_favorite { FAVORITE_MARK } else { PLAIN_MARK };
        format!("{mark} {}", truncate_width(&movie.title, width.saturating_sub(2)))
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let catalog = &state.catalog;

        if catalog.movies.is_empty() {
            let message = if catalog.is_loading {
                "Loading..."
            } else {
                "No movies."
            };
            frame.render_widget(
                Paragraph::new(message).style(styles.get_style(Mode::MovieList, "hint")),
                area,
            );
            return;
        }

        let width = area.width as usize;
        let favorite_style = styles.get_style(Mode::MovieList, "favorite");
        let items: Vec<ListItem> = catalog
            .movies
            .iter()
            .map(|movie| {
                let is_favorite = state.is_favorite(movie.id);
                let item = ListItem::new(Self::row(movie, is_favorite, width));
                if is_favorite {
                    item.style(favorite_style)
                } else {
                    item
                }
            })
            .collect();

        let title = if catalog.is_loading {
            format!(" {} (refreshing) ", catalog.category.title())
        } else {
            format!(" {} ", catalog.category.title())
        };
        let list = List::new(items)
            .block(Block::default().borders(Borders::TOP).title(title))
            .highlight_style(styles.get_style(Mode::MovieList, "selected"));

        let mut list_state = ListState::default().with_selected(catalog.selection.selected_index());
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}
