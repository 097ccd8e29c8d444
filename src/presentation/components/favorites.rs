use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState, domain::text::truncate_width, presentation::config::keybindings::Mode,
};

/// Movies favorited this session
#[derive(Debug, Clone, Default)]
pub struct FavoritesComponent;

impl FavoritesComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let favorites = &state.favorites;

        if favorites.is_empty() {
            frame.render_widget(
                Paragraph::new("No favorites yet.").style(styles.get_style(Mode::Favorites, "empty")),
                area,
            );
            return;
        }

        let width = (area.width as usize).saturating_sub(2);
        let items: Vec<ListItem> = favorites
            .items()
            .iter()
            .map(|movie| ListItem::new(format!("♥ {}", truncate_width(&movie.title, width))))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .title(format!(" Favorites ({}) ", favorites.len())),
            )
            .style(styles.get_style(Mode::Favorites, "favorite"))
            .highlight_style(styles.get_style(Mode::Favorites, "selected"));

        let mut list_state = ListState::default().with_selected(favorites.selection.selected_index());
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::movie::MovieSummary, presentation::components::test_support::*};

    #[test]
    fn test_empty_message() {
        let state = state_with_defaults();
        let lines = render_lines(30, 3, |f| FavoritesComponent::new().view(&state, f, f.area()));
        assert!(contains(&lines, "No favorites yet."));
    }

    #[test]
    fn test_lists_favorites_in_insertion_order() {
        let mut state = state_with_defaults();
        let listed = vec![
            MovieSummary::new(1, "Past Lives"),
            MovieSummary::new(2, "Aftersun"),
        ];
        state.favorites.toggle(2, &listed);
        state.favorites.toggle(1, &listed);

        let lines = render_lines(30, 4, |f| FavoritesComponent::new().view(&state, f, f.area()));

        assert!(contains(&lines, "Favorites (2)"));
        assert!(lines[1].contains("♥ Aftersun"));
        assert!(lines[2].contains("♥ Past Lives"));
    }
}
