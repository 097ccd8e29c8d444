use ratatui::{prelude::*, widgets::*};

use crate::core::state::{AppState, Screen};

/// Single title line naming the current screen
#[derive(Debug, Clone, Default)]
pub struct HeaderComponent;

impl HeaderComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn title(&self, state: &AppState) -> String {
        match state.current_screen() {
            Screen::MovieList => state.catalog.category.title(),
            Screen::MovieDetails(id) => state
                .details
                .detail
                .as_ref()
                .filter(|d| d.id == *id)
                .map(|d| d.title.clone())
                .or_else(|| state.catalog.find(*id).map(|m| m.title.clone()))
                .or_else(|| state.favorites.get(*id).map(|m| m.title.clone()))
                .unwrap_or_else(|| "Movie Details".to_string()),
            Screen::Favorites => "Favorites".to_string(),
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let mode = state.current_screen().mode();
        let styles = &state.config.config.styles;

        let mut spans = vec![
            Span::styled(" marquee ", styles.get_style(mode, "hint")),
            Span::styled(self.title(state), styles.get_style(mode, "title")),
        ];
        if state.navigation.depth() > 1 {
            spans.push(Span::styled(
                format!("  ({} deep)", state.navigation.depth()),
                styles.get_style(mode, "hint"),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
