//! Status line: the last status message, or key hints for the current screen

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{AppState, Screen},
    presentation::config::keybindings::Action,
};

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    /// Hints for the actions that matter on the current screen, e.g. `f:favorite q:quit`
    pub fn hints(&self, state: &AppState) -> String {
        let actions: &[(Action, &str)] = match state.current_screen() {
            Screen::MovieList => &[
                (Action::OpenSelected, "open"),
                (Action::ToggleFavorite, "favorite"),
                (Action::Refresh, "refresh"),
                (Action::Quit, "quit"),
            ],
            Screen::MovieDetails(_) => &[
                (Action::OpenTrailer, "trailer"),
                (Action::ToggleFavorite, "favorite"),
                (Action::Back, "back"),
            ],
            Screen::Favorites => &[
                (Action::OpenSelected, "open"),
                (Action::RemoveFavorite, "remove"),
                (Action::Back, "back"),
            ],
        };

        let mode = state.current_screen().mode();
        let keybindings = &state.config.config.keybindings;
        actions
            .iter()
            .filter_map(|(action, label)| {
                keybindings
                    .hint_for(mode, action)
                    .map(|key| format!("{key}:{label}"))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let mode = state.current_screen().mode();
        let styles = &state.config.config.styles;

        let line = match &state.system.status_message {
            Some(message) => Line::styled(message.clone(), styles.get_style(mode, "status")),
            None => Line::styled(self.hints(state), styles.get_style(mode, "hint")),
        };
        frame.render_widget(Clear, area);
        frame.render_widget(Paragraph::new(line), area);
    }
}
