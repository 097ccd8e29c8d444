use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{AppState, Screen},
    domain::category::ListCategory,
    presentation::config::keybindings::Mode,
};

/// Bottom tab bar: the list categories plus favorites
#[derive(Debug, Clone, Default)]
pub struct FooterComponent;

impl FooterComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn titles() -> Vec<String> {
        ListCategory::FOOTER
            .iter()
            .map(ListCategory::title)
            .chain(std::iter::once("Favorites".to_string()))
            .collect()
    }

    /// Tab to highlight for the current screen. Details keep the tab they
    /// were opened from.
    pub fn active_index(state: &AppState) -> Option<usize> {
        let on_favorites = state
            .navigation
            .stack()
            .iter()
            .rev()
            .find(|s| !matches!(s, Screen::MovieDetails(_)))
            .is_some_and(|s| *s == Screen::Favorites);
        if on_favorites {
            return Some(ListCategory::FOOTER.len());
        }
        ListCategory::FOOTER
            .iter()
            .position(|c| *c == state.catalog.category)
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let tabs = Tabs::new(Self::titles())
            .style(styles.get_style(Mode::Global, "tab"))
            .highlight_style(styles.get_style(Mode::Global, "tab_active"))
            .select(Self::active_index(state))
            .divider("|");
        frame.render_widget(tabs, area);
    }
}
