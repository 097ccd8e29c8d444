use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{
            catalog::CatalogMsg, details::DetailsMsg, favorites::FavoritesMsg,
            navigation::NavMsg, system::SystemMsg, Msg,
        },
        raw_msg::RawMsg,
        state::{AppState, Screen},
    },
    domain::category::ListCategory,
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on the current screen and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        // TMDB responses
        RawMsg::MoviesFetched { category, movies } => {
            vec![Msg::Catalog(CatalogMsg::MoviesLoaded { category, movies })]
        }
        RawMsg::DetailsFetched(detail) => vec![Msg::Details(DetailsMsg::Loaded(detail))],
        RawMsg::MoviesFetchFailed { category, error } => {
            vec![Msg::System(SystemMsg::ReportError(format!(
                "Failed to fetch {} movies: {error}",
                category.path()
            )))]
        }
        RawMsg::DetailsFetchFailed { movie_id, error } => {
            vec![Msg::System(SystemMsg::ReportError(format!(
                "Failed to fetch details for movie {movie_id}: {error}"
            )))]
        }
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ReportError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on the current screen
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    let mode = state.current_screen().mode();
    match state.config.config.keybindings.action_for(mode, &[key]) {
        Some(action) => translate_action_to_msg(action, state),
        None => vec![],
    }
}

fn translate_action_to_msg(action: &Action, state: &AppState) -> Vec<Msg> {
    let screen = state.current_screen();
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::Back => vec![Msg::Nav(NavMsg::Back)],
        Action::Refresh => vec![Msg::Nav(NavMsg::Refresh)],

        Action::ScrollUp => match screen {
            Screen::MovieList => vec![Msg::Catalog(CatalogMsg::SelectPrevious)],
            Screen::Favorites => vec![Msg::Favorites(FavoritesMsg::SelectPrevious)],
            Screen::MovieDetails(_) => vec![Msg::Details(DetailsMsg::ScrollUp)],
        },
        Action::ScrollDown => match screen {
            Screen::MovieList => vec![Msg::Catalog(CatalogMsg::SelectNext)],
            Screen::Favorites => vec![Msg::Favorites(FavoritesMsg::SelectNext)],
            Screen::MovieDetails(_) => vec![Msg::Details(DetailsMsg::ScrollDown)],
        },
        Action::ScrollToTop => match screen {
            Screen::MovieList => vec![Msg::Catalog(CatalogMsg::SelectFirst)],
            Screen::Favorites => vec![Msg::Favorites(FavoritesMsg::SelectFirst)],
            Screen::MovieDetails(_) => vec![Msg::Details(DetailsMsg::ScrollToTop)],
        },
        Action::ScrollToBottom => match screen {
            Screen::MovieList => vec![Msg::Catalog(CatalogMsg::SelectLast)],
            Screen::Favorites => vec![Msg::Favorites(FavoritesMsg::SelectLast)],
            Screen::MovieDetails(_) => vec![],
        },

        Action::OpenSelected => match screen {
            Screen::MovieDetails(_) => vec![],
            _ => vec![Msg::Nav(NavMsg::OpenSelected)],
        },
        Action::ToggleFavorite => match screen {
            Screen::MovieList => vec![Msg::Favorites(FavoritesMsg::ToggleSelected)],
            Screen::MovieDetails(id) => vec![Msg::Favorites(FavoritesMsg::Toggle(*id))],
            Screen::Favorites => vec![Msg::Favorites(FavoritesMsg::RemoveSelected)],
        },
        Action::RemoveFavorite => match screen {
            Screen::Favorites => vec![Msg::Favorites(FavoritesMsg::RemoveSelected)],
            _ => vec![],
        },

        Action::ShowNowPlaying => vec![Msg::Nav(NavMsg::ShowCategory(ListCategory::NowPlaying))],
        Action::ShowUpcoming => vec![Msg::Nav(NavMsg::ShowCategory(ListCategory::Upcoming))],
        Action::ShowTopRated => vec![Msg::Nav(NavMsg::ShowCategory(ListCategory::TopRated))],
        Action::ShowFavorites => vec![Msg::Nav(NavMsg::ShowFavorites)],

        Action::OpenTrailer => match screen {
            Screen::MovieDetails(_) => vec![Msg::Details(DetailsMsg::OpenTrailer)],
            _ => vec![],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{
        domain::movie::{MovieDetail, MovieSummary},
        infrastructure::config::Config,
        presentation::config::keybindings::KeyBindings,
    };

    const BINDINGS: &str = r#"{
        "Global": {
            "<q>": "Quit",
            "<esc>": "Back",
            "<j>": "ScrollDown",
            "<k>": "ScrollUp",
            "<g>": "ScrollToTop",
            "<shift-g>": "ScrollToBottom",
            "<enter>": "OpenSelected",
            "<1>": "ShowNowPlaying",
            "<2>": "ShowUpcoming",
            "<3>": "ShowTopRated",
            "<4>": "ShowFavorites",
            "<r>": "Refresh",
        },
        "MovieList": { "<f>": "ToggleFavorite" },
        "MovieDetails": { "<f>": "ToggleFavorite", "<t>": "OpenTrailer" },
        "Favorites": { "<d>": "RemoveFavorite", "<q>": "Back" },
    }"#;

    fn create_test_state() -> AppState {
        let mut config = Config::default();
        config.keybindings = json5::from_str::<KeyBindings>(BINDINGS).unwrap();
        AppState::new_with_config(ListCategory::NowPlaying, config)
    }

    fn state_on(screen: Screen) -> AppState {
        let mut state = create_test_state();
        state.navigation.navigate(screen);
        state
    }

    fn key(c: char) -> RawMsg {
        RawMsg::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn test_translate_system_events() {
        let state = create_test_state();

        assert_eq!(
            translate_raw_to_domain(RawMsg::Quit, &state),
            vec![Msg::System(SystemMsg::Quit)]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Suspend, &state),
            vec![Msg::System(SystemMsg::Suspend)]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Resize(100, 50), &state),
            vec![Msg::System(SystemMsg::Resize(100, 50))]
        );
        assert!(translate_raw_to_domain(RawMsg::Tick, &state).is_empty());
        assert!(translate_raw_to_domain(RawMsg::Render, &state).is_empty());
    }

    #[test]
    fn test_ctrl_c_quits_without_bindings() {
        let state = AppState::default();
        let result = translate_raw_to_domain(
            RawMsg::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            &state,
        );
        assert_eq!(result, vec![Msg::System(SystemMsg::Quit)]);

        let result = translate_raw_to_domain(
            RawMsg::Key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL)),
            &state,
        );
        assert_eq!(result, vec![Msg::System(SystemMsg::Suspend)]);
    }

    #[rstest]
    #[case(Screen::MovieList, 'j', Msg::Catalog(CatalogMsg::SelectNext))]
    #[case(Screen::MovieList, 'k', Msg::Catalog(CatalogMsg::SelectPrevious))]
    #[case(Screen::MovieList, 'g', Msg::Catalog(CatalogMsg::SelectFirst))]
    #[case(Screen::Favorites, 'j', Msg::Favorites(FavoritesMsg::SelectNext))]
    #[case(Screen::Favorites, 'g', Msg::Favorites(FavoritesMsg::SelectFirst))]
    #[case(Screen::MovieDetails(7), 'j', Msg::Details(DetailsMsg::ScrollDown))]
    #[case(Screen::MovieDetails(7), 'k', Msg::Details(DetailsMsg::ScrollUp))]
    #[case(Screen::MovieDetails(7), 'g', Msg::Details(DetailsMsg::ScrollToTop))]
    fn test_movement_depends_on_screen(
        #[case] screen: Screen,
        #[case] c: char,
        #[case] expected: Msg,
    ) {
        let state = state_on(screen);
        assert_eq!(translate_raw_to_domain(key(c), &state), vec![expected]);
    }

    #[test]
    fn test_shift_g_selects_last() {
        let state = create_test_state();
        let result = translate_raw_to_domain(
            RawMsg::Key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            &state,
        );
        assert_eq!(result, vec![Msg::Catalog(CatalogMsg::SelectLast)]);
    }

    #[rstest]
    #[case('1', ListCategory::NowPlaying)]
    #[case('2', ListCategory::Upcoming)]
    #[case('3', ListCategory::TopRated)]
    fn test_footer_keys_switch_category(#[case] c: char, #[case] category: ListCategory) {
        let state = state_on(Screen::Favorites);
        assert_eq!(
            translate_raw_to_domain(key(c), &state),
            vec![Msg::Nav(NavMsg::ShowCategory(category))]
        );
    }

    #[test]
    fn test_toggle_favorite_per_screen() {
        let list = create_test_state();
        assert_eq!(
            translate_raw_to_domain(key('f'), &list),
            vec![Msg::Favorites(FavoritesMsg::ToggleSelected)]
        );

        let details = state_on(Screen::MovieDetails(42));
        assert_eq!(
            translate_raw_to_domain(key('f'), &details),
            vec![Msg::Favorites(FavoritesMsg::Toggle(42))]
        );

        let favorites = state_on(Screen::Favorites);
        assert_eq!(
            translate_raw_to_domain(key('d'), &favorites),
            vec![Msg::Favorites(FavoritesMsg::RemoveSelected)]
        );
        // 'f' is not bound on the favorites screen
        assert!(translate_raw_to_domain(key('f'), &favorites).is_empty());
    }

    #[test]
    fn test_mode_binding_shadows_global() {
        let favorites = state_on(Screen::Favorites);
        assert_eq!(
            translate_raw_to_domain(key('q'), &favorites),
            vec![Msg::Nav(NavMsg::Back)]
        );

        let list = create_test_state();
        assert_eq!(
            translate_raw_to_domain(key('q'), &list),
            vec![Msg::System(SystemMsg::Quit)]
        );
    }

    #[test]
    fn test_open_trailer_only_on_details() {
        let details = state_on(Screen::MovieDetails(1));
        assert_eq!(
            translate_raw_to_domain(key('t'), &details),
            vec![Msg::Details(DetailsMsg::OpenTrailer)]
        );

        let list = create_test_state();
        assert!(translate_raw_to_domain(key('t'), &list).is_empty());
    }

    #[test]
    fn test_enter_opens_selected_outside_details() {
        let enter = RawMsg::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        let list = create_test_state();
        assert_eq!(
            translate_raw_to_domain(enter.clone(), &list),
            vec![Msg::Nav(NavMsg::OpenSelected)]
        );

        let details = state_on(Screen::MovieDetails(1));
        assert!(translate_raw_to_domain(enter, &details).is_empty());
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let state = create_test_state();
        assert!(translate_raw_to_domain(key('x'), &state).is_empty());
    }

    #[test]
    fn test_translate_fetch_results() {
        let state = create_test_state();
        let movies = vec![MovieSummary::new(1, "Heat")];

        let result = translate_raw_to_domain(
            RawMsg::MoviesFetched {
                category: ListCategory::Upcoming,
                movies: movies.clone(),
            },
            &state,
        );
        assert_eq!(
            result,
            vec![Msg::Catalog(CatalogMsg::MoviesLoaded {
                category: ListCategory::Upcoming,
                movies,
            })]
        );

        let detail = MovieDetail {
            id: 1,
            title: "Heat".to_string(),
            ..Default::default()
        };
        let result =
            translate_raw_to_domain(RawMsg::DetailsFetched(Box::new(detail.clone())), &state);
        assert_eq!(
            result,
            vec![Msg::Details(DetailsMsg::Loaded(Box::new(detail)))]
        );
    }

    #[test]
    fn test_translate_fetch_failures_to_error_reports() {
        let state = create_test_state();

        let result = translate_raw_to_domain(
            RawMsg::MoviesFetchFailed {
                category: ListCategory::TopRated,
                error: "HTTP 500".to_string(),
            },
            &state,
        );
        assert_eq!(
            result,
            vec![Msg::System(SystemMsg::ReportError(
                "Failed to fetch top_rated movies: HTTP 500".to_string()
            ))]
        );

        let result = translate_raw_to_domain(
            RawMsg::DetailsFetchFailed {
                movie_id: 9,
                error: "timeout".to_string(),
            },
            &state,
        );
        assert_eq!(
            result,
            vec![Msg::System(SystemMsg::ReportError(
                "Failed to fetch details for movie 9: timeout".to_string()
            ))]
        );
    }
}
