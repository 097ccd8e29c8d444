use crate::{
    core::{
        cmd::Cmd,
        msg::{
            details::DetailsMsg, favorites::FavoritesMsg, navigation::NavMsg, system::SystemMsg,
            Msg,
        },
        state::{AppState, Screen},
    },
    domain::movie::MovieId,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    let commands = match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => state.system.update(system_msg),

        // Screen transitions touch several states at once
        Msg::Nav(nav_msg) => update_navigation(nav_msg, &mut state),

        // Movie list messages (delegated to CatalogState)
        Msg::Catalog(catalog_msg) => state.catalog.update(catalog_msg),

        Msg::Details(DetailsMsg::OpenTrailer) => open_trailer(&mut state),
        Msg::Details(details_msg) => state.details.update(details_msg),

        Msg::Favorites(FavoritesMsg::ToggleSelected) => {
            match state.catalog.selected_movie().map(|movie| movie.id) {
                Some(id) => toggle_favorite(id, &mut state),
                None => vec![],
            }
        }
        Msg::Favorites(FavoritesMsg::Toggle(id)) => toggle_favorite(id, &mut state),
        Msg::Favorites(favorites_msg) => state
            .favorites
            .update(favorites_msg, &state.catalog.movies),
    };
    (state, commands)
}

fn update_navigation(msg: NavMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        NavMsg::ShowCategory(category) => {
            state.navigation.navigate(Screen::MovieList);
            state.system.status_message = None;
            vec![state.catalog.begin_fetch(category)]
        }

        NavMsg::Refresh => match state.current_screen().clone() {
            Screen::MovieList => {
                let category = state.catalog.category.clone();
                vec![state.catalog.begin_fetch(category)]
            }
            Screen::MovieDetails(id) => vec![state.details.begin_fetch(id)],
            Screen::Favorites => vec![],
        },

        NavMsg::ShowFavorites => {
            state.navigation.navigate(Screen::Favorites);
            if state.favorites.selection.selected_index().is_none() {
                state.favorites.selection.reset(state.favorites.len());
            }
            vec![]
        }

        NavMsg::ShowDetails(movie_id) => {
            state.navigation.navigate(Screen::MovieDetails(movie_id));
            vec![state.details.begin_fetch(movie_id)]
        }

        NavMsg::OpenSelected => {
            let selected = match state.current_screen() {
                Screen::MovieList => state.catalog.selected_movie(),
                Screen::Favorites => state.favorites.selected(),
                Screen::MovieDetails(_) => None,
            };
            match selected.map(|movie| movie.id) {
                Some(id) => update_navigation(NavMsg::ShowDetails(id), state),
                None => vec![],
            }
        }

        NavMsg::Back => {
            state.navigation.back();
            vec![]
        }
    }
}

fn toggle_favorite(id: MovieId, state: &mut AppState) -> Vec<Cmd> {
    let title = state
        .favorites
        .get(id)
        .or_else(|| state.catalog.find(id))
        .map(|movie| movie.title.clone())
        .or_else(|| {
            state
                .details
                .detail
                .as_ref()
                .filter(|detail| detail.id == id)
                .map(|detail| detail.title.clone())
        });

    // a movie opened from favorites may no longer be listed
    let shown = state
        .details
        .detail
        .as_ref()
        .filter(|detail| detail.id == id && state.catalog.find(id).is_none())
        .map(|detail| detail.summary());
    let changed = match shown {
        Some(summary) => state.favorites.toggle(id, std::slice::from_ref(&summary)),
        None => state.favorites.toggle(id, &state.catalog.movies),
    };
    if !changed {
        return vec![];
    }

    if let Some(title) = title {
        let message = if state.favorites.contains(id) {
            format!("[Favorited] {title}")
        } else {
            format!("[Unfavorited] {title}")
        };
        state.system.update(SystemMsg::UpdateStatusMessage(message));
    }
    vec![]
}

fn open_trailer(state: &mut AppState) -> Vec<Cmd> {
    let Some(detail) = &state.details.detail else {
        return vec![];
    };
    match detail.trailer_url() {
        Some(url) => {
            state.system.status_message = Some(format!("[Trailer] {url}"));
            vec![Cmd::OpenUrl { url }]
        }
        None => {
            state.system.status_message = Some("No trailer available".to_string());
            vec![]
        }
    }
}
