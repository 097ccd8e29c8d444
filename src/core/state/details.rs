use crate::{
    core::{cmd::Cmd, msg::details::DetailsMsg},
    domain::movie::{MovieDetail, MovieId},
};

/// Movie details screen state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailsState {
    pub movie_id: Option<MovieId>,
    pub detail: Option<MovieDetail>,
    pub scroll: u16,
}

impl DetailsState {
    /// Enter the loading state for `movie_id` and request its details
    pub fn begin_fetch(&mut self, movie_id: MovieId) -> Cmd {
        self.movie_id = Some(movie_id);
        self.detail = None;
        self.scroll = 0;
        Cmd::FetchMovieDetails { movie_id }
    }

    pub fn is_loading(&self) -> bool {
        self.movie_id.is_some() && self.detail.is_none()
    }

    pub fn update(&mut self, msg: DetailsMsg) -> Vec<Cmd> {
        match msg {
            DetailsMsg::Loaded(detail) => {
                if self.movie_id != Some(detail.id) {
                    log::debug!("Dropping details for movie {}", detail.id);
                    return vec![];
                }
                self.detail = Some(*detail);
            }
            DetailsMsg::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            DetailsMsg::ScrollDown => {
                if self.detail.is_some() {
                    self.scroll = self.scroll.saturating_add(1);
                }
            }
            DetailsMsg::ScrollToTop => self.scroll = 0,
            // needs the status bar, see core::update
            DetailsMsg::OpenTrailer => {}
        }
        vec![]
    }
}
