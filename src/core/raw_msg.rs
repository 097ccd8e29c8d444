use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::domain::{
    category::ListCategory,
    movie::{MovieDetail, MovieId, MovieSummary},
};

/// Raw messages from external sources (terminal, TMDB worker, system)
/// These represent unprocessed external events that need to be translated to domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,

    // User input (raw keyboard events)
    Key(KeyEvent),

    // TMDB responses
    MoviesFetched {
        category: ListCategory,
        movies: Vec<MovieSummary>,
    },
    MoviesFetchFailed {
        category: ListCategory,
        error: String,
    },
    DetailsFetched(Box<MovieDetail>),
    DetailsFetchFailed {
        movie_id: MovieId,
        error: String,
    },

    // System status
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_raw_msg_frequent_detection() {
        assert!(RawMsg::Tick.is_frequent());
        assert!(RawMsg::Render.is_frequent());
        assert!(!RawMsg::Quit.is_frequent());
        assert!(!RawMsg::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)).is_frequent());
        assert!(!RawMsg::MoviesFetched {
            category: ListCategory::Upcoming,
            movies: vec![],
        }
        .is_frequent());
    }

    #[test]
    fn test_raw_msg_equality() {
        assert_eq!(RawMsg::Quit, RawMsg::Quit);
        assert_eq!(RawMsg::Tick, RawMsg::Tick);
        assert_ne!(RawMsg::Tick, RawMsg::Render);
    }

    #[test]
    fn test_raw_msg_serialization() -> serde_json::Result<()> {
        let msg = RawMsg::DetailsFetchFailed {
            movie_id: 42,
            error: "404".to_string(),
        };
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: RawMsg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);
        Ok(())
    }
}
