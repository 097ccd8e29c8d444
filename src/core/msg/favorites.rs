use serde::{Deserialize, Serialize};

use crate::domain::movie::MovieId;

/// Messages specific to FavoritesState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FavoritesMsg {
    /// Toggle the movie with this id; the summary is looked up in the listed movies
    Toggle(MovieId),
    /// Toggle whatever is selected on the movie list screen
    ToggleSelected,
    Remove(MovieId),
    RemoveSelected,
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
}
