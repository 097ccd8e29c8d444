use serde::{Deserialize, Serialize};

use crate::domain::{category::ListCategory, movie::MovieId};

/// Screen transitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavMsg {
    /// Show the movie list for a category (footer buttons)
    ShowCategory(ListCategory),
    /// Refetch the active category
    Refresh,
    ShowFavorites,
    ShowDetails(MovieId),
    /// Open the details of the selected entry on the current list screen
    OpenSelected,
    Back,
}
