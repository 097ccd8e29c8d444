use serde::{Deserialize, Serialize};

use crate::domain::{category::ListCategory, movie::MovieSummary};

/// Messages specific to CatalogState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogMsg {
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
    MoviesLoaded {
        category: ListCategory,
        movies: Vec<MovieSummary>,
    },
}
