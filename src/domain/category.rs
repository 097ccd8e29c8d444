use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A TMDB movie list, addressed by its path segment (`/movie/{path}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ListCategory {
    #[default]
    NowPlaying,
    Upcoming,
    TopRated,
    Other(String),
}

impl ListCategory {
    /// Categories offered in the footer, in display order.
    pub const FOOTER: [ListCategory; 3] = [
        ListCategory::Upcoming,
        ListCategory::TopRated,
        ListCategory::NowPlaying,
    ];

    pub fn path(&self) -> &str {
        match self {
            ListCategory::NowPlaying => "now_playing",
            ListCategory::Upcoming => "upcoming",
            ListCategory::TopRated => "top_rated",
            ListCategory::Other(path) => path,
        }
    }

    /// Header title for the list screen. Unknown lists are shown upper-cased.
    pub fn title(&self) -> String {
        match self {
            ListCategory::NowPlaying => "Now Playing".to_string(),
            ListCategory::Upcoming => "Upcoming".to_string(),
            ListCategory::TopRated => "Top Rated".to_string(),
            ListCategory::Other(path) => path.to_uppercase(),
        }
    }
}

impl fmt::Display for ListCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for ListCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "" => Err("list category must not be empty".to_string()),
            "now_playing" => Ok(ListCategory::NowPlaying),
            "upcoming" => Ok(ListCategory::Upcoming),
            "top_rated" => Ok(ListCategory::TopRated),
            other
                if other
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_') =>
            {
                Ok(ListCategory::Other(other.to_string()))
            }
            other => Err(format!("invalid list category: {other}")),
        }
    }
}

impl TryFrom<String> for ListCategory {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ListCategory> for String {
    fn from(value: ListCategory) -> Self {
        value.path().to_string()
    }
}
