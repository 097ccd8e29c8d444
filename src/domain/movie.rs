use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// TMDB movie identifier
pub type MovieId = u64;

pub const POSTER_SIZE: &str = "w500";
pub const PROFILE_SIZE: &str = "w200";
const YOUTUBE_WATCH: &str = "https://www.youtube.com/watch?v=";

/// A movie as listed by a catalog endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl MovieSummary {
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            poster_path: None,
        }
    }

    pub fn poster_url(&self, image_base_url: &str) -> Option<String> {
        image_url(image_base_url, POSTER_SIZE, self.poster_path.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub character: String,
    #[serde(default)]
    pub profile_path: Option<String>,
}

impl CastMember {
    pub fn photo_url(&self, image_base_url: &str) -> Option<String> {
        image_url(image_base_url, PROFILE_SIZE, self.profile_path.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub site: String,
    #[serde(default, rename = "type")]
    pub video_type: String,
}

/// Full details of a single movie, including cast and videos.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: MovieId,
    pub title: String,
    pub poster_path: Option<String>,
    pub overview: String,
    pub release_date: Option<String>,
    pub genres: Vec<Genre>,
    pub runtime: Option<u32>,
    pub cast: Vec<CastMember>,
    pub videos: Vec<Video>,
}

impl MovieDetail {
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            title: self.title.clone(),
            poster_path: self.poster_path.clone(),
        }
    }

    pub fn poster_url(&self, image_base_url: &str) -> Option<String> {
        image_url(image_base_url, POSTER_SIZE, self.poster_path.as_deref())
    }

    /// Year of the release date, if the date is present and well-formed.
    pub fn release_year(&self) -> Option<i32> {
        let date = self.release_date.as_deref()?;
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .ok()
            .map(|d| d.year())
    }

    /// Genre names joined for display, `None` when there are no genres.
    pub fn genre_line(&self) -> Option<String> {
        if self.genres.is_empty() {
            return None;
        }
        Some(
            self.genres
                .iter()
                .map(|g| g.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        )
    }

    pub fn runtime_line(&self) -> Option<String> {
        match self.runtime {
            Some(minutes) if minutes > 0 => Some(format!("{minutes} mins")),
            _ => None,
        }
    }

    /// The first listed video is treated as the trailer.
    pub fn trailer(&self) -> Option<&Video> {
        self.videos.first()
    }

    pub fn trailer_url(&self) -> Option<String> {
        self.trailer().map(|v| format!("{YOUTUBE_WATCH}{}", v.key))
    }
}

fn image_url(base: &str, size: &str, path: Option<&str>) -> Option<String> {
    let path = path?.trim_start_matches('/');
    if path.is_empty() {
        return None;
    }
    Some(format!("{}/{size}/{path}", base.trim_end_matches('/')))
}
