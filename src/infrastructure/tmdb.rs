use async_trait::async_trait;
use color_eyre::eyre::{eyre, Result, WrapErr};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::{
    category::ListCategory,
    movie::{CastMember, Genre, MovieDetail, MovieId, MovieSummary, Video},
};

pub const TMDB_BASE: &str = "https://api.themoviedb.org/3";

/// Read access to the TMDB movie catalog
#[async_trait]
pub trait TmdbApi: Send + Sync {
    async fn fetch_movies(&self, category: &ListCategory) -> Result<Vec<MovieSummary>>;
    async fn fetch_movie_details(&self, movie_id: MovieId) -> Result<MovieDetail>;
}

#[derive(Clone, Debug)]
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl TmdbClient {
    pub fn new(api_key: impl Into<SecretString>) -> Self {
        Self::with_base_url(api_key, TMDB_BASE)
    }

    pub fn with_base_url(
        api_key: impl Into<SecretString>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base}/{path}` with the api key appended. Errors name the path only.
    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}/{path}", self.base_url);
        let res = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.expose_secret())])
            .query(query)
            .send()
            .await
            .map_err(|e| eyre!("request to /{path} failed: {}", e.without_url()))?;
        let status = res.status();
        let text = res
            .text()
            .await
            .map_err(|e| eyre!("reading body of /{path} failed: {}", e.without_url()))?;
        if !status.is_success() {
            return Err(eyre!("/{path} -> HTTP {}", status.as_u16()));
        }
        serde_json::from_str(&text).wrap_err_with(|| format!("JSON parse failed for /{path}"))
    }
}

#[async_trait]
impl TmdbApi for TmdbClient {
    async fn fetch_movies(&self, category: &ListCategory) -> Result<Vec<MovieSummary>> {
        #[derive(Deserialize)]
        struct ListResponse {
            results: Vec<MovieSummary>,
        }

        let path = format!("movie/{}", category.path());
        let data: ListResponse = self.get_json(&path, &[]).await?;
        Ok(data.results)
    }

    async fn fetch_movie_details(&self, movie_id: MovieId) -> Result<MovieDetail> {
        let path = format!("movie/{movie_id}");
        let raw: RawMovieDetail = self
            .get_json(&path, &[("append_to_response", "credits,videos")])
            .await?;
        Ok(raw.into())
    }
}

#[derive(Debug, Deserialize)]
struct RawMovieDetail {
    id: MovieId,
    title: String,
    #[serde(default)]
    poster_path: Option<String>,
    #[serde(default)]
    overview: Option<String>,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    genres: Vec<Genre>,
    #[serde(default)]
    runtime: Option<u32>,
    #[serde(default)]
    credits: Option<Credits>,
    #[serde(default)]
    videos: Option<Videos>,
}

#[derive(Debug, Deserialize)]
struct Credits {
    #[serde(default)]
    cast: Vec<CastMember>,
}

#[derive(Debug, Deserialize)]
struct Videos {
    #[serde(default)]
    results: Vec<Video>,
}

impl From<RawMovieDetail> for MovieDetail {
    fn from(raw: RawMovieDetail) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            poster_path: raw.poster_path,
            overview: raw.overview.unwrap_or_default(),
            release_date: raw.release_date.filter(|d| !d.is_empty()),
            genres: raw.genres,
            runtime: raw.runtime,
            cast: raw.credits.map(|c| c.cast).unwrap_or_default(),
            videos: raw.videos.map(|v| v.results).unwrap_or_default(),
        }
    }
}
