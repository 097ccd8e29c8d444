use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use marquee::{
    domain::category::ListCategory,
    infrastructure::tmdb::{TmdbApi, TmdbClient},
};

const KEY: &str = "secret-test-key";

async fn server_with(route: &str, response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .and(query_param("api_key", KEY))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_fetch_movies_parses_results() {
    let server = server_with(
        "/movie/upcoming",
        ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "results": [
                { "id": 1022789, "title": "Inside Out 2", "poster_path": "/vpnVM9B6NMmQpWeZvzLvDESb2QY.jpg", "vote_average": 7.6 },
                { "id": 786892, "title": "Furiosa: A Mad Max Saga", "poster_path": null }
            ],
            "total_pages": 1
        })),
    )
    .await;

    let client = TmdbClient::with_base_url(KEY, server.uri());
    let movies = client
        .fetch_movies(&ListCategory::Upcoming)
        .await
        .expect("list parses");

    let titles: Vec<&str> = movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Inside Out 2", "Furiosa: A Mad Max Saga"]);
    assert_eq!(
        movies[0].poster_path.as_deref(),
        Some("/vpnVM9B6NMmQpWeZvzLvDESb2QY.jpg")
    );
    assert_eq!(movies[1].poster_path, None);
}

#[tokio::test]
async fn test_fetch_movies_for_other_category_path() {
    let server = server_with(
        "/movie/popular",
        ResponseTemplate::new(200).set_body_json(json!({ "results": [] })),
    )
    .await;

    let client = TmdbClient::with_base_url(KEY, format!("{}/", server.uri()));
    let movies = client
        .fetch_movies(&ListCategory::Other("popular".to_string()))
        .await
        .expect("empty list parses");
    assert!(movies.is_empty());
}

#[tokio::test]
async fn test_fetch_details_includes_credits_and_videos() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/603"))
        .and(query_param("api_key", KEY))
        .and(query_param("append_to_response", "credits,videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 603,
            "title": "The Matrix",
            "overview": "Set in the 22nd century.",
            "release_date": "1999-03-30",
            "runtime": 136,
            "poster_path": "/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg",
            "genres": [{ "id": 28, "name": "Action" }, { "id": 878, "name": "Science Fiction" }],
            "credits": {
                "cast": [
                    { "id": 6384, "name": "Keanu Reeves", "character": "Neo", "profile_path": "/4D0PpNI0kmP58hgrwGC3wCjxhnm.jpg" },
                    { "id": 2975, "name": "Laurence Fishburne", "character": "Morpheus" }
                ]
            },
            "videos": {
                "results": [
                    { "key": "vKQi3bBA1y8", "name": "Trailer", "site": "YouTube", "type": "Trailer" }
                ]
            }
        })))
        .mount(&server)
        .await;

    let client = TmdbClient::with_base_url(KEY, server.uri());
    let detail = client.fetch_movie_details(603).await.expect("detail parses");

    assert_eq!(detail.title, "The Matrix");
    assert_eq!(detail.release_year(), Some(1999));
    assert_eq!(detail.runtime, Some(136));
    assert_eq!(
        detail.genre_line().as_deref(),
        Some("Action, Science Fiction")
    );
    assert_eq!(detail.cast.len(), 2);
    assert_eq!(detail.cast[1].character, "Morpheus");
    assert_eq!(
        detail.trailer_url().as_deref(),
        Some("https://www.youtube.com/watch?v=vKQi3bBA1y8")
    );
}

#[tokio::test]
async fn test_http_error_names_path_without_key() {
    let server = server_with(
        "/movie/now_playing",
        ResponseTemplate::new(401).set_body_json(json!({
            "status_code": 7,
            "status_message": "Invalid API key: You must be granted a valid key."
        })),
    )
    .await;

    let client = TmdbClient::with_base_url(KEY, server.uri());
    let err = client
        .fetch_movies(&ListCategory::NowPlaying)
        .await
        .expect_err("401 is an error");
    let message = format!("{err:#}");

    assert!(message.contains("/movie/now_playing -> HTTP 401"), "{message}");
    assert!(!message.contains(KEY));
}

#[tokio::test]
async fn test_malformed_body_is_a_parse_error() {
    let server = server_with(
        "/movie/42",
        ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
    )
    .await;

    let client = TmdbClient::with_base_url(KEY, server.uri());
    let err = client
        .fetch_movie_details(42)
        .await
        .expect_err("html is not a movie");

    assert!(format!("{err:#}").contains("JSON parse failed for /movie/42"));
}

#[tokio::test]
async fn test_connection_error_does_not_leak_key() {
    // nothing listens on the discard port
    let client = TmdbClient::with_base_url(KEY, "http://127.0.0.1:9");
    let err = client
        .fetch_movies(&ListCategory::TopRated)
        .await
        .expect_err("connection refused");
    let message = format!("{err:#}");

    assert!(message.contains("request to /movie/top_rated failed"), "{message}");
    assert!(!message.contains(KEY));
}
