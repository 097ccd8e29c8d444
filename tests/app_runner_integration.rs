use std::{future, sync::Arc};

use async_trait::async_trait;
use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use tokio::sync::Mutex;

use marquee::{
    core::{raw_msg::RawMsg, state::Screen},
    domain::{
        category::ListCategory,
        movie::{MovieDetail, MovieId, MovieSummary},
    },
    infrastructure::{
        config::Config,
        tmdb::TmdbApi,
        tui::{test::TestTui, Event, TuiLike},
    },
    integration::app_runner::AppRunner,
};

// Note: the TMDB worker is backed by a fake whose requests never resolve,
// so every assertion sees the state right after the scripted keys.

fn movies() -> Vec<MovieSummary> {
    vec![
        MovieSummary::new(101, "Mulholland Drive"),
        MovieSummary::new(102, "Lost Highway"),
    ]
}

struct SlowApi;

#[async_trait]
impl TmdbApi for SlowApi {
    async fn fetch_movies(&self, _category: &ListCategory) -> Result<Vec<MovieSummary>> {
        future::pending().await
    }

    async fn fetch_movie_details(&self, _movie_id: MovieId) -> Result<MovieDetail> {
        future::pending().await
    }
}

fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

async fn runner(events: Vec<Event>) -> Result<(AppRunner, Arc<Mutex<TestTui>>)> {
    let test_tui = Arc::new(Mutex::new(TestTui::with_events(72, 16, events)?));
    let tui: Arc<Mutex<dyn TuiLike + Send>> = Arc::<Mutex<TestTui>>::clone(&test_tui);
    let mut runner = AppRunner::new_with_api(
        Config::defaults()?,
        Some(ListCategory::NowPlaying),
        Arc::new(SlowApi),
        tui,
    )
    .await?;

    // stands in for the first list response, applied in the first cycle
    runner.runtime_mut().send_raw_msg(RawMsg::MoviesFetched {
        category: ListCategory::NowPlaying,
        movies: movies(),
    });
    Ok((runner, test_tui))
}

#[tokio::test]
async fn test_list_renders_with_favorite_marks() -> Result<()> {
    let (mut runner, test_tui) = runner(vec![key('j'), key('f')]).await?;

    runner.run().await?;

    let tui = test_tui.lock().await;
    assert!(tui.screen_contains("♡ Mulholland Drive"));
    assert!(tui.screen_contains("♥ Lost Highway"));
    assert!(tui.screen_contains("[Favorited] Lost Highway"));
    assert!(!tui.is_entered());
    Ok(())
}

#[tokio::test]
async fn test_details_show_loading_until_resolved() -> Result<()> {
    let enter = Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    let (mut runner, test_tui) = runner(vec![enter]).await?;

    runner.run().await?;

    let state = runner.runtime().state();
    assert_eq!(state.current_screen(), &Screen::MovieDetails(101));
    assert!(state.details.is_loading());
    assert!(test_tui.lock().await.screen_contains("Loading..."));
    Ok(())
}

#[tokio::test]
async fn test_favorites_tab_and_quit() -> Result<()> {
    let (mut runner, test_tui) =
        runner(vec![key('f'), key('4'), key('q'), key('j')]).await?;

    runner.run().await?;

    let state = runner.runtime().state();
    assert!(state.system.should_quit);
    assert_eq!(state.current_screen(), &Screen::Favorites);

    let tui = test_tui.lock().await;
    assert!(tui.screen_contains("Favorites (1)"));
    assert!(tui.screen_contains("♥ Mulholland Drive"));
    Ok(())
}

#[tokio::test]
async fn test_terminal_close_quits() -> Result<()> {
    let (mut runner, test_tui) = runner(vec![Event::Tick, Event::Closed]).await?;

    runner.run().await?;

    assert!(runner.runtime().state().system.should_quit);
    // one frame at startup, ticks alone do not redraw
    assert_eq!(test_tui.lock().await.draw_count(), 1);
    Ok(())
}
