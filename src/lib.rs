//! # Marquee - a movie catalog in the terminal
//!
//! Browse TMDB lists (now playing, upcoming, top rated), open a movie for
//! its cast, trailer and poster, and keep favorites for the session.
//!
//! The crate follows an Elm-like architecture:
//!
//! - **State** (`core::state`): everything the screen shows
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure state transitions
//! - **Command** (`core::cmd`): side effects (TMDB requests, opening a browser)
//! - **View** (`presentation::components`): rendering from state
//!
//! ```rust
//! use marquee::{
//!     core::{
//!         cmd::Cmd,
//!         msg::{navigation::NavMsg, Msg},
//!         state::AppState,
//!         update::update,
//!     },
//!     domain::category::ListCategory,
//! };
//!
//! let state = AppState::new(ListCategory::NowPlaying);
//! let (state, cmds) = update(
//!     Msg::Nav(NavMsg::ShowCategory(ListCategory::Upcoming)),
//!     state,
//! );
//!
//! assert!(state.catalog.is_loading);
//! assert_eq!(
//!     cmds,
//!     vec![Cmd::FetchMovies {
//!         category: ListCategory::Upcoming
//!     }]
//! );
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;
