//! Domain logic
//!
//! This module contains the movie catalog domain:
//! - Movie summaries and details as returned by TMDB
//! - Catalog list categories
//! - Text formatting helpers used by the views

pub mod category;
pub mod movie;
pub mod text;
