//! Infrastructure layer
//!
//! External integrations and services:
//! - CLI argument processing
//! - Configuration loading
//! - TMDB HTTP client and its background worker
//! - Terminal abstraction

pub mod cli;
pub mod config;
pub mod tmdb;
pub mod tmdb_service;
pub mod tui;
