//! Presentation layer
//!
//! - Stateless screen components rendering `AppState`
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
