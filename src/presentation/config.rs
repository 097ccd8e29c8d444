//! UI configuration
//!
//! Keybindings and styles, both keyed by screen [`keybindings::Mode`].

pub mod keybindings;
pub mod styles;

pub use keybindings::KeyBindings;
pub use styles::Styles;
