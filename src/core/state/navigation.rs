//! Screen stack

use std::mem;

use serde::{Deserialize, Serialize};

use crate::{domain::movie::MovieId, presentation::config::keybindings::Mode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    MovieList,
    MovieDetails(MovieId),
    Favorites,
}

impl Screen {
    /// Whether both screens are the same route, ignoring parameters
    pub fn same_route(&self, other: &Screen) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }

    /// Keybinding mode active while this screen is on top
    pub fn mode(&self) -> Mode {
        match self {
            Screen::MovieList => Mode::MovieList,
            Screen::MovieDetails(_) => Mode::MovieDetails,
            Screen::Favorites => Mode::Favorites,
        }
    }
}

/// Stack of screens; the movie list is always at the bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    stack: Vec<Screen>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            stack: vec![Screen::MovieList],
        }
    }
}

impl NavigationState {
    pub fn current(&self) -> &Screen {
        // the root is never popped
        self.stack.last().unwrap_or(&Screen::MovieList)
    }

    pub fn stack(&self) -> &[Screen] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Go to `screen`. If the same route is already on the stack, everything
    /// above it is dropped and its parameters are replaced; otherwise it is pushed.
    pub fn navigate(&mut self, screen: Screen) {
        if let Some(index) = self.stack.iter().position(|s| s.same_route(&screen)) {
            self.stack.truncate(index);
        }
        self.stack.push(screen);
    }

    /// Pop the top screen. Returns false at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }
}
