use serde::{Deserialize, Serialize};

use crate::domain::{category::ListCategory, movie::MovieId};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    // Rendering is orchestrated by AppRunner, only resizes go through here
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects (network requests, opening a browser, logging)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // TMDB requests
    FetchMovies { category: ListCategory },
    FetchMovieDetails { movie_id: MovieId },

    // Hand a URL to the system browser
    OpenUrl { url: String },

    // UI-related commands
    Tui(TuiCommand),

    // Logging related
    LogError { message: String },
    LogInfo { message: String },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        let mut commands = commands;
        match commands.len() {
            0 => Cmd::None,
            1 => commands.pop().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    /// Whether the command requires asynchronous processing
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::FetchMovies { .. } | Cmd::FetchMovieDetails { .. } => true,

            Cmd::OpenUrl { .. }
            | Cmd::Tui(..)
            | Cmd::LogError { .. }
            | Cmd::LogInfo { .. }
            | Cmd::None => false,

            Cmd::Batch(cmds) => cmds.iter().any(|cmd| cmd.is_async()),
        }
    }

    /// Human-readable command name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Cmd::FetchMovies { .. } => "FetchMovies",
            Cmd::FetchMovieDetails { .. } => "FetchMovieDetails",
            Cmd::OpenUrl { .. } => "OpenUrl",
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui::Resize",
            Cmd::LogError { .. } => "LogError",
            Cmd::LogInfo { .. } => "LogInfo",
            Cmd::Batch(..) => "Batch",
            Cmd::None => "None",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cmd_batch_empty() {
        let cmd = Cmd::batch(vec![]);
        assert_eq!(cmd, Cmd::None);
    }

    #[test]
    fn test_cmd_batch_single() {
        let original_cmd = Cmd::FetchMovieDetails { movie_id: 603 };
        let cmd = Cmd::batch(vec![original_cmd.clone()]);
        assert_eq!(cmd, original_cmd);
    }

    #[test]
    fn test_cmd_batch_multiple() {
        let cmds = vec![
            Cmd::FetchMovies {
                category: ListCategory::Upcoming,
            },
            Cmd::LogInfo {
                message: "switched".to_string(),
            },
        ];
        let batch_cmd = Cmd::batch(cmds.clone());
        assert_eq!(batch_cmd, Cmd::Batch(cmds));
    }

    #[test]
    fn test_cmd_is_async() {
        assert!(Cmd::FetchMovies {
            category: ListCategory::TopRated
        }
        .is_async());
        assert!(Cmd::FetchMovieDetails { movie_id: 1 }.is_async());
        assert!(!Cmd::Tui(TuiCommand::Resize {
            width: 100,
            height: 50
        })
        .is_async());
        assert!(!Cmd::OpenUrl {
            url: "https://www.youtube.com/watch?v=x".to_string()
        }
        .is_async());
    }

    #[test]
    fn test_cmd_batch_is_async() {
        let sync_batch = Cmd::Batch(vec![Cmd::LogInfo {
            message: "test".to_string(),
        }]);
        assert!(!sync_batch.is_async());

        let async_batch = Cmd::Batch(vec![Cmd::FetchMovieDetails { movie_id: 7 }]);
        assert!(async_batch.is_async());
    }

    #[test]
    fn test_cmd_name() {
        assert_eq!(Cmd::None.name(), "None");
        assert_eq!(Cmd::FetchMovieDetails { movie_id: 7 }.name(), "FetchMovieDetails");
    }

    #[test]
    fn test_cmd_serialization() -> serde_json::Result<()> {
        let cmd = Cmd::FetchMovies {
            category: ListCategory::Other("popular".to_string()),
        };
        let serialized = serde_json::to_string(&cmd)?;
        let deserialized: Cmd = serde_json::from_str(&serialized)?;
        assert_eq!(cmd, deserialized);
        Ok(())
    }
}
