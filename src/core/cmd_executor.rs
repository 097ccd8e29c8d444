use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::cmd::{Cmd, TuiCommand},
    infrastructure::tmdb_service::TmdbCommand,
};

/// Hands a URL to whatever should open it (the system browser by default)
pub type UrlOpener = Arc<dyn Fn(&str) -> std::io::Result<()> + Send + Sync>;

/// Command executor that routes Elm commands to the TMDB worker, the TUI and the browser
#[derive(Clone)]
pub struct CmdExecutor {
    tmdb_sender: Option<mpsc::UnboundedSender<TmdbCommand>>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    url_opener: UrlOpener,
}

impl Default for CmdExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CmdExecutor {
    /// Create a command executor with no TMDB worker or TUI attached
    pub fn new() -> Self {
        Self {
            tmdb_sender: None,
            tui_sender: None,
            url_opener: Arc::new(|url: &str| open::that(url)),
        }
    }

    /// Create a command executor wired to a TMDB worker
    pub fn new_with_tmdb(tmdb_sender: mpsc::UnboundedSender<TmdbCommand>) -> Self {
        Self {
            tmdb_sender: Some(tmdb_sender),
            ..Self::new()
        }
    }

    pub fn set_tmdb_sender(&mut self, tmdb_sender: mpsc::UnboundedSender<TmdbCommand>) {
        self.tmdb_sender = Some(tmdb_sender);
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Replace the browser launcher (tests record URLs instead)
    pub fn set_url_opener(&mut self, opener: UrlOpener) {
        self.url_opener = opener;
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            Cmd::FetchMovies { category } => {
                if let Some(tmdb_sender) = &self.tmdb_sender {
                    tmdb_sender.send(TmdbCommand::FetchMovies {
                        category: category.clone(),
                    })?;
                } else {
                    log::warn!("FetchMovies ignored: TmdbService not available");
                }
            }

            Cmd::FetchMovieDetails { movie_id } => {
                if let Some(tmdb_sender) = &self.tmdb_sender {
                    tmdb_sender.send(TmdbCommand::FetchMovieDetails {
                        movie_id: *movie_id,
                    })?;
                } else {
                    log::warn!("FetchMovieDetails ignored: TmdbService not available");
                }
            }

            Cmd::OpenUrl { url } => {
                log::info!("Opening {url}");
                if let Err(e) = (self.url_opener)(url) {
                    log::error!("Failed to open {url}: {e}");
                }
            }

            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                if let Some(tx) = &self.tui_sender {
                    let _ = tx.send(TuiCommand::Resize {
                        width: *width,
                        height: *height,
                    });
                    return Ok(());
                }
                log::warn!(
                    "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                );
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands, logging failures without stopping
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {e}", cmd.name());
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            has_tmdb_sender: self.tmdb_sender.is_some(),
            is_tmdb_sender_closed: self.tmdb_sender.as_ref().map(|sender| sender.is_closed()),
            has_tui_sender: self.tui_sender.is_some(),
        }
    }
}

/// Command executor statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdExecutorStats {
    pub has_tmdb_sender: bool,
    pub is_tmdb_sender_closed: Option<bool>,
    pub has_tui_sender: bool,
}
