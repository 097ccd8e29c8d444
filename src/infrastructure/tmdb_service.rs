use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    core::raw_msg::RawMsg,
    domain::{category::ListCategory, movie::MovieId},
    infrastructure::tmdb::TmdbApi,
};

/// Requests understood by the TMDB worker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TmdbCommand {
    FetchMovies { category: ListCategory },
    FetchMovieDetails { movie_id: MovieId },
}

/// TmdbService runs TMDB requests off the UI loop.
/// Every request gets its own task; results come back as `RawMsg`s.
/// Requests are never cancelled, retried or deduplicated.
pub struct TmdbService {
    api: Arc<dyn TmdbApi>,
    // Incoming channels
    cmd_rx: mpsc::UnboundedReceiver<TmdbCommand>,
    cancel_token: CancellationToken,
    // Outgoing channels
    raw_tx: mpsc::UnboundedSender<RawMsg>,
}

pub type NewTmdbService = (
    mpsc::UnboundedSender<TmdbCommand>, // cmd_tx - requests to run
    CancellationToken,                  // shutdown signal
    TmdbService,
);

impl TmdbService {
    pub fn new(api: Arc<dyn TmdbApi>, raw_tx: mpsc::UnboundedSender<RawMsg>) -> NewTmdbService {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();

        (
            cmd_tx,
            cancel_token.clone(),
            Self {
                api,
                cmd_rx,
                cancel_token,
                raw_tx,
            },
        )
    }

    /// Run the service loop in a background task
    pub fn run(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(self.run_service())
    }

    async fn run_service(mut self) {
        loop {
            tokio::select! {
                result = self.cmd_rx.recv() => {
                    match result {
                        Some(cmd) => self.dispatch(cmd),
                        None => {
                            log::info!("TmdbService: command channel closed");
                            break;
                        }
                    }
                }

                _ = self.cancel_token.cancelled() => {
                    log::info!("TmdbService received cancellation signal");
                    break;
                }
            }
        }
    }

    fn dispatch(&self, cmd: TmdbCommand) {
        log::debug!("Handling TmdbCommand: {cmd:?}");
        let api = Arc::clone(&self.api);
        let raw_tx = self.raw_tx.clone();

        tokio::spawn(async move {
            let msg = execute(api.as_ref(), cmd).await;
            if raw_tx.send(msg).is_err() {
                log::debug!("TmdbService: runtime gone, dropping response");
            }
        });
    }
}

/// Run one request and turn its outcome into the message the runtime expects
pub async fn execute(api: &dyn TmdbApi, cmd: TmdbCommand) -> RawMsg {
    match cmd {
        TmdbCommand::FetchMovies { category } => match api.fetch_movies(&category).await {
            Ok(movies) => RawMsg::MoviesFetched { category, movies },
            Err(e) => RawMsg::MoviesFetchFailed {
                category,
                error: format!("{e:#}"),
            },
        },
        TmdbCommand::FetchMovieDetails { movie_id } => {
            match api.fetch_movie_details(movie_id).await {
                Ok(detail) => RawMsg::DetailsFetched(Box::new(detail)),
                Err(e) => RawMsg::DetailsFetchFailed {
                    movie_id,
                    error: format!("{e:#}"),
                },
            }
        }
    }
}
